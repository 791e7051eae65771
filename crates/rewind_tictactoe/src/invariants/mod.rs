//! First-class invariants over game history.
//!
//! Invariants are logical properties that must hold throughout play.
//! The controller asserts them after every applied move in debug builds,
//! and they can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Joins violations into one message, in the order they were found.
pub fn violation_report(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

pub mod alternating_turn;
pub mod empty_start;
pub mod single_change;

pub use alternating_turn::AlternatingTurnInvariant;
pub use empty_start::EmptyStartInvariant;
pub use single_change::SingleChangeInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    EmptyStartInvariant,
    SingleChangeInvariant,
    AlternatingTurnInvariant,
);
