//! Single change invariant: each move changes exactly one square.

use super::Invariant;
use crate::GameHistory;

/// Invariant: Every entry differs from its predecessor in exactly one square.
pub struct SingleChangeInvariant;

impl Invariant<GameHistory> for SingleChangeInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .boards()
            .windows(2)
            .all(|pair| pair[1].changed_positions(&pair[0]).len() == 1)
    }

    fn description() -> &'static str {
        "Consecutive history entries differ in exactly one square"
    }
}
