//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. The controller derives status and
//! highlighting from these on every query instead of caching them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Outcome, evaluate};
