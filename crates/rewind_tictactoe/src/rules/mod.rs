//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot, kept apart from session
//! bookkeeping so the state machine and the view can share them.

pub mod win;

pub use win::{winner, winning_line, LINES};
