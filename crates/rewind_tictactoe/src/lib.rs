//! Pure tic-tac-toe session logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: win detection over a board snapshot
//! - **Session**: immutable state machine over history, step and turn
//! - **View**: pure derivation of what a front end paints
//! - **Msg**: input events flowing from the view back into the session
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameSession, Msg};
//!
//! let session = GameSession::new()
//!     .update(Msg::PlaceMark(0))
//!     .update(Msg::PlaceMark(4))
//!     .update(Msg::JumpTo(1));
//!
//! assert_eq!(session.view().status(), "Next player: O");
//! assert_eq!(session.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
pub mod rules;
mod session;
mod types;
mod view;

pub use action::{MoveError, Msg, ParseMsgError};
pub use session::{GameSession, SortOrder};
pub use types::{Board, Player, Square, BOARD_SIZE};
pub use view::{view, CellView, MoveEntry, View};
