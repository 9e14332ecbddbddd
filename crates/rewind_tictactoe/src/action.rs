//! Messages from the view layer and the errors they can produce.
//!
//! Every input event is a [`Msg`] value. The view hands them out as click
//! handlers and the front end feeds them back into
//! [`GameSession::update`](crate::GameSession::update).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An input event destined for the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Msg {
    /// Place the active player's mark at a cell (0-8).
    PlaceMark(usize),
    /// Move the step pointer to a history entry.
    JumpTo(usize),
    /// Flip the display order of the move list.
    ToggleSort,
}

impl std::fmt::Display for Msg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Msg::PlaceMark(cell) => write!(f, "place:{}", cell),
            Msg::JumpTo(step) => write!(f, "jump:{}", step),
            Msg::ToggleSort => write!(f, "sort"),
        }
    }
}

/// Error returned when a message string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid message {input:?}: {reason}")]
pub struct ParseMsgError {
    /// The rejected input.
    pub input: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

impl std::error::Error for ParseMsgError {}

impl ParseMsgError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

impl FromStr for Msg {
    type Err = ParseMsgError;

    /// Parses `place:<cell>`, `jump:<step>` or `sort`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (keyword, arg) = match trimmed.split_once(':') {
            Some((keyword, arg)) => (keyword.trim(), Some(arg.trim())),
            None => (trimmed, None),
        };
        let number = |arg: Option<&str>| -> Result<usize, ParseMsgError> {
            arg.ok_or_else(|| ParseMsgError::new(s, "missing number after ':'"))?
                .parse::<usize>()
                .map_err(|_| ParseMsgError::new(s, "argument is not a non-negative integer"))
        };

        match keyword.to_ascii_lowercase().as_str() {
            "place" => Ok(Msg::PlaceMark(number(arg)?)),
            "jump" => Ok(Msg::JumpTo(number(arg)?)),
            "sort" if arg.is_none() => Ok(Msg::ToggleSort),
            "sort" => Err(ParseMsgError::new(s, "sort takes no argument")),
            _ => Err(ParseMsgError::new(s, "expected place:<cell>, jump:<step> or sort")),
        }
    }
}

/// Why a transition was rejected.
///
/// [`GameSession::update`](crate::GameSession::update) treats every variant
/// as a no-op; the typed operations return them so callers can tell.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square is already occupied.
    #[display("Square {cell} is already occupied")]
    SquareOccupied {
        /// Target cell.
        cell: usize,
    },

    /// The board at the current step already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// Cell index outside 0-8.
    #[display("Cell {cell} is out of range (must be 0-8)")]
    CellOutOfRange {
        /// Target cell.
        cell: usize,
    },

    /// Step outside the recorded history.
    #[display("Step {step} is out of range (history has {len} entries)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length.
        len: usize,
    },
}

impl std::error::Error for MoveError {}
