//! Game session state machine with move history and time travel.
//!
//! A [`GameSession`] is an immutable value. Every transition builds and
//! returns a new session; the previous value is left untouched, so a front
//! end simply replaces the session it holds.

use crate::action::{MoveError, Msg};
use crate::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use crate::rules;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first, after the reset entry.
    Descending,
}

impl SortOrder {
    /// Toggles between `Ascending` and `Descending`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns the display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Complete state of one game session.
///
/// Invariants:
/// - `history` is never empty and `history[0]` is the empty board
/// - `moves.len() == history.len() - 1`, and `moves[k]` is the cell that
///   turned `history[k]` into `history[k + 1]`
/// - `step < history.len()`
///
/// Deserialization checks these invariants and rejects sessions that break
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSession")]
pub struct GameSession {
    history: Vec<Board>,
    moves: Vec<usize>,
    step: usize,
    to_move: Player,
    order: SortOrder,
}

impl GameSession {
    /// Creates a session holding a single empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            moves: Vec::new(),
            step: 0,
            to_move: Player::X,
            order: SortOrder::default(),
        }
    }

    /// Returns a copy of this session with the given move-list order.
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Returns every recorded board, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the cells played, one per history transition.
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Returns the current step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the player who places the next mark.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the move-list display order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Returns the board at the current step.
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }

    /// Returns the cell played to reach `step`, or `None` for step 0.
    pub fn cell_for_step(&self, step: usize) -> Option<usize> {
        step.checked_sub(1).and_then(|i| self.moves.get(i).copied())
    }

    /// Returns the winner on the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(self.current())
    }

    /// Places the active player's mark at `cell`.
    ///
    /// Any history after the current step is discarded before the new
    /// board is appended.
    ///
    /// # Errors
    ///
    /// - `MoveError::CellOutOfRange` if `cell > 8`
    /// - `MoveError::GameOver` if the current board already has a winner
    /// - `MoveError::SquareOccupied` if the cell is taken
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move))]
    pub fn place_mark(&self, cell: usize) -> Result<Self, MoveError> {
        let current = self.current();
        if current.get(cell).is_none() {
            return Err(MoveError::CellOutOfRange { cell });
        }
        if rules::winning_line(current).is_some() {
            return Err(MoveError::GameOver);
        }
        let board = match current.with_mark(cell, self.to_move) {
            Some(board) if current.is_empty(cell) => board,
            _ => return Err(MoveError::SquareOccupied { cell }),
        };

        let mut history = self.history[..=self.step].to_vec();
        let mut moves = self.moves[..self.step].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(board);
        moves.push(cell);

        let next = Self {
            step: history.len() - 1,
            history,
            moves,
            to_move: self.to_move.opponent(),
            order: self.order,
        };
        debug!(cell, discarded, step = next.step, "Mark placed");
        next.debug_check_invariants();
        Ok(next)
    }

    /// Moves the step pointer to `step` without touching history.
    ///
    /// The player to move is derived from the step's parity.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::StepOutOfRange` if `step` is past the last entry.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&self, step: usize) -> Result<Self, MoveError> {
        if step >= self.history.len() {
            return Err(MoveError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        let next = Self {
            step,
            to_move: Player::for_step(step),
            ..self.clone()
        };
        debug!(step, to_move = %next.to_move, "Jumped to step");
        next.debug_check_invariants();
        Ok(next)
    }

    /// Flips the move-list display order.
    #[instrument(skip(self), fields(order = ?self.order))]
    pub fn toggle_sort(&self) -> Self {
        Self {
            order: self.order.toggle(),
            ..self.clone()
        }
    }

    /// Applies a message, returning the unchanged session if it is rejected.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn update(self, msg: Msg) -> Self {
        let result = match msg {
            Msg::PlaceMark(cell) => self.place_mark(cell),
            Msg::JumpTo(step) => self.jump_to(step),
            Msg::ToggleSort => Ok(self.toggle_sort()),
        };
        match result {
            Ok(next) => next,
            Err(error) => {
                debug!(%error, %msg, "Message ignored");
                self
            }
        }
    }

    /// Applies messages in order.
    pub fn apply_all(self, msgs: impl IntoIterator<Item = Msg>) -> Self {
        msgs.into_iter().fold(self, Self::update)
    }

    #[cfg(debug_assertions)]
    fn debug_check_invariants(&self) {
        if let Err(violations) = SessionInvariants::check_all(self) {
            panic!("session invariants violated: {violations:?}");
        }
    }

    #[cfg(not(debug_assertions))]
    fn debug_check_invariants(&self) {}

    /// Builds a session from raw parts without checking invariants.
    #[cfg(test)]
    pub(crate) fn from_parts(
        history: Vec<Board>,
        moves: Vec<usize>,
        step: usize,
        to_move: Player,
    ) -> Self {
        Self {
            history,
            moves,
            step,
            to_move,
            order: SortOrder::Ascending,
        }
    }
}

/// Unchecked wire form of a [`GameSession`].
#[derive(Deserialize)]
struct RawSession {
    history: Vec<Board>,
    moves: Vec<usize>,
    step: usize,
    to_move: Player,
    order: SortOrder,
}

impl TryFrom<RawSession> for GameSession {
    type Error = InvariantViolation;

    #[instrument(skip(raw), fields(len = raw.history.len(), step = raw.step))]
    fn try_from(raw: RawSession) -> Result<Self, Self::Error> {
        let session = Self {
            history: raw.history,
            moves: raw.moves,
            step: raw.step,
            to_move: raw.to_move,
            order: raw.order,
        };
        SessionInvariants::check_all(&session).map_err(|violations| {
            let description = violations
                .iter()
                .map(|violation| violation.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            debug!(%description, "Rejected session");
            InvariantViolation::new(description)
        })?;
        Ok(session)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
