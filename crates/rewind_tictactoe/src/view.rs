//! Stateless view derivation.
//!
//! [`view`] turns a [`GameSession`] into a [`View`]: plain data a front end
//! paints as-is. Click handlers are [`Msg`] values for the front end to send
//! back through [`GameSession::update`].

use crate::action::Msg;
use crate::rules;
use crate::session::{GameSession, SortOrder};
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One clickable board cell.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CellView {
    /// Board index (0-8).
    index: usize,
    /// Mark shown in the cell.
    mark: Option<Player>,
    /// Whether the cell belongs to the winning line.
    highlighted: bool,
    /// Message sent when the cell is clicked.
    on_click: Msg,
}

/// One clickable entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Text shown for the entry.
    label: String,
    /// Whether this entry is the current step.
    bold: bool,
    /// Message sent when the entry is clicked.
    on_click: Msg,
}

/// Everything a front end needs to paint one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct View {
    /// Display rows, top to bottom. Row `r` holds cells `r`, `r + 3`, `r + 6`.
    rows: [[CellView; 3]; 3],
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Status line.
    status: String,
    /// Current move-list order.
    order: SortOrder,
}

impl View {
    /// Returns the cell at display row `row`, column `col`.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&CellView> {
        self.rows.get(row)?.get(col)
    }

    /// Iterates over cells in display reading order.
    pub fn cells(&self) -> impl Iterator<Item = &CellView> {
        self.rows.iter().flatten()
    }
}

/// Derives the view for a session.
#[instrument(skip(session), fields(step = session.step(), order = ?session.order()))]
pub fn view(session: &GameSession) -> View {
    let board = session.current();
    let line = rules::winning_line(board);

    let rows = std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            let index = col * 3 + row;
            CellView {
                index,
                mark: board.get(index).and_then(|sq| sq.mark()),
                highlighted: line.is_some_and(|l| l.contains(&index)),
                on_click: Msg::PlaceMark(index),
            }
        })
    });

    let status = match line.and_then(|[a, _, _]| board.get(a)).and_then(|sq| sq.mark()) {
        Some(winner) => format!("The winner is: {}", winner),
        None => format!("Next player: {}", session.to_move()),
    };

    View {
        rows,
        moves: move_list(session),
        status,
        order: session.order(),
    }
}

/// Builds the move list: one entry per step up to the current one.
///
/// In descending order the displayed position `shown > 0` maps to step
/// `current + 1 - shown`; the reset entry stays first.
fn move_list(session: &GameSession) -> Vec<MoveEntry> {
    let current = session.step();
    (0..=current)
        .map(|shown| {
            let step = match session.order() {
                SortOrder::Descending if shown != 0 => current + 1 - shown,
                _ => shown,
            };
            MoveEntry {
                step,
                label: move_label(session, step),
                bold: step == current,
                on_click: Msg::JumpTo(step),
            }
        })
        .collect()
}

fn move_label(session: &GameSession, step: usize) -> String {
    match session.cell_for_step(step) {
        Some(cell) => format!(
            "Go to move #{} col: {} ,row: {}",
            step,
            cell / 3 + 1,
            cell % 3 + 1
        ),
        None => "Reset game".to_string(),
    }
}

impl GameSession {
    /// Derives the view for this session.
    pub fn view(&self) -> View {
        view(self)
    }
}
