//! Headless replay: apply messages, print the view.

use crate::cli::OutputFormat;
use anyhow::Result;
use rewind_tictactoe::{CellView, GameSession, Msg, SortOrder, View};
use tracing::{info, instrument};

/// Applies `msgs` to a fresh session with the given move-list order.
#[instrument(skip(msgs), fields(count = msgs.len()))]
pub fn replay(order: SortOrder, msgs: &[Msg]) -> GameSession {
    let session = GameSession::new()
        .with_order(order)
        .apply_all(msgs.iter().copied());
    info!(
        step = session.step(),
        history = session.history().len(),
        "Replay finished"
    );
    session
}

/// Renders a view in the requested format.
pub fn render(view: &View, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
    }
}

/// Formats the view as plain text.
///
/// Empty cells show the key that fills them, winning cells are bracketed,
/// and the current step is starred.
pub fn render_text(view: &View) -> String {
    let mut result = String::new();
    for (row, cells) in view.rows().iter().enumerate() {
        if row > 0 {
            result.push_str("---+---+---\n");
        }
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| cell_text(cell, row * 3 + col + 1))
            .collect();
        result.push_str(&line.join("|"));
        result.push('\n');
    }

    result.push('\n');
    result.push_str(view.status());
    result.push_str("\n\n");
    result.push_str(&format!("Moves ({}):\n", view.order().label()));
    for entry in view.moves() {
        let marker = if *entry.bold() { '*' } else { ' ' };
        result.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    result
}

fn cell_text(cell: &CellView, key: usize) -> String {
    match (cell.mark(), *cell.highlighted()) {
        (Some(mark), true) => format!("[{}]", mark),
        (Some(mark), false) => format!(" {} ", mark),
        (None, _) => format!(" {} ", key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_empty_board() {
        let text = render_text(&GameSession::new().view());
        let expected = concat!(
            " 1 | 2 | 3 \n",
            "---+---+---\n",
            " 4 | 5 | 6 \n",
            "---+---+---\n",
            " 7 | 8 | 9 \n",
            "\n",
            "Next player: X\n",
            "\n",
            "Moves (ascending):\n",
            "* Reset game\n",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_text_marks_winning_line() {
        let msgs = [0, 4, 1, 5, 2].map(Msg::PlaceMark);
        let text = render_text(&replay(SortOrder::Ascending, &msgs).view());
        // Cells 0, 1, 2 form the first displayed column.
        assert!(text.starts_with("[X]| 2 | 3 \n---+---+---\n[X]| O | 6 \n"));
        assert!(text.contains("The winner is: X"));
        assert!(text.contains("* Go to move #5 col: 1 ,row: 3"));
    }
}
