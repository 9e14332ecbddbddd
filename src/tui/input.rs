//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Position of the board cursor in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Display row, 0 at the top.
    pub row: usize,
    /// Display column, 0 at the left.
    pub col: usize,
}

impl Cursor {
    /// Creates a cursor, clamping both coordinates onto the 3x3 grid.
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row: row.min(2),
            col: col.min(2),
        }
    }

    /// Cursor for a digit key 1-9, counted in reading order.
    pub fn from_digit(digit: char) -> Option<Self> {
        let n = digit.to_digit(10)? as usize;
        (1..=9)
            .contains(&n)
            .then(|| Self::new((n - 1) / 3, (n - 1) % 3))
    }
}

/// Moves cursor based on arrow keys. Movement stops at the edges.
pub fn move_cursor(cursor: Cursor, key: KeyCode) -> Cursor {
    let Cursor { row, col } = cursor;
    match key {
        KeyCode::Right => Cursor::new(row, col + 1),
        KeyCode::Left => Cursor::new(row, col.saturating_sub(1)),
        KeyCode::Down => Cursor::new(row + 1, col),
        KeyCode::Up => Cursor::new(row.saturating_sub(1), col),
        _ => cursor,
    }
}
