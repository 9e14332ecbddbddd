//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square};
use tracing::instrument;

/// The eight winning triples, in evaluation order.
///
/// Indices follow board order, so `[0, 1, 2]` is the first displayed column.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line on the board.
///
/// A line is complete when its three squares hold the same mark.
/// Returns `None` when no line is complete.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Some(Square::Empty) && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a line,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    let [a, _, _] = winning_line(board)?;
    board.get(a).and_then(Square::mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BOARD_SIZE;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        let mut squares = [Square::Empty; BOARD_SIZE];
        for &(pos, player) in marks {
            squares[pos] = Square::Occupied(player);
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(&line.map(|pos| (pos, player)));
                assert_eq!(winning_line(&board), Some(line));
                assert_eq!(winner(&board), Some(player));
            }
        }
    }

    #[test]
    fn test_line_detected_with_noise_elsewhere() {
        // O holds the diagonal, X is scattered around it.
        let board = board_with(&[
            (2, Player::O),
            (4, Player::O),
            (6, Player::O),
            (0, Player::X),
            (1, Player::X),
            (8, Player::X),
        ]);
        assert_eq!(winning_line(&board), Some([2, 4, 6]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Player::X), (1, Player::X)]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X / O X X / O X O in board order.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (3, Player::O),
            (4, Player::X),
            (5, Player::X),
            (6, Player::O),
            (7, Player::X),
            (8, Player::O),
        ]);
        assert_eq!(board.occupied(), BOARD_SIZE);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Both [0, 1, 2] and [0, 3, 6] complete; the earlier triple is reported.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    /// Every one of the 3^9 boards, legal or not.
    fn all_boards() -> impl Iterator<Item = Board> {
        (0..3usize.pow(BOARD_SIZE as u32)).map(|code| {
            let mut rest = code;
            let squares = std::array::from_fn(|_| {
                let square = match rest % 3 {
                    0 => Square::Empty,
                    1 => Square::Occupied(Player::X),
                    _ => Square::Occupied(Player::O),
                };
                rest /= 3;
                square
            });
            Board::from_squares(squares)
        })
    }

    #[test]
    fn test_matches_first_complete_line_on_every_board() {
        for board in all_boards() {
            let squares = board.squares();
            let mut expected = None;
            for line in LINES {
                let [a, b, c] = line;
                if squares[a] != Square::Empty && squares[a] == squares[b] && squares[a] == squares[c]
                {
                    expected = Some(line);
                    break;
                }
            }

            assert_eq!(winning_line(&board), expected, "board {:?}", squares);
            let expected_winner = expected.and_then(|[a, _, _]| squares[a].mark());
            assert_eq!(winner(&board), expected_winner, "board {:?}", squares);
        }
    }
}
