//! History chain invariant: each board adds exactly one mark to the last.

use super::Invariant;
use crate::{Board, GameSession, Player};

/// Invariant: `history[0]` is empty, and `history[k + 1]` equals
/// `history[k]` with only `moves[k]` filled, by the player whose turn it
/// was at step `k`.
///
/// Filled squares are therefore never overwritten.
pub struct HistoryChainInvariant;

impl Invariant<GameSession> for HistoryChainInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();
        if history.first() != Some(&Board::new()) {
            return false;
        }
        history
            .windows(2)
            .zip(session.moves())
            .enumerate()
            .all(|(k, (pair, &cell))| {
                let [before, after] = pair else {
                    return false;
                };
                before.is_empty(cell)
                    && before.with_mark(cell, Player::for_step(k)).as_ref() == Some(after)
            })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to an empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Msg, Square};

    fn changed_squares(before: &Board, after: &Board) -> usize {
        before
            .squares()
            .iter()
            .zip(after.squares())
            .filter(|(a, b)| a != b)
            .count()
    }

    #[test]
    fn test_new_session_holds() {
        assert!(HistoryChainInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_each_step_changes_one_square() {
        let session = GameSession::new().apply_all([1, 3, 5, 7].map(Msg::PlaceMark));
        assert!(HistoryChainInvariant::holds(&session));
        for pair in session.history().windows(2) {
            assert_eq!(changed_squares(&pair[0], &pair[1]), 1);
        }
    }

    #[test]
    fn test_overwritten_square_violates() {
        let first = Board::new().with_mark(0, Player::X).unwrap();
        let overwritten = first.with_mark(0, Player::O).unwrap();
        let session = GameSession::from_parts(
            vec![Board::new(), first, overwritten],
            vec![0, 0],
            2,
            Player::X,
        );
        assert!(!HistoryChainInvariant::holds(&session));
    }

    #[test]
    fn test_log_mismatch_violates() {
        let first = Board::new().with_mark(0, Player::X).unwrap();
        let session = GameSession::from_parts(vec![Board::new(), first], vec![1], 1, Player::O);
        assert!(!HistoryChainInvariant::holds(&session));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let squares = {
            let mut squares = [Square::Empty; 9];
            squares[0] = Square::Occupied(Player::X);
            squares[1] = Square::Occupied(Player::X);
            squares
        };
        let session = GameSession::from_parts(
            vec![Board::new(), Board::from_squares(squares)],
            vec![0],
            1,
            Player::O,
        );
        assert!(!HistoryChainInvariant::holds(&session));
    }
}
