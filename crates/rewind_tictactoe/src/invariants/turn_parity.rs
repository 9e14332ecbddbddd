//! Turn parity invariant: X moves on even steps, O on odd steps.

use super::Invariant;
use crate::{GameSession, Player};

/// Invariant: the player to move is determined by the step's parity,
/// however the step was reached.
pub struct TurnParityInvariant;

impl Invariant<GameSession> for TurnParityInvariant {
    fn holds(session: &GameSession) -> bool {
        session.to_move() == Player::for_step(session.step())
    }

    fn description() -> &'static str {
        "Player to move matches step parity"
    }
}
