//! Step bounds invariant: the step pointer and move log fit the history.

use super::Invariant;
use crate::GameSession;

/// Invariant: history is non-empty, the move log has one entry per
/// transition, and the step pointer indexes an existing entry.
pub struct StepBoundsInvariant;

impl Invariant<GameSession> for StepBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        let len = session.history().len();
        len > 0 && session.moves().len() + 1 == len && session.step() < len
    }

    fn description() -> &'static str {
        "Step pointer and move log are within history bounds"
    }
}
