use serde::{Deserialize, Serialize};

use crate::error::MoveRejection;
use crate::types::{Player, Square};

/// Notifications queued by [`crate::game::Game`] for the driver to turn
/// into sound or highlighting. Drained with `Game::take_events`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    MoveApplied { from: Square, to: Square },
    CaptureApplied { from: Square, to: Square, captured: Square },
    Promoted { square: Square },
    InvalidMove { reason: MoveRejection },
    /// The chain piece must keep capturing.
    MustContinueChain { square: Square },
    /// The player must capture with one of these pieces.
    MustCapture { squares: Vec<Square> },
    TurnChanged { player: Player },
    GameWon { winner: Player, by_resignation: bool },
    EngineFault,
}
