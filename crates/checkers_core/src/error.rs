//! Error types for the rules engine.
//!
//! Every rejection of a submitted move is a distinct [`MoveRejection`] so the
//! driver can render a specific message; none of them touch the board.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Player, Square};
use crate::variant::Variant;

/// Why `submit_move` refused a move. The game state is left unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    #[error("no game in progress")]
    GameNotInProgress,

    #[error("that piece does not belong to the player to move")]
    WrongOwner,

    #[error("men may only move forward")]
    NonForwardMove,

    #[error("moves must be diagonal")]
    NonDiagonalMove,

    #[error("a piece moves one square or jumps two")]
    DistanceOutOfRange,

    #[error("destination square is occupied")]
    DestinationOccupied,

    #[error("you must keep capturing with the same piece")]
    MustContinueChainWithSamePiece,

    #[error("a capture chain can only continue with another capture")]
    ChainRequiresCapture,

    #[error("you must capture with one of the highlighted pieces")]
    MustUseObligatedPiece,

    #[error("you must capture this turn")]
    ObligatedMoveMustCapture,

    #[error("a jump must pass over an opponent piece")]
    MidSquareNotOpponent,
}

impl MoveRejection {
    /// Rejections that are answered by pointing at the chain piece.
    pub fn is_chain_violation(self) -> bool {
        matches!(
            self,
            MoveRejection::MustContinueChainWithSamePiece | MoveRejection::ChainRequiresCapture
        )
    }

    /// Rejections that are answered by highlighting the obligated pieces.
    pub fn is_obligation_violation(self) -> bool {
        matches!(
            self,
            MoveRejection::MustUseObligatedPiece | MoveRejection::ObligatedMoveMustCapture
        )
    }
}

/// Failures while setting up or customizing a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("{0:?} is not implemented yet")]
    UnsupportedVariant(Variant),

    #[error("a game is already in progress")]
    GameInProgress,

    #[error("the board is not being customized")]
    NotCustomizing,

    #[error("a man cannot be placed on its own promotion row ({square})")]
    ManOnPromotionRow { square: Square },

    #[error("{player} needs at least one piece")]
    MissingPieces { player: Player },
}

/// Malformed board diagram or square notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {found} squares, expected 8")]
    RowWidth { row: usize, found: usize },

    #[error("unknown piece character '{0}'")]
    BadPiece(char),

    #[error("invalid square '{0}'")]
    BadSquare(String),

    #[error("a move needs at least two squares, found {0}")]
    ShortPath(usize),
}

/// The move selector and the executor disagreed. The game is over.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineFault {
    #[error("no game in progress")]
    NotInProgress,

    #[error("engine found no move for {player}")]
    NoMove { player: Player },

    #[error("engine move {from}-{to} was rejected: {reason}")]
    Rejected {
        from: Square,
        to: Square,
        reason: MoveRejection,
    },

    #[error("engine move ended before its capture chain was complete")]
    ChainLeftOpen,
}
