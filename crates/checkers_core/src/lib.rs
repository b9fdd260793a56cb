pub mod board;
pub mod error;
pub mod event;
pub mod game;
pub mod geometry;
pub mod paths;
pub mod perft;
pub mod types;
pub mod variant;

#[cfg(test)]
mod geometry_tests;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use event::*;
pub use game::*;
pub use geometry::*;
pub use paths::*;
pub use perft::perft;
pub use types::*;
pub use variant::*;

// =============================================================================
// Engine trait: implemented by every computer player (random, heuristic, ...)
// =============================================================================

/// Result of a move selection
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move (None if the player has no legal move)
    pub best_move: Option<Move>,
    /// Score of the chosen move in half-point units (0 for engines that don't score)
    pub score: i32,
    /// Look-ahead depth in plies
    pub depth: u8,
    /// Number of positions examined
    pub nodes: u64,
}

impl SearchResult {
    pub fn none() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
        }
    }
}

/// Trait that all computer players implement.
///
/// Engines only choose among `all_legal_moves`; applying the move is the
/// game's job (see [`Game::play_engine`]).
pub trait Engine: Send {
    /// Choose a move for `player` on `board`.
    fn search(&mut self, board: &Board, player: Player) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
