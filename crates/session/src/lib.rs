//! Driver-side collaborator for the checkers core.
//!
//! A [`Session`] owns the one shared [`Game`] behind a mutex so human moves
//! and computer moves never interleave. Computer turns are played by a
//! [`ComputerScheduler`] worker that is told when it may move and can be
//! stopped between moves.

pub mod config;
pub mod scheduler;
pub mod session;


pub use config::*;
pub use scheduler::*;
pub use session::*;

use checkers_core::{Engine, EngineFault, Game, Move};
use heuristic_engine::HeuristicEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

/// Strength of a computer player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal moves.
    Random,
    /// One ply with a counter-capture penalty.
    Heuristic,
}

/// Builds the engine that plays at `difficulty`.
pub fn create_engine(difficulty: Difficulty) -> Box<dyn Engine> {
    match difficulty {
        Difficulty::Random => Box::new(RandomEngine::new()),
        Difficulty::Heuristic => Box::new(HeuristicEngine::new()),
    }
}

/// Selects and plays one full move (every leg of a chain) for the player to
/// move.
///
/// A fault leaves the game over with [`checkers_core::Outcome::EngineFault`].
pub fn compute_computer_move(game: &mut Game, difficulty: Difficulty) -> Result<Move, EngineFault> {
    let mut engine = create_engine(difficulty);
    game.play_engine(engine.as_mut())
}
