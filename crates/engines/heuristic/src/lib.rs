//! Heuristic Checkers Engine
//!
//! One ply of look-ahead: every legal move gets a static score, minus the
//! largest capture the opponent could answer with. Ties are broken at random.
//! Deliberately shallow; this is the "hard" computer opponent.

mod eval;
mod search;

#[cfg(test)]
mod eval_tests;
#[cfg(test)]
mod search_tests;

use checkers_core::{Board, Engine, Player, SearchResult};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// One-ply engine with an adversarial counter-capture penalty.
#[derive(Debug, Clone)]
pub struct HeuristicEngine {
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl HeuristicEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Engine with a fixed tie-break sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for HeuristicEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for HeuristicEngine {
    fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        self.nodes = 0;

        let outcome = search::pick_best_move(board, player, &mut self.nodes, &mut self.rng);

        SearchResult {
            best_move: outcome.best_move.as_ref().map(|(mv, _)| mv.clone()),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Heuristic v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{JUMP, PRESSURE, PROMOTION, counter_threat, rank_move};
