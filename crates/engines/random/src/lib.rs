//! Random Move Checkers Engine
//!
//! Picks uniformly among the legal moves. Captures are mandatory, so when
//! any capture exists only capture chains are drawn from.
//! Useful as:
//! - the "easy" computer opponent
//! - a baseline any real strategy should beat
//! - a stress test for move generation

use checkers_core::{Board, Engine, Player, SearchResult, all_legal_moves_into};
use log::trace;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

#[cfg(test)]
mod lib_tests;

/// A checkers engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Reproducible engine for tests and seeded matches.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        let mut moves = Vec::with_capacity(32);
        all_legal_moves_into(board, player, &mut moves);
        self.nodes = 1;

        let best_move = moves.choose(&mut self.rng).cloned();
        trace!("random pick among {} moves for {player}", moves.len());

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
