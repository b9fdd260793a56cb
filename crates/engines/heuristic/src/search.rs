//! One-ply move selection.

use checkers_core::{Board, Move, Player, all_legal_moves};
use log::trace;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::eval::{counter_threat, rank_move};

/// Result from pick_best_move.
pub struct SearchOutcome {
    /// Chosen move with its adjusted score (None if there is no legal move)
    pub best_move: Option<(Move, i32)>,
    /// How many moves shared the best score
    pub ties: usize,
}

/// Scores every legal move for `player` and picks one of the best at random.
///
/// A move's score is its static [`rank_move`] value minus the
/// [`counter_threat`] the opponent would have on the board it leaves behind.
pub fn pick_best_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    nodes: &mut u64,
    rng: &mut R,
) -> SearchOutcome {
    let moves = all_legal_moves(board, player);

    let mut best_score = i32::MIN;
    let mut best: Vec<&Move> = Vec::new();

    for mv in &moves {
        let mut next = *board;
        next.apply_move(mv);
        *nodes += 1;

        let score = rank_move(board, mv) - counter_threat(&next, player.other());
        trace!("{mv}: {score}");

        if score > best_score {
            best_score = score;
            best.clear();
        }
        if score == best_score {
            best.push(mv);
        }
    }

    SearchOutcome {
        ties: best.len(),
        best_move: best.choose(rng).map(|&mv| (mv.clone(), best_score)),
    }
}
