//! Seeded random games checking the executor against the move generator.
//!
//! Every move the generator offers must be accepted leg by leg, and the
//! board must stay consistent with the bookkeeping after each turn.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;

use checkers_core::{
    FirstPlayer, Game, Outcome, Player, Rank, Status, all_legal_moves, midpoint,
};

const GAMES: u64 = 48;
const MAX_TURNS: usize = 400;

fn play_seeded(seed: u64) -> Status {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();
    game.start_with_rng(FirstPlayer::Random, &mut rng).unwrap();

    for _ in 0..MAX_TURNS {
        let Some(player) = game.active_player() else {
            break;
        };
        let board = *game.board();
        let moves = all_legal_moves(&board, player);
        assert!(
            !moves.is_empty(),
            "seed {seed}: {player} to move with no moves but the game is running"
        );

        // Captures are mandatory: either every move captures or none does.
        let captures = moves.iter().filter(|m| m.is_capture()).count();
        assert!(captures == 0 || captures == moves.len(), "seed {seed}");

        let mut origins: Vec<_> = moves
            .iter()
            .filter(|m| m.is_capture())
            .map(|m| m.origin())
            .collect();
        origins.dedup();
        assert_eq!(game.obligated_pieces(player), &origins[..], "seed {seed}");

        let mv = moves.choose(&mut rng).unwrap().clone();
        let mover = board.piece_at(mv.origin()).unwrap();
        game.play_move(&mv)
            .unwrap_or_else(|e| panic!("seed {seed}: {mv} refused: {e}"));

        let after = game.board();
        for (from, to) in mv.legs() {
            if let Some(mid) = midpoint(from, to) {
                assert!(after.is_empty(mid), "seed {seed}: {mid} survived {mv}");
            }
        }
        let landed = after.piece_at(mv.destination()).unwrap();
        assert_eq!(landed.owner, player);
        if mv.destination().row() == player.promotion_row() {
            assert_eq!(landed.rank, Rank::King, "seed {seed}: {mv} did not crown");
        }
        if mover.rank == Rank::King {
            assert_eq!(landed.rank, Rank::King);
        }
        for p in Player::ALL {
            assert_eq!(game.piece_count(p), after.count(p), "seed {seed}");
        }
        assert_eq!(
            board.count(player.other()) - after.count(player.other()),
            mv.jumps() as u32
        );
        assert!(!game.in_chain());
    }
    game.status()
}

#[test]
fn random_playouts_stay_consistent() {
    let statuses: Vec<Status> = (0..GAMES).into_par_iter().map(play_seeded).collect();

    // Most random games end well before the turn cap.
    let finished = statuses
        .iter()
        .filter(|s| matches!(s, Status::Over(Outcome::Won { .. })))
        .count();
    assert!(finished > 0);
    assert!(
        statuses
            .iter()
            .all(|s| !matches!(s, Status::Over(Outcome::EngineFault)))
    );
}

#[test]
fn playouts_are_reproducible() {
    assert_eq!(play_seeded(7), play_seeded(7));
}
