use std::collections::HashSet;

use checkers_core::{Board, Engine, Move, Piece, Player, Square, all_legal_moves};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::HeuristicEngine;
use crate::eval::{JUMP, PROMOTION};
use crate::search::pick_best_move;

fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

fn pick(board: &Board, player: Player, seed: u64) -> (Move, i32) {
    let mut nodes = 0;
    let mut rng = StdRng::seed_from_u64(seed);
    pick_best_move(board, player, &mut nodes, &mut rng)
        .best_move
        .expect("position has moves")
}

#[test]
fn test_pick_best_move_start_position() {
    let board = Board::standard();
    let mut nodes = 0;
    let mut rng = StdRng::seed_from_u64(0);
    let result = pick_best_move(&board, Player::One, &mut nodes, &mut rng);
    let (mv, _) = result.best_move.unwrap();
    assert!(all_legal_moves(&board, Player::One).contains(&mv));
    assert_eq!(nodes, 7);
}

#[test]
fn test_longer_chain_wins() {
    let board = Board::from_pieces(&[
        (sq("a1"), Piece::man(Player::One)),
        (sq("b2"), Piece::man(Player::Two)),
        (sq("d4"), Piece::man(Player::Two)),
        (sq("h2"), Piece::man(Player::One)),
        (sq("g3"), Piece::man(Player::Two)),
    ]);
    let (mv, score) = pick(&board, Player::One, 0);
    assert_eq!(mv.path(), &[sq("a1"), sq("c3"), sq("e5")]);
    assert_eq!(score, 2 * JUMP);
}

#[test]
fn test_avoids_stepping_into_a_capture() {
    let board = Board::from_pieces(&[
        (sq("c3"), Piece::man(Player::One)),
        (sq("e5"), Piece::man(Player::Two)),
        (sq("h8"), Piece::man(Player::Two)),
    ]);
    // c3-d4 heads at e5 but hands it the jump back to c3.
    for seed in 0..8 {
        let (mv, score) = pick(&board, Player::One, seed);
        assert_eq!(mv, Move::step(sq("c3"), sq("b4")));
        assert_eq!(score, 0);
    }
}

#[test]
fn test_prefers_promotion_and_breaks_ties_randomly() {
    let board = Board::from_pieces(&[
        (sq("g7"), Piece::man(Player::One)),
        (sq("a3"), Piece::man(Player::One)),
        (sq("a7"), Piece::man(Player::Two)),
    ]);
    let mut seen = HashSet::new();
    for seed in 0..32 {
        let (mv, score) = pick(&board, Player::One, seed);
        assert_eq!(mv.origin(), sq("g7"));
        assert_eq!(score, PROMOTION);
        seen.insert(mv.destination());
    }
    assert_eq!(seen, HashSet::from([sq("f8"), sq("h8")]));
}

#[test]
fn test_no_moves() {
    let board = Board::from_pieces(&[
        (sq("h2"), Piece::man(Player::Two)),
        (sq("g1"), Piece::man(Player::One)),
    ]);
    let mut nodes = 0;
    let mut rng = StdRng::seed_from_u64(0);
    let result = pick_best_move(&board, Player::Two, &mut nodes, &mut rng);
    assert!(result.best_move.is_none());
    assert_eq!(result.ties, 0);
}

#[test]
fn test_engine_reports_score() {
    let board = Board::from_pieces(&[
        (sq("c3"), Piece::man(Player::One)),
        (sq("d4"), Piece::man(Player::Two)),
    ]);
    let mut engine = HeuristicEngine::seeded(9);
    let result = engine.search(&board, Player::One);
    assert_eq!(result.best_move, Some(Move::from_path(vec![sq("c3"), sq("e5")]).unwrap()));
    assert_eq!(result.score, JUMP);
    assert_eq!(result.nodes, 1);
    assert_eq!(result.depth, 1);
}
