use checkers_core::{Board, Move, Piece, Player, Square};

use crate::eval::*;

fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

fn step(from: &str, to: &str) -> Move {
    Move::step(sq(from), sq(to))
}

#[test]
fn test_capture_scores_per_jump() {
    let board = Board::from_pieces(&[
        (sq("a1"), Piece::man(Player::One)),
        (sq("b2"), Piece::man(Player::Two)),
        (sq("d4"), Piece::man(Player::Two)),
    ]);
    let chain = Move::from_path(vec![sq("a1"), sq("c3"), sq("e5")]).unwrap();
    assert_eq!(rank_move(&board, &chain), 2 * JUMP);
}

#[test]
fn test_promotion_step() {
    let board = Board::from_pieces(&[
        (sq("g7"), Piece::man(Player::One)),
        (sq("b2"), Piece::man(Player::Two)),
    ]);
    assert_eq!(rank_move(&board, &step("g7", "h8")), PROMOTION);
}

#[test]
fn test_king_on_far_row_is_not_promotion() {
    let board = Board::from_pieces(&[(sq("b7"), Piece::king(Player::One))]);
    assert_eq!(rank_move(&board, &step("b7", "a8")), 0);
}

#[test]
fn test_pressure_looks_into_the_quarter_ahead() {
    // Player two heading down and left from f6 to e5.
    let board = Board::from_pieces(&[
        (sq("f6"), Piece::man(Player::Two)),
        (sq("b2"), Piece::man(Player::One)),
        (sq("h2"), Piece::man(Player::One)),
    ]);
    assert_eq!(rank_move(&board, &step("f6", "e5")), PRESSURE);
    // Down and right only h2 counts.
    assert_eq!(rank_move(&board, &step("f6", "g5")), PRESSURE);

    let lone = Board::from_pieces(&[
        (sq("f6"), Piece::man(Player::Two)),
        (sq("h2"), Piece::man(Player::One)),
    ]);
    assert_eq!(rank_move(&lone, &step("f6", "e5")), 0);
}

#[test]
fn test_own_pieces_are_not_pressure() {
    let board = Board::from_pieces(&[
        (sq("c3"), Piece::man(Player::One)),
        (sq("f6"), Piece::man(Player::One)),
    ]);
    assert_eq!(rank_move(&board, &step("c3", "d4")), 0);
}

#[test]
fn test_counter_threat_takes_longest_chain() {
    let board = Board::from_pieces(&[
        (sq("h8"), Piece::man(Player::Two)),
        (sq("g7"), Piece::man(Player::One)),
        (sq("e5"), Piece::man(Player::One)),
        (sq("b6"), Piece::man(Player::Two)),
        (sq("a5"), Piece::man(Player::One)),
    ]);
    assert_eq!(counter_threat(&board, Player::Two), 2 * JUMP);
    assert_eq!(counter_threat(&Board::standard(), Player::Two), 0);
}
