use checkers_core::{FirstPlayer, Game, Move, Piece, Square, all_legal_moves};

use super::*;

fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let board = Board::standard();

    let result = engine.search(&board, Player::One);

    let legal = all_legal_moves(&board, Player::One);
    assert!(legal.contains(&result.best_move.unwrap()));
    assert_eq!(result.score, 0);
}

#[test]
fn random_engine_takes_mandatory_capture() {
    let mut engine = RandomEngine::seeded(3);
    let board = Board::from_pieces(&[
        (sq("a1"), Piece::man(Player::One)),
        (sq("g1"), Piece::man(Player::One)),
        (sq("c3"), Piece::man(Player::One)),
        (sq("d4"), Piece::man(Player::Two)),
    ]);

    for _ in 0..16 {
        let result = engine.search(&board, Player::One);
        let mv = result.best_move.unwrap();
        assert_eq!(mv, Move::from_path(vec![sq("c3"), sq("e5")]).unwrap());
    }
}

#[test]
fn random_engine_handles_blocked_position() {
    let mut engine = RandomEngine::new();
    let board = Board::from_pieces(&[
        (sq("h2"), Piece::man(Player::Two)),
        (sq("g1"), Piece::man(Player::One)),
    ]);

    let result = engine.search(&board, Player::Two);

    assert!(result.best_move.is_none());
}

#[test]
fn seeded_engines_agree() {
    let board = Board::standard();
    let mut a = RandomEngine::seeded(42);
    let mut b = RandomEngine::seeded(42);
    for _ in 0..8 {
        assert_eq!(
            a.search(&board, Player::Two).best_move,
            b.search(&board, Player::Two).best_move
        );
    }
}

#[test]
fn random_engine_plays_a_whole_game() {
    let mut one = RandomEngine::seeded(1);
    let mut two = RandomEngine::seeded(2);
    let mut game = Game::new();
    game.start(FirstPlayer::One).unwrap();

    for _ in 0..500 {
        match game.active_player() {
            Some(Player::One) => game.play_engine(&mut one).unwrap(),
            Some(Player::Two) => game.play_engine(&mut two).unwrap(),
            None => break,
        };
    }
    assert!(game.outcome().map_or(true, |o| o.winner().is_some()));
}
