use super::*;

fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

fn sqs(list: &[&str]) -> Vec<Square> {
    list.iter().map(|s| sq(s)).collect()
}

#[test]
fn test_man_captures_forward_only() {
    let board = Board::from_pieces(&[
        (sq("c3"), Piece::man(Player::One)),
        (sq("b4"), Piece::man(Player::Two)),
        (sq("d4"), Piece::man(Player::Two)),
        (sq("d2"), Piece::man(Player::Two)),
    ]);
    assert_eq!(
        captures_from(&board, sq("c3"), Player::One, Rank::Man),
        sqs(&["a5", "e5"])
    );
    assert_eq!(
        captures_from(&board, sq("c3"), Player::One, Rank::King),
        sqs(&["a5", "e5", "e1"])
    );
}

#[test]
fn test_player_two_forward_is_down() {
    let board = Board::from_pieces(&[
        (sq("d4"), Piece::man(Player::Two)),
        (sq("c3"), Piece::man(Player::One)),
        (sq("e5"), Piece::man(Player::One)),
    ]);
    assert_eq!(
        captures_from(&board, sq("d4"), Player::Two, Rank::Man),
        sqs(&["b2"])
    );
    assert_eq!(
        steps_from(&board, sq("d4"), Player::Two, Rank::Man),
        sqs(&["e3"])
    );
}

#[test]
fn test_capture_needs_empty_landing_in_bounds() {
    let board = Board::from_pieces(&[
        (sq("c3"), Piece::man(Player::One)),
        (sq("d4"), Piece::man(Player::Two)),
        (sq("e5"), Piece::man(Player::Two)),
        (sq("a7"), Piece::man(Player::One)),
        (sq("b8"), Piece::man(Player::Two)),
    ]);
    assert!(captures_from(&board, sq("c3"), Player::One, Rank::Man).is_empty());
    assert!(!can_capture(&board, sq("c3"), Player::One, Rank::Man));
    // b8 sits on the last row: nothing beyond it.
    assert!(captures_from(&board, sq("a7"), Player::One, Rank::Man).is_empty());
}

#[test]
fn test_own_pieces_are_not_captured() {
    let board = Board::from_pieces(&[
        (sq("c3"), Piece::man(Player::One)),
        (sq("d4"), Piece::man(Player::One)),
    ]);
    assert!(captures_from(&board, sq("c3"), Player::One, Rank::Man).is_empty());
}

#[test]
fn test_steps_from() {
    let board = Board::from_pieces(&[(sq("a1"), Piece::man(Player::One))]);
    assert_eq!(
        steps_from(&board, sq("a1"), Player::One, Rank::Man),
        sqs(&["b2"])
    );
    assert_eq!(
        steps_from(&board, sq("d4"), Player::One, Rank::King),
        sqs(&["c5", "e5", "c3", "e3"])
    );
    assert!(can_step(&board, sq("a1"), Player::One, Rank::Man));
}

#[test]
fn test_blocked_steps() {
    let board = Board::from_pieces(&[
        (sq("h2"), Piece::man(Player::Two)),
        (sq("g1"), Piece::man(Player::One)),
    ]);
    assert!(steps_from(&board, sq("h2"), Player::Two, Rank::Man).is_empty());
    assert!(!can_step(&board, sq("h2"), Player::Two, Rank::Man));
    assert!(!can_capture(&board, sq("h2"), Player::Two, Rank::Man));
}

#[test]
fn test_hypothetical_square() {
    // Nothing stands on c3; the geometry is still answered.
    let board = Board::from_pieces(&[(sq("d4"), Piece::man(Player::Two))]);
    assert_eq!(
        captures_from(&board, sq("c3"), Player::One, Rank::Man),
        sqs(&["e5"])
    );
}
