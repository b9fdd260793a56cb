//! Static move scoring.
//!
//! Scores are in half-point units so the quarter-board "pressure" bonus stays
//! an integer.

use checkers_core::{BOARD_SIZE, Board, Move, Player, Rank, Square, all_legal_moves};

/// Per captured piece.
pub const JUMP: i32 = 2;
/// A plain step that crowns a man.
pub const PROMOTION: i32 = 2;
/// A plain step heading toward at least one enemy piece.
pub const PRESSURE: i32 = 1;

/// Scores `mv` for the player owning its origin piece on `board`.
///
/// Capture chains are worth [`JUMP`] per captured piece. A plain step that
/// crowns scores [`PROMOTION`]; otherwise [`PRESSURE`] if an enemy piece
/// stands in the quarter of the board the step heads into, else 0.
pub fn rank_move(board: &Board, mv: &Move) -> i32 {
    if mv.is_capture() {
        return JUMP * mv.jumps() as i32;
    }
    let Some(piece) = board.piece_at(mv.origin()) else {
        return 0;
    };
    let to = mv.destination();
    if piece.rank == Rank::Man && to.row() == piece.owner.promotion_row() {
        return PROMOTION;
    }
    if enemy_ahead(board, mv.origin(), to, piece.owner) {
        PRESSURE
    } else {
        0
    }
}

/// True if any enemy of `owner` sits in the rectangle running from the step
/// toward the board edges it is heading for.
///
/// Moving up spans rows `to..8`, moving down rows `0..from`; columns follow
/// the same rule. The scan is a quarter of the board, not the full width of
/// the rows ahead: an enemy level with the step or behind it on the other
/// side earns no bonus.
fn enemy_ahead(board: &Board, from: Square, to: Square, owner: Player) -> bool {
    let rows = if to.row() > from.row() {
        to.row()..BOARD_SIZE
    } else {
        0..from.row()
    };
    let cols = if to.col() > from.col() {
        to.col()..BOARD_SIZE
    } else {
        0..from.col()
    };
    rows.flat_map(|r| cols.clone().filter_map(move |c| Square::new(r, c)))
        .any(|sq| board.owner_at(sq) == Some(owner.other()))
}

/// Largest capture `opponent` could make on `board`, in score units.
pub fn counter_threat(board: &Board, opponent: Player) -> i32 {
    all_legal_moves(board, opponent)
        .iter()
        .filter(|mv| mv.is_capture())
        .map(|mv| JUMP * mv.jumps() as i32)
        .max()
        .unwrap_or(0)
}
