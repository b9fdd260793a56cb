use crate::{
    board::Board,
    geometry::{captures_from, captures_into, steps_from},
    types::*,
};

/// Every maximal capture chain for a piece of `owner`/`rank` standing on
/// `from`. Empty if the piece has no capture at all.
///
/// Each branch jumps on its own board snapshot so sibling branches never see
/// each other's captures. A man reaching its promotion row continues the
/// chain as a king.
pub fn capture_paths(board: &Board, from: Square, owner: Player, rank: Rank) -> Vec<Move> {
    let mut out = Vec::new();
    capture_paths_into(board, from, owner, rank, &mut out);
    out
}

/// Appends the chains of [`capture_paths`] to `out`.
pub fn capture_paths_into(
    board: &Board,
    from: Square,
    owner: Player,
    rank: Rank,
    out: &mut Vec<Move>,
) {
    if captures_from(board, from, owner, rank).is_empty() {
        return;
    }
    let mut path = Vec::with_capacity(12);
    extend_chain(board, from, owner, rank, &mut path, out);
}

fn extend_chain(
    board: &Board,
    at: Square,
    owner: Player,
    rank: Rank,
    path: &mut Vec<Square>,
    out: &mut Vec<Move>,
) {
    let rank = if at.row() == owner.promotion_row() {
        Rank::King
    } else {
        rank
    };

    path.push(at);

    let mut landings = Vec::with_capacity(4);
    captures_into(board, at, owner, rank, &mut landings);

    if landings.is_empty() {
        if let Some(mv) = Move::from_path(path.clone()) {
            out.push(mv);
        }
    } else {
        for to in landings {
            let mut snapshot = *board;
            snapshot.apply_leg(at, to);
            extend_chain(&snapshot, to, owner, rank, path, out);
        }
    }

    path.pop();
}

/// All moves `player` may make on `board`.
///
/// Captures are mandatory: if any piece has a chain, only chains are
/// returned. Otherwise every plain step. Both lists follow board-scan order.
pub fn all_legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    all_legal_moves_into(board, player, &mut out);
    out
}

/// Fills `out` with [`all_legal_moves`], reusing its allocation.
pub fn all_legal_moves_into(board: &Board, player: Player, out: &mut Vec<Move>) {
    out.clear();
    for (sq, pc) in board.pieces_of(player) {
        capture_paths_into(board, sq, player, pc.rank, out);
    }
    if !out.is_empty() {
        return;
    }
    for (sq, pc) in board.pieces_of(player) {
        for to in steps_from(board, sq, player, pc.rank) {
            out.push(Move::step(sq, to));
        }
    }
}
