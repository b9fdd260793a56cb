//! Single-step and single-jump destinations.
//!
//! Neither function checks that `from` actually holds a piece, so callers can
//! ask about hypothetical squares.

use crate::{board::Board, types::*};

/// Diagonals in probe order: forward-left, forward-right as seen by
/// PlayerOne, then the two toward row 0.
const DIAGONALS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

fn directions(owner: Player, rank: Rank) -> impl Iterator<Item = (i8, i8)> {
    DIAGONALS
        .into_iter()
        .filter(move |&(dr, _)| rank == Rank::King || dr == owner.forward())
}

/// Landing squares of every capture available from `from`.
pub fn captures_from(board: &Board, from: Square, owner: Player, rank: Rank) -> Vec<Square> {
    let mut out = Vec::with_capacity(4);
    captures_into(board, from, owner, rank, &mut out);
    out
}

/// Like [`captures_from`], reusing the caller's buffer.
pub fn captures_into(board: &Board, from: Square, owner: Player, rank: Rank, out: &mut Vec<Square>) {
    out.clear();
    let enemy = owner.other();
    for (dr, dc) in directions(owner, rank) {
        let (Some(over), Some(land)) = (from.offset(dr, dc), from.offset(2 * dr, 2 * dc)) else {
            continue;
        };
        if board.owner_at(over) == Some(enemy) && board.is_empty(land) {
            out.push(land);
        }
    }
}

/// Empty neighbouring squares reachable by a plain step.
pub fn steps_from(board: &Board, from: Square, owner: Player, rank: Rank) -> Vec<Square> {
    directions(owner, rank)
        .filter_map(|(dr, dc)| from.offset(dr, dc))
        .filter(|&to| board.is_empty(to))
        .collect()
}

pub fn can_capture(board: &Board, from: Square, owner: Player, rank: Rank) -> bool {
    let enemy = owner.other();
    directions(owner, rank).any(|(dr, dc)| {
        match (from.offset(dr, dc), from.offset(2 * dr, 2 * dc)) {
            (Some(over), Some(land)) => board.owner_at(over) == Some(enemy) && board.is_empty(land),
            _ => false,
        }
    })
}

pub fn can_step(board: &Board, from: Square, owner: Player, rank: Rank) -> bool {
    directions(owner, rank)
        .filter_map(|(dr, dc)| from.offset(dr, dc))
        .any(|to| board.is_empty(to))
}
