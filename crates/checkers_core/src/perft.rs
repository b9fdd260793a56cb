use crate::{board::Board, paths::all_legal_moves_into, types::*};

/// Pure perft node count.
/// Counts the positions reachable in exactly `depth` turns, where a whole
/// capture chain is one turn.
pub fn perft(board: &Board, to_move: Player, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &Board, to_move: Player, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        all_legal_moves_into(board, to_move, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter() {
            let mut next = *board;
            next.apply_move(mv);
            nodes += inner(&next, to_move.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(board, to_move, depth, &mut layers[..])
}
