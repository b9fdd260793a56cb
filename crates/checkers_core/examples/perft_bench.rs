//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p checkers_core -- [depth]

use checkers_core::{Board, Player, perft};
use std::env;
use std::time::Instant;

/// Positions exercising plain steps, long chains and kings.
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Opening",
        "
        . x . x . x . x
        x . x . x . x .
        . x . x . x . x
        . . . . . . . .
        . . . . . . . .
        o . o . o . o .
        . o . o . o . o
        o . o . o . o .
        ",
    ),
    (
        "Open middlegame",
        "
        . x . x . . . x
        x . . . x . . .
        . x . . . x . x
        . . x . . . . .
        . o . . . o . .
        o . . . o . . .
        . . . o . . . o
        o . o . . . o .
        ",
    ),
    (
        "Kings",
        "
        . . . . . . . .
        . . x . . . X .
        . . . . . . . .
        . . x . x . . .
        . . . O . . . .
        . . x . . . . .
        . o . . . . . .
        . . . . . . . .
        ",
    ),
];

fn main() {
    let depth: u8 = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);

    let mut total_nodes = 0u64;
    let start = Instant::now();

    for (name, diagram) in TEST_POSITIONS {
        let board: Board = match diagram.parse() {
            Ok(board) => board,
            Err(e) => {
                eprintln!("{name}: bad diagram: {e}");
                continue;
            }
        };
        let pos_start = Instant::now();
        let nodes = perft(&board, Player::One, depth);
        let elapsed = pos_start.elapsed();
        println!(
            "{name:<16} depth {depth}: {nodes:>12} nodes in {:.3}s ({:.0} nps)",
            elapsed.as_secs_f64(),
            nodes as f64 / elapsed.as_secs_f64().max(1e-9)
        );
        total_nodes += nodes;
    }

    let elapsed = start.elapsed();
    println!(
        "Total: {total_nodes} nodes in {:.3}s ({:.0} nps)",
        elapsed.as_secs_f64(),
        total_nodes as f64 / elapsed.as_secs_f64().max(1e-9)
    );
}
