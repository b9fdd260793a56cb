//! Tournament CLI
//!
//! Run a match between two checkers engines and optionally save the results.

use std::path::PathBuf;

use anyhow::{Context, Result};
use checkers_core::Engine;
use clap::{Parser, ValueEnum};
use heuristic_engine::HeuristicEngine;
use log::info;
use random_engine::RandomEngine;
use tournament::{MatchConfig, MatchRunner, TournamentConfig, TournamentResults};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EngineKind {
    /// Uniformly random legal moves
    Random,
    /// One ply with a counter-capture penalty
    Heuristic,
}

impl EngineKind {
    fn name(self) -> &'static str {
        match self {
            EngineKind::Random => "random",
            EngineKind::Heuristic => "heuristic",
        }
    }

    fn create(self) -> Box<dyn Engine> {
        match self {
            EngineKind::Random => Box::new(RandomEngine::new()),
            EngineKind::Heuristic => Box::new(HeuristicEngine::new()),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tournament", version, about = "Play checkers engines against each other")]
struct Cli {
    #[arg(long, value_enum, default_value = "heuristic")]
    engine1: EngineKind,

    #[arg(long, value_enum, default_value = "random")]
    engine2: EngineKind,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 10)]
    games: u32,

    /// Full turns per game before it is scored as a draw
    #[arg(long, default_value_t = 200)]
    max_turns: u32,

    /// Write results as JSON to this file
    #[arg(long)]
    out: Option<PathBuf>,

    /// Only print the final report
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().filter_or("TOURNAMENT_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let (name1, name2) = (cli.engine1.name(), cli.engine2.name());

    println!("=== Match: {name1} vs {name2} ===");
    println!("Games: {}, Max turns: {}", cli.games, cli.max_turns);
    println!();

    let mut engine1 = cli.engine1.create();
    let mut engine2 = cli.engine2.create();

    let runner = MatchRunner::new(MatchConfig {
        num_games: cli.games,
        max_turns: cli.max_turns,
        verbose: !cli.quiet,
        ..Default::default()
    });
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());
    info!("match finished: {result:?}");

    println!();
    println!("=== Final Result ===");
    println!(
        "{name1}: {} wins, {} losses, {} draws",
        result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut results = TournamentResults::new(
        &format!("{name1} vs {name2}"),
        vec![name1.to_string(), name2.to_string()],
        TournamentConfig {
            games_per_match: cli.games,
            max_turns_per_game: cli.max_turns,
        },
    );
    results.add_match(name1, name2, result);
    results.print_report();

    if let Some(path) = &cli.out {
        results
            .save(path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        println!("Results written to {}", path.display());
    }
    Ok(())
}
