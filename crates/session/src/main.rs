//! Terminal front end: humans type moves, computer sides are played by the
//! scheduler worker.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use checkers_core::{FirstPlayer, GameEvent, Outcome, Square, all_legal_moves};
use checkers_session::{ComputerScheduler, GameConfig, PlayerKind, SchedulerEvent, Session};
use clap::{Parser, ValueEnum};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "checkers", version, about = "Play checkers in the terminal")]
struct Cli {
    /// TOML game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    player_one: Option<PlayerKind>,

    #[arg(long, value_enum)]
    player_two: Option<PlayerKind>,

    /// Who moves first
    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstArg {
    One,
    Two,
    Random,
}

impl From<FirstArg> for FirstPlayer {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::One => FirstPlayer::One,
            FirstArg::Two => FirstPlayer::Two,
            FirstArg::Random => FirstPlayer::Random,
        }
    }
}

enum Input {
    Move(Square, Square),
    Board,
    Moves,
    Restart,
    Quit,
    Unknown,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "quit" | "exit" | "q" => return Input::Quit,
        "board" => return Input::Board,
        "moves" => return Input::Moves,
        "new" | "restart" => return Input::Restart,
        _ => {}
    }
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == '-' || c == 'x')
        .filter(|s| !s.is_empty())
        .collect();
    match parts.as_slice() {
        [from, to] => match (from.parse(), to.parse()) {
            (Ok(from), Ok(to)) => Input::Move(from, to),
            _ => Input::Unknown,
        },
        _ => Input::Unknown,
    }
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(kind) = cli.player_one {
        config.player_one = kind;
    }
    if let Some(kind) = cli.player_two {
        config.player_two = kind;
    }
    if let Some(first) = cli.first {
        config.first_player = first.into();
    }
    if let Some(ms) = cli.delay_ms {
        config.delay_ms = ms;
    }
    Ok(config)
}

fn print_board(session: &Session) {
    println!();
    println!("{}", session.with_game(|g| g.board().to_string()));
}

fn report(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::InvalidMove { reason } => println!("invalid move: {reason}"),
            GameEvent::MustContinueChain { square } => {
                println!("keep capturing with the piece on {square}")
            }
            GameEvent::MustCapture { squares } => {
                let list: Vec<String> = squares.iter().map(|s| s.to_string()).collect();
                println!("a capture is required, use one of: {}", list.join(", "))
            }
            GameEvent::Promoted { square } => println!("crowned on {square}"),
            GameEvent::EngineFault => println!("the computer player made an illegal move"),
            _ => {}
        }
    }
}

fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::Won {
            winner,
            by_resignation: true,
        } => format!("{winner} wins: {} cannot move", winner.other()),
        Outcome::Won { winner, .. } => format!("{winner} wins"),
        Outcome::EngineFault => "game stopped after a computer error".to_string(),
    }
}

/// Lets the worker play until a human is to move or the game is over.
fn wait_for_computer(session: &Session, scheduler: &ComputerScheduler) -> Result<()> {
    scheduler.notify();
    loop {
        let event = scheduler
            .events()
            .recv()
            .map_err(|_| anyhow!("computer worker stopped unexpectedly"))?;
        match event {
            SchedulerEvent::Played { player, mv } => {
                println!("{player} plays {mv}");
                print_board(session);
                report(&session.take_events());
            }
            SchedulerEvent::Fault(fault) => println!("computer fault: {fault}"),
            SchedulerEvent::Waiting => return Ok(()),
        }
    }
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().filter_or("CHECKERS_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    info!("starting with {config:?}");
    let session = Session::new(config).context("cannot start game")?;
    let mut scheduler = session.spawn_scheduler();

    print_board(&session);
    session.take_events();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if let Some(outcome) = session.with_game(|g| g.outcome()) {
            println!("{}", describe(outcome));
            break;
        }
        if session.is_computer_turn() {
            wait_for_computer(&session, &scheduler)?;
            continue;
        }
        let Some((player, _)) = session.to_move() else {
            continue;
        };

        print!("{player}> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };

        match parse_input(&line?) {
            Input::Quit => break,
            Input::Board => print_board(&session),
            Input::Moves => {
                let moves = session.with_game(|g| all_legal_moves(g.board(), player));
                let list: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                println!("{}", list.join(" "));
            }
            Input::Restart => {
                session.restart()?;
                print_board(&session);
                session.take_events();
            }
            Input::Move(from, to) => {
                if session.submit_move(from, to).is_ok() {
                    print_board(&session);
                }
                report(&session.take_events());
            }
            Input::Unknown => {
                println!("enter a move like `c3 d4`, or one of: board, moves, new, quit")
            }
        }
    }

    scheduler.stop();
    Ok(())
}
