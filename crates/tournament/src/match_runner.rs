//! Match runner for playing games between engines

use checkers_core::{Engine, FirstPlayer, Game, Outcome, Player};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Result of a single game, from one side's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games), from engine1's perspective
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Games lost because an engine produced no move or an illegal one
    pub faults: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }
}

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Full turns (a capture chain counts once) before declaring a draw
    pub max_turns: u32,
    /// Whether engine1 moves first only in even games
    pub alternate_first: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_turns: 200,
            alternate_first: true,
            verbose: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let engine1_first = !self.config.alternate_first || game_num % 2 == 0;

            let played = if engine1_first {
                self.play_game(engine1, engine2)
            } else {
                let played = self.play_game(engine2, engine1);
                GameRecord {
                    result: played.result.flipped(),
                    ..played
                }
            };

            result.record(played.result);
            if played.faulted {
                result.faults += 1;
            }

            if self.config.verbose {
                let side = if engine1_first { "1st" } else { "2nd" };
                let outcome = match played.result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}, {} turns) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    side,
                    played.turns,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns the result from the first mover's perspective
    fn play_game(&self, first: &mut dyn Engine, second: &mut dyn Engine) -> GameRecord {
        let mut game = Game::new();
        first.new_game();
        second.new_game();

        if let Err(e) = game.start(FirstPlayer::One) {
            warn!("could not start game: {e}");
            return GameRecord::draw(0);
        }

        let mut turns = 0;
        while turns < self.config.max_turns {
            let Some(player) = game.active_player() else {
                break;
            };
            let engine: &mut dyn Engine = match player {
                Player::One => &mut *first,
                Player::Two => &mut *second,
            };
            if let Err(fault) = game.play_engine(engine) {
                debug!("{} faulted: {fault}", engine.name());
                let result = if player == Player::One {
                    GameResult::Loss
                } else {
                    GameResult::Win
                };
                return GameRecord {
                    result,
                    turns,
                    faulted: true,
                };
            }
            turns += 1;
        }

        match game.outcome() {
            Some(Outcome::Won { winner, .. }) => GameRecord {
                result: if winner == Player::One {
                    GameResult::Win
                } else {
                    GameResult::Loss
                },
                turns,
                faulted: false,
            },
            // Turn cap reached
            _ => GameRecord::draw(turns),
        }
    }
}

struct GameRecord {
    result: GameResult,
    turns: u32,
    faulted: bool,
}

impl GameRecord {
    fn draw(turns: u32) -> Self {
        Self {
            result: GameResult::Draw,
            turns,
            faulted: false,
        }
    }
}
