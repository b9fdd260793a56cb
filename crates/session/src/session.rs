//! The shared game handle.

use std::sync::Arc;

use checkers_core::{Game, GameEvent, MoveRejection, MoveReport, Player, Square};
use log::info;
use parking_lot::Mutex;

use crate::config::{ConfigError, GameConfig, PlayerKind};
use crate::scheduler::ComputerScheduler;

/// One game and the configuration it was started from.
///
/// Every mutation goes through the mutex, so a human submission and a
/// computer move can never run at the same time.
pub struct Session {
    game: Arc<Mutex<Game>>,
    config: GameConfig,
}

impl Session {
    /// Sets up and starts a game from `config`.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let game = config.new_game()?;
        info!(
            "session: {:?} vs {:?}",
            config.player_one, config.player_two
        );
        Ok(Self {
            game: Arc::new(Mutex::new(game)),
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Another handle to the shared game, for workers.
    pub fn handle(&self) -> Arc<Mutex<Game>> {
        Arc::clone(&self.game)
    }

    /// Runs `f` with the game locked.
    pub fn with_game<T>(&self, f: impl FnOnce(&mut Game) -> T) -> T {
        f(&mut self.game.lock())
    }

    /// Who controls the side to move, `None` once the game is over.
    pub fn to_move(&self) -> Option<(Player, PlayerKind)> {
        let player = self.game.lock().active_player()?;
        Some((player, self.config.player(player)))
    }

    pub fn is_computer_turn(&self) -> bool {
        self.to_move().is_some_and(|(_, kind)| kind.is_computer())
    }

    /// Submits one leg of a human move.
    pub fn submit_move(&self, from: Square, to: Square) -> Result<MoveReport, MoveRejection> {
        self.game.lock().submit_move(from, to)
    }

    pub fn take_events(&self) -> Vec<GameEvent> {
        self.game.lock().take_events()
    }

    /// Replaces the game with a fresh one from the same configuration.
    pub fn restart(&self) -> Result<(), ConfigError> {
        let game = self.config.new_game()?;
        *self.game.lock() = game;
        Ok(())
    }

    /// Starts a worker that plays the computer-controlled sides.
    pub fn spawn_scheduler(&self) -> ComputerScheduler {
        ComputerScheduler::spawn(self.handle(), self.config.players(), self.config.delay())
    }
}
