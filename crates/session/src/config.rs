//! Game configuration loaded from TOML, with command-line overrides applied
//! by the binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use checkers_core::{BoardParseError, FirstPlayer, Game, Player, SetupError, Variant};
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Difficulty;

pub const DEFAULT_DELAY_MS: u64 = 500;

/// Who controls a side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    #[default]
    Human,
    Random,
    Heuristic,
}

impl PlayerKind {
    /// The engine strength for a computer side, `None` for a human.
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Random => Some(Difficulty::Random),
            PlayerKind::Heuristic => Some(Difficulty::Heuristic),
        }
    }

    pub fn is_computer(self) -> bool {
        self.difficulty().is_some()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid custom board: {0}")]
    Board(#[from] BoardParseError),

    #[error(transparent)]
    Setup(#[from] SetupError),
}

/// Everything needed to set up and drive one game.
///
/// ```toml
/// first_player = "random"
/// player_two = "heuristic"
/// delay_ms = 250
/// custom_board = """
/// . . . . . . . .
/// ...
/// """
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub variant: Variant,
    pub first_player: FirstPlayer,
    pub player_one: PlayerKind,
    pub player_two: PlayerKind,
    /// Pause before each computer move
    pub delay_ms: u64,
    /// Board diagram replacing the standard setup
    pub custom_board: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Checkers,
            first_player: FirstPlayer::One,
            player_one: PlayerKind::Human,
            player_two: PlayerKind::Heuristic,
            delay_ms: DEFAULT_DELAY_MS,
            custom_board: None,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn player(&self, player: Player) -> PlayerKind {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    pub fn players(&self) -> [PlayerKind; 2] {
        [self.player_one, self.player_two]
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Creates a started game from this configuration.
    pub fn new_game(&self) -> Result<Game, ConfigError> {
        let mut game = Game::for_variant(self.variant)?;
        if let Some(diagram) = &self.custom_board {
            let board: checkers_core::Board = diagram.parse()?;
            game.begin_customization()?;
            for player in Player::ALL {
                for (sq, piece) in board.pieces_of(player) {
                    game.place(sq, Some(piece))?;
                }
            }
        }
        game.start(self.first_player)?;
        Ok(game)
    }
}
