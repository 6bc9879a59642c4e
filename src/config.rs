//! Layered configuration: defaults, TOML file, environment, then CLI flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use noughts_board::{BoardError, DEFAULT_SIZE, Game, Player};
use noughts_server::ServerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default config file, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "noughts.toml";

/// Settings for the console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameConfig {
    /// Board side length.
    size: usize,
    /// Player who places the first mark.
    first_player: Player,
}

impl GameConfig {
    /// Creates an empty game with these settings.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the size is unsupported.
    pub fn new_game(&self) -> Result<Game, BoardError> {
        Game::with_size(self.size, self.first_player)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            first_player: Player::Cross,
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    server: ServerConfig,
    /// Console game settings.
    game: GameConfig,
}

impl AppConfig {
    /// Parses configuration from TOML text. Missing keys keep their defaults.
    #[instrument(skip(content), fields(len = content.len()))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies a `PORT` environment value, if one is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the value is not a valid port number.
    #[instrument(skip(self))]
    pub fn with_port_env(self, port: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = port else {
            return Ok(self);
        };
        let port: u16 = raw
            .trim()
            .parse()
            .map_err(|e| ConfigError::new(format!("Invalid PORT {:?}: {}", raw, e)))?;
        debug!(port, "Port taken from environment");
        let server = self.server.clone().with_port(port);
        Ok(self.with_server(server))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
