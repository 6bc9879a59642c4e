//! Noughts - console tic-tac-toe and a static HTTP responder.
//!
//! # Architecture
//!
//! - **Board**: pure game logic lives in [`noughts_board`]
//! - **Server**: the single-route HTTP responder lives in [`noughts_server`]
//! - **Console**: the interactive driver that plays a [`Game`] over stdio
//! - **Config**: layered settings from defaults, TOML, environment, and flags
//!
//! # Example
//!
//! ```
//! use noughts::{ConsoleGame, Game, Outcome, Player};
//!
//! # fn example() -> anyhow::Result<()> {
//! let input = "1 1\n2 2\n1 2\n3 3\n1 3\n".as_bytes();
//! let mut console = ConsoleGame::new(Game::new(), input, Vec::new());
//! assert_eq!(console.run()?, Outcome::Won(Player::Cross));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

// Crate-level exports - Console driver
pub use console::{ConsoleGame, play_stdio};

// Crate-level exports - Game and server types
pub use noughts_board::{Board, Cell, Game, Move, MoveError, Outcome, Player};
pub use noughts_server::ServerConfig;
