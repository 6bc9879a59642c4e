//! Command-line interface for noughts.

use crate::config::{AppConfig, DEFAULT_CONFIG_PATH};
use clap::{Parser, Subcommand};
use noughts_board::Player;
use std::path::PathBuf;

/// Noughts - console tic-tac-toe and a static HTTP responder
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Console tic-tac-toe and a static HTTP responder", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play tic-tac-toe on the console
    Play {
        /// Board side length
        #[arg(long)]
        size: Option<usize>,

        /// Player who moves first (cross or circle)
        #[arg(long)]
        first_player: Option<Player>,
    },

    /// Run the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Response body for `/`
        #[arg(long)]
        body: Option<String>,
    },
}

impl Command {
    /// Default `RUST_LOG` filter for this command.
    ///
    /// The console game keeps quiet so log lines do not interleave with the
    /// board.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Command::Play { .. } => "warn",
            Command::Serve { .. } => "info,noughts_server=debug",
        }
    }

    /// Overlays flags given on the command line onto `config`.
    pub fn apply_overrides(&self, config: AppConfig) -> AppConfig {
        match self {
            Command::Play { size, first_player } => {
                let mut game = config.game().clone();
                if let Some(size) = size {
                    game = game.with_size(*size);
                }
                if let Some(player) = first_player {
                    game = game.with_first_player(*player);
                }
                config.with_game(game)
            }
            Command::Serve { host, port, body } => {
                let mut server = config.server().clone();
                if let Some(host) = host {
                    server = server.with_host(host.clone());
                }
                if let Some(port) = port {
                    server = server.with_port(*port);
                }
                if let Some(body) = body {
                    server = server.with_body(body.clone());
                }
                config.with_server(server)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from([
            "noughts",
            "play",
            "--size",
            "4",
            "--first-player",
            "circle",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));

        let config = cli.command.apply_overrides(AppConfig::default());
        assert_eq!(*config.game().size(), 4);
        assert_eq!(*config.game().first_player(), Player::Circle);
    }

    #[test]
    fn test_serve_flags_override_only_given_values() {
        let cli = Cli::try_parse_from(["noughts", "serve", "-p", "9000"]).unwrap();
        let config = cli.command.apply_overrides(AppConfig::default());
        assert_eq!(config.server().bind_address(), "127.0.0.1:9000");
        assert_eq!(config.server().body(), "hello world");
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["noughts", "serve", "--config", "alt.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
    }

    #[test]
    fn test_unknown_player_rejected() {
        assert!(Cli::try_parse_from(["noughts", "play", "--first-player", "nought"]).is_err());
    }
}
