//! Noughts - unified CLI.

use anyhow::Result;
use clap::Parser;
use noughts::{AppConfig, Cli, Command, play_stdio};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.command.default_log_filter());

    let config = AppConfig::load(&cli.config)?
        .with_port_env(std::env::var("PORT").ok().as_deref())?;
    let config = cli.command.apply_overrides(config);

    match cli.command {
        Command::Play { .. } => run_play(config).await,
        Command::Serve { .. } => run_server(config).await,
    }
}

/// Play one console game on a blocking thread.
#[instrument(skip(config), fields(size = config.game().size()))]
async fn run_play(config: AppConfig) -> Result<()> {
    let game = config.game().new_game()?;
    let outcome = tokio::task::spawn_blocking(move || play_stdio(game)).await??;
    info!(?outcome, "Console game over");
    Ok(())
}

/// Run the HTTP server until Ctrl-C.
#[instrument(skip(config), fields(addr = %config.server().bind_address()))]
async fn run_server(config: AppConfig) -> Result<()> {
    info!("Starting HTTP server");
    noughts_server::serve(config.server().clone()).await
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
