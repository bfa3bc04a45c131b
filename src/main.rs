//! Fox and Hounds - console game
//!
//! Reads settings, sets up tracing, and hands stdin/stdout to the menu loop.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use fox_hounds::{App, Console, Game, GameConfig};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    run(cli)
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Resolves the configuration and plays one session.
#[instrument(skip_all)]
fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    }
    .with_overrides(cli.dimension, cli.style);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let dimension = match config.board_dimension() {
        Some(dimension) => dimension,
        None => console.dimension_query()?,
    };
    info!(%dimension, style = %config.style(), "Starting game");

    let mut app = App::new(console, Game::new(dimension), *config.style());
    let status = app.run()?;
    info!(%status, "Session finished");

    Ok(())
}
