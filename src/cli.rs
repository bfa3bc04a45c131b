//! Command-line interface for fox_hounds.

use clap::Parser;
use fox_hounds::BoardStyle;
use std::path::PathBuf;

/// Fox and Hounds - two-player board game in the terminal
#[derive(Parser, Debug)]
#[command(name = "fox_hounds")]
#[command(about = "Play Fox and Hounds at the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board dimension (4-26). Out-of-range values fall back to 8.
    /// Asked for interactively when neither this nor the config sets it.
    #[arg(short, long)]
    pub dimension: Option<u32>,

    /// Board rendering style
    #[arg(short, long, value_enum)]
    pub style: Option<BoardStyle>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
