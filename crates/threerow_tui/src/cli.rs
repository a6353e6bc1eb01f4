//! Command-line interface for the threerow TUI.

use clap::Parser;
use std::path::PathBuf;

/// Three-in-a-row in the terminal, with full move-history replay.
#[derive(Parser, Debug)]
#[command(name = "threerow_tui")]
#[command(about = "Terminal three-in-a-row with move-history replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write logs to this file (stderr is unusable under the alternate screen)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
