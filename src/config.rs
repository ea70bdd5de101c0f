//! Command-line configuration

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, with a move list you can jump through
#[derive(Debug, Clone, Parser)]
#[command(name = "tictactty", version, about)]
pub struct Config {
    /// File that receives log output (the terminal is owned by the UI)
    #[arg(long, value_name = "PATH", default_value = "tictactty.log")]
    pub log_file: PathBuf,

    /// Log filter, e.g. `info` or `tictactty=debug`. `RUST_LOG` takes precedence.
    #[arg(long, value_name = "FILTER", env = "TICTACTTY_LOG", default_value = "info")]
    pub log_level: String,

    /// Do not write a log file
    #[arg(long)]
    pub no_log: bool,

    /// Keyboard only; leave the mouse to the terminal emulator
    #[arg(long)]
    pub no_mouse: bool,
}
