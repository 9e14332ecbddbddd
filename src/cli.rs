//! Command-line interface for rewind.

use clap::{Parser, Subcommand, ValueEnum};
use rewind_tictactoe::Msg;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Start with the newest moves first
        #[arg(long)]
        descending: bool,
    },

    /// Apply messages to a fresh game and print the resulting view
    Replay {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Start with the newest moves first
        #[arg(long)]
        descending: bool,

        /// Messages to apply in order: place:<cell>, jump:<step> or sort
        #[arg(value_name = "MSG")]
        msgs: Vec<Msg>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { descending: false }
    }
}

/// Output format for `replay`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Board, status and move list as plain text
    #[default]
    Text,
    /// The full view as pretty-printed JSON
    Json,
}
