//! Rewind - unified CLI
//!
//! Play tic-tac-toe in the terminal or replay a message script headlessly.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rewind::{AppConfig, Cli, Command, OutputFormat};
use rewind_tictactoe::{Msg, SortOrder};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play { descending } => {
            // Log to a file to avoid interfering with the TUI
            rewind::init_file_logging(&config)?;
            log_config(&config);
            rewind::run_tui(&with_order(config, descending))
        }
        Command::Replay {
            format,
            descending,
            msgs,
        } => {
            rewind::init_stderr_logging(&config);
            log_config(&config);
            run_replay(with_order(config, descending), format, &msgs)
        }
    }
}

/// Reports the settings in effect once a subscriber is installed.
fn log_config(config: &AppConfig) {
    match config.source() {
        Some(path) => info!(
            path = %path.display(),
            sort_order = ?config.sort_order(),
            "Config loaded successfully"
        ),
        None => info!("Config file not found, using defaults"),
    }
}

/// Applies the `--descending` flag on top of the config file.
fn with_order(config: AppConfig, descending: bool) -> AppConfig {
    if descending {
        config.with_sort_order(SortOrder::Descending)
    } else {
        config
    }
}

/// Replays messages and prints the resulting view to stdout.
fn run_replay(config: AppConfig, format: OutputFormat, msgs: &[Msg]) -> Result<()> {
    info!(sort_order = ?config.sort_order(), "Replaying messages");

    let session = rewind::replay(*config.sort_order(), msgs);
    let output = rewind::render(&session.view(), format)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
