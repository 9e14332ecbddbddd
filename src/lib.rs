//! Rewind - tic-tac-toe with move history and time travel.
//!
//! The game logic lives in [`rewind_tictactoe`]; this crate wires it to a
//! terminal UI and a headless replay command.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with defaults for every field
//! - **Logging**: tracing to a file (TUI) or stderr (replay)
//! - **TUI**: ratatui front end painting the derived view
//! - **Replay**: applies messages and prints the view as text or JSON
//!
//! # Example
//!
//! ```
//! use rewind::{render_text, replay};
//! use rewind_tictactoe::{Msg, SortOrder};
//!
//! let session = replay(SortOrder::Ascending, &[Msg::PlaceMark(4)]);
//! assert!(render_text(&session.view()).contains("Next player: O"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod replay;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command, OutputFormat};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Logging
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Front ends
pub use replay::{render, render_text, replay};
pub use tui::run_tui;
