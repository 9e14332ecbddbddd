//! Terminal UI for rewind.
//!
//! The UI never edits game state directly: every frame is painted from a
//! freshly derived [`View`](rewind_tictactoe::View), and key presses are
//! turned into the messages that view hands out.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use rewind_tictactoe::GameSession;
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::config::AppConfig;

use app::{App, Flow};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the interactive game until the user quits.
///
/// Logs go to whatever subscriber the caller installed, normally the one
/// from [`init_file_logging`](crate::init_file_logging).
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!(log_file = %config.log_file().display(), "Starting rewind TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(GameSession::new().with_order(*config.sort_order()));
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!(
        step = app.session().step(),
        history = app.session().history().len(),
        "TUI exited"
    );
    res
}

/// Event loop: derive the view, paint it, apply one key press.
#[instrument(skip_all)]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let view = app.session().view();
        terminal.draw(|frame| ui::draw(frame, app, &view))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code, &view) == Flow::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}
