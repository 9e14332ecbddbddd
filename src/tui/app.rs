//! Application state and key handling.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use rewind_tictactoe::{GameSession, Msg, View};
use tracing::{debug, instrument};

use super::input::{move_cursor, Cursor};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board grid.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Owns the session and the purely presentational bits (cursor, focus,
/// list selection). Session changes go through [`Msg`] values taken from
/// the current view.
#[derive(Debug, Getters)]
pub struct App {
    session: GameSession,
    cursor: Cursor,
    focus: Focus,
    selected: usize,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            cursor: Cursor::new(1, 1),
            focus: Focus::Board,
            selected: 0,
        }
    }

    /// Handles a key press against the view that is on screen.
    #[instrument(skip(self, view), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode, view: &View) -> Flow {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('s') | KeyCode::Char('S') => self.dispatch(Msg::ToggleSort),
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(cursor) = Cursor::from_digit(c) {
                    self.cursor = cursor;
                    self.focus = Focus::Board;
                    self.activate(view);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(view),
            _ => self.navigate(key, view),
        }
        Flow::Continue
    }

    /// Sends the click handler of the focused element.
    fn activate(&mut self, view: &View) {
        let msg = match self.focus {
            Focus::Board => view
                .cell_at(self.cursor.row, self.cursor.col)
                .map(|cell| *cell.on_click()),
            Focus::Moves => view.moves().get(self.selected).map(|entry| *entry.on_click()),
        };
        if let Some(msg) = msg {
            self.dispatch(msg);
        }
    }

    fn navigate(&mut self, key: KeyCode, view: &View) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, key),
            Focus::Moves => {
                let last = view.moves().len().saturating_sub(1);
                self.selected = match key {
                    KeyCode::Up => self.selected.saturating_sub(1),
                    KeyCode::Down => (self.selected + 1).min(last),
                    KeyCode::Home => 0,
                    KeyCode::End => last,
                    _ => self.selected,
                };
            }
        }
    }

    /// Replaces the session with the result of applying `msg`.
    fn dispatch(&mut self, msg: Msg) {
        debug!(%msg, "Dispatching message");
        let session = std::mem::take(&mut self.session);
        self.session = session.update(msg);
        // The move list only reaches the current step.
        self.selected = self.selected.min(self.session.step());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, keys: &[KeyCode]) {
        for &key in keys {
            let view = app.session().view();
            assert_eq!(app.handle_key(key, &view), Flow::Continue);
        }
    }

    #[test]
    fn test_digit_places_in_reading_order() {
        let mut app = App::new(GameSession::new());
        // '2' is the top middle of the display, which is board index 3.
        press(&mut app, &[KeyCode::Char('2')]);
        assert_eq!(app.session().moves(), &[3]);
        assert_eq!(*app.cursor(), Cursor::new(0, 1));
    }

    #[test]
    fn test_arrows_and_enter_place_mark() {
        let mut app = App::new(GameSession::new());
        press(&mut app, &[KeyCode::Enter, KeyCode::Right, KeyCode::Char(' ')]);
        // Center is index 4, one step right of it is index 7.
        assert_eq!(app.session().moves(), &[4, 7]);
    }

    #[test]
    fn test_move_list_jump() {
        let mut app = App::new(GameSession::new());
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('9')]);
        assert_eq!(app.session().step(), 3);

        press(&mut app, &[KeyCode::Tab, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(*app.focus(), Focus::Moves);
        assert_eq!(app.session().step(), 1);
        assert_eq!(app.session().history().len(), 4);
        assert_eq!(*app.selected(), 1);
    }

    #[test]
    fn test_selection_clamped_after_jump_to_start() {
        let mut app = App::new(GameSession::new());
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        press(&mut app, &[KeyCode::Tab, KeyCode::End]);
        assert_eq!(*app.selected(), 2);
        press(&mut app, &[KeyCode::Home, KeyCode::Enter]);
        assert_eq!(app.session().step(), 0);
        assert_eq!(*app.selected(), 0);
    }

    #[test]
    fn test_sort_toggle_key() {
        let mut app = App::new(GameSession::new());
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('s')]);
        assert_eq!(
            app.session().order(),
            rewind_tictactoe::SortOrder::Descending
        );
        press(&mut app, &[KeyCode::Char('S')]);
        assert_eq!(app.session().order(), rewind_tictactoe::SortOrder::Ascending);
    }

    #[test]
    fn test_occupied_cell_ignored() {
        let mut app = App::new(GameSession::new());
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.session().history().len(), 2);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(GameSession::new());
        let view = app.session().view();
        assert_eq!(app.handle_key(KeyCode::Char('q'), &view), Flow::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc, &view), Flow::Quit);
    }
}
