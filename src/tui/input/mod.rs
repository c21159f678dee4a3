mod form;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // The delete-failure notice is blocking: it captures all input until
    // dismissed.
    if app.error_notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.error_notice = None;
        }
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Form => form::handle_form(app, key),
    }
}
