use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

/// Handle a key press in navigate mode
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.store.todos().len().saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_selected(),
        KeyCode::Char('a') => app.open_add_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.start_editing(),
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('t') => app.toggle_theme(),
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: i64) {
    let len = app.store.todos().len();
    if len == 0 {
        return;
    }
    let next = app.cursor as i64 + delta;
    app.cursor = next.clamp(0, len as i64 - 1) as usize;
}
