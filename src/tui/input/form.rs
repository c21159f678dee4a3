use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, FormField};

/// Handle a key press while the add/edit form is open
pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_editing(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => switch_field(app),
        KeyCode::Backspace => {
            focused_field(app).pop();
            app.form.error = None;
        }
        KeyCode::Char(c) => {
            focused_field(app).push(c);
            app.form.error = None;
        }
        _ => {}
    }
}

fn switch_field(app: &mut App) {
    app.form.field = match app.form.field {
        FormField::Title => FormField::Notes,
        FormField::Notes => FormField::Title,
    };
}

fn focused_field(app: &mut App) -> &mut String {
    match app.form.field {
        FormField::Title => &mut app.form.title,
        FormField::Notes => &mut app.form.notes,
    }
}
