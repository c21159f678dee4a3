use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::snapshot::{FileBackend, default_data_dir};
use crate::model::TodoPatch;
use crate::store::TodoStore;

use super::input;
use super::render;
use super::theme::{Theme, ThemeMode};

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving through the list
    Navigate,
    /// The add/edit form is open
    Form,
}

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Notes,
}

/// Ephemeral state of the add/edit form
#[derive(Debug, Clone)]
pub struct FormState {
    /// Id of the todo being edited, or None when adding
    pub editing_id: Option<String>,
    pub title: String,
    pub notes: String,
    pub error: Option<String>,
    pub field: FormField,
}

impl Default for FormState {
    fn default() -> Self {
        FormState {
            editing_id: None,
            title: String::new(),
            notes: String::new(),
            error: None,
            field: FormField::Title,
        }
    }
}

impl FormState {
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }
}

/// Main application state
pub struct App {
    pub store: TodoStore,
    pub mode: Mode,
    pub theme_mode: ThemeMode,
    pub theme: Theme,
    /// Cursor index into the todo list
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    pub form: FormState,
    /// Blocking notification (delete persist failure); intercepts all input
    pub error_notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: TodoStore) -> Self {
        let theme_mode = ThemeMode::Light;
        App {
            store,
            mode: Mode::Navigate,
            theme_mode,
            theme: Theme::for_mode(theme_mode),
            cursor: 0,
            scroll_offset: 0,
            form: FormState::default(),
            error_notice: None,
            should_quit: false,
        }
    }

    /// Id of the todo under the cursor
    pub fn selected_id(&self) -> Option<String> {
        self.store.todos().get(self.cursor).map(|t| t.id.clone())
    }

    /// Keep the cursor inside the collection after a mutation
    pub fn clamp_cursor(&mut self) {
        let len = self.store.todos().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggle();
        self.theme = Theme::for_mode(self.theme_mode);
    }

    /// Open the form empty, for adding a new todo
    pub fn open_add_form(&mut self) {
        self.form = FormState::default();
        self.mode = Mode::Form;
    }

    /// Open the form pre-filled with the todo under the cursor
    pub fn start_editing(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(todo) = self.store.get(&id) else {
            return;
        };
        self.form = FormState {
            editing_id: Some(id),
            title: todo.title.clone(),
            notes: todo.notes.clone(),
            error: None,
            field: FormField::Title,
        };
        self.mode = Mode::Form;
    }

    /// Close the form without mutating anything
    pub fn cancel_editing(&mut self) {
        self.form = FormState::default();
        self.mode = Mode::Navigate;
    }

    /// Submit the form: update when editing, add otherwise.
    ///
    /// An empty trimmed title sets a local validation message and leaves
    /// the form open — no store mutation occurs.
    pub fn submit_form(&mut self) {
        if self.form.title.trim().is_empty() {
            self.form.error = Some("Please enter a title.".to_string());
            return;
        }
        match self.form.editing_id.clone() {
            Some(id) => {
                self.store.update(
                    &id,
                    TodoPatch {
                        title: Some(self.form.title.clone()),
                        notes: Some(self.form.notes.clone()),
                    },
                );
            }
            None => {
                self.store.add(&self.form.title, &self.form.notes);
                self.cursor = 0;
            }
        }
        self.form = FormState::default();
        self.mode = Mode::Navigate;
    }

    /// Toggle completion on the todo under the cursor
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.toggle_complete(&id);
        }
    }

    /// Delete the todo under the cursor. A failed persist raises the
    /// blocking error notice; the store has already recovered its state.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if self.form.editing_id.as_deref() == Some(&id) {
            self.cancel_editing();
        }
        if self.store.delete(&id).is_err() {
            self.error_notice = Some(
                "Failed to delete the todo due to a storage error. Please try again.".to_string(),
            );
        }
        self.clamp_cursor();
    }
}

/// Run the TUI application
pub fn run(data_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = data_dir.map(Path::to_path_buf).unwrap_or_else(default_data_dir);
    let backend = FileBackend::open(&dir)?;
    let store = TodoStore::load(Box::new(backend));
    let mut app = App::new(store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
