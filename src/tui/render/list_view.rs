use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the todo list, one row per todo, with an empty state when there
/// is nothing to show.
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.store.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No todos yet. Add your first one to get started!",
            Style::default().fg(app.theme.dim).bg(bg),
        )))
        .centered()
        .style(Style::default().bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor row visible
    let visible = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible > 0 && app.cursor >= app.scroll_offset + visible {
        app.scroll_offset = app.cursor + 1 - visible;
    }

    let mut lines = Vec::with_capacity(visible);
    for (i, todo) in app
        .store
        .todos()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible)
    {
        let selected = i == app.cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };

        let checkbox_style = if todo.completed {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.dim).bg(row_bg)
        };
        let title_style = if todo.completed {
            Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        let mut spans = vec![
            Span::styled(
                if selected { "▶ " } else { "  " },
                Style::default().fg(app.theme.accent).bg(row_bg),
            ),
            Span::styled(
                if todo.completed { "[x] " } else { "[ ] " },
                checkbox_style,
            ),
            Span::styled(todo.title.clone(), title_style),
        ];
        if !todo.notes.is_empty() {
            spans.push(Span::styled(
                format!("  — {}", todo.notes),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ));
        }

        // Pad the row so the selection background spans the full width
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let width = area.width as usize;
        if used < width {
            spans.push(Span::styled(
                " ".repeat(width - used),
                Style::default().bg(row_bg),
            ));
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
