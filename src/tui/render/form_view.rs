use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, FormField};

use super::centered_rect;

/// Render the add/edit form as a centered popup
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(area, 56, 9);
    let surface = app.theme.surface;

    let title = if app.form.is_editing() {
        " Edit Todo "
    } else {
        " Add Todo "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent).bg(surface))
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.accent)
                .bg(surface)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(surface));
    let inner = block.inner(popup);

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let mut lines = vec![
        field_line(app, FormField::Title, "Title", &app.form.title),
        Line::default(),
        field_line(app, FormField::Notes, "Notes", &app.form.notes),
        Line::default(),
    ];

    if let Some(error) = &app.form.error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(app.theme.red).bg(surface),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            " Enter save   Tab next field   Esc cancel",
            Style::default().fg(app.theme.dim).bg(surface),
        )));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(surface));
    frame.render_widget(paragraph, inner);
}

/// One labeled input row; the focused field gets a cursor glyph
fn field_line<'a>(app: &App, field: FormField, label: &'a str, value: &str) -> Line<'a> {
    let surface = app.theme.surface;
    let focused = app.form.field == field;

    let label_style = if focused {
        Style::default()
            .fg(app.theme.accent)
            .bg(surface)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(surface)
    };

    let mut spans = vec![
        Span::styled(format!(" {:<6}", label), label_style),
        Span::styled(
            value.to_string(),
            Style::default().fg(app.theme.text_bright).bg(surface),
        ),
    ];
    if focused {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.accent).bg(surface),
        ));
    } else if value.is_empty() && field == FormField::Notes {
        spans.push(Span::styled(
            "(optional)",
            Style::default().fg(app.theme.dim).bg(surface),
        ));
    }
    Line::from(spans)
}
