use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen) with key hints for the mode
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let hint = match app.mode {
        Mode::Navigate => "a add  e edit  space toggle  d delete  t theme  q quit",
        Mode::Form => "Enter save  Tab next field  Esc cancel",
    };

    let mut spans = vec![Span::styled(
        format!(" {}", hint),
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
