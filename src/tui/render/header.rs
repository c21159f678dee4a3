use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the header: app title, completion counter, theme indicator
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let stats = app.store.stats();
    let width = area.width as usize;

    let mut spans = vec![
        Span::styled(
            " tick",
            Style::default()
                .fg(app.theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}/{} completed", stats.completed, stats.total),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ];

    // Theme indicator, right-aligned
    let indicator = format!("theme: {} ", app.theme_mode.label());
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let indicator_width = indicator.chars().count();
    if used + indicator_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - indicator_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            indicator,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let separator = Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph =
        Paragraph::new(vec![Line::from(spans), separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
