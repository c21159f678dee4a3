use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::App;

use super::centered_rect;

/// Render the blocking storage-error notice raised by a failed delete
pub fn render_error_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(message) = &app.error_notice else {
        return;
    };

    let popup = centered_rect(area, 52, 7);
    let surface = app.theme.surface;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(surface))
        .title(Span::styled(
            " Storage Error ",
            Style::default()
                .fg(app.theme.red)
                .bg(surface)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(surface));
    let inner = block.inner(popup);

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(app.theme.text_bright).bg(surface),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to dismiss.",
            Style::default().fg(app.theme.dim).bg(surface),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(surface));
    frame.render_widget(paragraph, inner);
}
