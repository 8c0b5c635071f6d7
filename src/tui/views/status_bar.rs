//! Status bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let total = app
        .progress
        .total
        .format_with_symbol(&app.settings.currency_symbol);

    let mut spans = vec![
        Span::styled(
            format!(" {} spent this month ", total),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw(" "),
    ];
    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
