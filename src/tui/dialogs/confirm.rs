//! Delete confirmation dialog

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::ExpenseId;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Ask before deleting `id`; shows the row summary when it is still loaded
pub fn render(frame: &mut Frame, app: &App, id: ExpenseId) {
    let area = centered_rect_fixed(52, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Expense ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let summary = app
        .expenses
        .iter()
        .find(|e| e.id == id)
        .map(|e| {
            format!(
                "{}  {}  {}",
                e.date_display(&app.settings.date_format),
                e.amount.format_with_symbol(&app.settings.currency_symbol),
                e.category
            )
        })
        .unwrap_or_default();

    let lines = vec![
        Line::from(format!("Delete expense #{}?", id)),
        Line::from(Span::styled(summary, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Delete  "),
            Span::styled("[N/Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Keep"),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}
