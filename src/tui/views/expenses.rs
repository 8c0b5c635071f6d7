//! Expense table

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::tui::app::{App, Focus};

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let border_color = if app.focus == Focus::Table {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(format!(" Expenses ({}) ", app.expenses.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let header = Row::new(["ID", "Date", "Amount", "Category", "Description"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let symbol = app.settings.currency_symbol.as_str();
    let rows = app.expenses.iter().map(|expense| {
        Row::new(vec![
            Cell::from(expense.id.to_string()),
            Cell::from(expense.date_display(&app.settings.date_format)),
            Cell::from(Text::from(expense.amount.format_with_symbol(symbol)).right_aligned()),
            Cell::from(expense.category.name()),
            Cell::from(expense.description.as_str()),
        ])
    });

    let widths = [
        Constraint::Length(5),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}
