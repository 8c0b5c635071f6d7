//! Entry form panel

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::ExpenseCategory;
use crate::tui::app::{App, Focus};
use crate::tui::form::{FormField, FormMode};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.form;
    let active = app.focus == Focus::Form;

    let title = match form.mode {
        FormMode::Add => " Add Expense ".to_string(),
        FormMode::Edit(id) => format!(" Edit Expense #{} ", id),
    };
    let border_color = if active { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 5])
        .split(inner);

    frame.render_widget(&form.date_input, rows[0]);
    frame.render_widget(&form.amount_input, rows[1]);
    frame.render_widget(
        Paragraph::new(category_line(
            form.category,
            active && form.focused_field == FormField::Category,
        )),
        rows[2],
    );
    frame.render_widget(&form.description_input, rows[3]);

    let footer = match &form.error_message {
        Some(msg) => Line::from(Span::styled(msg.as_str(), Style::default().fg(Color::Red))),
        None if active => Line::from(Span::styled(
            "Tab: next field  ←/→: category  Enter: save  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
        None => Line::from(Span::styled(
            "a: add  e: edit  d: delete  c: chart  q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(footer), rows[4]);
}

fn category_line(selected: ExpenseCategory, focused: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled("Category", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
    ];

    for category in ExpenseCategory::all() {
        let style = if *category == selected {
            let base = Style::default().add_modifier(Modifier::BOLD);
            if focused {
                base.fg(Color::Black).bg(Color::Cyan)
            } else {
                base.fg(Color::Yellow)
            }
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", category.name()), style));
    }

    Line::from(spans)
}
