//! Monthly totals bar chart

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::reports::NO_DATA_MESSAGE;
use crate::tui::app::App;

const BAR_WIDTH: u16 = 7;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Monthly Expenses ")
        .borders(Borders::ALL);

    if app.monthly_totals.is_empty() {
        let message = Paragraph::new(NO_DATA_MESSAGE)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    // Only the most recent months that fit
    let fits = (area.width.saturating_sub(2) / (BAR_WIDTH + 1)).max(1) as usize;
    let skip = app.monthly_totals.len().saturating_sub(fits);

    let bars: Vec<Bar> = app
        .monthly_totals
        .iter()
        .skip(skip)
        .map(|(period, total)| {
            Bar::default()
                .value(u64::try_from(total.dollars()).unwrap_or(0))
                .text_value(format!("{}{}", app.settings.currency_symbol, total.dollars()))
                .label(Line::from(period.short_label()))
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(1)
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    frame.render_widget(chart, area);
}
