//! Budget progress gauge

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::tui::app::App;

/// Green while under budget, red once over
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let progress = &app.progress;
    let color = if progress.state.is_over() {
        Color::Red
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {} ", app.period))
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .ratio(progress.ratio())
        .label(progress.label.clone());

    frame.render_widget(gauge, area);
}
