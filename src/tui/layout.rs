//! Layout definitions for the TUI
//!
//! One screen, top to bottom: entry form, budget gauge, expense table with
//! an optional chart beside it, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the dashboard
pub struct DashboardLayout {
    pub form: Rect,
    pub gauge: Rect,
    pub table: Rect,
    /// Present only while the chart is toggled on
    pub chart: Option<Rect>,
    pub status_bar: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect, show_chart: bool) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Form
                Constraint::Length(3), // Gauge
                Constraint::Min(5),    // Table / chart
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let (table, chart) = if show_chart {
            let horizontal = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(vertical[2]);
            (horizontal[0], Some(horizontal[1]))
        } else {
            (vertical[2], None)
        };

        Self {
            form: vertical[0],
            gauge: vertical[1],
            table,
            chart,
            status_bar: vertical[3],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
