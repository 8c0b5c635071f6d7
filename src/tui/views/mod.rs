//! TUI views
//!
//! The dashboard is drawn in one pass: form, budget gauge, expense table,
//! optional chart, status bar, then any dialog on top.

pub mod budget;
pub mod chart;
pub mod expenses;
pub mod form;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::DashboardLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = DashboardLayout::new(frame.area(), app.show_chart);

    form::render(frame, app, layout.form);
    budget::render(frame, app, layout.gauge);
    expenses::render(frame, app, layout.table);
    if let Some(area) = layout.chart {
        chart::render(frame, app, area);
    }
    status_bar::render(frame, app, layout.status_bar);

    if let ActiveDialog::ConfirmDelete(id) = app.active_dialog {
        dialogs::confirm::render(frame, app, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpensePaths, Settings};
    use crate::models::{ExpenseCategory, ExpenseDraft, Money};
    use crate::reports::NO_DATA_MESSAGE;
    use crate::services::expense::today;
    use crate::storage::Storage;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::open_in_memory(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf()))
                .unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_empty_dashboard() {
        let (_temp_dir, storage) = storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings).unwrap();
        app.toggle_chart();

        let screen = draw(&mut app);

        assert!(screen.contains("Add Expense"));
        assert!(screen.contains("Monthly Budget Progress: $0 / $800"));
        assert!(screen.contains("Expenses (0)"));
        assert!(screen.contains(NO_DATA_MESSAGE));
    }

    #[test]
    fn test_over_budget_and_delete_dialog() {
        let (_temp_dir, storage) = storage();
        let settings = Settings::default();
        storage
            .expenses
            .create(&ExpenseDraft::new(
                today(),
                Money::from_dollars(950),
                ExpenseCategory::Rent,
                "lease",
            ))
            .unwrap();

        let mut app = App::new(&storage, &settings).unwrap();
        app.request_delete();

        let screen = draw(&mut app);

        assert!(screen.contains("Monthly Budget Exceeded: $950 / $800 (18.8% over)"));
        assert!(screen.contains("Delete expense #1?"));
        assert!(screen.contains("$950.00  Rent"));
    }
}
