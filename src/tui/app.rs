//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Every store access happens here, on the main thread.

use ratatui::widgets::TableState;
use tracing::warn;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Period};
use crate::reports::MonthlyTotals;
use crate::services::expense::today;
use crate::services::{BudgetProgress, BudgetTracker, ExpenseService};
use crate::storage::Storage;

use super::form::{ExpenseForm, FormMode};

/// Which part of the screen takes keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    Form,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    ConfirmDelete(ExpenseId),
}

/// Main application state
pub struct App<'a> {
    pub storage: &'a Storage,
    pub settings: &'a Settings,
    pub tracker: BudgetTracker,

    pub should_quit: bool,
    pub focus: Focus,
    pub active_dialog: ActiveDialog,
    pub show_chart: bool,

    pub form: ExpenseForm,

    /// Expenses shown in the table, newest first
    pub expenses: Vec<Expense>,
    pub table_state: TableState,

    /// Progress for `period`
    pub progress: BudgetProgress,
    pub period: Period,
    pub monthly_totals: MonthlyTotals,

    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Build the app and load the first snapshot of data
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> ExpenseResult<Self> {
        let tracker = BudgetTracker::new(settings.monthly_budget)?;
        let period = Period::current();

        let mut app = Self {
            storage,
            settings,
            tracker,
            should_quit: false,
            focus: Focus::Table,
            active_dialog: ActiveDialog::None,
            show_chart: false,
            form: ExpenseForm::new(today()),
            expenses: Vec::new(),
            table_state: TableState::default(),
            progress: tracker.progress(Default::default()),
            period,
            monthly_totals: MonthlyTotals::default(),
            status_message: None,
        };
        app.refresh()?;
        Ok(app)
    }

    /// Reload the table, gauge and chart from the store
    pub fn refresh(&mut self) -> ExpenseResult<()> {
        self.period = Period::current();
        let service = ExpenseService::new(self.storage);
        self.expenses = service.list()?;
        self.progress = self
            .tracker
            .progress_for_period(&self.storage.expenses, &self.period)?;
        self.monthly_totals = MonthlyTotals::from_expenses(&self.expenses);
        self.clamp_selection();
        Ok(())
    }

    /// Reload once the calendar month has rolled over
    pub fn on_tick(&mut self) -> ExpenseResult<()> {
        if self.period != Period::current() {
            self.refresh()?;
        }
        Ok(())
    }

    fn clamp_selection(&mut self) {
        let selected = match (self.table_state.selected(), self.expenses.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.table_state.select(selected);
    }

    pub fn selected_expense(&self) -> Option<&Expense> {
        self.table_state
            .selected()
            .and_then(|i| self.expenses.get(i))
    }

    pub fn select_next(&mut self) {
        if let Some(i) = self.table_state.selected() {
            if i + 1 < self.expenses.len() {
                self.table_state.select(Some(i + 1));
            }
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(i) = self.table_state.selected() {
            self.table_state.select(Some(i.saturating_sub(1)));
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn toggle_chart(&mut self) {
        self.show_chart = !self.show_chart;
    }

    /// Focus the form for a new expense
    pub fn start_add(&mut self) {
        if matches!(self.form.mode, FormMode::Edit(_)) {
            self.form = ExpenseForm::new(today());
        }
        self.focus_form();
    }

    /// Load the selected expense into the form
    pub fn start_edit(&mut self) {
        match self.selected_expense() {
            Some(expense) => {
                self.form = ExpenseForm::from_expense(expense);
                self.focus_form();
            }
            None => self.set_status("Select an expense to edit."),
        }
    }

    fn focus_form(&mut self) {
        self.focus = Focus::Form;
        self.form.clear_error();
        self.form.update_focus(true);
    }

    /// Leave the form without saving
    pub fn cancel_form(&mut self) {
        if matches!(self.form.mode, FormMode::Edit(_)) {
            self.form = ExpenseForm::new(today());
        }
        self.form.clear_error();
        self.focus = Focus::Table;
        self.form.update_focus(false);
    }

    /// Validate and save the form; on a validation error nothing is stored
    pub fn submit_form(&mut self) -> ExpenseResult<()> {
        let draft = match self.form.to_draft(today()) {
            Ok(draft) => draft,
            Err(e) => return self.report_form_error(e),
        };

        let service = ExpenseService::new(self.storage);
        let saved = match self.form.mode {
            FormMode::Add => service.create(draft),
            FormMode::Edit(id) => service.update(id, draft),
        };

        match saved {
            Ok(expense) => {
                let verb = match self.form.mode {
                    FormMode::Add => "Added",
                    FormMode::Edit(_) => "Updated",
                };
                self.form.reset(today());
                self.focus = Focus::Table;
                self.form.update_focus(false);
                self.refresh()?;
                self.select_expense(expense.id);
                self.set_status(format!("{} expense #{}", verb, expense.id));
                Ok(())
            }
            Err(e) => self.report_form_error(e),
        }
    }

    fn report_form_error(&mut self, err: ExpenseError) -> ExpenseResult<()> {
        match err {
            ExpenseError::Validation(msg) => {
                self.form.set_error(msg);
                Ok(())
            }
            e if e.is_not_found() => {
                self.form.set_error(e.to_string());
                self.refresh()
            }
            e => Err(e),
        }
    }

    fn select_expense(&mut self, id: ExpenseId) {
        if let Some(index) = self.expenses.iter().position(|e| e.id == id) {
            self.table_state.select(Some(index));
        }
    }

    /// Ask for confirmation before deleting the selected expense
    pub fn request_delete(&mut self) {
        match self.selected_expense() {
            Some(expense) => self.active_dialog = ActiveDialog::ConfirmDelete(expense.id),
            None => self.set_status("Select an expense to delete."),
        }
    }

    /// Carry out a confirmed delete
    pub fn confirm_delete(&mut self) -> ExpenseResult<()> {
        let ActiveDialog::ConfirmDelete(id) = std::mem::take(&mut self.active_dialog) else {
            return Ok(());
        };

        match ExpenseService::new(self.storage).delete(id) {
            Ok(expense) => self.set_status(format!("Deleted expense #{}", expense.id)),
            Err(e) if e.is_not_found() => {
                warn!(id = %id, "expense vanished before delete");
                self.set_status(e.to_string());
            }
            Err(e) => return Err(e),
        }

        if self.form.mode == FormMode::Edit(id) {
            self.form = ExpenseForm::new(today());
        }
        self.refresh()
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpensePaths;
    use crate::models::{ExpenseCategory, ExpenseDraft, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::open_in_memory(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf()))
                .unwrap();
        (temp_dir, storage, Settings::default())
    }

    fn seed(storage: &Storage, day: u32, cents: i64) -> ExpenseId {
        storage
            .expenses
            .create(&ExpenseDraft::new(
                NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                Money::from_cents(cents),
                ExpenseCategory::Food,
                "seed",
            ))
            .unwrap()
    }

    #[test]
    fn test_new_app_loads_expenses() {
        let (_temp_dir, storage, settings) = setup();
        seed(&storage, 1, 100);
        seed(&storage, 2, 200);

        let app = App::new(&storage, &settings).unwrap();

        assert_eq!(app.expenses.len(), 2);
        assert_eq!(app.table_state.selected(), Some(0));
        assert_eq!(app.monthly_totals.len(), 1);
    }

    #[test]
    fn test_empty_app_has_no_selection() {
        let (_temp_dir, storage, settings) = setup();
        let app = App::new(&storage, &settings).unwrap();
        assert_eq!(app.table_state.selected(), None);
        assert_eq!(app.progress.label, "Monthly Budget Progress: $0 / $800");
    }

    #[test]
    fn test_submit_add_resets_form() {
        let (_temp_dir, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        app.start_add();
        app.form.amount_input.set_value("12.50");
        app.form.description_input.set_value("Lunch");
        app.form.date_input.set_value("2024-01-01");
        app.submit_form().unwrap();

        assert_eq!(storage.expenses.count().unwrap(), 1);
        assert_eq!(app.form.amount_input.value(), "");
        assert_eq!(app.form.description_input.value(), "");
        assert_eq!(app.form.date_input.value(), today().format("%Y-%m-%d").to_string());
        assert_eq!(app.focus, Focus::Table);
        assert!(app.status_message.as_deref().unwrap().starts_with("Added"));
    }

    #[test]
    fn test_invalid_amount_shows_error_without_saving() {
        let (_temp_dir, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        app.start_add();
        app.form.amount_input.set_value("abc");
        app.submit_form().unwrap();

        assert_eq!(storage.expenses.count().unwrap(), 0);
        assert_eq!(
            app.form.error_message.as_deref(),
            Some("Please enter a valid amount.")
        );
        assert_eq!(app.focus, Focus::Form);
    }

    #[test]
    fn test_edit_selected() {
        let (_temp_dir, storage, settings) = setup();
        let id = seed(&storage, 5, 1000);
        let mut app = App::new(&storage, &settings).unwrap();

        app.start_edit();
        assert_eq!(app.form.mode, FormMode::Edit(id));
        assert_eq!(app.form.amount_input.value(), "10.00");

        app.form.amount_input.set_value("15");
        app.submit_form().unwrap();

        assert_eq!(
            storage.expenses.get(id).unwrap().unwrap().amount,
            Money::from_dollars(15)
        );
        assert_eq!(app.form.mode, FormMode::Add);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (_temp_dir, storage, settings) = setup();
        let id = seed(&storage, 5, 1000);
        let mut app = App::new(&storage, &settings).unwrap();

        app.request_delete();
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmDelete(id));
        assert_eq!(storage.expenses.count().unwrap(), 1);

        app.confirm_delete().unwrap();
        assert!(!app.has_dialog());
        assert_eq!(storage.expenses.count().unwrap(), 0);
        assert_eq!(app.table_state.selected(), None);
    }

    #[test]
    fn test_selection_bounds() {
        let (_temp_dir, storage, settings) = setup();
        seed(&storage, 1, 100);
        seed(&storage, 2, 100);
        let mut app = App::new(&storage, &settings).unwrap();

        app.select_prev();
        assert_eq!(app.table_state.selected(), Some(0));
        app.select_next();
        app.select_next();
        assert_eq!(app.table_state.selected(), Some(1));
    }

    #[test]
    fn test_refresh_follows_current_month() {
        let (_temp_dir, storage, settings) = setup();
        storage
            .expenses
            .create(&ExpenseDraft::new(
                today(),
                Money::from_dollars(100),
                ExpenseCategory::Food,
                "today",
            ))
            .unwrap();
        let mut app = App::new(&storage, &settings).unwrap();

        // Left open since last year
        app.period = Period::new(2000, 1).unwrap();
        app.progress = app.tracker.progress(Money::zero());

        app.on_tick().unwrap();
        assert_eq!(app.period, Period::current());
        assert_eq!(app.progress.total, Money::from_dollars(100));

        app.period = Period::new(2000, 1).unwrap();
        app.refresh().unwrap();
        assert_eq!(app.period, Period::current());
    }
}
