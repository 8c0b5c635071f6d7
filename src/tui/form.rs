//! Expense entry form state
//!
//! The form is always shown on the dashboard; it holds the text the user is
//! typing and whether saving it adds a new expense or overwrites one.

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseCategory, ExpenseDraft, ExpenseId};
use crate::services::ExpenseInput;

use super::widgets::TextInput;

/// Which field is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Date,
    Amount,
    Category,
    Description,
}

impl FormField {
    /// Next field (Tab)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Date,
        }
    }

    /// Previous field (Shift+Tab)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Description,
            Self::Amount => Self::Date,
            Self::Category => Self::Amount,
            Self::Description => Self::Category,
        }
    }
}

/// What saving the form does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Edit(ExpenseId),
}

/// State of the entry form
#[derive(Debug, Clone)]
pub struct ExpenseForm {
    pub mode: FormMode,
    pub focused_field: FormField,
    pub date_input: TextInput,
    pub amount_input: TextInput,
    pub category: ExpenseCategory,
    pub description_input: TextInput,
    pub error_message: Option<String>,
}

impl ExpenseForm {
    /// Empty add form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        let mut form = Self {
            mode: FormMode::Add,
            focused_field: FormField::Amount,
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            category: ExpenseCategory::default(),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("Optional note"),
            error_message: None,
        };
        form.update_focus(false);
        form
    }

    /// Form prefilled from an existing expense, saving overwrites it
    pub fn from_expense(expense: &Expense) -> Self {
        let mut form = Self::new(expense.date);
        form.mode = FormMode::Edit(expense.id);
        form.amount_input.set_value(expense.amount.format_plain());
        form.category = expense.category;
        form.description_input.set_value(expense.description.as_str());
        form
    }

    /// Back to an empty add form, keeping the chosen category
    pub fn reset(&mut self, today: NaiveDate) {
        let category = self.category;
        *self = Self::new(today);
        self.category = category;
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus(true);
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus(true);
    }

    /// Mark the focused input; `active` is false while the table has focus
    pub fn update_focus(&mut self, active: bool) {
        self.date_input.focused = active && self.focused_field == FormField::Date;
        self.amount_input.focused = active && self.focused_field == FormField::Amount;
        self.description_input.focused = active && self.focused_field == FormField::Description;
    }

    /// The text input under focus, `None` on the category selector
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Date => Some(&mut self.date_input),
            FormField::Amount => Some(&mut self.amount_input),
            FormField::Category => None,
            FormField::Description => Some(&mut self.description_input),
        }
    }

    pub fn next_category(&mut self) {
        self.category = self.category.next();
    }

    pub fn prev_category(&mut self) {
        self.category = self.category.prev();
    }

    /// Validate the typed text into a draft
    pub fn to_draft(&self, today: NaiveDate) -> ExpenseResult<ExpenseDraft> {
        ExpenseInput {
            amount: self.amount_input.value().to_string(),
            date: Some(self.date_input.value().to_string()),
            category: Some(self.category.name().to_string()),
            description: Some(self.description_input.value().to_string()),
        }
        .into_draft(today)
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, Money};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_field_cycle() {
        let mut field = FormField::Date;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, FormField::Date);
        assert_eq!(FormField::Date.prev(), FormField::Description);
    }

    #[test]
    fn test_new_form_defaults() {
        let form = ExpenseForm::new(today());
        assert_eq!(form.mode, FormMode::Add);
        assert_eq!(form.date_input.value(), "2024-06-15");
        assert_eq!(form.amount_input.value(), "");
        assert_eq!(form.category, ExpenseCategory::Food);
    }

    #[test]
    fn test_prefilled_from_expense() {
        let expense = Expense::from_draft(
            ExpenseId::new(4),
            ExpenseDraft::new(
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                Money::from_cents(1250),
                ExpenseCategory::Utilities,
                "Gas bill",
            ),
        );

        let form = ExpenseForm::from_expense(&expense);

        assert_eq!(form.mode, FormMode::Edit(ExpenseId::new(4)));
        assert_eq!(form.date_input.value(), "2024-02-01");
        assert_eq!(form.amount_input.value(), "12.50");
        assert_eq!(form.category, ExpenseCategory::Utilities);
        assert_eq!(form.description_input.value(), "Gas bill");
        assert_eq!(form.to_draft(today()).unwrap(), expense.to_draft());
    }

    #[test]
    fn test_reset_keeps_category() {
        let mut form = ExpenseForm::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        form.amount_input.set_value("9");
        form.next_category();

        form.reset(today());

        assert_eq!(form.amount_input.value(), "");
        assert_eq!(form.date_input.value(), "2024-06-15");
        assert_eq!(form.category, ExpenseCategory::Transport);
    }

    #[test]
    fn test_invalid_amount() {
        let mut form = ExpenseForm::new(today());
        form.amount_input.set_value("abc");
        assert!(form.to_draft(today()).unwrap_err().is_validation());
    }

    #[test]
    fn test_category_field_has_no_text_input() {
        let mut form = ExpenseForm::new(today());
        form.focused_field = FormField::Category;
        assert!(form.focused_input().is_none());
    }
}
