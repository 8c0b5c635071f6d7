//! Expense repository backed by SQLite
//!
//! The repository owns the connection and is the only code that issues SQL.
//! Update and delete of a missing id are silent no-ops here; they report
//! whether a row was touched so callers can decide what to surface.

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseCategory, ExpenseDraft, ExpenseId, Money, Period};

const SELECT_COLUMNS: &str = "SELECT id, date, amount, category, description FROM expenses";

/// Column values exactly as SQLite returns them
struct RawRow {
    id: i64,
    date: String,
    amount: f64,
    category: String,
    description: Option<String>,
}

impl RawRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            amount: row.get(2)?,
            category: row.get(3)?,
            description: row.get(4)?,
        })
    }

    fn into_expense(self) -> ExpenseResult<Expense> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|_| {
            ExpenseError::Storage(format!(
                "Expense {} has an unreadable date '{}'",
                self.id, self.date
            ))
        })?;
        let category: ExpenseCategory = self.category.parse().map_err(|_| {
            ExpenseError::Storage(format!(
                "Expense {} has an unknown category '{}'",
                self.id, self.category
            ))
        })?;

        Ok(Expense {
            id: ExpenseId::new(self.id),
            date,
            amount: Money::from_f64(self.amount),
            category,
            description: self.description.unwrap_or_default(),
        })
    }
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    conn: Connection,
}

impl ExpenseRepository {
    /// Wrap an open connection whose schema is already applied
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Insert a new expense and return its freshly assigned id
    pub fn create(&self, draft: &ExpenseDraft) -> ExpenseResult<ExpenseId> {
        self.conn.execute(
            "INSERT INTO expenses (date, amount, category, description) VALUES (?1, ?2, ?3, ?4)",
            params![
                draft.date.format("%Y-%m-%d").to_string(),
                draft.amount.as_f64(),
                draft.category.name(),
                draft.description,
            ],
        )?;

        let id = ExpenseId::new(self.conn.last_insert_rowid());
        debug!(%id, "inserted expense");
        Ok(id)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE id = ?1", SELECT_COLUMNS))?;
        let mut rows = stmt.query_map(params![id.get()], RawRow::from_row)?;
        let first = rows.next().transpose()?;

        first.map(RawRow::into_expense).transpose()
    }

    /// All expenses, newest date first; same-day expenses newest id first
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.query_expenses(
            &format!("{} ORDER BY date DESC, id DESC", SELECT_COLUMNS),
            params![],
        )
    }

    /// Expenses dated within `period`, in the same order as `list`
    pub fn list_for_period(&self, period: &Period) -> ExpenseResult<Vec<Expense>> {
        self.query_expenses(
            &format!(
                "{} WHERE date LIKE ?1 ORDER BY date DESC, id DESC",
                SELECT_COLUMNS
            ),
            params![prefix_pattern(period)],
        )
    }

    /// Overwrite every mutable field of `id`
    ///
    /// Returns `false` without changing anything if `id` does not exist.
    pub fn update(&self, id: ExpenseId, draft: &ExpenseDraft) -> ExpenseResult<bool> {
        let changed = self.conn.execute(
            "UPDATE expenses SET date = ?1, amount = ?2, category = ?3, description = ?4 WHERE id = ?5",
            params![
                draft.date.format("%Y-%m-%d").to_string(),
                draft.amount.as_f64(),
                draft.category.name(),
                draft.description,
                id.get(),
            ],
        )?;
        debug!(%id, changed, "updated expense");
        Ok(changed > 0)
    }

    /// Remove `id`
    ///
    /// Returns `false` if `id` does not exist.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![id.get()])?;
        debug!(%id, changed, "deleted expense");
        Ok(changed > 0)
    }

    /// Sum of amounts dated within `period`; zero when nothing matches
    pub fn sum_for_period(&self, period: &Period) -> ExpenseResult<Money> {
        let total: f64 = self.conn.query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM expenses WHERE date LIKE ?1",
            params![prefix_pattern(period)],
            |row| row.get(0),
        )?;
        Ok(Money::from_f64(total))
    }

    /// Number of stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn query_expenses(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> ExpenseResult<Vec<Expense>> {
        let mut stmt = self.conn.prepare(sql)?;
        let raw_rows = stmt
            .query_map(params, RawRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        raw_rows.into_iter().map(RawRow::into_expense).collect()
    }
}

/// LIKE pattern matching every ISO date in `period`
fn prefix_pattern(period: &Period) -> String {
    format!("{}%", period.prefix())
}
