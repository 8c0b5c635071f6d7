//! Monthly totals report
//!
//! Groups expenses by calendar month and sums each group. Months iterate in
//! chronological order because `Period` orders by year, then month.

use std::collections::BTreeMap;
use std::io::Write;

use crate::display::report::{format_bar, separator};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money, Period};

/// Message shown in place of an empty chart
pub const NO_DATA_MESSAGE: &str = "No expenses available to plot.";

const BAR_WIDTH: usize = 40;

/// Total spending per month
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyTotals {
    totals: BTreeMap<Period, Money>,
}

impl MonthlyTotals {
    /// Group `expenses` by year-month and sum each group
    pub fn from_expenses<'e, I>(expenses: I) -> Self
    where
        I: IntoIterator<Item = &'e Expense>,
    {
        let mut totals = BTreeMap::new();
        for expense in expenses {
            *totals
                .entry(Period::from_date(expense.date))
                .or_insert_with(Money::zero) += expense.amount;
        }
        Self { totals }
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn get(&self, period: &Period) -> Option<Money> {
        self.totals.get(period).copied()
    }

    /// Months in chronological order
    pub fn iter(&self) -> impl Iterator<Item = (&Period, &Money)> {
        self.totals.iter()
    }

    /// Sum across all months
    pub fn total(&self) -> Money {
        self.totals.values().copied().sum()
    }

    /// Mean monthly total, rounded to the cent; zero when empty
    pub fn average(&self) -> Money {
        if self.totals.is_empty() {
            return Money::zero();
        }
        let months = self.totals.len() as i64;
        let cents = self.total().cents();
        Money::from_cents(cents.saturating_add(months / 2) / months)
    }

    /// Largest monthly total, used to scale bars
    pub fn max(&self) -> Money {
        self.totals.values().copied().max().unwrap_or_default()
    }

    /// Text bar chart, one line per month
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return format!("{}\n", NO_DATA_MESSAGE);
        }

        let mut output = String::new();
        output.push_str("Monthly Expenses\n");
        output.push_str(&separator(62));
        output.push('\n');

        let max = self.max().as_f64();
        for (period, total) in &self.totals {
            output.push_str(&format!(
                "{:<7} {:>12}  {}\n",
                period.to_string(),
                total.to_string(),
                format_bar(total.as_f64(), max, BAR_WIDTH)
            ));
        }

        output.push_str(&separator(62));
        output.push('\n');
        output.push_str(&format!("{:<7} {:>12}\n", "Total", self.total().to_string()));
        output.push_str(&format!("{:<7} {:>12}\n", "Average", self.average().to_string()));
        output
    }

    /// Write `month,total` rows as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| ExpenseError::Export(e.to_string());

        csv_writer
            .write_record(["month", "total"])
            .map_err(export_err)?;
        for (period, total) in &self.totals {
            csv_writer
                .write_record([period.to_string(), total.format_plain()])
                .map_err(export_err)?;
        }

        csv_writer
            .flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))
    }
}
