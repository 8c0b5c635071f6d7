//! Calendar month periods
//!
//! A period is a year-month such as "2024-05". It is the grouping key for
//! monthly totals and, through its `YYYY-MM` prefix, the filter for sums.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar year-month
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period, rejecting months outside 1..=12
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The period containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// The `YYYY-MM` prefix shared by every ISO date in this period
    pub fn prefix(&self) -> String {
        self.to_string()
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Short label for chart axes, e.g. "Jan 24"
    pub fn short_label(&self) -> String {
        self.start_date().format("%b %y").to_string()
    }

    /// Parse a period string in `YYYY-MM` form
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(PeriodParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

impl TryFrom<String> for Period {
    type Error = PeriodParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Period::parse(&value)
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => {
                write!(f, "Invalid period format: {} (expected YYYY-MM)", s)
            }
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_start_date_and_label() {
        let period = Period::new(2024, 2).unwrap();
        assert_eq!(period.start_date(), date(2024, 2, 1));
        assert_eq!(period.short_label(), "Feb 24");
        assert_eq!(Period::from_date(date(2024, 2, 29)), period);
    }

    #[test]
    fn test_prefix_matches_iso_dates() {
        let may = Period::new(2024, 5).unwrap();
        assert_eq!(may.prefix(), "2024-05");
        assert!(date(2024, 5, 9).format("%Y-%m-%d").to_string().starts_with(&may.prefix()));
        assert!(!date(2024, 6, 1).format("%Y-%m-%d").to_string().starts_with(&may.prefix()));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Period::parse("2024-05").unwrap(), Period::new(2024, 5).unwrap());
        assert_eq!(Period::parse("2024-5").unwrap(), Period::new(2024, 5).unwrap());
        assert_eq!(Period::parse("2024-13"), Err(PeriodParseError::InvalidMonth(13)));
        assert!(Period::parse("May 2024").is_err());
        assert!(Period::parse("24-05").is_err());
    }

    #[test]
    fn test_chronological_order() {
        let mut periods = vec![
            Period::new(2024, 2).unwrap(),
            Period::new(2023, 12).unwrap(),
            Period::new(2024, 1).unwrap(),
        ];
        periods.sort();
        let labels: Vec<_> = periods.iter().map(|p| p.to_string()).collect();
        assert_eq!(labels, vec!["2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn test_serde_as_string() {
        let period = Period::new(2024, 1).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, "\"2024-01\"");
        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, period);
    }
}
