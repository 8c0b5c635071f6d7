//! Expense categories
//!
//! The category set is fixed. Only the display name is written to the
//! database, and reading an unknown name back is a storage error rather than
//! a silent "Other".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum ExpenseCategory {
    #[default]
    Food,
    Transport,
    Rent,
    Utilities,
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub fn all() -> &'static [ExpenseCategory] {
        &[
            ExpenseCategory::Food,
            ExpenseCategory::Transport,
            ExpenseCategory::Rent,
            ExpenseCategory::Utilities,
            ExpenseCategory::Other,
        ]
    }

    /// Display name, also the stored column value
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }

    /// Next category in display order, wrapping around
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous category in display order, wrapping around
    pub fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CategoryParseError::Unknown(wanted.to_string()))
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::Unknown(s) => {
                let names: Vec<_> = ExpenseCategory::all().iter().map(|c| c.name()).collect();
                write!(f, "Unknown category '{}'. Use one of: {}", s, names.join(", "))
            }
        }
    }
}

impl std::error::Error for CategoryParseError {}
