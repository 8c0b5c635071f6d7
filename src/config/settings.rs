//! User settings for the expense tracker
//!
//! Holds the monthly budget the tracker compares spending against, plus
//! display preferences. Stored as JSON next to the data directory.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::Money;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Default monthly budget: $800
pub const DEFAULT_MONTHLY_BUDGET: Money = Money::from_dollars(800);

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Monthly spending ceiling, in cents
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: Money,

    /// Currency symbol used in labels
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// strftime pattern for dates in tables and details; input and storage
    /// stay ISO `YYYY-MM-DD`
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether create/update/delete operations are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_monthly_budget() -> Money {
    DEFAULT_MONTHLY_BUDGET
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_budget: default_monthly_budget(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let settings: Settings = read_json(&settings_path)
            .map_err(|e| ExpenseError::Config(format!("Failed to load settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Check values that would make budget math meaningless
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if !self.monthly_budget.is_positive() {
            return Err(ExpenseError::Config(format!(
                "monthly_budget must be positive, got {}",
                self.monthly_budget
            )));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ExpenseError::Config(format!(
                "date_format is not a valid strftime pattern: {}",
                self.date_format
            )));
        }
        Ok(())
    }
}
