//! Diagnostic logging setup
//!
//! Installs a `tracing-subscriber` fmt layer on stderr. The filter comes from
//! `EXPENSES_LOG` and falls back to warnings from this crate only.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "EXPENSES_LOG";

const DEFAULT_FILTER: &str = "expense_tracker=warn";

static TRACING_INIT: Once = Once::new();

/// Where log lines would collide with other output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Plain command line: log to stderr
    Cli,
    /// Full-screen TUI: stay silent unless explicitly asked for
    Tui,
}

/// Install the global subscriber; later calls are no-ops
pub fn init(target: LogTarget) {
    TRACING_INIT.call_once(|| {
        let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), target);

        // A subscriber installed by an embedding program wins.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

fn build_filter(directives: Option<&str>, target: LogTarget) -> EnvFilter {
    let fallback = match target {
        LogTarget::Cli => DEFAULT_FILTER,
        LogTarget::Tui => "off",
    };

    match directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => EnvFilter::try_new(d).unwrap_or_else(|_| EnvFilter::new(fallback)),
        None => EnvFilter::new(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters() {
        assert_eq!(build_filter(None, LogTarget::Cli).to_string(), DEFAULT_FILTER);
        assert_eq!(build_filter(Some("  "), LogTarget::Tui).to_string(), "off");
    }

    #[test]
    fn test_explicit_filter_wins() {
        let filter = build_filter(Some("expense_tracker=debug"), LogTarget::Tui);
        assert_eq!(filter.to_string(), "expense_tracker=debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(LogTarget::Cli);
        init(LogTarget::Cli);
    }
}
