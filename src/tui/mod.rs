//! Terminal User Interface module
//!
//! A single dashboard built on ratatui: entry form, budget gauge, expense
//! table and an optional monthly bar chart.

pub mod app;
pub mod event;
pub mod form;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
