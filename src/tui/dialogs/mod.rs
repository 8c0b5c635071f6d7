//! Modal dialogs drawn over the dashboard

pub mod confirm;
