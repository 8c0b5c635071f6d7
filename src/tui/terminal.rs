//! Terminal setup and teardown
//!
//! Raw mode and the alternate screen are restored on normal exit, on error,
//! and from the panic hook.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::Storage;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

fn tui_err(e: io::Error) -> ExpenseError {
    ExpenseError::Tui(e.to_string())
}

/// Enter raw mode and the alternate screen
pub fn init_terminal() -> ExpenseResult<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(tui_err)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(tui_err)?;

    Terminal::new(CrosstermBackend::new(stdout)).map_err(tui_err)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> ExpenseResult<()> {
    disable_raw_mode().map_err(tui_err)?;
    execute!(io::stdout(), LeaveAlternateScreen).map_err(tui_err)?;
    Ok(())
}

/// Run the dashboard until the user quits
pub fn run_tui(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let mut app = App::new(storage, settings)?;
    let mut terminal = init_terminal()?;

    let result = event_loop(&mut terminal, &mut app);
    let restored = restore_terminal();

    result.and(restored)
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> ExpenseResult<()> {
    info!("dashboard started");
    let events = EventHandler::default();

    while !app.should_quit {
        terminal
            .draw(|frame| super::views::render(frame, app))
            .map_err(tui_err)?;

        let event = events
            .next()
            .map_err(|_| ExpenseError::Tui("terminal event stream closed".into()))?;
        handle_event(app, event)?;
    }

    Ok(())
}
