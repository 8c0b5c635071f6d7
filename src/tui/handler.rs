//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::ExpenseResult;

use super::app::{ActiveDialog, App, Focus};
use super::event::Event;
use super::form::FormField;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> ExpenseResult<()> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Tick => app.on_tick(),
        Event::Key(_) | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> ExpenseResult<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.focus {
        Focus::Table => handle_table_key(app, key),
        Focus::Form => handle_form_key(app, key),
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) -> ExpenseResult<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('a') => app.start_add(),
        KeyCode::Char('e') | KeyCode::Enter => app.start_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('c') => app.toggle_chart(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('r') => {
            app.refresh()?;
            app.set_status("Reloaded");
        }
        _ => {}
    }
    Ok(())
}

fn handle_form_key(app: &mut App, key: KeyEvent) -> ExpenseResult<()> {
    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.submit_form()?,
        KeyCode::Tab => app.form.next_field(),
        KeyCode::BackTab => app.form.prev_field(),
        KeyCode::Left if app.form.focused_field == FormField::Category => {
            app.form.prev_category()
        }
        KeyCode::Right if app.form.focused_field == FormField::Category => {
            app.form.next_category()
        }
        code => {
            if let Some(input) = app.form.focused_input() {
                match code {
                    KeyCode::Char(c) => input.insert(c),
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_start(),
                    KeyCode::End => input.move_end(),
                    _ => return Ok(()),
                }
                app.form.clear_error();
            }
        }
    }
    Ok(())
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) -> ExpenseResult<()> {
    match app.active_dialog {
        ActiveDialog::ConfirmDelete(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete()?,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpensePaths, Settings};
    use crate::models::{ExpenseCategory, Money};
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn setup() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::open_in_memory(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf()))
                .unwrap();
        (temp_dir, storage, Settings::default())
    }

    #[test]
    fn test_add_expense_with_keys() {
        let (_temp_dir, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "42.10");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Power");
        press(&mut app, KeyCode::Enter);

        let stored = storage.expenses.list().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].amount, Money::from_cents(4210));
        assert_eq!(stored[0].category, ExpenseCategory::Rent);
        assert_eq!(stored[0].description, "Power");
    }

    #[test]
    fn test_typing_q_in_form_does_not_quit() {
        let (_temp_dir, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "quick");

        assert!(!app.should_quit);
        assert_eq!(app.form.description_input.value(), "quick");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_delete_cancelled() {
        let (_temp_dir, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "5");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('d'));
        assert!(app.has_dialog());
        press(&mut app, KeyCode::Char('n'));

        assert!(!app.has_dialog());
        assert_eq!(storage.expenses.count().unwrap(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_chart_toggle() {
        let (_temp_dir, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();

        press(&mut app, KeyCode::Char('c'));
        assert!(app.show_chart);
        press(&mut app, KeyCode::Char('c'));
        assert!(!app.show_chart);
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let (_temp_dir, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();
        press(&mut app, KeyCode::Char('a'));

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_tick_picks_up_new_month() {
        let (_temp_dir, storage, settings) = setup();
        let mut app = App::new(&storage, &settings).unwrap();
        app.period = crate::models::Period::new(2000, 1).unwrap();

        handle_event(&mut app, Event::Tick).unwrap();

        assert_eq!(app.period, crate::models::Period::current());
    }
}
