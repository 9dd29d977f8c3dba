//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, AmountMode, App, Tab};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    handle_normal_key(app, key)
}

/// Handle keys when no dialog is open
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Esc => app.notifications.dismiss(),

        // Tabs
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_tab(),
        KeyCode::Char(c @ '1'..='5') => {
            app.switch_to_index(c as usize - '1' as usize);
        }

        // Selection
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        // Actions
        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('d') | KeyCode::Delete => match app.active_tab {
            Tab::Expenses => app.request_delete_expense(),
            Tab::Budgets => app.request_clear_budget(),
            _ => {}
        },
        KeyCode::Char('b') => app.open_dialog(ActiveDialog::Amount(AmountMode::SetBalance)),
        KeyCode::Char('p') => app.open_dialog(ActiveDialog::Amount(AmountMode::Deposit)),
        KeyCode::Char('e') if app.tabs().contains(&Tab::Budgets) => {
            app.open_dialog(ActiveDialog::Budget)
        }
        KeyCode::Char('x') => app.export(),
        KeyCode::Char('r') => app.refresh(),

        _ => {}
    }
    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog.clone() {
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::Confirm(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::AddExpense => handle_expense_form_key(app, key),
        ActiveDialog::Amount(mode) => handle_amount_form_key(app, key, mode),
        ActiveDialog::Budget => handle_budget_form_key(app, key),
        ActiveDialog::None => {}
    }
    Ok(())
}

fn handle_expense_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => app.submit_expense(),
        KeyCode::Tab | KeyCode::Down => app.expense_field = app.expense_field.next(),
        KeyCode::BackTab | KeyCode::Up => app.expense_field = app.expense_field.prev(),
        KeyCode::Backspace => {
            app.expense_form.backspace(app.expense_field);
            app.form_error = None;
        }
        KeyCode::Char(c) => {
            app.expense_form.input(app.expense_field, c.encode_utf8(&mut [0; 4]));
            app.form_error = None;
        }
        _ => {}
    }
}

fn handle_amount_form_key(app: &mut App, key: KeyEvent, mode: AmountMode) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => app.submit_amount(mode),
        KeyCode::Backspace => {
            app.amount_form.backspace();
            app.form_error = None;
        }
        KeyCode::Char(c) => {
            app.amount_form.input(c.encode_utf8(&mut [0; 4]));
            app.form_error = None;
        }
        _ => {}
    }
}

fn handle_budget_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => app.submit_budget(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.budget_field = app.budget_field.next()
        }
        KeyCode::Backspace => {
            app.budget_form.backspace(app.budget_field);
            app.form_error = None;
        }
        KeyCode::Char(c) => {
            app.budget_form.input(app.budget_field, c.encode_utf8(&mut [0; 4]));
            app.form_error = None;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PocketPaths;
    use crate::config::settings::Settings;
    use crate::models::Money;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, PocketPaths, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();
        (temp_dir, paths, storage)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_expense_by_keyboard() {
        let (_temp_dir, paths, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Coffee");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "$4.5x0");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "dining");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        let expenses = storage.expenses.get_all().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].amount, Money::from_cents(450));
        assert_eq!(expenses[0].category, "Dining");
    }

    #[test]
    fn test_letters_in_dialog_do_not_trigger_actions() {
        let (_temp_dir, paths, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "quiz");

        assert!(!app.should_quit);
        assert_eq!(app.expense_form.name, "quiz");

        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let (_temp_dir, paths, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_tab, Tab::Chart);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.active_tab, Tab::History);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, Tab::Expenses);
    }

    #[test]
    fn test_deposit_with_confirmed_delete() {
        let (_temp_dir, paths, storage) = create_test_storage();
        let mut settings = Settings::default();
        settings.balance_policy = crate::config::BalancePolicy::Coupled;
        let mut app = App::new(&storage, &settings, &paths);

        press(&mut app, KeyCode::Char('p'));
        type_text(&mut app, "500");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Lunch");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "50");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Dining");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.dashboard.balance, Money::from_cents(45000));

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(storage.expenses.count().unwrap(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(storage.expenses.count().unwrap(), 0);
        assert_eq!(app.dashboard.balance, Money::from_cents(50000));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let (_temp_dir, paths, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(key)).unwrap();
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
