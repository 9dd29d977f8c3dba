//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Domain data is never cached beyond the `Dashboard` projection, which is
//! rebuilt from storage after every mutation and on every tab switch.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::config::paths::PocketPaths;
use crate::config::settings::Settings;
use crate::display::Dashboard;
use crate::error::PocketError;
use crate::export::{default_filename, export_to_file, ExportOptions};
use crate::forms::{AmountForm, BudgetField, BudgetForm, ExpenseField, ExpenseForm};
use crate::models::{ExpenseId, LedgerState};
use crate::services::{BalanceService, BudgetService, ExpenseService};
use crate::storage::Storage;

use super::widgets::{Notification, NotificationQueue};

/// Top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Expenses,
    Chart,
    Budgets,
    Analytics,
    History,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Expenses,
        Tab::Chart,
        Tab::Budgets,
        Tab::Analytics,
        Tab::History,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Expenses => "Expenses",
            Tab::Chart => "Chart",
            Tab::Budgets => "Budgets",
            Tab::Analytics => "Analytics",
            Tab::History => "History",
        }
    }
}

/// What the amount dialog does on submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountMode {
    SetBalance,
    Deposit,
}

impl AmountMode {
    pub fn title(&self) -> &'static str {
        match self {
            AmountMode::SetBalance => "Set Balance",
            AmountMode::Deposit => "Deposit",
        }
    }
}

/// An action waiting for a yes/no answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteExpense { id: ExpenseId, name: String },
    ClearBudget(String),
}

impl ConfirmAction {
    pub fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteExpense { name, .. } => format!("Delete expense '{}'?", name),
            ConfirmAction::ClearBudget(category) => format!("Clear the budget for {}?", category),
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    Amount(AmountMode),
    Budget,
    Confirm(ConfirmAction),
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a PocketPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    pub active_tab: Tab,

    pub active_dialog: ActiveDialog,

    /// Projections of the current ledger state
    pub dashboard: Dashboard,

    /// Selected row on the Expenses tab
    pub selected_expense: usize,

    /// Selected bar on the Budgets tab
    pub selected_budget: usize,

    /// Selected month on the History tab
    pub selected_month: usize,

    pub expense_form: ExpenseForm,
    pub expense_field: ExpenseField,
    pub amount_form: AmountForm,
    pub budget_form: BudgetForm,
    pub budget_field: BudgetField,

    /// Inline error shown inside the open form
    pub form_error: Option<String>,

    pub notifications: NotificationQueue,

    /// Directory exports are written to
    pub export_dir: PathBuf,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings, paths: &'a PocketPaths) -> Self {
        let mut app = Self {
            storage,
            settings,
            paths,
            should_quit: false,
            active_tab: Tab::default(),
            active_dialog: ActiveDialog::default(),
            dashboard: Dashboard::build(&LedgerState::default(), settings, today()),
            selected_expense: 0,
            selected_budget: 0,
            selected_month: 0,
            expense_form: ExpenseForm::new(),
            expense_field: ExpenseField::default(),
            amount_form: AmountForm::new(),
            budget_form: BudgetForm::new(),
            budget_field: BudgetField::default(),
            form_error: None,
            notifications: NotificationQueue::new(),
            export_dir: PathBuf::from("."),
        };
        app.refresh();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Rebuild the dashboard from storage
    pub fn refresh(&mut self) {
        match self.storage.snapshot() {
            Ok(state) => {
                self.dashboard = Dashboard::build(&state, self.settings, today());
                self.clamp_selection();
            }
            Err(e) => {
                warn!(error = %e, "failed to refresh dashboard");
                self.notify(Notification::error(e.to_string()));
            }
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Tabs enabled by the panel settings, in display order
    pub fn tabs(&self) -> Vec<Tab> {
        let panels = &self.settings.panels;
        Tab::ALL
            .into_iter()
            .filter(|tab| match tab {
                Tab::Expenses | Tab::Chart => true,
                Tab::Budgets => panels.budget_bars,
                Tab::Analytics => panels.analytics,
                Tab::History => panels.history,
            })
            .collect()
    }

    /// Activate a tab; disabled tabs are ignored
    pub fn switch_tab(&mut self, tab: Tab) {
        if !self.tabs().contains(&tab) {
            debug!(?tab, "ignoring switch to disabled tab");
            return;
        }
        self.active_tab = tab;
        self.refresh();
    }

    /// Activate the tab at a 0-based position in the visible tab list
    pub fn switch_to_index(&mut self, index: usize) {
        if let Some(tab) = self.tabs().get(index).copied() {
            self.switch_tab(tab);
        }
    }

    pub fn next_tab(&mut self) {
        self.cycle_tab(1);
    }

    pub fn prev_tab(&mut self) {
        self.cycle_tab(-1);
    }

    fn cycle_tab(&mut self, step: isize) {
        let tabs = self.tabs();
        let current = tabs.iter().position(|t| *t == self.active_tab).unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(tabs.len() as isize) as usize;
        self.switch_tab(tabs[next]);
    }

    /// Open a dialog, preparing its form
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.form_error = None;
        match &dialog {
            ActiveDialog::AddExpense => {
                self.expense_form.reset();
                self.expense_field = ExpenseField::Name;
            }
            ActiveDialog::Amount(_) => self.amount_form.reset(),
            ActiveDialog::Budget => {
                self.budget_form.reset();
                self.budget_field = BudgetField::Category;
                if self.active_tab == Tab::Budgets {
                    if let Some(bar) = self.dashboard.bars.get(self.selected_budget) {
                        self.budget_form.category = bar.category.clone();
                        self.budget_field = BudgetField::Limit;
                    }
                }
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.form_error = None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Move selection up in the current tab
    pub fn move_up(&mut self) {
        if let Some(index) = self.selection_mut() {
            *index = index.saturating_sub(1);
        }
    }

    /// Move selection down in the current tab
    pub fn move_down(&mut self) {
        let max = self.selection_len();
        if let Some(index) = self.selection_mut() {
            if *index + 1 < max {
                *index += 1;
            }
        }
    }

    fn selection_mut(&mut self) -> Option<&mut usize> {
        match self.active_tab {
            Tab::Expenses => Some(&mut self.selected_expense),
            Tab::Budgets => Some(&mut self.selected_budget),
            Tab::History => Some(&mut self.selected_month),
            Tab::Chart | Tab::Analytics => None,
        }
    }

    fn selection_len(&self) -> usize {
        match self.active_tab {
            Tab::Expenses => self.dashboard.rows.len(),
            Tab::Budgets => self.dashboard.bars.len(),
            Tab::History => self.dashboard.history.len(),
            Tab::Chart | Tab::Analytics => 0,
        }
    }

    fn clamp_selection(&mut self) {
        let clamp = |index: usize, len: usize| index.min(len.saturating_sub(1));
        self.selected_expense = clamp(self.selected_expense, self.dashboard.rows.len());
        self.selected_budget = clamp(self.selected_budget, self.dashboard.bars.len());
        self.selected_month = clamp(self.selected_month, self.dashboard.history.len());
    }

    /// Validate the expense form and record the expense
    pub fn submit_expense(&mut self) {
        let input = match self.expense_form.validate() {
            Ok(input) => input,
            Err(e) => {
                self.form_error = Some(e.to_string());
                return;
            }
        };

        let service = ExpenseService::new(self.storage, self.settings.balance_policy);
        match service.add(input) {
            Ok(expense) => {
                self.expense_form.reset();
                self.close_dialog();
                self.refresh();
                self.selected_expense = self.dashboard.rows.len().saturating_sub(1);
                self.notify(Notification::success(format!(
                    "Added {} ({})",
                    expense.name,
                    expense.amount.format_with_symbol(&self.settings.currency_symbol)
                )));
            }
            Err(e) => self.form_error = Some(e.to_string()),
        }
    }

    /// Validate the amount form and apply it to the balance
    pub fn submit_amount(&mut self, mode: AmountMode) {
        let amount = match self.amount_form.validate() {
            Ok(amount) => amount,
            Err(e) => {
                self.form_error = Some(e.to_string());
                return;
            }
        };

        let service = BalanceService::new(self.storage);
        let result = match mode {
            AmountMode::SetBalance => service.set(amount),
            AmountMode::Deposit => service.deposit(amount),
        };
        match result {
            Ok(balance) => {
                self.amount_form.reset();
                self.close_dialog();
                self.refresh();
                self.notify(Notification::success(format!(
                    "Balance is now {}",
                    balance.format_with_symbol(&self.settings.currency_symbol)
                )));
            }
            Err(e) => self.form_error = Some(e.to_string()),
        }
    }

    /// Validate the budget form and store the limit
    pub fn submit_budget(&mut self) {
        let (category, limit) = match self.budget_form.validate() {
            Ok(values) => values,
            Err(e) => {
                self.form_error = Some(e.to_string());
                return;
            }
        };

        let service = BudgetService::new(self.storage);
        match service.set_limit(&category, limit) {
            Ok(stored) => {
                self.budget_form.reset();
                self.close_dialog();
                self.refresh();
                let message = match stored {
                    Some(limit) => format!(
                        "Budget set: {}",
                        limit.format_with_symbol(&self.settings.currency_symbol)
                    ),
                    None => "Budget cleared".to_string(),
                };
                self.notify(Notification::success(message));
            }
            Err(e) => self.form_error = Some(e.to_string()),
        }
    }

    /// Ask before deleting the selected expense
    pub fn request_delete_expense(&mut self) {
        let Some(row) = self.dashboard.rows.get(self.selected_expense) else {
            return;
        };
        let action = ConfirmAction::DeleteExpense {
            id: row.id,
            name: row.name.clone(),
        };
        self.open_dialog(ActiveDialog::Confirm(action));
    }

    /// Ask before clearing the selected budget
    pub fn request_clear_budget(&mut self) {
        let Some(bar) = self.dashboard.bars.get(self.selected_budget) else {
            return;
        };
        let action = ConfirmAction::ClearBudget(bar.category.clone());
        self.open_dialog(ActiveDialog::Confirm(action));
    }

    /// Run the pending confirm action
    pub fn confirm(&mut self) {
        let ActiveDialog::Confirm(action) = std::mem::take(&mut self.active_dialog) else {
            return;
        };

        let result = match action {
            ConfirmAction::DeleteExpense { id, .. } => {
                ExpenseService::new(self.storage, self.settings.balance_policy)
                    .remove(id)
                    .map(|removed| match removed {
                        Some(expense) => format!("Deleted {}", expense.name),
                        None => "Expense was already removed".to_string(),
                    })
            }
            ConfirmAction::ClearBudget(category) => BudgetService::new(self.storage)
                .clear(&category)
                .map(|_| format!("Cleared budget for {}", category)),
        };

        self.close_dialog();
        self.refresh();
        match result {
            Ok(message) => self.notify(Notification::success(message)),
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }

    /// Export using the configured defaults
    pub fn export(&mut self) {
        let options = ExportOptions::from(&self.settings.export);
        let path = self
            .export_dir
            .join(default_filename(options.format, today()));

        let result = self.storage.snapshot().and_then(|state| {
            export_to_file(&state, &options, &self.settings.currency_symbol, &path)
        });

        match result {
            Ok(written) => {
                self.notify(Notification::success(format!("Exported to {}", written.display())))
            }
            Err(PocketError::Export(message)) => self.notify(Notification::warning(message)),
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, PocketPaths, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();
        (temp_dir, paths, storage)
    }

    fn fill_expense(app: &mut App, name: &str, amount: &str, category: &str) {
        app.open_dialog(ActiveDialog::AddExpense);
        app.expense_form.input(ExpenseField::Name, name);
        app.expense_form.input(ExpenseField::Amount, amount);
        app.expense_form.input(ExpenseField::Category, category);
        app.submit_expense();
    }

    #[test]
    fn test_tabs_follow_panel_settings() {
        let (_temp_dir, paths, storage) = create_test_storage();
        let mut settings = Settings::default();
        settings.panels.analytics = false;
        settings.panels.history = false;
        let mut app = App::new(&storage, &settings, &paths);

        assert_eq!(app.tabs(), vec![Tab::Expenses, Tab::Chart, Tab::Budgets]);

        app.switch_tab(Tab::History);
        assert_eq!(app.active_tab, Tab::Expenses);

        app.prev_tab();
        assert_eq!(app.active_tab, Tab::Budgets);
        app.next_tab();
        assert_eq!(app.active_tab, Tab::Expenses);
    }

    #[test]
    fn test_switch_tab_leaves_data_alone() {
        let (_temp_dir, paths, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);
        fill_expense(&mut app, "Coffee", "4.50", "Dining");
        let before = storage.snapshot().unwrap();

        for tab in Tab::ALL {
            app.switch_tab(tab);
        }

        assert_eq!(storage.snapshot().unwrap(), before);
    }

    #[test]
    fn test_submit_expense_refreshes_dashboard() {
        let (_temp_dir, paths, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        fill_expense(&mut app, "Coffee", "4.50", "Dining");
        fill_expense(&mut app, "Rent", "1200", "Rent");

        assert!(!app.has_dialog());
        assert_eq!(app.dashboard.rows.len(), 2);
        assert_eq!(app.dashboard.total_spent, Money::from_cents(120450));
        assert_eq!(app.selected_expense, 1);
        assert!(app.expense_form.name.is_empty());
    }

    #[test]
    fn test_invalid_form_stays_open() {
        let (_temp_dir, paths, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        fill_expense(&mut app, "Coffee", "", "Dining");

        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        assert!(app.form_error.is_some());
        assert_eq!(app.expense_form.name, "Coffee");
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (_temp_dir, paths, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);
        fill_expense(&mut app, "Coffee", "4.50", "Dining");

        app.request_delete_expense();
        assert!(matches!(app.active_dialog, ActiveDialog::Confirm(_)));
        assert_eq!(storage.expenses.count().unwrap(), 1);

        app.confirm();
        assert!(!app.has_dialog());
        assert_eq!(storage.expenses.count().unwrap(), 0);
        assert!(app.dashboard.rows.is_empty());
    }

    #[test]
    fn test_deposit_and_budget() {
        let (_temp_dir, paths, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);

        app.open_dialog(ActiveDialog::Amount(AmountMode::Deposit));
        app.amount_form.input("500");
        app.submit_amount(AmountMode::Deposit);
        assert_eq!(app.dashboard.balance, Money::from_cents(50000));

        app.open_dialog(ActiveDialog::Budget);
        app.budget_form.input(BudgetField::Category, "Dining");
        app.budget_form.input(BudgetField::Limit, "100");
        app.submit_budget();
        assert_eq!(app.dashboard.bars.len(), 1);

        app.switch_tab(Tab::Budgets);
        app.open_dialog(ActiveDialog::Budget);
        assert_eq!(app.budget_form.category, "Dining");
        assert_eq!(app.budget_field, BudgetField::Limit);
    }

    #[test]
    fn test_export_empty_is_a_notice() {
        let (temp_dir, paths, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);
        app.export_dir = temp_dir.path().join("out");
        std::fs::create_dir_all(&app.export_dir).unwrap();

        app.export();

        let notice = app.notifications.current().unwrap();
        assert_eq!(notice.message, "No expenses to export");
        assert_eq!(std::fs::read_dir(&app.export_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_export_writes_file() {
        let (temp_dir, paths, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings, &paths);
        app.export_dir = temp_dir.path().to_path_buf();
        fill_expense(&mut app, "Coffee", "4.50", "Dining");

        app.export();

        let expected = temp_dir.path().join(default_filename(settings.export.format, today()));
        assert!(expected.exists());
    }
}
