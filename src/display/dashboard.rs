//! Everything the TUI draws, computed in one pass from a ledger snapshot

use chrono::NaiveDate;

use crate::config::{BalancePolicy, Settings};
use crate::models::{LedgerState, Money};
use crate::reports::{
    monthly_history, over_budget_categories, remaining_balance, total_spent, AnalyticsSummary,
    MonthSummary,
};

use super::budget::{budget_bars, BudgetBar};
use super::chart::{chart_data, ChartData};
use super::expense::{expense_rows, ExpenseRow};

/// Full set of projections for one frame of state
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub rows: Vec<ExpenseRow>,
    pub chart: ChartData,
    pub bars: Vec<BudgetBar>,
    pub balance: Money,
    pub total_spent: Money,
    pub remaining: Money,
    pub policy: BalancePolicy,
    pub over_budget: Vec<String>,
    pub analytics: AnalyticsSummary,
    pub history: Vec<MonthSummary>,
}

impl Dashboard {
    pub fn build(state: &LedgerState, settings: &Settings, today: NaiveDate) -> Self {
        let expenses = &state.expenses;
        Self {
            rows: expense_rows(expenses, &settings.date_format),
            chart: chart_data(expenses),
            bars: budget_bars(expenses, &state.budgets, &settings.currency_symbol),
            balance: state.balance,
            total_spent: total_spent(expenses),
            remaining: remaining_balance(state.balance, expenses, settings.balance_policy),
            policy: settings.balance_policy,
            over_budget: over_budget_categories(expenses, &state.budgets),
            analytics: AnalyticsSummary::generate(expenses, today),
            history: monthly_history(expenses),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    #[test]
    fn test_build_from_state() {
        let mut state = LedgerState::default();
        state.expenses = vec![
            Expense::new("Coffee", Money::from_cents(450), "Dining"),
            Expense::new("Rent", Money::from_cents(120000), "Rent"),
        ];
        state.budgets.insert("Dining".into(), Money::from_cents(400));
        state.balance = Money::from_cents(200000);

        let today = chrono::Local::now().date_naive();
        let dashboard = Dashboard::build(&state, &Settings::default(), today);

        assert_eq!(dashboard.rows.len(), 2);
        assert_eq!(dashboard.chart.labels, vec!["Dining", "Rent"]);
        assert_eq!(dashboard.total_spent, Money::from_cents(120450));
        assert_eq!(dashboard.remaining, Money::from_cents(79550));
        assert_eq!(dashboard.over_budget, vec!["Dining"]);
        assert_eq!(dashboard.history.len(), 1);
    }

    #[test]
    fn test_empty_state() {
        let dashboard = Dashboard::build(
            &LedgerState::default(),
            &Settings::default(),
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        );
        assert!(dashboard.rows.is_empty());
        assert!(dashboard.chart.is_empty());
        assert!(dashboard.bars.is_empty());
        assert_eq!(dashboard.remaining, Money::zero());
    }
}
