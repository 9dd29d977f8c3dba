//! Expense list projection and table rendering

use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::models::{Expense, ExpenseId, Money};

use super::report::format_date;

/// One rendered row of the expense list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRow {
    /// 1-based position in insertion order
    pub position: usize,
    pub id: ExpenseId,
    pub name: String,
    pub amount: Money,
    pub category: String,
    pub date: String,
}

/// One row per expense, in insertion order
pub fn expense_rows(expenses: &[Expense], date_format: &str) -> Vec<ExpenseRow> {
    expenses
        .iter()
        .enumerate()
        .map(|(i, e)| ExpenseRow {
            position: i + 1,
            id: e.id,
            name: e.name.clone(),
            amount: e.amount,
            category: e.category.clone(),
            date: format_date(e.date, date_format),
        })
        .collect()
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Render expense rows as a table with a total line
pub fn format_expense_table(rows: &[ExpenseRow], currency_symbol: &str) -> String {
    if rows.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let table_rows = rows.iter().map(|r| TableRow {
        position: r.position,
        id: r.id.short(),
        date: r.date.clone(),
        name: r.name.clone(),
        category: r.category.clone(),
        amount: r.amount.format_with_symbol(currency_symbol),
    });

    let total: Money = rows.iter().map(|r| r.amount).sum();
    format!(
        "{}\nTotal: {} across {} expense(s)\n",
        Table::new(table_rows).with(Style::rounded()),
        total.format_with_symbol(currency_symbol),
        rows.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Vec<Expense> {
        let day = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        vec![
            Expense::on("Coffee", Money::from_cents(450), "Dining", day),
            Expense::on("Rent", Money::from_cents(120000), "Rent", day),
        ]
    }

    #[test]
    fn test_rows_follow_insertion_order() {
        let expenses = sample();
        let rows = expense_rows(&expenses, "%Y-%m-%d");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].id, expenses[0].id);
        assert_eq!(rows[1].name, "Rent");
        assert_eq!(rows[1].date, "2026-10-01");
    }

    #[test]
    fn test_table_rendering() {
        let rows = expense_rows(&sample(), "%d/%m/%Y");
        let text = format_expense_table(&rows, "$");

        assert!(text.contains("Coffee"));
        assert!(text.contains("$1200.00"));
        assert!(text.contains("01/10/2026"));
        assert!(text.contains("Total: $1204.50 across 2 expense(s)"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "$"), "No expenses recorded.\n");
    }
}
