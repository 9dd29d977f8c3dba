//! Analytics and history text rendering

use crate::models::Money;
use crate::reports::{AnalyticsSummary, MonthSummary};

use super::report::{format_bar, format_date, separator, truncate};

/// Text for `pocket analytics`
pub fn format_analytics(summary: &AnalyticsSummary, currency_symbol: &str) -> String {
    let money = |m: Money| m.format_with_symbol(currency_symbol);

    let top = match &summary.top_category {
        Some((category, total)) => format!("{} ({})", category, money(*total)),
        None => "-".to_string(),
    };

    let mut output = String::new();
    output.push_str(&format!("Analytics as of {}\n", summary.as_of.format("%Y-%m-%d")));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!("Expenses:            {}\n", summary.expense_count));
    output.push_str(&format!("Total spent:         {}\n", money(summary.total_spent)));
    output.push_str(&format!("Top category:        {}\n", top));
    output.push_str(&format!("Spent this month:    {}\n", money(summary.month_spent)));
    output.push_str(&format!("Burn rate:           {}/day\n", money(summary.burn_rate)));
    output.push_str(&format!(
        "Average daily spend: {}/day\n",
        money(summary.average_daily_spend)
    ));
    output
}

/// One line per month: name, bar, total, count
pub fn format_history_overview(history: &[MonthSummary], currency_symbol: &str) -> String {
    if history.is_empty() {
        return "No history yet.\n".to_string();
    }

    let max = history
        .iter()
        .map(|m| m.total)
        .max()
        .unwrap_or_default()
        .as_f64();

    let mut output = String::new();
    for month in history {
        output.push_str(&format!(
            "{}  {:<15} {}  {:>12}  {:>3} expense(s)\n",
            month.month,
            month.month.friendly(),
            format_bar(month.total.as_f64(), max, 20),
            month.total.format_with_symbol(currency_symbol),
            month.count,
        ));
    }
    output
}

/// Detail view of a single month
pub fn format_month_detail(month: &MonthSummary, currency_symbol: &str, date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{}: {} across {} expense(s)\n",
        month.month.friendly(),
        month.total.format_with_symbol(currency_symbol),
        month.count
    ));
    output.push_str(&separator(48));
    output.push('\n');

    for (category, total) in &month.categories {
        output.push_str(&format!(
            "  {:<20} {:>12}\n",
            truncate(category, 20),
            total.format_with_symbol(currency_symbol)
        ));
    }

    output.push('\n');
    for expense in &month.expenses {
        output.push_str(&format!(
            "  {}  {:<20} {:<14} {:>12}\n",
            format_date(expense.date, date_format),
            truncate(&expense.name, 20),
            truncate(&expense.category, 14),
            expense.amount.format_with_symbol(currency_symbol)
        ));
    }
    output
}
