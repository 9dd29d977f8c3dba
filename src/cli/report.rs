//! Chart, analytics and history commands

use chrono::Local;

use crate::config::Settings;
use crate::display::{
    chart_data, format_analytics, format_chart_text, format_history_overview, format_month_detail,
};
use crate::error::{PocketError, PocketResult};
use crate::models::Month;
use crate::reports::{month_summary, monthly_history, AnalyticsSummary};
use crate::storage::Storage;

/// Print the category chart as text bars
pub fn handle_chart_command(storage: &Storage, settings: &Settings, json: bool) -> PocketResult<()> {
    let chart = chart_data(&storage.expenses.get_all()?);
    if json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else {
        print!("{}", format_chart_text(&chart, &settings.currency_symbol, 30));
    }
    Ok(())
}

/// Print top category, burn rate and average daily spend
pub fn handle_analytics_command(storage: &Storage, settings: &Settings) -> PocketResult<()> {
    let today = Local::now().date_naive();
    let summary = AnalyticsSummary::generate(&storage.expenses.get_all()?, today);
    print!("{}", format_analytics(&summary, &settings.currency_symbol));
    Ok(())
}

/// Print all months, or the detail of one month
pub fn handle_history_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
) -> PocketResult<()> {
    let expenses = storage.expenses.get_all()?;
    let symbol = settings.currency_symbol.as_str();

    match month {
        Some(raw) => {
            let month = raw
                .parse::<Month>()
                .map_err(|e| PocketError::Validation(e.to_string()))?;
            match month_summary(&expenses, month) {
                Some(summary) => print!(
                    "{}",
                    format_month_detail(&summary, symbol, &settings.date_format)
                ),
                None => println!("No expenses in {}.", month.friendly()),
            }
        }
        None => print!("{}", format_history_overview(&monthly_history(&expenses), symbol)),
    }
    Ok(())
}
