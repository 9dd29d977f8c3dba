//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{budget_bars, format_budget_bars};
use crate::error::PocketResult;
use crate::forms::BudgetForm;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the spending limit for a category (0 clears it)
    Set {
        category: String,
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },
    /// Remove the limit for a category
    Clear { category: String },
    /// Show spending against every limit
    Status {
        /// Print as JSON instead of bars
        #[arg(long)]
        json: bool,
    },
}

pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> PocketResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let (category, limit) = BudgetForm { category, limit }.validate()?;
            match service.set_limit(&category, limit)? {
                Some(limit) => println!(
                    "Budget for {} set to {}",
                    category,
                    limit.format_with_symbol(symbol)
                ),
                None => println!("Budget for {} cleared", category),
            }
        }

        BudgetCommands::Clear { category } => {
            let limit = service.clear(&category)?;
            println!(
                "Cleared budget for {} (was {})",
                crate::models::normalize_category(&category),
                limit.format_with_symbol(symbol)
            );
        }

        BudgetCommands::Status { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&service.status()?)?);
            } else {
                let expenses = storage.expenses.get_all()?;
                let budgets = storage.budgets.get_all()?;
                print!(
                    "{}",
                    format_budget_bars(&budget_bars(&expenses, &budgets, symbol), 20)
                );
            }
        }
    }

    Ok(())
}
