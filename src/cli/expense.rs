//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{expense_rows, format_date, format_expense_table};
use crate::error::PocketResult;
use crate::forms::ExpenseForm;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        name: String,
        /// Amount (e.g., "4.50")
        amount: String,
        /// Category label
        #[arg(short, long)]
        category: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List all expenses
    #[command(alias = "ls")]
    List {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Remove an expense by list position (1-based) or id
    #[command(alias = "rm")]
    Remove {
        /// Position as shown by `list`, or the expense id
        expense: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> PocketResult<()> {
    let service = ExpenseService::new(storage, settings.balance_policy);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            date,
        } => {
            let form = ExpenseForm {
                name,
                amount,
                category,
                date: date.unwrap_or_default(),
            };
            let expense = service.add(form.validate()?)?;

            println!(
                "Added expense: {} {} [{}] on {}",
                expense.name,
                expense.amount.format_with_symbol(symbol),
                expense.category,
                format_date(expense.date, &settings.date_format)
            );
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List { json } => {
            let rows = expense_rows(&service.list()?, &settings.date_format);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", format_expense_table(&rows, symbol));
            }
        }

        ExpenseCommands::Remove { expense } => match service.resolve(&expense)? {
            Some(id) => {
                if let Some(removed) = service.remove(id)? {
                    println!(
                        "Removed expense: {} {} [{}]",
                        removed.name,
                        removed.amount.format_with_symbol(symbol),
                        removed.category
                    );
                }
            }
            None => println!("No expense matches '{}'; nothing removed.", expense),
        },
    }

    Ok(())
}
