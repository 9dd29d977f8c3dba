//! Balance CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::PocketResult;
use crate::forms::AmountForm;
use crate::services::BalanceService;
use crate::storage::Storage;

/// Balance subcommands
#[derive(Subcommand, Debug)]
pub enum BalanceCommands {
    /// Show the balance and what remains after spending
    Show,
    /// Overwrite the balance
    Set {
        /// New balance (may be negative)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Add money to the balance
    Deposit {
        /// Amount to add (negative to withdraw)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

pub fn handle_balance_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BalanceCommands,
) -> PocketResult<()> {
    let service = BalanceService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BalanceCommands::Show => {
            let balance = service.show()?;
            let remaining = service.remaining(settings.balance_policy)?;
            println!("Balance:   {}", balance.format_with_symbol(symbol));
            println!("Remaining: {}", remaining.format_with_symbol(symbol));
            println!("Policy:    {}", settings.balance_policy);
        }

        BalanceCommands::Set { amount } => {
            let value = AmountForm { amount }.validate()?;
            let balance = service.set(value)?;
            println!("Balance set to {}", balance.format_with_symbol(symbol));
        }

        BalanceCommands::Deposit { amount } => {
            let value = AmountForm { amount }.validate()?;
            let balance = service.deposit(value)?;
            println!(
                "Deposited {}. Balance is now {}",
                value.format_with_symbol(symbol),
                balance.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
