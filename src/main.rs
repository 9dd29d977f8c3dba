use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use pocket_budget::cli::{
    handle_activity_command, handle_analytics_command, handle_balance_command,
    handle_budget_command, handle_chart_command, handle_expense_command, handle_export_command,
    handle_history_command, BalanceCommands, BudgetCommands, ExpenseCommands, ExportArgs,
};
use pocket_budget::config::{paths::PocketPaths, settings::Settings};
use pocket_budget::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pocket",
    author = "Kaylee Beyene",
    version,
    about = "Terminal expense tracker with category budgets",
    long_about = "pocket keeps a list of expenses, a balance and per-category budget \
                  limits. It charts spending by category, shows analytics and monthly \
                  history, and exports to CSV, JSON or YAML."
)]
struct Cli {
    /// Diagnostic log level; RUST_LOG takes precedence when set
    #[arg(long, global = true, default_value_t = LevelFilter::WARN, env = "POCKET_LOG_LEVEL")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Create the data directory, settings and empty stores
    Init,

    /// Show current configuration and paths
    Config,

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Balance commands
    #[command(subcommand)]
    Balance(BalanceCommands),

    /// Budget limit commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Spending by category
    Chart {
        /// Print the chart data as JSON
        #[arg(long)]
        json: bool,
    },

    /// Top category, burn rate and average daily spend
    Analytics,

    /// Spending grouped by month
    History {
        /// Show one month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Export expenses to CSV, JSON or YAML
    Export(ExportArgs),

    /// Show recent changes from the audit log
    Activity {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PocketPaths::new()?;
    let tui_mode = matches!(cli.command, Some(Commands::Tui));
    init_logger(cli.log_level, &paths, tui_mode)?;

    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), policy = %settings.balance_policy, "starting");

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tui) => {
            pocket_budget::tui::run_tui(&storage, &settings, &paths)?;
        }
        Some(Commands::Init) => {
            println!("Initializing pocket-budget at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  pocket balance set 500");
            println!("  pocket expense add Coffee 4.50 -c Dining");
            println!("  pocket budget set Dining 100");
        }
        Some(Commands::Config) => {
            println!("pocket-budget Configuration");
            println!("===========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Balance policy:  {}", settings.balance_policy);
            println!(
                "  Panels:          budget bars {}, analytics {}, history {}",
                on_off(settings.panels.budget_bars),
                on_off(settings.panels.analytics),
                on_off(settings.panels.history)
            );
            println!(
                "  Export:          {} (totals {}, chart {})",
                settings.export.format.extension(),
                on_off(settings.export.include_totals),
                on_off(settings.export.include_chart)
            );
        }
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Balance(cmd)) => handle_balance_command(&storage, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Chart { json }) => handle_chart_command(&storage, &settings, json)?,
        Some(Commands::Analytics) => handle_analytics_command(&storage, &settings)?,
        Some(Commands::History { month }) => handle_history_command(&storage, &settings, month)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, &settings, args)?,
        Some(Commands::Activity { count }) => handle_activity_command(&storage, count)?,
        None => {
            println!("pocket - Terminal expense tracker");
            println!();
            println!("Run 'pocket --help' for usage information.");
            println!("Run 'pocket tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// Diagnostics go to stderr, or to `pocket.log` while the TUI owns the screen
fn init_logger(level: LevelFilter, paths: &PocketPaths, tui_mode: bool) -> Result<()> {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "pocket_budget={},{}={}",
            level,
            env!("CARGO_CRATE_NAME"),
            level
        )),
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if tui_mode {
        paths.ensure_directories()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(paths.diagnostic_log())?;
        builder
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}
