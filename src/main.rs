use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use money_manager::cli::{handle_expense_command, ExpenseCommands};
use money_manager::config::{ManagerPaths, Settings};
use money_manager::container::ExpensesContainer;
use money_manager::services::ExpenseUseCases;
use money_manager::storage::JsonExpenseStore;
use money_manager::time::SystemClock;

#[derive(Parser)]
#[command(
    name = "money-manager",
    version,
    about = "Track personal expenses from the command line",
    long_about = "money-manager records what you spend, by category, and shows \
                  it back filtered by day, week, month or year together with a \
                  breakdown of where the money went."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    money_manager::logging::init();
    let cli = Cli::parse();

    let paths = ManagerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            paths.ensure_directories()?;
            let store = Arc::new(JsonExpenseStore::open(&paths, &settings.store_name));
            let container = ExpensesContainer::new(
                ExpenseUseCases::new(store),
                Arc::new(SystemClock),
                settings.default_period,
            );
            handle_expense_command(&container, &settings, cmd).await?;
        }
        Some(Commands::Config) => {
            println!("money-manager Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!(
                "Store file:     {}",
                paths.store_file(&settings.store_name).display()
            );
            println!();
            println!("Settings:");
            println!("  Default period:  {}", settings.default_period);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("money-manager - personal expense tracker");
            println!();
            println!("Run 'money-manager --help' for usage information.");
            println!("Run 'money-manager add --category food --amount 12.50' to record an expense.");
        }
    }

    Ok(())
}
