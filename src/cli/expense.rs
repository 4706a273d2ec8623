//! Expense CLI commands
//!
//! Every command drives the [`ExpensesContainer`] through intents and reads the
//! result back from its published state, the same way an interactive screen
//! would.

use clap::Subcommand;

use crate::config::Settings;
use crate::container::{ExpensesContainer, ExpensesIntent, ExpensesState};
use crate::display;
use crate::error::{MoneyManagerError, MoneyManagerResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, StatsPeriod};
use crate::services::CategorySummary;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List expenses in a period
    #[command(alias = "ls")]
    List {
        /// Period to show (day, week, month, year)
        #[arg(short, long)]
        period: Option<StatsPeriod>,
    },
    /// Record a new expense
    Add {
        /// Category (food, transport, bills, entertainment, shopping, health, other)
        #[arg(short, long)]
        category: ExpenseCategory,
        /// Amount spent
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        /// Optional note
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID or a unique prefix of it
        id: String,
    },
    /// Show spending by category
    Summary {
        /// Period to summarize (day, week, month, year)
        #[arg(short, long)]
        period: Option<StatsPeriod>,
    },
}

/// Handle an expense command
pub async fn handle_expense_command(
    container: &ExpensesContainer,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> MoneyManagerResult<()> {
    match cmd {
        ExpenseCommands::List { period } => {
            let state = select_period(container, period).await;
            println!(
                "{}",
                display::format_expense_list(&state.visible_expenses, state.selected_period, settings)
            );
        }

        ExpenseCommands::Add {
            category,
            amount,
            comment,
        } => {
            let expense = add_expense(container, category, &amount, &comment).await?;
            println!("Added expense:");
            print!("{}", display::format_expense_details(&expense, settings));
        }

        ExpenseCommands::Delete { id } => {
            let expense = delete_expense(container, &id).await?;
            println!(
                "Deleted expense {} ({}, {})",
                expense.id.short(),
                expense.category,
                settings.format_amount(expense.amount)
            );
        }

        ExpenseCommands::Summary { period } => {
            let state = select_period(container, period).await;
            let summary = CategorySummary::from_expenses(&state.visible_expenses);
            println!(
                "{}",
                display::format_category_summary(&summary, state.selected_period, settings)
            );
        }
    }

    Ok(())
}

async fn select_period(container: &ExpensesContainer, period: Option<StatsPeriod>) -> ExpensesState {
    if let Some(period) = period {
        container.dispatch(ExpensesIntent::SelectPeriod(period));
    }
    container.settled().await;
    container.state()
}

/// Fill the add form, submit it, and report what happened
pub async fn add_expense(
    container: &ExpensesContainer,
    category: ExpenseCategory,
    amount: &str,
    comment: &str,
) -> MoneyManagerResult<Expense> {
    container.dispatch(ExpensesIntent::OpenAddExpenseDialog);
    container.dispatch(ExpensesIntent::SelectCategory(category));
    container.dispatch(ExpensesIntent::ChangeAmount(amount.to_string()));
    container.dispatch(ExpensesIntent::ChangeComment(comment.to_string()));
    container.dispatch(ExpensesIntent::SubmitExpense);
    container.settled().await;

    let state = container.state();
    if state.is_amount_error {
        container.dispatch(ExpensesIntent::CloseAddExpenseDialog);
        return Err(MoneyManagerError::Validation(format!(
            "Amount must be a positive number, got '{}'",
            amount
        )));
    }
    if state.is_category_error {
        container.dispatch(ExpensesIntent::CloseAddExpenseDialog);
        return Err(MoneyManagerError::Validation("A category is required".into()));
    }
    if let Some(message) = state.storage_error {
        return Err(MoneyManagerError::Storage(message));
    }

    state
        .all_expenses
        .into_iter()
        .next()
        .ok_or_else(|| MoneyManagerError::Storage("Saved expense was not read back".into()))
}

/// Resolve `id`, confirm its deletion, and return the removed expense
pub async fn delete_expense(container: &ExpensesContainer, id: &str) -> MoneyManagerResult<Expense> {
    container.settled().await;
    let expense = find_expense(&container.state().all_expenses, id)?;

    container.dispatch(ExpensesIntent::RequestDeleteExpense(expense.id.clone()));
    container.dispatch(ExpensesIntent::ConfirmDeleteExpense);
    container.settled().await;

    if let Some(message) = container.state().storage_error {
        return Err(MoneyManagerError::Storage(message));
    }
    Ok(expense)
}

/// Find an expense by full id or unique id prefix
pub fn find_expense(expenses: &[Expense], id: &str) -> MoneyManagerResult<Expense> {
    let id = id.trim();
    if id.is_empty() {
        return Err(MoneyManagerError::Validation("Expense ID must not be empty".into()));
    }

    let wanted = ExpenseId::from(id);
    if let Some(expense) = expenses.iter().find(|e| e.id == wanted) {
        return Ok(expense.clone());
    }

    let mut matches = expenses.iter().filter(|e| e.id.as_str().starts_with(id));
    match (matches.next(), matches.next()) {
        (Some(expense), None) => Ok(expense.clone()),
        (Some(_), Some(_)) => Err(MoneyManagerError::Validation(format!(
            "Expense ID '{}' is ambiguous",
            id
        ))),
        (None, _) => Err(MoneyManagerError::expense_not_found(id)),
    }
}
