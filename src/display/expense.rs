//! Expense display formatting
//!
//! Renders expense lists and the category summary as tables for terminal
//! output.

use std::fmt::Write;

use chrono::Local;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Expense, StatsPeriod};
use crate::services::CategorySummary;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Comment")]
    comment: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// How a period reads in a sentence ("No expenses this week.")
pub fn period_phrase(period: StatsPeriod) -> &'static str {
    match period {
        StatsPeriod::Day => "today",
        StatsPeriod::Week => "this week",
        StatsPeriod::Month => "this month",
        StatsPeriod::Year => "this year",
    }
}

/// Format an expense timestamp in local time
///
/// A date format chrono cannot render falls back to RFC 3339.
pub fn format_timestamp(expense: &Expense, settings: &Settings) -> String {
    let Some(at) = expense.timestamp() else {
        return "-".to_string();
    };
    let local = at.with_timezone(&Local);

    let mut output = String::new();
    if write!(output, "{}", local.format(&settings.date_format)).is_err() {
        return local.to_rfc3339();
    }
    output
}

/// Format expenses as a table, followed by the period total
pub fn format_expense_list(expenses: &[Expense], period: StatsPeriod, settings: &Settings) -> String {
    if expenses.is_empty() {
        return format!("No expenses {}.", period_phrase(period));
    }

    let rows = expenses.iter().map(|expense| ExpenseRow {
        id: expense.id.short().to_string(),
        date: format_timestamp(expense, settings),
        category: expense.category.label().to_string(),
        amount: settings.format_amount(expense.amount),
        comment: expense.comment.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    let noun = if expenses.len() == 1 { "expense" } else { "expenses" };

    format!(
        "{}\n\nTotal {}: {} ({} {})",
        table,
        period_phrase(period),
        settings.format_amount(total),
        expenses.len(),
        noun
    )
}

/// Format a single expense
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("ID:       {}\n", expense.id));
    output.push_str(&format!("Date:     {}\n", format_timestamp(expense, settings)));
    output.push_str(&format!("Category: {}\n", expense.category));
    output.push_str(&format!("Amount:   {}\n", settings.format_amount(expense.amount)));
    if expense.has_comment() {
        output.push_str(&format!("Comment:  {}\n", expense.comment));
    }
    output
}

/// Format the spending-by-category breakdown
pub fn format_category_summary(
    summary: &CategorySummary,
    period: StatsPeriod,
    settings: &Settings,
) -> String {
    if summary.is_empty() {
        return format!("No expenses {}.", period_phrase(period));
    }

    let rows = summary.categories.iter().map(|c| CategoryRow {
        category: c.category.label().to_string(),
        count: c.count,
        total: settings.format_amount(c.total),
        share: format!("{:.1}%", c.percentage),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!(
        "Spending by category ({})\n{}\n\nTotal: {}",
        period_phrase(period),
        table,
        settings.format_amount(summary.total)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;

    fn sample() -> Vec<Expense> {
        vec![
            Expense::with_id(
                "0123456789abcdef",
                ExpenseCategory::Food,
                12.5,
                "lunch",
                1_710_496_800_000,
            ),
            Expense::with_id("fedcba98765", ExpenseCategory::Transport, 3.0, "", 1_710_410_400_000),
        ]
    }

    #[test]
    fn test_empty_list_message() {
        let output = format_expense_list(&[], StatsPeriod::Week, &Settings::default());
        assert_eq!(output, "No expenses this week.");
    }

    #[test]
    fn test_expense_list_table() {
        let output = format_expense_list(&sample(), StatsPeriod::Month, &Settings::default());

        assert!(output.contains("01234567"));
        assert!(!output.contains("0123456789abcdef"));
        assert!(output.contains("Food"));
        assert!(output.contains("$12.50"));
        assert!(output.contains("lunch"));
        assert!(output.contains("Total this month: $15.50 (2 expenses)"));
    }

    #[test]
    fn test_details_omit_empty_comment() {
        let expenses = sample();
        let settings = Settings::default();

        assert!(format_expense_details(&expenses[0], &settings).contains("Comment:  lunch"));
        assert!(!format_expense_details(&expenses[1], &settings).contains("Comment"));
    }

    #[test]
    fn test_category_summary() {
        let summary = CategorySummary::from_expenses(&sample());
        let output = format_category_summary(&summary, StatsPeriod::Year, &Settings::default());

        assert!(output.starts_with("Spending by category (this year)"));
        assert!(output.contains("Transport"));
        assert!(output.contains("80.6%"));
        assert!(output.contains("Total: $15.50"));
    }

    #[test]
    fn test_unrenderable_date_format_falls_back() {
        let mut settings = Settings::default();
        settings.date_format = "%Q".into();

        let rendered = format_timestamp(&sample()[0], &settings);
        assert!(rendered.starts_with("2024-03-1"));
    }

    #[test]
    fn test_out_of_range_timestamp() {
        let expense = Expense::with_id("x", ExpenseCategory::Other, 1.0, "", i64::MAX);
        assert_eq!(format_timestamp(&expense, &Settings::default()), "-");
    }
}
