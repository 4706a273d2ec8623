//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and summaries for terminal
//! display.

pub mod expense;

pub use expense::{
    format_category_summary, format_expense_details, format_expense_list, format_timestamp,
    period_phrase,
};
