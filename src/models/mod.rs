//! Core data models for money-manager
//!
//! This module contains the data structures of the expense domain: the
//! expense record itself, its category, and the statistics period selector.

pub mod category;
pub mod expense;
pub mod ids;
pub mod period;

pub use category::{CategoryParseError, ExpenseCategory};
pub use expense::Expense;
pub use ids::ExpenseId;
pub use period::{PeriodParseError, StatsPeriod};
