//! Business logic layer for money-manager
//!
//! Use-cases over the expense store, the period filter, and the category
//! summary used by the statistics view.

pub mod expense;
pub mod period;
pub mod summary;

pub use expense::{AddExpense, DeleteExpense, ExpenseUseCases, GetExpenses};
pub use period::{filter_by_period, is_in_period};
pub use summary::{CategorySummary, CategoryTotal};
