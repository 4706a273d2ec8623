//! Storage layer for money-manager
//!
//! The expense list is persisted as a whole: callers load the full ordered
//! sequence, change it, and save the full sequence back. [`ExpenseStore`] is
//! that two-method contract; [`JsonExpenseStore`] is the on-disk backend and
//! [`MemoryExpenseStore`] the in-process one.

pub mod file_io;
pub mod json;
pub mod memory;

use async_trait::async_trait;

pub use file_io::{read_json, write_json_atomic};
pub use json::{JsonExpenseStore, EXPENSES_KEY};
pub use memory::MemoryExpenseStore;

use crate::error::MoneyManagerResult;
use crate::models::Expense;

/// Persistence contract for the expense list
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Load the full stored list, most recent first
    ///
    /// Never fails: missing or undecodable data yields an empty list.
    async fn load(&self) -> Vec<Expense>;

    /// Replace the stored list with `expenses`
    async fn save(&self, expenses: &[Expense]) -> MoneyManagerResult<()>;
}
