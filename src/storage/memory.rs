//! In-memory expense store
//!
//! Keeps the list in process memory. Used for ephemeral sessions and as the
//! store behind container and use-case tests; it counts writes and can be
//! told to fail them.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::ExpenseStore;
use crate::error::{MoneyManagerError, MoneyManagerResult};
use crate::models::Expense;

/// Expense store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryExpenseStore {
    expenses: Mutex<Vec<Expense>>,
    saves: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MemoryExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with the given list
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            expenses: Mutex::new(expenses),
            ..Self::default()
        }
    }

    /// Copy of the stored list
    pub fn snapshot(&self) -> Vec<Expense> {
        self.lock().clone()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Expense>> {
        self.expenses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ExpenseStore for MemoryExpenseStore {
    async fn load(&self) -> Vec<Expense> {
        self.snapshot()
    }

    async fn save(&self, expenses: &[Expense]) -> MoneyManagerResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(MoneyManagerError::Storage(
                "in-memory store rejected the write".into(),
            ));
        }

        *self.lock() = expenses.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
