//! JSON file expense store
//!
//! The store file is a JSON object of named entries. The expense list lives
//! under the `expenses` entry; other entries are carried through untouched on
//! save. Reading is forgiving: a missing file, an unreadable file, or an entry
//! that does not decode all produce an empty list.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::file_io::{read_json, write_json_atomic};
use super::ExpenseStore;
use crate::config::ManagerPaths;
use crate::error::{MoneyManagerError, MoneyManagerResult};
use crate::models::Expense;

/// Entry name of the expense list inside the store file
pub const EXPENSES_KEY: &str = "expenses";

type StoreEntries = Map<String, Value>;

/// Expense store persisted to a single JSON file
#[derive(Debug, Clone)]
pub struct JsonExpenseStore {
    path: PathBuf,
}

impl JsonExpenseStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the named store inside the data directory
    pub fn open(paths: &ManagerPaths, store_name: &str) -> Self {
        Self::new(paths.store_file(store_name))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_blocking(path: &Path) -> Vec<Expense> {
        let entries: StoreEntries = match read_json(path) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "unreadable expense store, treating as empty");
                return Vec::new();
            }
        };

        let Some(raw) = entries.get(EXPENSES_KEY) else {
            tracing::debug!(path = %path.display(), "no expenses stored yet");
            return Vec::new();
        };

        match Vec::<Expense>::deserialize(raw) {
            Ok(expenses) => {
                tracing::debug!(count = expenses.len(), "loaded expenses");
                expenses
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to decode expenses, treating as empty");
                Vec::new()
            }
        }
    }

    fn save_blocking(path: &Path, expenses: &[Expense]) -> MoneyManagerResult<()> {
        let mut entries: StoreEntries = read_json(path).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "overwriting unreadable expense store");
            StoreEntries::new()
        });

        let encoded = serde_json::to_value(expenses)
            .map_err(|e| MoneyManagerError::Storage(format!("Failed to encode expenses: {}", e)))?;
        entries.insert(EXPENSES_KEY.to_string(), encoded);

        write_json_atomic(path, &entries)?;
        tracing::debug!(count = expenses.len(), path = %path.display(), "saved expenses");
        Ok(())
    }
}

#[async_trait]
impl ExpenseStore for JsonExpenseStore {
    async fn load(&self) -> Vec<Expense> {
        let path = self.path.clone();
        match tokio::task::spawn_blocking(move || Self::load_blocking(&path)).await {
            Ok(expenses) => expenses,
            Err(err) => {
                tracing::warn!(error = %err, "expense load task failed, treating as empty");
                Vec::new()
            }
        }
    }

    async fn save(&self, expenses: &[Expense]) -> MoneyManagerResult<()> {
        let path = self.path.clone();
        let expenses = expenses.to_vec();
        tokio::task::spawn_blocking(move || Self::save_blocking(&path, &expenses))
            .await
            .map_err(|e| MoneyManagerError::Storage(format!("Save task failed: {}", e)))?
    }
}
