//! JSON file helpers for the on-disk store
//!
//! Reads treat a missing file as empty. Writes go to a sibling temp file that
//! is synced and renamed over the target, so readers never see a partial file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::MoneyManagerError;

/// Read a JSON document, or `T::default()` when the file is absent
pub fn read_json<T, P>(path: P) -> Result<T, MoneyManagerError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| {
        MoneyManagerError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        MoneyManagerError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Replace the file at `path` with `data`, creating parent directories
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), MoneyManagerError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            MoneyManagerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| MoneyManagerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| MoneyManagerError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| MoneyManagerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| MoneyManagerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        MoneyManagerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseCategory};
    use serde_json::{json, Map, Value};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_prefs.json");

        let entries: Map<String, Value> = read_json(&path).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_expense_list_survives_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.json");
        let expenses = vec![
            Expense::with_id("b", ExpenseCategory::Shopping, 19.99, "shoes", 2_000),
            Expense::with_id("a", ExpenseCategory::Bills, 60.0, "", 1_000),
        ];

        write_json_atomic(&path, &expenses).unwrap();
        let loaded: Vec<Expense> = read_json(&path).unwrap();

        assert_eq!(loaded, expenses);
        assert!(!temp_dir.path().join("list.json.tmp").exists());
    }

    #[test]
    fn test_write_replaces_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("store.json");

        write_json_atomic(&path, &json!({ "expenses": [], "theme": "dark" })).unwrap();
        write_json_atomic(&path, &json!({ "expenses": [] })).unwrap();

        let entries: Map<String, Value> = read_json(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries.contains_key("expenses"));
    }

    #[test]
    fn test_read_invalid_json_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<Map<String, Value>, _>(&path).unwrap_err();
        assert!(err.is_storage());
    }
}
