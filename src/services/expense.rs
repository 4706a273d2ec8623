//! Expense use-cases
//!
//! Single-purpose operations over an [`ExpenseStore`]. Each one reads the full
//! list, applies its change, and writes the full list back.

use std::sync::Arc;

use crate::error::MoneyManagerResult;
use crate::models::{Expense, ExpenseId};
use crate::storage::ExpenseStore;

/// Read every stored expense, most recent first
#[derive(Clone)]
pub struct GetExpenses {
    store: Arc<dyn ExpenseStore>,
}

impl GetExpenses {
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }

    /// Returns an empty list when nothing is stored or the data is unreadable
    pub async fn execute(&self) -> Vec<Expense> {
        self.store.load().await
    }
}

/// Record a new expense at the head of the list
#[derive(Clone)]
pub struct AddExpense {
    store: Arc<dyn ExpenseStore>,
}

impl AddExpense {
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, expense: Expense) -> MoneyManagerResult<()> {
        let mut expenses = self.store.load().await;
        let id = expense.id.clone();
        expenses.insert(0, expense);

        self.store.save(&expenses).await?;
        tracing::info!(expense_id = %id, total = expenses.len(), "expense added");
        Ok(())
    }
}

/// Remove an expense by id
#[derive(Clone)]
pub struct DeleteExpense {
    store: Arc<dyn ExpenseStore>,
}

impl DeleteExpense {
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self { store }
    }

    /// Returns whether anything was removed. An unknown id is not an error;
    /// the list is still written back unchanged.
    pub async fn execute(&self, id: &ExpenseId) -> MoneyManagerResult<bool> {
        let mut expenses = self.store.load().await;
        let before = expenses.len();
        expenses.retain(|expense| &expense.id != id);
        let removed = expenses.len() != before;

        self.store.save(&expenses).await?;
        if removed {
            tracing::info!(expense_id = %id, total = expenses.len(), "expense deleted");
        } else {
            tracing::debug!(expense_id = %id, "delete requested for unknown expense");
        }
        Ok(removed)
    }
}

/// The three use-cases wired over one store
#[derive(Clone)]
pub struct ExpenseUseCases {
    pub get_expenses: GetExpenses,
    pub add_expense: AddExpense,
    pub delete_expense: DeleteExpense,
}

impl ExpenseUseCases {
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self {
            get_expenses: GetExpenses::new(store.clone()),
            add_expense: AddExpense::new(store.clone()),
            delete_expense: DeleteExpense::new(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;
    use crate::storage::MemoryExpenseStore;

    fn setup() -> (Arc<MemoryExpenseStore>, ExpenseUseCases) {
        let store = Arc::new(MemoryExpenseStore::new());
        let use_cases = ExpenseUseCases::new(store.clone());
        (store, use_cases)
    }

    fn expense(id: &str, amount: f64) -> Expense {
        Expense::with_id(id, ExpenseCategory::Food, amount, "", 0)
    }

    #[tokio::test]
    async fn test_get_on_empty_store() {
        let (_, use_cases) = setup();
        assert!(use_cases.get_expenses.execute().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_prepends() {
        let (_, use_cases) = setup();

        use_cases.add_expense.execute(expense("first", 1.0)).await.unwrap();
        use_cases.add_expense.execute(expense("second", 2.0)).await.unwrap();

        let listed = use_cases.get_expenses.execute().await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id.as_str(), "second");
        assert_eq!(listed[1].id.as_str(), "first");
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let (_, use_cases) = setup();
        use_cases.add_expense.execute(expense("a", 1.0)).await.unwrap();
        use_cases.add_expense.execute(expense("b", 2.0)).await.unwrap();

        let removed = use_cases
            .delete_expense
            .execute(&ExpenseId::from("a"))
            .await
            .unwrap();

        assert!(removed);
        let listed = use_cases.get_expenses.execute().await;
        assert_eq!(listed, vec![expense("b", 2.0)]);
    }

    #[tokio::test]
    async fn test_delete_unknown_is_noop() {
        let (store, use_cases) = setup();
        use_cases.add_expense.execute(expense("a", 1.0)).await.unwrap();
        let before = store.snapshot();

        let removed = use_cases
            .delete_expense
            .execute(&ExpenseId::from("missing"))
            .await
            .unwrap();

        assert!(!removed);
        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn test_add_surfaces_write_failure() {
        let (store, use_cases) = setup();
        store.set_fail_writes(true);

        let err = use_cases
            .add_expense
            .execute(expense("a", 1.0))
            .await
            .unwrap_err();

        assert!(err.is_storage());
        assert!(store.snapshot().is_empty());
    }
}
