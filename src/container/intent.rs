use crate::models::{ExpenseCategory, ExpenseId, StatsPeriod};

/// User actions accepted by the expenses container
#[derive(Debug, Clone, PartialEq)]
pub enum ExpensesIntent {
    /// Change the period filter
    SelectPeriod(StatsPeriod),

    OpenAddExpenseDialog,

    /// Close the add dialog and discard the draft
    CloseAddExpenseDialog,

    SelectCategory(ExpenseCategory),

    /// Replace the raw amount text
    ChangeAmount(String),

    ChangeComment(String),

    /// Validate the draft and record it
    SubmitExpense,

    /// Ask for confirmation before deleting
    RequestDeleteExpense(ExpenseId),

    ConfirmDeleteExpense,

    DismissDeleteExpense,

    /// Clear the last persistence failure
    DismissStorageError,
}
