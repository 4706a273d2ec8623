//! Screen state owned by the expenses container

use crate::models::{Expense, ExpenseCategory, ExpenseId, StatsPeriod};

/// Snapshot of everything the expenses screen renders
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpensesState {
    /// Every stored expense, most recent first
    pub all_expenses: Vec<Expense>,
    /// `all_expenses` filtered by `selected_period`
    pub visible_expenses: Vec<Expense>,
    pub selected_period: StatsPeriod,

    pub is_add_dialog_open: bool,
    pub is_delete_dialog_open: bool,
    pub pending_delete_expense_id: Option<ExpenseId>,

    // Add-expense draft
    pub selected_category: Option<ExpenseCategory>,
    pub amount_input: String,
    pub comment_input: String,
    pub is_category_error: bool,
    pub is_amount_error: bool,

    /// Message from the last failed write, if any
    pub storage_error: Option<String>,
}

impl ExpensesState {
    pub fn new(selected_period: StatsPeriod) -> Self {
        Self {
            selected_period,
            ..Self::default()
        }
    }

    /// Clear the add-expense draft and its error flags
    pub fn reset_draft(&mut self) {
        self.selected_category = None;
        self.amount_input.clear();
        self.comment_input.clear();
        self.is_category_error = false;
        self.is_amount_error = false;
    }

    pub fn close_delete_dialog(&mut self) {
        self.pending_delete_expense_id = None;
        self.is_delete_dialog_open = false;
    }

    pub fn has_draft_errors(&self) -> bool {
        self.is_category_error || self.is_amount_error
    }
}

/// Parse a raw amount the way the add form does.
///
/// Surrounding whitespace is ignored. Returns `None` unless the text is a
/// finite number greater than zero.
pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50"), Some(12.5));
        assert_eq!(parse_amount("  7 "), Some(7.0));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-3"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_reset_draft() {
        let mut state = ExpensesState {
            selected_category: Some(ExpenseCategory::Food),
            amount_input: "5".into(),
            comment_input: "lunch".into(),
            is_category_error: true,
            is_amount_error: true,
            ..ExpensesState::default()
        };

        state.reset_draft();

        assert_eq!(state.selected_category, None);
        assert!(state.amount_input.is_empty());
        assert!(state.comment_input.is_empty());
        assert!(!state.has_draft_errors());
    }

    #[test]
    fn test_default_period_is_month() {
        assert_eq!(ExpensesState::default().selected_period, StatsPeriod::Month);
    }
}
