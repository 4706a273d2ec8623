//! Category summary
//!
//! Aggregates a list of expenses into per-category totals and shares, the data
//! behind the "spending by category" breakdown.

use std::collections::HashMap;

use crate::models::{Expense, ExpenseCategory};

/// Spending within one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category
    pub category: ExpenseCategory,
    /// Sum of amounts
    pub total: f64,
    /// Number of expenses
    pub count: usize,
    /// Share of the overall total, 0-100
    pub percentage: f64,
}

/// Spending breakdown by category
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategorySummary {
    /// Categories with spending, largest total first
    pub categories: Vec<CategoryTotal>,
    /// Sum over every expense
    pub total: f64,
    /// Number of expenses
    pub count: usize,
}

impl CategorySummary {
    /// Summarize the given expenses
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut totals: HashMap<ExpenseCategory, (f64, usize)> = HashMap::new();
        for expense in expenses {
            let entry = totals.entry(expense.category).or_insert((0.0, 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let total: f64 = totals.values().map(|(sum, _)| sum).sum();

        let mut categories: Vec<CategoryTotal> = totals
            .into_iter()
            .map(|(category, (sum, count))| CategoryTotal {
                category,
                total: sum,
                count,
                percentage: if total > 0.0 { sum / total * 100.0 } else { 0.0 },
            })
            .collect();

        // Ties fall back to declaration order so output is stable
        categories.sort_by(|a, b| {
            b.total
                .total_cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            categories,
            total,
            count: expenses.len(),
        }
    }

    /// Whether there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total for one category, zero if it has no spending
    pub fn total_for(&self, category: ExpenseCategory) -> f64 {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: ExpenseCategory, amount: f64) -> Expense {
        Expense::new(category, amount, "", 0)
    }

    #[test]
    fn test_empty_summary() {
        let summary = CategorySummary::from_expenses(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.count, 0);
    }

    #[test]
    fn test_totals_and_percentages() {
        let expenses = vec![
            expense(ExpenseCategory::Food, 10.0),
            expense(ExpenseCategory::Transport, 25.0),
            expense(ExpenseCategory::Food, 15.0),
            expense(ExpenseCategory::Health, 50.0),
        ];

        let summary = CategorySummary::from_expenses(&expenses);

        assert_eq!(summary.total, 100.0);
        assert_eq!(summary.count, 4);
        let order: Vec<_> = summary.categories.iter().map(|c| c.category).collect();
        assert_eq!(
            order,
            vec![
                ExpenseCategory::Health,
                ExpenseCategory::Food,
                ExpenseCategory::Transport
            ]
        );

        let food = &summary.categories[1];
        assert_eq!(food.total, 25.0);
        assert_eq!(food.count, 2);
        assert_eq!(food.percentage, 25.0);
        assert_eq!(summary.total_for(ExpenseCategory::Bills), 0.0);
    }

    #[test]
    fn test_ties_use_declaration_order() {
        let expenses = vec![
            expense(ExpenseCategory::Other, 5.0),
            expense(ExpenseCategory::Bills, 5.0),
        ];

        let summary = CategorySummary::from_expenses(&expenses);
        assert_eq!(summary.categories[0].category, ExpenseCategory::Bills);
        assert_eq!(summary.categories[1].category, ExpenseCategory::Other);
    }
}
