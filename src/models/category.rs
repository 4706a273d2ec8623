//! Expense categories
//!
//! A closed set of spending categories. The persisted form is the upper-case
//! variant name (`FOOD`, `TRANSPORT`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a single expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Bills,
    Entertainment,
    Shopping,
    Health,
    Other,
}

impl ExpenseCategory {
    /// Every category, in declaration order
    pub const ALL: [ExpenseCategory; 7] = [
        Self::Food,
        Self::Transport,
        Self::Bills,
        Self::Entertainment,
        Self::Shopping,
        Self::Health,
        Self::Other,
    ];

    /// Persisted name of the category
    pub fn name(self) -> &'static str {
        match self {
            Self::Food => "FOOD",
            Self::Transport => "TRANSPORT",
            Self::Bills => "BILLS",
            Self::Entertainment => "ENTERTAINMENT",
            Self::Shopping => "SHOPPING",
            Self::Health => "HEALTH",
            Self::Other => "OTHER",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CategoryParseError(wanted.to_string()))
    }
}

/// Error returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}
