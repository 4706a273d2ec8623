//! Statistics period selector
//!
//! Chooses the calendar granularity used when filtering expenses relative to
//! the current instant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar granularity of the expense view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatsPeriod {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

impl StatsPeriod {
    /// Every period, from finest to coarsest
    pub const ALL: [StatsPeriod; 4] = [Self::Day, Self::Week, Self::Month, Self::Year];

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }
}

impl fmt::Display for StatsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatsPeriod {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|period| period.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PeriodParseError(wanted.to_string()))
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(pub String);

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid period: {} (expected day, week, month or year)", self.0)
    }
}

impl std::error::Error for PeriodParseError {}
