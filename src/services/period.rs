//! Period filtering
//!
//! Selects the expenses whose timestamp falls in the same day, week, month or
//! year as a reference instant. Calendar fields are computed in the time zone
//! of the reference instant.
//!
//! Weeks are ISO-8601 weeks (Monday start), but the comparison pairs the ISO
//! week number with the *calendar* year. Around New Year this means two days of
//! the same ISO week are not matched when they fall in different calendar
//! years, and e.g. 2024-12-30 (ISO week 1 of 2025) matches 2024-12-31 but not
//! 2025-01-01. The same pairing also matches days almost a year apart: with a
//! reference instant on 2024-12-30, an expense on 2024-01-02 (ISO week 1 of
//! 2024) counts as "this week".

use chrono::{DateTime, Datelike, TimeZone};

use crate::models::{Expense, StatsPeriod};

/// Keep the expenses that fall in `period` relative to `now`, preserving order
pub fn filter_by_period<Tz: TimeZone>(
    expenses: &[Expense],
    period: StatsPeriod,
    now: &DateTime<Tz>,
) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|expense| is_in_period(expense, period, now))
        .cloned()
        .collect()
}

/// Whether a single expense falls in `period` relative to `now`
pub fn is_in_period<Tz: TimeZone>(expense: &Expense, period: StatsPeriod, now: &DateTime<Tz>) -> bool {
    let Some(at) = expense.timestamp() else {
        return false;
    };
    let at = at.with_timezone(&now.timezone());

    if at.year() != now.year() {
        return false;
    }

    match period {
        StatsPeriod::Day => at.ordinal() == now.ordinal(),
        StatsPeriod::Week => at.iso_week().week() == now.iso_week().week(),
        StatsPeriod::Month => at.month() == now.month(),
        StatsPeriod::Year => true,
    }
}
