//! Pure calendar-date arithmetic. Dates are `NaiveDate` internally and
//! cross the API boundary as canonical `YYYY-MM-DD` strings.

use chrono::{Duration, NaiveDate};

use crate::error::TimelineError;
use crate::model::TimelineItem;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a canonical `YYYY-MM-DD` date string.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimelineError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| TimelineError::InvalidDate {
        input: s.to_string(),
    })
}

/// Format a date as canonical `YYYY-MM-DD` with zero-padded month and day.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Inclusive day count between two dates. Always at least 1.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs() + 1
}

/// Shift a date by `days` (may be negative).
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, TimelineError> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(TimelineError::DateOutOfRange { days })
}

/// Earliest start date across a non-empty set of items.
pub fn earliest_start(items: &[TimelineItem]) -> Result<NaiveDate, TimelineError> {
    items
        .iter()
        .map(|item| item.start)
        .min()
        .ok_or(TimelineError::EmptyItemSet)
}

/// Latest end date across a non-empty set of items.
pub fn latest_end(items: &[TimelineItem]) -> Result<NaiveDate, TimelineError> {
    items
        .iter()
        .map(|item| item.end)
        .max()
        .ok_or(TimelineError::EmptyItemSet)
}

/// Closed-interval overlap test, inclusive of touching endpoints.
pub fn ranges_overlap(
    start_a: NaiveDate,
    end_a: NaiveDate,
    start_b: NaiveDate,
    end_b: NaiveDate,
) -> bool {
    start_a <= end_b && start_b <= end_a
}
