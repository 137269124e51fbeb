use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced by the timeline core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    /// A date string did not parse as a canonical `YYYY-MM-DD` date.
    #[error("invalid date `{input}`, expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// The visible window has a non-positive span.
    #[error("degenerate window: {start} to {end}")]
    DegenerateWindow { start: NaiveDate, end: NaiveDate },

    /// An operation that reduces over items was given none.
    #[error("operation requires at least one item")]
    EmptyItemSet,

    /// Date arithmetic left the representable calendar range.
    #[error("date offset of {days} days is out of range")]
    DateOutOfRange { days: i64 },
}
