//! Mapping between horizontal percentages of the visible window and
//! calendar dates.
//!
//! The forward direction positions items and axis ticks; the inverse turns
//! a released drag back into dates. The two must stay exact inverses at
//! day granularity or committed items would jump away from where they were
//! dropped, so the inverse rounds to the nearest whole day.

use chrono::NaiveDate;

use crate::dates;
use crate::error::TimelineError;
use crate::model::{VisibleWindow, Zoom};

/// A tick on the date axis.
#[derive(Debug, Clone, PartialEq)]
pub struct DateMarker {
    pub date: NaiveDate,
    /// Left offset as a percent of the window width.
    pub left: f64,
}

fn checked_span(window: &VisibleWindow) -> Result<f64, TimelineError> {
    let span = window.span_days();
    if span <= 0 {
        return Err(TimelineError::DegenerateWindow {
            start: window.start,
            end: window.end,
        });
    }
    Ok(span as f64)
}

/// Percent offset of a date within the window.
pub fn date_to_percent(date: NaiveDate, window: &VisibleWindow) -> Result<f64, TimelineError> {
    let span = checked_span(window)?;
    Ok((date - window.start).num_days() as f64 / span * 100.0)
}

/// Date at a percent offset within the window, rounded to the nearest day.
pub fn percent_to_date(
    percent: f64,
    window: &VisibleWindow,
) -> Result<NaiveDate, TimelineError> {
    let span = checked_span(window)?;
    let offset = (percent / 100.0 * span).round();
    if !offset.is_finite() || offset.abs() >= i64::MAX as f64 {
        return Err(TimelineError::DateOutOfRange { days: i64::MAX });
    }
    dates::add_days(window.start, offset as i64)
}

/// Width percent of a date range, stretched by the zoom factor.
pub fn span_to_width(
    start: NaiveDate,
    end: NaiveDate,
    window: &VisibleWindow,
    zoom: Zoom,
) -> Result<f64, TimelineError> {
    let span = checked_span(window)?;
    Ok((end - start).num_days() as f64 / span * 100.0 * zoom.factor())
}

/// Date under the right edge of an item, given its left offset and its
/// zoom-stretched width. Inverse of [`span_to_width`] composed with the
/// item's left edge.
pub fn width_to_end_date(
    left: f64,
    width: f64,
    window: &VisibleWindow,
    zoom: Zoom,
) -> Result<NaiveDate, TimelineError> {
    percent_to_date(left + width / zoom.factor(), window)
}

/// Ticks for the date axis. Denser zoom levels get denser markers: every
/// day past 2x, weekly past 1x, fortnightly otherwise.
pub fn date_markers(
    window: &VisibleWindow,
    zoom: Zoom,
) -> Result<Vec<DateMarker>, TimelineError> {
    let span = checked_span(window)?;
    let interval = marker_interval(zoom);

    let mut markers = Vec::new();
    let mut day = 0i64;
    while day <= span as i64 {
        markers.push(DateMarker {
            date: dates::add_days(window.start, day)?,
            left: day as f64 / span * 100.0,
        });
        day += interval;
    }
    Ok(markers)
}

fn marker_interval(zoom: Zoom) -> i64 {
    if zoom.factor() > 2.0 {
        1
    } else if zoom.factor() > 1.0 {
        7
    } else {
        14
    }
}
