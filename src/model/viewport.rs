use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::error::TimelineError;
use crate::model::TimelineItem;

/// Discrete zoom factors, lowest to highest.
pub const ZOOM_STEPS: [f64; 11] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0];

/// The date range currently mapped to the horizontal extent.
///
/// Built once from the item extent plus padding and then held fixed:
/// panning scrolls the viewport and zoom stretches the rendered width,
/// neither changes these bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleWindow {
    /// The leftmost date of the window.
    pub start: NaiveDate,
    /// The rightmost date of the window.
    pub end: NaiveDate,
}

impl VisibleWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Build a window spanning all items, padded by `padding_days` on each
    /// side. Saturates at the calendar range rather than wrapping.
    pub fn from_items(
        items: &[TimelineItem],
        padding_days: i64,
    ) -> Result<Self, TimelineError> {
        let earliest = dates::earliest_start(items)?;
        let latest = dates::latest_end(items)?;
        let start = dates::add_days(earliest, -padding_days).unwrap_or(NaiveDate::MIN);
        let end = dates::add_days(latest, padding_days).unwrap_or(NaiveDate::MAX);
        log::debug!("window {start} to {end} from {} items", items.len());
        Ok(Self { start, end })
    }

    /// Number of days the window spans (end exclusive). Non-positive for
    /// a degenerate window.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Current zoom factor, stepped along [`ZOOM_STEPS`].
///
/// A factor set from outside may sit between steps; stepping snaps it to
/// the nearest step first, then moves one step, clamped at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zoom {
    factor: f64,
}

impl Default for Zoom {
    fn default() -> Self {
        Self { factor: 1.0 }
    }
}

impl Zoom {
    pub fn new(factor: f64) -> Self {
        Self {
            factor: factor.clamp(ZOOM_STEPS[0], ZOOM_STEPS[ZOOM_STEPS.len() - 1]),
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Index of the step closest to the current factor.
    fn nearest_step(&self) -> usize {
        let mut best = 0;
        for (i, step) in ZOOM_STEPS.iter().enumerate() {
            if (step - self.factor).abs() < (ZOOM_STEPS[best] - self.factor).abs() {
                best = i;
            }
        }
        best
    }

    /// Move one step up the ladder, no-op at the top.
    pub fn zoom_in(&mut self) {
        let next = (self.nearest_step() + 1).min(ZOOM_STEPS.len() - 1);
        self.factor = ZOOM_STEPS[next];
    }

    /// Move one step down the ladder, no-op at the bottom.
    pub fn zoom_out(&mut self) {
        let prev = self.nearest_step().saturating_sub(1);
        self.factor = ZOOM_STEPS[prev];
    }

    /// The factor as a display percentage, e.g. `"150%"`.
    pub fn percent_label(&self) -> String {
        format!("{}%", (self.factor * 100.0).round() as i64)
    }
}
