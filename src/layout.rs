//! Lane assignment and horizontal positioning.
//!
//! Greedy interval partitioning: items sorted by start date are placed in
//! the first lane whose last end date is strictly before the item's start,
//! so back-to-back items share a lane and overlapping items never do.
//! Sorted by start, the greedy scan uses the minimum possible number of
//! lanes (the maximum number of simultaneously overlapping items).

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::TimelineConfig;
use crate::error::TimelineError;
use crate::model::{TimelineItem, VisibleWindow, Zoom};

/// An item with its computed position for one layout pass.
///
/// `left` and `width` are percentages of the unzoomed window width; `left`
/// is not clamped and may be negative or beyond 100 when the item sticks
/// out of the padded window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedItem {
    #[serde(flatten)]
    pub item: TimelineItem,
    pub lane: usize,
    pub left: f64,
    pub width: f64,
}

/// Compute lane assignments and positions for every item.
///
/// Fails fast on a degenerate window instead of dividing by a non-positive
/// span. Results are recomputed from scratch on every call; lane identity
/// is not stable across calls once the sorted order changes.
pub fn layout(
    items: &[TimelineItem],
    window: &VisibleWindow,
    zoom: Zoom,
) -> Result<Vec<PositionedItem>, TimelineError> {
    let span = window.span_days();
    if span <= 0 {
        return Err(TimelineError::DegenerateWindow {
            start: window.start,
            end: window.end,
        });
    }
    let span = span as f64;

    // Stable sort keeps input order for equal starts, so re-layouts don't
    // reshuffle ties.
    let mut sorted: Vec<&TimelineItem> = items.iter().collect();
    sorted.sort_by_key(|item| item.start);

    // Each lane tracks only the end date of the item last placed in it.
    let mut lanes: Vec<NaiveDate> = Vec::new();
    let mut positioned = Vec::with_capacity(items.len());

    for item in sorted {
        let mut lane = None;
        for (index, last_end) in lanes.iter_mut().enumerate() {
            if *last_end < item.start {
                *last_end = item.end;
                lane = Some(index);
                break;
            }
        }
        let lane = match lane {
            Some(index) => index,
            None => {
                lanes.push(item.end);
                lanes.len() - 1
            }
        };

        let left = (item.start - window.start).num_days() as f64 / span * 100.0;
        let width = (item.end - item.start).num_days() as f64 / span * 100.0 * zoom.factor();

        positioned.push(PositionedItem {
            item: item.clone(),
            lane,
            left,
            width,
        });
    }

    log::debug!(
        "layout pass: {} items in {} lanes",
        positioned.len(),
        lanes.len().max(1)
    );
    Ok(positioned)
}

/// Number of lanes the layout occupies; 1 for an empty layout so hosts
/// always have a row to draw.
pub fn lane_count(positioned: &[PositionedItem]) -> usize {
    positioned
        .iter()
        .map(|p| p.lane)
        .max()
        .map_or(1, |highest| highest + 1)
}

/// Pixel height of the lane area.
pub fn content_height(positioned: &[PositionedItem], config: &TimelineConfig) -> f64 {
    lane_count(positioned) as f64 * config.lane_height
}
