use serde::{Deserialize, Serialize};

/// Tunables for layout and gesture handling.
///
/// `Default` reproduces the stock behavior; hosts can deserialize an
/// adjusted config instead of editing constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Days of padding added on each side of the item extent when building
    /// the visible window.
    pub window_padding_days: i64,
    /// Height of one lane in pixels.
    pub lane_height: f64,
    /// Pointer travel in pixels before a press counts as a drag rather
    /// than a click.
    pub drag_threshold_px: f64,
    /// Smallest width an item can be resized to, as a percent of the
    /// window.
    pub min_item_width_pct: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            window_padding_days: 7,
            lane_height: 40.0,
            drag_threshold_px: 3.0,
            min_item_width_pct: 5.0,
        }
    }
}
