//! The gesture state machine.
//!
//! The presentation layer forwards raw pointer and keyboard events here
//! and draws whatever the controller hands back. Only one gesture (pan,
//! item drag, or rename edit) is tracked at a time; nothing touches the
//! item store until a gesture commits, and commits come back as
//! [`ItemUpdate`] deltas for the host to merge.

use crate::config::TimelineConfig;
use crate::coords;
use crate::error::TimelineError;
use crate::layout::PositionedItem;
use crate::model::{ItemUpdate, VisibleWindow, Zoom};

/// Which part of an item a drag grabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// The item body: both dates shift together.
    Move,
    /// The left edge handle: the start date changes.
    ResizeStart,
    /// The right edge handle: the end date changes.
    ResizeEnd,
}

/// What a pointer-down landed on, as hit-tested by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerTarget {
    /// Empty timeline background; starts a pan.
    Background,
    /// An item body or edge handle, with the item as it was drawn.
    Item {
        kind: DragKind,
        item: PositionedItem,
    },
}

/// Reaction to a pointer move, for the presentation layer to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureFeedback {
    /// Nothing to redraw.
    None,
    /// Pan in progress; the new scroll offset in pixels.
    Scrolled(f64),
    /// Item drag in progress; draw the item at this temporary position.
    Preview {
        item_id: String,
        left: f64,
        width: f64,
    },
}

/// Position and dates of the grabbed item at drag entry.
#[derive(Debug, Clone, PartialEq)]
struct DragSnapshot {
    item: PositionedItem,
    start_pointer_x: f64,
}

#[derive(Debug, Clone, PartialEq)]
enum Gesture {
    Idle,
    Panning {
        start_pointer_x: f64,
        start_scroll: f64,
    },
    Dragging {
        kind: DragKind,
        snapshot: DragSnapshot,
        /// Whether the pointer has traveled past the drag threshold.
        moved: bool,
        left: f64,
        width: f64,
    },
    Editing {
        item_id: String,
        buffer: String,
    },
}

/// Tracks transient UI state and turns completed gestures into updates.
pub struct InteractionController {
    window: VisibleWindow,
    zoom: Zoom,
    config: TimelineConfig,
    /// Rendered width of the scrollable content in pixels, passed in
    /// explicitly by the host and refreshed on resize or zoom.
    container_width: f64,
    scroll_offset: f64,
    gesture: Gesture,
}

impl InteractionController {
    pub fn new(window: VisibleWindow, container_width: f64, config: TimelineConfig) -> Self {
        Self {
            window,
            zoom: Zoom::default(),
            config,
            container_width: container_width.max(1.0),
            scroll_offset: 0.0,
            gesture: Gesture::Idle,
        }
    }

    pub fn window(&self) -> &VisibleWindow {
        &self.window
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// The item currently in rename mode, if any.
    pub fn editing_item(&self) -> Option<&str> {
        match &self.gesture {
            Gesture::Editing { item_id, .. } => Some(item_id),
            _ => None,
        }
    }

    pub fn set_container_width(&mut self, pixels: f64) {
        self.container_width = pixels.max(1.0);
    }

    pub fn zoom_in(&mut self) {
        self.zoom.zoom_in();
        log::debug!("zoom in to {}", self.zoom.percent_label());
    }

    pub fn zoom_out(&mut self) {
        self.zoom.zoom_out();
        log::debug!("zoom out to {}", self.zoom.percent_label());
    }

    /// Pointer pressed. A press on the background starts a pan; a press on
    /// an item arms a drag that only becomes real once the pointer travels
    /// past the threshold. Ignored while renaming or mid-gesture.
    pub fn handle_pointer_down(&mut self, target: PointerTarget, x: f64) {
        if self.gesture != Gesture::Idle {
            return;
        }
        self.gesture = match target {
            PointerTarget::Background => Gesture::Panning {
                start_pointer_x: x,
                start_scroll: self.scroll_offset,
            },
            PointerTarget::Item { kind, item } => {
                let (left, width) = (item.left, item.width);
                Gesture::Dragging {
                    kind,
                    snapshot: DragSnapshot {
                        item,
                        start_pointer_x: x,
                    },
                    moved: false,
                    left,
                    width,
                }
            }
        };
    }

    /// Pointer moved. Pans scroll immediately; item drags update a
    /// visual-only candidate position, clamped to the window.
    pub fn handle_pointer_move(&mut self, x: f64) -> GestureFeedback {
        match &mut self.gesture {
            Gesture::Panning {
                start_pointer_x,
                start_scroll,
            } => {
                let delta = x - *start_pointer_x;
                self.scroll_offset = (*start_scroll - delta).max(0.0);
                GestureFeedback::Scrolled(self.scroll_offset)
            }
            Gesture::Dragging {
                kind,
                snapshot,
                moved,
                left,
                width,
            } => {
                let delta_px = x - snapshot.start_pointer_x;
                if !*moved {
                    if delta_px.abs() <= self.config.drag_threshold_px {
                        return GestureFeedback::None;
                    }
                    *moved = true;
                }

                let delta = delta_px / self.container_width * 100.0;
                let origin = &snapshot.item;
                let min_width = self.config.min_item_width_pct;
                match kind {
                    DragKind::Move => {
                        *left = (origin.left + delta).min(100.0 - origin.width).max(0.0);
                    }
                    DragKind::ResizeStart => {
                        let max_left = origin.left + origin.width - min_width;
                        *left = (origin.left + delta).min(max_left).max(0.0);
                        *width = origin.left + origin.width - *left;
                    }
                    DragKind::ResizeEnd => {
                        *width = (origin.width + delta)
                            .min(100.0 - origin.left)
                            .max(min_width);
                    }
                }
                GestureFeedback::Preview {
                    item_id: origin.item.id.clone(),
                    left: *left,
                    width: *width,
                }
            }
            Gesture::Idle | Gesture::Editing { .. } => GestureFeedback::None,
        }
    }

    /// Pointer released. A sub-threshold press is a click and commits
    /// nothing; a real drag is converted back to dates and emitted as an
    /// update when they differ from the stored ones.
    pub fn handle_pointer_up(&mut self) -> Option<ItemUpdate> {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Dragging {
                kind,
                snapshot,
                moved: true,
                left,
                width,
            } => match self.commit_drag(kind, &snapshot, left, width) {
                Ok(update) => update,
                Err(err) => {
                    log::warn!(
                        "drag on {} dropped an invalid candidate: {err}",
                        snapshot.item.item.id
                    );
                    None
                }
            },
            Gesture::Editing { item_id, buffer } => {
                // Pointer-up never ends an edit; put it back.
                self.gesture = Gesture::Editing { item_id, buffer };
                None
            }
            _ => None,
        }
    }

    /// Pointer left the timeline area. Abandons a pan; an armed item drag
    /// stays live because its listeners are document-scoped.
    pub fn handle_pointer_leave(&mut self) {
        if matches!(self.gesture, Gesture::Panning { .. }) {
            self.gesture = Gesture::Idle;
        }
    }

    /// Double-click on an item enters rename mode.
    pub fn handle_double_click(&mut self, item_id: &str, current_name: &str) {
        if self.gesture != Gesture::Idle {
            return;
        }
        self.gesture = Gesture::Editing {
            item_id: item_id.to_string(),
            buffer: current_name.to_string(),
        };
    }

    /// Replace the rename buffer with the edit field's current text.
    pub fn handle_edit_input(&mut self, text: &str) {
        if let Gesture::Editing { buffer, .. } = &mut self.gesture {
            *buffer = text.to_string();
        }
    }

    /// Enter pressed in the edit field: commit the rename.
    pub fn handle_key_commit(&mut self) -> Option<ItemUpdate> {
        self.commit_rename()
    }

    /// Edit field lost focus: commit the rename.
    pub fn handle_blur(&mut self) -> Option<ItemUpdate> {
        self.commit_rename()
    }

    fn commit_rename(&mut self) -> Option<ItemUpdate> {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Editing { item_id, buffer } => {
                // Empty names are allowed; renames never fail.
                log::debug!("rename {item_id} to {buffer:?}");
                Some(ItemUpdate::rename(item_id, buffer))
            }
            other => {
                self.gesture = other;
                None
            }
        }
    }

    fn commit_drag(
        &self,
        kind: DragKind,
        snapshot: &DragSnapshot,
        left: f64,
        width: f64,
    ) -> Result<Option<ItemUpdate>, TimelineError> {
        let span = self.window.span_days();
        if span <= 0 {
            return Err(TimelineError::DegenerateWindow {
                start: self.window.start,
                end: self.window.end,
            });
        }
        let stored = &snapshot.item.item;

        let update = match kind {
            DragKind::Move => {
                // One day delta for both dates keeps the duration intact.
                let day_delta = ((left - snapshot.item.left) / 100.0 * span as f64).round() as i64;
                let new_start = crate::dates::add_days(stored.start, day_delta)?;
                let new_end = crate::dates::add_days(stored.end, day_delta)?;
                if new_start == stored.start && new_end == stored.end {
                    None
                } else {
                    Some(ItemUpdate::dates(
                        stored.id.clone(),
                        Some(new_start),
                        Some(new_end),
                    ))
                }
            }
            DragKind::ResizeStart => {
                let new_start = coords::percent_to_date(left, &self.window)?.min(stored.end);
                if new_start == stored.start {
                    None
                } else {
                    Some(ItemUpdate::dates(stored.id.clone(), Some(new_start), None))
                }
            }
            DragKind::ResizeEnd => {
                let new_end =
                    coords::width_to_end_date(snapshot.item.left, width, &self.window, self.zoom)?
                        .max(stored.start);
                if new_end == stored.end {
                    None
                } else {
                    Some(ItemUpdate::dates(stored.id.clone(), None, Some(new_end)))
                }
            }
        };

        if let Some(update) = &update {
            log::debug!(
                "commit {:?} on {}: {:?} to {:?}",
                kind,
                stored.id,
                update.start,
                update.end
            );
        }
        Ok(update)
    }
}
