//! Core of an interactive timeline: date-ranged items packed into lanes on
//! a horizontal axis, with zoom, panning, drag-to-move, edge-drag-to-resize
//! and inline rename.
//!
//! The crate is presentation-agnostic. A host hands items and pointer
//! events in, draws the positioned items it gets back, and merges the
//! [`ItemUpdate`] deltas emitted when a gesture commits.

pub mod color;
pub mod config;
pub mod controller;
pub mod coords;
pub mod dates;
pub mod error;
pub mod layout;
pub mod model;

pub use config::TimelineConfig;
pub use controller::{DragKind, GestureFeedback, InteractionController, PointerTarget};
pub use coords::DateMarker;
pub use error::TimelineError;
pub use layout::{content_height, lane_count, layout, PositionedItem};
pub use model::{ItemUpdate, TimelineItem, VisibleWindow, Zoom, ZOOM_STEPS};
