pub mod item;
pub mod viewport;

pub use item::{ItemUpdate, TimelineItem};
pub use viewport::{VisibleWindow, Zoom, ZOOM_STEPS};
