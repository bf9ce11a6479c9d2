//! Multi-page freehand drawing model for the Pro Paint application.
//!
//! The crate is independent of the GUI toolkit: the `pro-paint` binary feeds
//! pointer and wheel events into [`input`] and paints the [`Segment`]s each
//! [`Page`] reports.

pub mod brush;
pub mod color;
pub mod geometry;
pub mod input;
pub mod page;
pub mod pages;

pub use brush::{Brush, Tool};
pub use color::{Color, ColorParseError};
pub use geometry::{Point, Size};
pub use input::{PointerEvent, PointerOutcome, WheelEvent, handle_pointer, handle_wheel};
pub use page::{CanvasItem, Note, Page, Segment, Stroke, ZOOM_MAX, ZOOM_MIN, ZoomSteps};
pub use pages::PageManager;
