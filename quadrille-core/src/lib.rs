//! Core primitives for the quadrille data grid: pointer events translated
//! from the terminal, rectangle geometry, and text display-width
//! measurement.

pub mod events;
pub mod geometry;
pub mod measure;

pub use events::{
    ClickEvent, Modifiers, MouseButton, PointerEvent, Position, ScrollDirection, ScrollEvent,
};
pub use geometry::Rect;
pub use measure::{display_width, max_display_width};
