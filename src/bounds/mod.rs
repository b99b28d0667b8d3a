//! Axis-aligned bounding rectangles.

mod rect;

pub use rect::Rect2;
