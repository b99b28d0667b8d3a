//! Spatial indexes over 2D point sets.
//!
//! - [`KdTree`] - an axis-alternating 2d-tree with pruning range and
//!   nearest-neighbor searches
//! - [`PointSet`] - a brute-force baseline answering the same queries by
//!   linear scan

mod kdtree;
mod pointset;

pub use kdtree::{Axis, KdTree, Partition};
pub use pointset::PointSet;
