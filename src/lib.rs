//! planum - Planar point indexing
//!
//! Points in the unit square, indexed for two queries that come up constantly
//! in geometry workloads: which points fall inside an axis-aligned rectangle,
//! and which point is closest to a query location. The workhorse is
//! [`KdTree`], a 2d-tree whose splitting axis alternates with depth and whose
//! searches prune whole subtrees using implicit bounding rectangles. A
//! brute-force [`PointSet`] with the same contract serves as the slow,
//! obviously-correct baseline.

pub mod bounds;
pub mod error;
pub mod io;
pub mod primitives;
pub mod spatial;

pub use bounds::Rect2;
pub use error::PlanumError;
pub use primitives::Point2;
pub use spatial::{KdTree, PointSet};
