//! Input/output utilities for point data.
//!
//! Reading whitespace-separated coordinate files and writing SVG snapshots
//! of an indexed point set.

pub mod coords;
pub mod svg;

pub use coords::{parse_coords, read_coords, CoordsError};
pub use svg::render_scene;
