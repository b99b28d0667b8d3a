//! SVG rendering of points and partition lines.
//!
//! Produces a standalone SVG document as a string: one dot per indexed
//! point, one segment per tree partition, with x-splits and y-splits in
//! distinct colors. The viewport maps the unit square to a `side`-pixel
//! square with y pointing up, so the drawing matches the usual mathematical
//! orientation rather than SVG's screen orientation.

use crate::primitives::Point2;
use crate::spatial::{Axis, Partition};
use num_traits::Float;

const BACKGROUND: &str = "#ffffff";
const POINT_FILL: &str = "#1a1a2e";
const X_SPLIT_STROKE: &str = "#c0392b";
const Y_SPLIT_STROKE: &str = "#2980b9";
const POINT_RADIUS: f64 = 3.0;

/// Maps a unit-square coordinate to pixel space.
fn to_px<F: Float>(v: F, side: f64) -> f64 {
    v.to_f64().unwrap_or(0.0) * side
}

/// Same, with y flipped so the origin sits at the bottom-left.
fn to_px_flipped<F: Float>(v: F, side: f64) -> f64 {
    side - to_px(v, side)
}

/// Renders points and partition segments as an SVG document.
///
/// `side` is the pixel size of the (square) output. Coordinates outside the
/// unit square are drawn where they land, possibly off-canvas.
pub fn render_scene<F: Float>(
    points: &[Point2<F>],
    partitions: &[Partition<F>],
    side: f64,
) -> String {
    let mut content = String::new();

    for part in partitions {
        let stroke = match part.axis {
            Axis::X => X_SPLIT_STROKE,
            Axis::Y => Y_SPLIT_STROKE,
        };
        content.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="1"/>"#,
            to_px(part.start.x, side),
            to_px_flipped(part.start.y, side),
            to_px(part.end.x, side),
            to_px_flipped(part.end.y, side),
            stroke
        ));
        content.push('\n');
    }

    for p in points {
        content.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
            to_px(p.x, side),
            to_px_flipped(p.y, side),
            POINT_RADIUS,
            POINT_FILL
        ));
        content.push('\n');
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {side} {side}" width="{side}" height="{side}">
<rect width="100%" height="100%" fill="{BACKGROUND}"/>
{content}</svg>
"#
    )
}
