//! Renders a 2d-tree partition diagram to SVG.
//!
//! Run with: cargo run --example visualize

use planum::io::svg::render_scene;
use planum::{KdTree, Point2};

use std::fs;

const SIDE: f64 = 512.0;
const POINT_COUNT: usize = 60;

/// Deterministic points in the unit square.
fn scattered_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for _ in 0..count {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = state as f64 / u64::MAX as f64;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let y = state as f64 / u64::MAX as f64;

        points.push(Point2::new(x, y));
    }

    points
}

fn main() {
    let points = scattered_points(POINT_COUNT, 20240117);

    let mut tree = KdTree::new();
    for &p in &points {
        tree.insert(p).expect("generated points are finite");
    }
    println!("indexed {} points", tree.len());

    let probe = Point2::new(0.8, 0.18);
    if let Some(found) = tree.nearest(probe).expect("probe is finite") {
        println!(
            "nearest to ({}, {}): ({:.4}, {:.4}) at distance {:.4}",
            probe.x,
            probe.y,
            found.x,
            found.y,
            probe.distance(found)
        );
    }

    let svg = render_scene(&points, &tree.partitions(), SIDE);
    fs::create_dir_all("screenshots").expect("create screenshots directory");
    fs::write("screenshots/kdtree.svg", svg).expect("write SVG");
    println!("wrote screenshots/kdtree.svg");
}
