//! Axis-alternating 2d-tree for point queries.
//!
//! A 2d-tree is a binary search tree over points in the plane where the
//! comparison axis alternates with depth: the root discriminates on x, its
//! children on y, and so on. Every node implicitly owns a rectangular cell
//! of the plane; cells are never stored, they are re-derived top-down during
//! a search by cutting the parent's cell at the node's point. Both queries
//! prune entire subtrees whose cell provably cannot contribute a result.
//!
//! # Example
//!
//! ```
//! use planum::{KdTree, Point2, Rect2};
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point2::new(0.2, 0.3)).unwrap();
//! tree.insert(Point2::new(0.5, 0.5)).unwrap();
//! tree.insert(Point2::new(0.9, 0.1)).unwrap();
//!
//! let near = tree.nearest(Point2::new(0.85, 0.15)).unwrap();
//! assert_eq!(near, Some(Point2::new(0.9, 0.1)));
//!
//! let inside = tree.range(Rect2::new(0.0, 0.0, 0.5, 0.5)).unwrap();
//! assert_eq!(inside.len(), 2);
//! ```

use crate::bounds::Rect2;
use crate::error::PlanumError;
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// The coordinate axis a tree node discriminates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Returns the other axis.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Compares two points with this axis as the primary key and the other
    /// axis breaking ties.
    ///
    /// The secondary key makes the combined ordering return `Equal` only for
    /// exact duplicates, which is what lets the tree behave as a set.
    fn order<F: Float>(self, a: Point2<F>, b: Point2<F>) -> Ordering {
        let (pa, pb, sa, sb) = match self {
            Axis::X => (a.x, b.x, a.y, b.y),
            Axis::Y => (a.y, b.y, a.x, b.x),
        };
        match pa.partial_cmp(&pb).unwrap_or(Ordering::Equal) {
            Ordering::Equal => sa.partial_cmp(&sb).unwrap_or(Ordering::Equal),
            ord => ord,
        }
    }

    /// The half of `cell` below the cut through `p` along this axis.
    fn lower_cell<F: Float>(self, cell: Rect2<F>, p: Point2<F>) -> Rect2<F> {
        match self {
            Axis::X => Rect2::new(cell.xmin, cell.ymin, p.x, cell.ymax),
            Axis::Y => Rect2::new(cell.xmin, cell.ymin, cell.xmax, p.y),
        }
    }

    /// The half of `cell` above the cut through `p` along this axis.
    fn upper_cell<F: Float>(self, cell: Rect2<F>, p: Point2<F>) -> Rect2<F> {
        match self {
            Axis::X => Rect2::new(p.x, cell.ymin, cell.xmax, cell.ymax),
            Axis::Y => Rect2::new(cell.xmin, p.y, cell.xmax, cell.ymax),
        }
    }
}

/// One node's splitting segment, clipped to the node's implicit cell.
///
/// Produced by [`KdTree::partitions`] for rendering; x-splitting nodes yield
/// vertical segments, y-splitting nodes horizontal ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition<F> {
    /// The point stored at the node.
    pub point: Point2<F>,
    /// The axis the node splits on.
    pub axis: Axis,
    /// One endpoint of the splitting segment.
    pub start: Point2<F>,
    /// The other endpoint of the splitting segment.
    pub end: Point2<F>,
}

/// A node owns its point and, exclusively, its two subtrees. There are no
/// parent links; ancestor cell state travels down the call stack instead.
#[derive(Debug, Clone)]
struct Node<F> {
    point: Point2<F>,
    axis: Axis,
    left: Option<Box<Node<F>>>,
    right: Option<Box<Node<F>>>,
}

impl<F: Float> Node<F> {
    fn new(point: Point2<F>, axis: Axis) -> Self {
        Self {
            point,
            axis,
            left: None,
            right: None,
        }
    }
}

/// A 2d-tree over distinct points in the plane.
///
/// The tree is a *set*: inserting a point equal to one already stored is a
/// no-op. Coordinates are expected in the unit square, but the root cell
/// grows to cover whatever is actually inserted, so points on (or beyond)
/// the nominal domain boundary are never lost to an edge artifact.
///
/// Tree shape depends on insertion order; there is no rebalancing. Insert
/// and membership tests descend iteratively, so a pathological insertion
/// order degrades query time to O(n) but cannot exhaust the stack on
/// mutation. The searches recurse to tree height.
#[derive(Debug, Clone)]
pub struct KdTree<F> {
    root: Option<Box<Node<F>>>,
    len: usize,
    /// Covers every point ever inserted; the root cell of every search.
    bounds: Rect2<F>,
}

impl<F: Float> KdTree<F> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            bounds: Rect2::unit(),
        }
    }

    /// Returns the number of stored points.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no points are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the rectangle all searches start from: the unit square,
    /// expanded to include every point ever inserted.
    #[inline]
    pub fn bounds(&self) -> Rect2<F> {
        self.bounds
    }

    /// Inserts a point, keeping set semantics.
    ///
    /// Inserting a point equal (both coordinates, exactly) to one already
    /// stored changes nothing. Errors if a coordinate is NaN or infinite;
    /// such values break both the node ordering and distance pruning.
    pub fn insert(&mut self, point: Point2<F>) -> Result<(), PlanumError> {
        if !point.is_finite() {
            return Err(PlanumError::NonFinitePoint);
        }
        self.bounds = self.bounds.expand_to_include(point);

        // Iterative descent: the slot is the child link the new node would
        // occupy, and axis tracks what its orientation would be.
        let mut axis = Axis::X;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            axis = node.axis.flip();
            match node.axis.order(point, node.point) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                // Exact duplicate.
                Ordering::Equal => return Ok(()),
            }
        }
        *slot = Some(Box::new(Node::new(point, axis)));
        self.len += 1;
        Ok(())
    }

    /// Returns whether an exactly-equal point is stored.
    ///
    /// Errors if a coordinate is NaN or infinite. An empty tree answers
    /// `false`, not an error.
    pub fn contains(&self, point: Point2<F>) -> Result<bool, PlanumError> {
        if !point.is_finite() {
            return Err(PlanumError::NonFinitePoint);
        }
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match node.axis.order(point, node.point) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Ok(true),
            }
        }
        Ok(false)
    }

    /// Returns every stored point inside `rect`, boundary inclusive.
    ///
    /// The order is the tree's pre-order traversal: deterministic for a
    /// fixed tree, but otherwise unspecified. Errors if `rect` has a
    /// non-finite bound or a minimum above its maximum. An empty tree
    /// yields an empty vector.
    pub fn range(&self, rect: Rect2<F>) -> Result<Vec<Point2<F>>, PlanumError> {
        if !rect.is_finite() {
            return Err(PlanumError::NonFiniteRect);
        }
        if !rect.is_ordered() {
            return Err(PlanumError::InvertedRect);
        }
        let mut found = Vec::new();
        if let Some(root) = &self.root {
            Self::range_recursive(root, rect, self.bounds, &mut found);
        }
        Ok(found)
    }

    /// Collects matches under `node`, whose cell is `cell`.
    ///
    /// A child is visited only if the query rectangle intersects the child's
    /// derived cell; a cell disjoint from the query cannot hold a match.
    fn range_recursive(node: &Node<F>, rect: Rect2<F>, cell: Rect2<F>, found: &mut Vec<Point2<F>>) {
        if rect.contains(node.point) {
            found.push(node.point);
        }
        if let Some(left) = &node.left {
            let lower = node.axis.lower_cell(cell, node.point);
            if rect.intersects(lower) {
                Self::range_recursive(left, rect, lower, found);
            }
        }
        if let Some(right) = &node.right {
            let upper = node.axis.upper_cell(cell, node.point);
            if rect.intersects(upper) {
                Self::range_recursive(right, rect, upper, found);
            }
        }
    }

    /// Returns the stored point closest to `query` under Euclidean distance.
    ///
    /// Ties between equidistant points resolve to whichever candidate the
    /// fixed traversal reaches first. Errors if a coordinate is NaN or
    /// infinite. An empty tree answers `Ok(None)`.
    pub fn nearest(&self, query: Point2<F>) -> Result<Option<Point2<F>>, PlanumError> {
        if !query.is_finite() {
            return Err(PlanumError::NonFinitePoint);
        }
        let root = match &self.root {
            Some(root) => root,
            None => return Ok(None),
        };
        let mut best = root.point;
        let mut best_d2 = query.distance_squared(root.point);
        Self::nearest_recursive(root, query, self.bounds, &mut best, &mut best_d2);
        Ok(Some(best))
    }

    /// Best-first search under `node`, whose cell is `cell`.
    ///
    /// Descends into the child on the query's side of the splitting line
    /// first; the tighter bound that side usually produces lets the distance
    /// test skip the far child entirely. A child is visited only if its cell
    /// is strictly closer to the query than the best point found so far.
    fn nearest_recursive(
        node: &Node<F>,
        query: Point2<F>,
        cell: Rect2<F>,
        best: &mut Point2<F>,
        best_d2: &mut F,
    ) {
        let d2 = query.distance_squared(node.point);
        if d2 < *best_d2 {
            *best = node.point;
            *best_d2 = d2;
        }

        let lower = node.axis.lower_cell(cell, node.point);
        let upper = node.axis.upper_cell(cell, node.point);
        let query_below = match node.axis {
            Axis::X => query.x < node.point.x,
            Axis::Y => query.y < node.point.y,
        };
        let (near, near_cell, far, far_cell) = if query_below {
            (&node.left, lower, &node.right, upper)
        } else {
            (&node.right, upper, &node.left, lower)
        };

        if let Some(child) = near {
            if near_cell.distance_squared_to_point(query) < *best_d2 {
                Self::nearest_recursive(child, query, near_cell, best, best_d2);
            }
        }
        if let Some(child) = far {
            if far_cell.distance_squared_to_point(query) < *best_d2 {
                Self::nearest_recursive(child, query, far_cell, best, best_d2);
            }
        }
    }

    /// Returns every node's splitting segment, clipped to the node's cell.
    ///
    /// Pre-order, one entry per stored point. This is the geometry a
    /// partition diagram draws; see [`crate::io::svg::render_scene`].
    pub fn partitions(&self) -> Vec<Partition<F>> {
        let mut lines = Vec::with_capacity(self.len);
        if let Some(root) = &self.root {
            Self::partitions_recursive(root, self.bounds, &mut lines);
        }
        lines
    }

    fn partitions_recursive(node: &Node<F>, cell: Rect2<F>, lines: &mut Vec<Partition<F>>) {
        let (start, end) = match node.axis {
            Axis::X => (
                Point2::new(node.point.x, cell.ymin),
                Point2::new(node.point.x, cell.ymax),
            ),
            Axis::Y => (
                Point2::new(cell.xmin, node.point.y),
                Point2::new(cell.xmax, node.point.y),
            ),
        };
        lines.push(Partition {
            point: node.point,
            axis: node.axis,
            start,
            end,
        });
        if let Some(left) = &node.left {
            Self::partitions_recursive(left, node.axis.lower_cell(cell, node.point), lines);
        }
        if let Some(right) = &node.right {
            Self::partitions_recursive(right, node.axis.upper_cell(cell, node.point), lines);
        }
    }
}

impl<F: Float> Default for KdTree<F> {
    fn default() -> Self {
        Self::new()
    }
}
