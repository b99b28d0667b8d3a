//! Brute-force point set baseline.
//!
//! Same contract as [`KdTree`](crate::spatial::KdTree), answered by linear
//! scan over an ordered list. Slow on purpose: it is the obviously-correct
//! side of every oracle comparison in the tests and benchmarks.

use crate::bounds::Rect2;
use crate::error::PlanumError;
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// Bottom-to-top, left-to-right reading order: y primary, x breaking ties.
fn natural_order<F: Float>(a: Point2<F>, b: Point2<F>) -> Ordering {
    match a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal),
        ord => ord,
    }
}

/// An ordered set of distinct 2D points with linear-scan queries.
#[derive(Debug, Clone)]
pub struct PointSet<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> PointSet<F> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Returns the number of stored points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no points are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The stored points in their natural order.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Inserts a point; a duplicate changes nothing.
    ///
    /// Errors if a coordinate is NaN or infinite.
    pub fn insert(&mut self, point: Point2<F>) -> Result<(), PlanumError> {
        if !point.is_finite() {
            return Err(PlanumError::NonFinitePoint);
        }
        if let Err(slot) = self
            .points
            .binary_search_by(|stored| natural_order(*stored, point))
        {
            self.points.insert(slot, point);
        }
        Ok(())
    }

    /// Returns whether an exactly-equal point is stored.
    ///
    /// Errors if a coordinate is NaN or infinite.
    pub fn contains(&self, point: Point2<F>) -> Result<bool, PlanumError> {
        if !point.is_finite() {
            return Err(PlanumError::NonFinitePoint);
        }
        Ok(self
            .points
            .binary_search_by(|stored| natural_order(*stored, point))
            .is_ok())
    }

    /// Returns every stored point inside `rect`, boundary inclusive.
    ///
    /// Errors if `rect` has a non-finite bound or a minimum above its
    /// maximum.
    pub fn range(&self, rect: Rect2<F>) -> Result<Vec<Point2<F>>, PlanumError> {
        if !rect.is_finite() {
            return Err(PlanumError::NonFiniteRect);
        }
        if !rect.is_ordered() {
            return Err(PlanumError::InvertedRect);
        }
        Ok(self
            .points
            .iter()
            .copied()
            .filter(|p| rect.contains(*p))
            .collect())
    }

    /// Returns the stored point closest to `query`, scanning every point.
    ///
    /// Errors if a coordinate is NaN or infinite. An empty set answers
    /// `Ok(None)`.
    pub fn nearest(&self, query: Point2<F>) -> Result<Option<Point2<F>>, PlanumError> {
        if !query.is_finite() {
            return Err(PlanumError::NonFinitePoint);
        }
        let mut best: Option<(Point2<F>, F)> = None;
        for &p in &self.points {
            let d2 = query.distance_squared(p);
            if best.map_or(true, |(_, best_d2)| d2 < best_d2) {
                best = Some((p, d2));
            }
        }
        Ok(best.map(|(p, _)| p))
    }
}

impl<F: Float> Default for PointSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> PointSet<f64> {
        let mut set = PointSet::new();
        for p in [
            Point2::new(0.2, 0.3),
            Point2::new(0.5, 0.5),
            Point2::new(0.1, 0.9),
            Point2::new(0.9, 0.1),
        ] {
            set.insert(p).unwrap();
        }
        set
    }

    #[test]
    fn test_empty() {
        let set: PointSet<f64> = PointSet::new();
        assert!(set.is_empty());
        assert!(!set.contains(Point2::new(0.5, 0.5)).unwrap());
        assert_eq!(set.nearest(Point2::new(0.5, 0.5)).unwrap(), None);
        assert!(set.range(Rect2::unit()).unwrap().is_empty());
    }

    #[test]
    fn test_insert_dedupes() {
        let mut set = sample_set();
        set.insert(Point2::new(0.5, 0.5)).unwrap();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_points_are_ordered() {
        let set = sample_set();
        let ys: Vec<f64> = set.points().iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![0.1, 0.3, 0.5, 0.9]);
    }

    #[test]
    fn test_contains() {
        let set = sample_set();
        assert!(set.contains(Point2::new(0.9, 0.1)).unwrap());
        assert!(!set.contains(Point2::new(0.5, 0.6)).unwrap());
    }

    #[test]
    fn test_range() {
        let set = sample_set();
        let inside = set.range(Rect2::new(0.0, 0.0, 0.5, 0.5)).unwrap();
        assert_eq!(inside.len(), 2);
        assert!(inside.contains(&Point2::new(0.2, 0.3)));
        assert!(inside.contains(&Point2::new(0.5, 0.5)));
    }

    #[test]
    fn test_nearest() {
        let set = sample_set();
        assert_eq!(
            set.nearest(Point2::new(0.85, 0.15)).unwrap(),
            Some(Point2::new(0.9, 0.1))
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        let mut set = sample_set();
        assert_eq!(
            set.insert(Point2::new(f64::NAN, 0.0)),
            Err(PlanumError::NonFinitePoint)
        );
        assert_eq!(set.len(), 4);
        assert_eq!(
            set.range(Rect2::new(0.5, 0.0, 0.0, 1.0)),
            Err(PlanumError::InvertedRect)
        );
    }
}
