//! Axis-aligned rectangle.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned rectangle stored as its four bounds.
///
/// A well-formed rectangle satisfies `xmin <= xmax` and `ymin <= ymax`;
/// construction does not validate this (see [`Rect2::is_ordered`]). All edge
/// tests are inclusive: points on the boundary are contained, and rectangles
/// that merely touch intersect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2<F> {
    pub xmin: F,
    pub ymin: F,
    pub xmax: F,
    pub ymax: F,
}

impl<F: Float> Rect2<F> {
    /// Creates a new rectangle from its bounds.
    ///
    /// Does not validate that minima are below maxima.
    #[inline]
    pub fn new(xmin: F, ymin: F, xmax: F, ymax: F) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// The unit square [0, 1] x [0, 1].
    #[inline]
    pub fn unit() -> Self {
        Self {
            xmin: F::zero(),
            ymin: F::zero(),
            xmax: F::one(),
            ymax: F::one(),
        }
    }

    /// Returns the width of the rectangle.
    #[inline]
    pub fn width(self) -> F {
        self.xmax - self.xmin
    }

    /// Returns the height of the rectangle.
    #[inline]
    pub fn height(self) -> F {
        self.ymax - self.ymin
    }

    /// Returns `true` if every bound is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.xmin.is_finite()
            && self.ymin.is_finite()
            && self.xmax.is_finite()
            && self.ymax.is_finite()
    }

    /// Returns `true` if minima do not exceed maxima on either axis.
    #[inline]
    pub fn is_ordered(self) -> bool {
        self.xmin <= self.xmax && self.ymin <= self.ymax
    }

    /// Returns `true` if this rectangle contains the given point.
    ///
    /// Inclusive on all four edges.
    #[inline]
    pub fn contains(self, p: Point2<F>) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Returns `true` if this rectangle intersects another.
    ///
    /// Touching edges or corners count as intersecting.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.xmin <= other.xmax
            && self.xmax >= other.xmin
            && self.ymin <= other.ymax
            && self.ymax >= other.ymin
    }

    /// Returns a rectangle grown just enough to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            xmin: self.xmin.min(p.x),
            ymin: self.ymin.min(p.y),
            xmax: self.xmax.max(p.x),
            ymax: self.ymax.max(p.y),
        }
    }

    /// Returns the squared distance from a point to this rectangle.
    ///
    /// Zero if the point is inside or on the boundary.
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let dx = if p.x < self.xmin {
            self.xmin - p.x
        } else if p.x > self.xmax {
            p.x - self.xmax
        } else {
            F::zero()
        };

        let dy = if p.y < self.ymin {
            self.ymin - p.y
        } else if p.y > self.ymax {
            p.y - self.ymax
        } else {
            F::zero()
        };

        dx * dx + dy * dy
    }

    /// Returns the distance from a point to this rectangle.
    ///
    /// Zero if the point is inside or on the boundary.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        self.distance_squared_to_point(p).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let r: Rect2<f64> = Rect2::new(0.1, 0.2, 0.8, 0.9);
        assert_eq!(r.xmin, 0.1);
        assert_eq!(r.ymin, 0.2);
        assert_eq!(r.xmax, 0.8);
        assert_eq!(r.ymax, 0.9);
        assert!(r.is_ordered());
    }

    #[test]
    fn test_unit() {
        let r: Rect2<f64> = Rect2::unit();
        assert_eq!(r.width(), 1.0);
        assert_eq!(r.height(), 1.0);
        assert!(r.contains(Point2::new(0.0, 0.0)));
        assert!(r.contains(Point2::new(1.0, 1.0)));
    }

    #[test]
    fn test_is_ordered() {
        assert!(Rect2::new(0.0, 0.0, 0.0, 0.0).is_ordered());
        assert!(!Rect2::new(0.5, 0.0, 0.4, 1.0).is_ordered());
        assert!(!Rect2::new(0.0, 0.9, 1.0, 0.1).is_ordered());
    }

    #[test]
    fn test_is_finite() {
        assert!(Rect2::new(0.0, 0.0, 1.0, 1.0).is_finite());
        assert!(!Rect2::new(0.0, f64::NAN, 1.0, 1.0).is_finite());
        assert!(!Rect2::new(0.0, 0.0, f64::INFINITY, 1.0).is_finite());
    }

    #[test]
    fn test_contains_inclusive_edges() {
        let r: Rect2<f64> = Rect2::new(0.2, 0.2, 0.6, 0.6);

        assert!(r.contains(Point2::new(0.4, 0.4)));
        assert!(r.contains(Point2::new(0.2, 0.4))); // left edge
        assert!(r.contains(Point2::new(0.6, 0.6))); // max corner
        assert!(!r.contains(Point2::new(0.1, 0.4)));
        assert!(!r.contains(Point2::new(0.4, 0.7)));
    }

    #[test]
    fn test_intersects() {
        let a: Rect2<f64> = Rect2::new(0.0, 0.0, 0.5, 0.5);
        let b = Rect2::new(0.3, 0.3, 0.8, 0.8);
        let c = Rect2::new(0.6, 0.6, 0.9, 0.9);

        assert!(a.intersects(b));
        assert!(b.intersects(a));
        assert!(!a.intersects(c));
    }

    #[test]
    fn test_intersects_touching() {
        let a: Rect2<f64> = Rect2::new(0.0, 0.0, 0.5, 0.5);
        let edge = Rect2::new(0.5, 0.0, 1.0, 0.5);
        let corner = Rect2::new(0.5, 0.5, 1.0, 1.0);

        assert!(a.intersects(edge));
        assert!(a.intersects(corner));
    }

    #[test]
    fn test_expand_to_include() {
        let r: Rect2<f64> = Rect2::unit();

        let grown = r.expand_to_include(Point2::new(1.2, 0.5));
        assert_eq!(grown.xmax, 1.2);
        assert_eq!(grown.ymax, 1.0);

        let unchanged = r.expand_to_include(Point2::new(0.5, 0.5));
        assert_eq!(unchanged, r);
    }

    #[test]
    fn test_distance_to_point() {
        let r: Rect2<f64> = Rect2::new(0.0, 0.0, 0.5, 0.5);

        // Inside and on the boundary
        assert_eq!(r.distance_to_point(Point2::new(0.25, 0.25)), 0.0);
        assert_eq!(r.distance_to_point(Point2::new(0.5, 0.5)), 0.0);

        // Outside, aligned with an edge
        assert_eq!(r.distance_to_point(Point2::new(0.75, 0.25)), 0.25);

        // Outside, diagonal (3-4-5 triangle in dyadic coordinates)
        assert_eq!(
            r.distance_squared_to_point(Point2::new(0.875, 1.0)),
            0.390625
        );
        assert_eq!(r.distance_to_point(Point2::new(0.875, 1.0)), 0.625);
    }
}
