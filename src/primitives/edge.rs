//! Canonical undirected edge.

use super::Point2;
use crate::error::{Result, TriangulationError};
use num_traits::Float;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// An undirected segment between two points.
///
/// Endpoints are stored in lexicographic `(x, y)` order, so `Edge::new(a, b)`
/// and `Edge::new(b, a)` compare and hash identically. The length is computed
/// once at construction and does not take part in equality.
#[derive(Debug, Clone, Copy)]
pub struct Edge<F> {
    low: Point2<F>,
    high: Point2<F>,
    length: F,
}

impl<F: Float> Edge<F> {
    /// Creates a canonical edge between `a` and `b`.
    ///
    /// Returns [`TriangulationError::CoincidentPoints`] if `a == b`.
    pub fn new(a: Point2<F>, b: Point2<F>) -> Result<Self> {
        let (low, high) = match a.lex_cmp(&b) {
            Ordering::Less => (a, b),
            Ordering::Greater => (b, a),
            Ordering::Equal => return Err(TriangulationError::CoincidentPoints),
        };
        Ok(Self {
            low,
            high,
            length: low.distance(high),
        })
    }

    /// Lexicographically smaller endpoint.
    #[inline]
    pub fn low(&self) -> Point2<F> {
        self.low
    }

    /// Lexicographically larger endpoint.
    #[inline]
    pub fn high(&self) -> Point2<F> {
        self.high
    }

    #[inline]
    pub fn length(&self) -> F {
        self.length
    }

    #[inline]
    pub fn midpoint(&self) -> Point2<F> {
        self.low.midpoint(self.high)
    }

    /// Returns `true` if `p` is one of the endpoints.
    #[inline]
    pub fn has_endpoint(&self, p: Point2<F>) -> bool {
        self.low == p || self.high == p
    }

}

impl<F: PartialEq> PartialEq for Edge<F> {
    fn eq(&self, other: &Self) -> bool {
        self.low == other.low && self.high == other.high
    }
}

impl<F: Float> Eq for Edge<F> {}

impl<F: Float> Hash for Edge<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.low.hash(state);
        self.high.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_order() {
        let a = Point2::new(1.0_f64, 0.0);
        let b = Point2::new(0.0, 3.0);
        let e = Edge::new(a, b).unwrap();
        assert_eq!(e.low(), b);
        assert_eq!(e.high(), a);
    }

    #[test]
    fn test_tie_on_x_uses_y() {
        let a = Point2::new(2.0_f64, 5.0);
        let b = Point2::new(2.0, -1.0);
        let e = Edge::new(a, b).unwrap();
        assert_eq!(e.low(), b);
        assert_eq!(e.high(), a);
    }

    #[test]
    fn test_direction_independent_equality() {
        let a = Point2::new(0.25_f64, 0.5);
        let b = Point2::new(-3.0, 7.0);
        let ab = Edge::new(a, b).unwrap();
        let ba = Edge::new(b, a).unwrap();
        assert_eq!(ab, ba);

        let mut set = HashSet::new();
        set.insert(ab);
        assert!(set.contains(&ba));
    }

    #[test]
    fn test_length() {
        let e = Edge::new(Point2::new(0.0_f64, 0.0), Point2::new(3.0, 4.0)).unwrap();
        assert_relative_eq!(e.length(), 5.0);
    }

    #[test]
    fn test_coincident_rejected() {
        let p = Point2::new(1.0_f64, 1.0);
        assert_eq!(Edge::new(p, p), Err(TriangulationError::CoincidentPoints));
    }

    #[test]
    fn test_has_endpoint() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(1.0, 1.0);
        let e = Edge::new(a, b).unwrap();
        assert!(e.has_endpoint(a));
        assert!(e.has_endpoint(b));
        assert!(!e.has_endpoint(Point2::new(5.0, 5.0)));
    }
}
