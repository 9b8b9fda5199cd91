//! Determinant-based geometric predicates.
//!
//! These work directly on vertex coordinates and do not depend on a stored
//! circumcircle. The sweep itself uses [`Triangle::in_circumcircle`]; these
//! predicates back input screening (collinearity) and after-the-fact
//! validation of the empty-circumcircle property.
//!
//! Tolerances are always explicit. Pass `0` for an exact sign test.
//!
//! [`Triangle::in_circumcircle`]: crate::Triangle::in_circumcircle

use crate::primitives::Point2;
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points turn left (positive signed area).
    CounterClockwise,
    /// Points turn right (negative signed area).
    Clockwise,
    /// Points are collinear within tolerance.
    Collinear,
}

/// Computes the orientation of `a`, `b`, `c`.
///
/// `eps` is compared against the absolute cross product (twice the signed
/// area).
///
/// # Example
///
/// ```
/// use sweepline::predicates::{orient2d, Orientation};
/// use sweepline::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// assert_eq!(orient2d(a, b, Point2::new(0.5, 1.0), 0.0), Orientation::CounterClockwise);
/// assert_eq!(orient2d(a, b, Point2::new(2.0, 0.0), 0.0), Orientation::Collinear);
/// ```
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = (b - a).cross(c - a);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` if every point lies on the line through the first two
/// distinct points (exact test).
pub fn all_collinear<F: Float>(points: &[Point2<F>]) -> bool {
    let Some(&first) = points.first() else {
        return true;
    };
    let Some(&second) = points.iter().find(|&&p| p != first) else {
        return true;
    };
    points
        .iter()
        .all(|&p| orient2d(first, second, p, F::zero()) == Orientation::Collinear)
}

/// Determinant in-circle test.
///
/// Returns `true` if `p` lies strictly inside the circle through `a`, `b`,
/// `c`, regardless of the triangle's winding. Collinear triangles have no
/// interior, so the result is `false` for them.
///
/// # Example
///
/// ```
/// use sweepline::predicates::in_circle;
/// use sweepline::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.0, 1.0);
///
/// assert!(in_circle(a, b, c, Point2::new(0.5, 0.5)));
/// // The fourth corner of the unit square is on the circle, not inside.
/// assert!(!in_circle(a, b, c, Point2::new(1.0, 1.0)));
/// ```
pub fn in_circle<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, p: Point2<F>) -> bool {
    // | ax-px  ay-py  (ax-px)²+(ay-py)² |
    // | bx-px  by-py  (bx-px)²+(by-py)² |
    // | cx-px  cy-py  (cx-px)²+(cy-py)² |
    let da = a - p;
    let db = b - p;
    let dc = c - p;

    let aa = da.magnitude_squared();
    let bb = db.magnitude_squared();
    let cc = dc.magnitude_squared();

    let det = da.x * (db.y * cc - dc.y * bb) - da.y * (db.x * cc - dc.x * bb)
        + aa * (db.x * dc.y - dc.x * db.y);

    match orient2d(a, b, c, F::zero()) {
        Orientation::CounterClockwise => det > F::zero(),
        Orientation::Clockwise => det < F::zero(),
        Orientation::Collinear => false,
    }
}
