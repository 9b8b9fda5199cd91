//! Conversion from raw coordinate slices.
//!
//! Callers that hold coordinates as untyped slices (one slice per point) go
//! through here so that malformed entries are reported with their position
//! instead of being silently dropped.

use crate::error::{Result, TriangulationError};
use crate::primitives::Point2;
use crate::triangulation::Triangulation;
use num_traits::Float;

/// Converts coordinate slices into points.
///
/// Every slice must hold exactly two finite values `[x, y]`.
///
/// # Example
///
/// ```
/// use sweepline::input::points_from_coords;
/// use sweepline::{Point2, TriangulationError};
///
/// let raw: Vec<Vec<f64>> = vec![vec![0.0, 1.0], vec![2.0, 3.0]];
/// let points = points_from_coords(&raw).unwrap();
/// assert_eq!(points, vec![Point2::new(0.0, 1.0), Point2::new(2.0, 3.0)]);
///
/// let bad: Vec<Vec<f64>> = vec![vec![0.0, 1.0], vec![2.0, 3.0, 4.0]];
/// assert_eq!(
///     points_from_coords(&bad).unwrap_err(),
///     TriangulationError::InvalidArity { index: 1, len: 3 }
/// );
/// ```
pub fn points_from_coords<F, C>(coords: &[C]) -> Result<Vec<Point2<F>>>
where
    F: Float,
    C: AsRef<[F]>,
{
    coords
        .iter()
        .enumerate()
        .map(|(index, c)| match *c.as_ref() {
            [x, y] if x.is_finite() && y.is_finite() => Ok(Point2::new(x, y)),
            [_, _] => Err(TriangulationError::NonFiniteCoordinate { index }),
            ref other => Err(TriangulationError::InvalidArity {
                index,
                len: other.len(),
            }),
        })
        .collect()
}

impl<F: Float> Triangulation<F> {
    /// Triangulates raw `[x, y]` coordinate slices.
    ///
    /// Validation of the slices happens before any geometry is built.
    pub fn from_coords<C: AsRef<[F]>>(coords: &[C]) -> Result<Self> {
        let points = points_from_coords(coords)?;
        Self::new(&points)
    }
}
