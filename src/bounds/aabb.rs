//! Axis-aligned bounding box and the enclosing perimeter triangle.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Creates an AABB from an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), Self::expand_to_include))
    }

    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the center point of the AABB.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns the vertices of an equilateral triangle that strictly encloses
    /// the box.
    ///
    /// The triangle circumscribes a circle centered on the box with radius
    /// `max(width, height) * scale`. That circle already contains the box
    /// whenever `scale >= 1/√2`, and the triangle's vertices sit at twice the
    /// radius from the center (top, lower-left, lower-right).
    ///
    /// # Example
    ///
    /// ```
    /// use sweepline::bounds::Aabb2;
    /// use sweepline::Point2;
    ///
    /// let aabb = Aabb2::new(Point2::new(0.0_f64, 0.0), Point2::new(2.0, 1.0));
    /// let [top, left, right] = aabb.perimeter_triangle(1.0);
    ///
    /// assert_eq!(top, Point2::new(1.0, 4.5));
    /// assert!(left.x < 0.0 && right.x > 2.0);
    /// assert_eq!(left.y, right.y);
    /// ```
    pub fn perimeter_triangle(self, scale: F) -> [Point2<F>; 3] {
        let center = self.center();
        let radius = self.width().max(self.height()) * scale;
        let two = F::one() + F::one();
        let three = two + F::one();
        let half_base = three.sqrt() * radius;

        [
            Point2::new(center.x, center.y + two * radius),
            Point2::new(center.x - half_base, center.y - radius),
            Point2::new(center.x + half_base, center.y - radius),
        ]
    }
}
