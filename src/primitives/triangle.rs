//! Triangle with a precomputed circumcircle.
//!
//! A [`Triangle`] is built once and never mutated: its canonical edges,
//! circumcenter and squared circumradius are all derived at construction.
//! Construction fails instead of producing a NaN or infinite circumcircle, so
//! every stored triangle has a well-defined circle.

use super::{Edge, Point2, Vec2};
use crate::error::{Result, TriangulationError};
use num_traits::Float;
use std::hash::{Hash, Hasher};

/// A triangle with its three canonical edges and circumcircle.
#[derive(Debug, Clone, Copy)]
pub struct Triangle<F> {
    vertices: [Point2<F>; 3],
    edges: [Edge<F>; 3],
    circumcenter: Point2<F>,
    circumradius_squared: F,
}

/// Determinant of the 3×3 matrix with rows `(u_i, v_i, 1)`.
#[inline]
fn det3<F: Float>(u: [F; 3], v: [F; 3]) -> F {
    u[0] * (v[1] - v[2]) - v[0] * (u[1] - u[2]) + (u[1] * v[2] - u[2] * v[1])
}

impl<F: Float> Triangle<F> {
    /// Creates a triangle from three vertices.
    ///
    /// Returns [`TriangulationError::CoincidentPoints`] if two vertices are
    /// equal and [`TriangulationError::DegenerateTriangle`] if the vertices are
    /// collinear (or so close to it that the circumcircle is not finite).
    ///
    /// # Example
    ///
    /// ```
    /// use sweepline::{Point2, Triangle};
    ///
    /// let tri = Triangle::new(
    ///     Point2::new(0.0_f64, 0.0),
    ///     Point2::new(2.0, 0.0),
    ///     Point2::new(0.0, 2.0),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(tri.circumcenter(), Point2::new(1.0, 1.0));
    /// assert!(tri.in_circumcircle(Point2::new(1.5, 1.5)));
    /// assert!(!tri.in_circumcircle(Point2::new(3.0, 3.0)));
    /// ```
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Result<Self> {
        let edges = [Edge::new(a, b)?, Edge::new(b, c)?, Edge::new(c, a)?];

        // Evaluated with `a` at the origin; absolute coordinates lose the
        // circumcenter to cancellation once x² + y² dwarfs the triangle.
        let ab = b - a;
        let ac = c - a;
        let zero = F::zero();
        let xs = [zero, ab.x, ac.x];
        let ys = [zero, ab.y, ac.y];
        let norms = [zero, ab.magnitude_squared(), ac.magnitude_squared()];

        let axy = det3(xs, ys);
        if axy == zero {
            return Err(TriangulationError::DegenerateTriangle);
        }
        let bx = -det3(norms, ys);
        let by = det3(norms, xs);

        let two_axy = (F::one() + F::one()) * axy;
        let circumcenter = a + Vec2::new(-bx / two_axy, -by / two_axy);
        if !circumcenter.is_finite() {
            return Err(TriangulationError::DegenerateTriangle);
        }

        let circumradius_squared = heron_circumradius_squared(
            edges[0].length(),
            edges[1].length(),
            edges[2].length(),
        );
        if !circumradius_squared.is_finite() || circumradius_squared <= F::zero() {
            return Err(TriangulationError::DegenerateTriangle);
        }

        Ok(Self {
            vertices: [a, b, c],
            edges,
            circumcenter,
            circumradius_squared,
        })
    }

    /// Creates a triangle from an edge and a third point.
    ///
    /// The edge's endpoints become the first two vertices.
    #[inline]
    pub fn from_edge(edge: &Edge<F>, p: Point2<F>) -> Result<Self> {
        Self::new(edge.low(), edge.high(), p)
    }

    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        self.vertices
    }

    /// The canonical edges `ab`, `bc`, `ca`.
    #[inline]
    pub fn edges(&self) -> &[Edge<F>; 3] {
        &self.edges
    }

    #[inline]
    pub fn circumcenter(&self) -> Point2<F> {
        self.circumcenter
    }

    #[inline]
    pub fn circumradius_squared(&self) -> F {
        self.circumradius_squared
    }

    /// Returns `true` if `p` lies strictly inside the circumcircle.
    ///
    /// Points exactly on the circle are outside.
    #[inline]
    pub fn in_circumcircle(&self, p: Point2<F>) -> bool {
        p.distance_squared(self.circumcenter) < self.circumradius_squared
    }

    /// Returns `true` if the circumcircle ends strictly left of `x`.
    ///
    /// Once the sweep has passed such an `x`, no later point can fall inside
    /// the circle.
    #[inline]
    pub fn circumcircle_left_of(&self, x: F) -> bool {
        let dx = x - self.circumcenter.x;
        self.circumradius_squared - dx * dx < F::zero()
    }

    #[inline]
    pub fn contains_vertex(&self, p: Point2<F>) -> bool {
        self.vertices.contains(&p)
    }

    /// Returns `true` if any vertex of `other` is also a vertex of `self`.
    pub fn has_shared_vertex(&self, other: &Self) -> bool {
        other.vertices.iter().any(|&v| self.contains_vertex(v))
    }

    /// Returns the edge common to both triangles, if any.
    pub fn shared_edge(&self, other: &Self) -> Option<Edge<F>> {
        self.edges
            .iter()
            .find(|e| other.edges.contains(e))
            .copied()
    }

    /// Returns the vertex not on `edge`, or `None` if `edge` is not one of
    /// this triangle's edges.
    pub fn opposite_vertex(&self, edge: &Edge<F>) -> Option<Point2<F>> {
        if !self.edges.contains(edge) {
            return None;
        }
        self.vertices.iter().find(|&&v| !edge.has_endpoint(v)).copied()
    }

    fn sorted_vertices(&self) -> [Point2<F>; 3] {
        let mut v = self.vertices;
        v.sort_by(|p, q| p.lex_cmp(q));
        v
    }
}

/// Squared circumradius from the three side lengths.
///
/// `R² = (ab·bc·ca)² / ((ab+bc+ca)(bc+ca−ab)(ab+ca−bc)(ab+bc−ca))`
///
/// The denominator is `16·area²`, so the result is non-positive or infinite
/// for collinear sides.
pub fn heron_circumradius_squared<F: Float>(ab: F, bc: F, ca: F) -> F {
    let product = ab * bc * ca;
    let denominator = (ab + bc + ca) * (bc + ca - ab) * (ab + ca - bc) * (ab + bc - ca);
    product * product / denominator
}

impl<F: Float> PartialEq for Triangle<F> {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_vertices() == other.sorted_vertices()
    }
}

impl<F: Float> Eq for Triangle<F> {}

impl<F: Float> Hash for Triangle<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_vertices().hash(state);
    }
}
