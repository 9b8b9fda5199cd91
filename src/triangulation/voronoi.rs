//! Voronoi dual of a finished triangulation.
//!
//! - Each triangle's circumcenter is a Voronoi vertex.
//! - Each interior edge (two triangles) yields a finite segment between the
//!   two circumcenters. Segments whose endpoints coincide, which happens when
//!   the two triangles are cocircular, are omitted.
//! - Each hull edge (one triangle) yields a ray leaving the circumcenter,
//!   perpendicular to the edge and pointing away from the triangle.

use super::adjacency::Adjacency;
use crate::primitives::{Edge, Point2, Triangle, Vec2};
use num_traits::Float;

/// A finite Voronoi edge between two circumcenters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiSegment<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> VoronoiSegment<F> {
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn length(&self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the endpoints as raw coordinate pairs.
    #[inline]
    pub fn to_coords(&self) -> ((F, F), (F, F)) {
        (self.start.to_tuple(), self.end.to_tuple())
    }
}

/// An unbounded Voronoi edge dual to a hull edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiRay<F> {
    /// Circumcenter of the hull triangle.
    pub origin: Point2<F>,
    /// Unit direction, perpendicular to the hull edge and pointing outward.
    pub direction: Vec2<F>,
    /// The hull edge this ray is dual to.
    pub edge: Edge<F>,
}

/// Finite segments for every interior edge with distinct circumcenters.
pub(crate) fn segments<F: Float>(
    triangles: &[Triangle<F>],
    adjacency: &Adjacency<F>,
) -> Vec<VoronoiSegment<F>> {
    adjacency
        .interior()
        .filter_map(|(_, a, b)| {
            let start = triangles.get(a)?.circumcenter();
            let end = triangles.get(b)?.circumcenter();
            (start != end).then(|| VoronoiSegment::new(start, end))
        })
        .collect()
}

/// Outward rays for every hull edge.
pub(crate) fn rays<F: Float>(
    triangles: &[Triangle<F>],
    adjacency: &Adjacency<F>,
) -> Vec<VoronoiRay<F>> {
    adjacency
        .hull()
        .filter_map(|(edge, t)| {
            let tri = triangles.get(t)?;
            let third = tri.opposite_vertex(edge)?;

            let perp = (edge.high() - edge.low()).perpendicular();
            let to_third = third - edge.midpoint();
            let outward = if perp.dot(to_third) > F::zero() { -perp } else { perp };

            Some(VoronoiRay {
                origin: tri.circumcenter(),
                direction: outward.normalize()?,
                edge: *edge,
            })
        })
        .collect()
}
