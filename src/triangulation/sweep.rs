//! Sweep-line incremental construction.
//!
//! Points are inserted in ascending `(x, y)` order into a working set of
//! open triangles seeded with a perimeter triangle that encloses the input.
//! For each point:
//!
//! 1. Open triangles whose circumcircle lies entirely left of the point are
//!    finalized: no later point can reach them.
//! 2. Open triangles whose circumcircle contains the point are dropped and
//!    their edges collected.
//! 3. Edges collected exactly once bound the hole left behind; each is joined
//!    to the point to form a new open triangle.
//!
//! After the last point every remaining open triangle is finalized. Finalized
//! triangles that share a vertex with the perimeter triangle are discarded.
//!
//! # Complexity
//!
//! - Time: O(n²) worst case; the open set stays near the sweep front for
//!   well-spread input
//! - Space: O(n)

use super::adjacency::Adjacency;
use crate::bounds::Aabb2;
use crate::error::{Result, TriangulationError};
use crate::primitives::{Edge, Point2, Triangle};
use num_traits::Float;
use std::collections::HashMap;
use tracing::trace;

/// Counters collected during a sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Triangles finalized because the sweep passed their circumcircle.
    pub closed_early: usize,
    /// Triangles finalized in the flush after the last point.
    pub flushed: usize,
    /// Triangles dropped because a point fell inside their circumcircle.
    pub invalidated: usize,
    /// Triangles created by joining a point to a hole boundary.
    pub created: usize,
    /// Finalized triangles discarded for touching the perimeter triangle.
    pub excluded: usize,
}

/// Finalized triangles and their adjacency.
#[derive(Debug)]
pub(crate) struct SweepOutput<F> {
    pub triangles: Vec<Triangle<F>>,
    pub adjacency: Adjacency<F>,
    pub stats: SweepStats,
}

struct Sweep<F> {
    perimeter: Triangle<F>,
    open: Vec<Triangle<F>>,
    closed: Vec<Triangle<F>>,
    adjacency: Adjacency<F>,
    stats: SweepStats,
}

/// Triangulates `points`, which must be finite, pairwise distinct and
/// sorted by [`Point2::lex_cmp`].
pub(crate) fn sweep<F: Float>(points: &[Point2<F>], perimeter_scale: F) -> Result<SweepOutput<F>> {
    let aabb = Aabb2::from_points(points.iter().copied())
        .ok_or(TriangulationError::InsufficientPoints { count: 0 })?;
    let [a, b, c] = aabb.perimeter_triangle(perimeter_scale);
    let perimeter = Triangle::new(a, b, c)?;

    let mut state = Sweep {
        perimeter,
        open: vec![perimeter],
        closed: Vec::with_capacity(2 * points.len()),
        adjacency: Adjacency::new(),
        stats: SweepStats::default(),
    };

    for &p in points {
        state.insert(p)?;
    }
    state.flush()?;

    Ok(SweepOutput {
        triangles: state.closed,
        adjacency: state.adjacency,
        stats: state.stats,
    })
}

impl<F: Float> Sweep<F> {
    fn insert(&mut self, p: Point2<F>) -> Result<()> {
        let open = std::mem::take(&mut self.open);
        let mut kept = Vec::with_capacity(open.len() + 2);
        let mut hole_edges: Vec<Edge<F>> = Vec::new();
        let mut closed_here = 0;

        for tri in open {
            if tri.circumcircle_left_of(p.x) {
                self.finalize(tri)?;
                closed_here += 1;
            } else if tri.in_circumcircle(p) {
                hole_edges.extend_from_slice(tri.edges());
                self.stats.invalidated += 1;
            } else {
                kept.push(tri);
            }
        }

        let boundary = unique_edges(&hole_edges);
        for edge in &boundary {
            kept.push(Triangle::from_edge(edge, p)?);
        }

        self.stats.closed_early += closed_here;
        self.stats.created += boundary.len();
        trace!(
            x = p.x.to_f64(),
            y = p.y.to_f64(),
            closed = closed_here,
            invalidated = hole_edges.len() / 3,
            created = boundary.len(),
            open = kept.len(),
            "inserted point"
        );

        self.open = kept;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let open = std::mem::take(&mut self.open);
        self.stats.flushed += open.len();
        for tri in open {
            self.finalize(tri)?;
        }
        Ok(())
    }

    fn finalize(&mut self, tri: Triangle<F>) -> Result<()> {
        if tri.has_shared_vertex(&self.perimeter) {
            self.stats.excluded += 1;
            return Ok(());
        }
        self.adjacency.register(&tri, self.closed.len())?;
        self.closed.push(tri);
        Ok(())
    }
}

/// Returns the edges that occur exactly once in `edges`, in first-seen order.
///
/// An edge collected from two dropped triangles lies inside the hole and
/// cancels. Cancellation is by exact count, so an edge seen three or more
/// times is dropped too.
pub(crate) fn unique_edges<F: Float>(edges: &[Edge<F>]) -> Vec<Edge<F>> {
    let mut counts: HashMap<Edge<F>, usize> = HashMap::with_capacity(edges.len());
    for edge in edges {
        *counts.entry(*edge).or_insert(0) += 1;
    }
    edges
        .iter()
        .filter(|edge| counts.get(edge) == Some(&1))
        .copied()
        .collect()
}
