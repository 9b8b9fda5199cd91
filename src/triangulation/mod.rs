//! Delaunay triangulation of a point set and its Voronoi dual.
//!
//! [`Triangulation`] runs the sweep once at construction and keeps the
//! finalized triangles plus an edge adjacency map. Everything else, from
//! Delaunay edges to Voronoi segments, is extracted from those on demand.
//!
//! # Example
//!
//! ```
//! use sweepline::{Point2, Triangulation};
//!
//! let points = vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(0.5, 0.5),
//! ];
//!
//! let tri = Triangulation::new(&points).unwrap();
//!
//! assert_eq!(tri.triangles().len(), 4);
//! assert_eq!(tri.delaunay_edges().len(), 8);
//! assert_eq!(tri.voronoi_segments().len(), 4);
//! ```

mod adjacency;
mod keyed;
mod options;
mod sweep;
mod voronoi;

pub use adjacency::{Adjacency, EdgeSlot};
pub use keyed::KeyedTriangulation;
pub use options::{DuplicatePolicy, SweepOptions};
pub use sweep::SweepStats;
pub use voronoi::{VoronoiRay, VoronoiSegment};

use crate::error::{Result, TriangulationError};
use crate::predicates::{all_collinear, in_circle};
use crate::primitives::{Edge, Point2, Triangle};
use num_traits::Float;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// A Delaunay triangulation built by a single sweep.
///
/// Input points are identified by their position in the slice passed to the
/// constructor. Every index-based result refers back to that slice.
#[derive(Debug, Clone)]
pub struct Triangulation<F> {
    points: Vec<Point2<F>>,
    index_of: HashMap<Point2<F>, usize>,
    triangles: Vec<Triangle<F>>,
    adjacency: Adjacency<F>,
    stats: SweepStats,
}

impl<F: Float> Triangulation<F> {
    /// Triangulates `points` with default options.
    ///
    /// # Errors
    ///
    /// - [`TriangulationError::InsufficientPoints`] for fewer than 3 points
    /// - [`TriangulationError::NonFiniteCoordinate`] for NaN or infinite input
    /// - [`TriangulationError::DuplicatePoint`] for coincident points
    /// - [`TriangulationError::CollinearPoints`] if no triangle can be formed
    /// - [`TriangulationError::DegenerateTriangle`] if rounding produces a
    ///   triangle without a finite circumcircle
    /// - [`TriangulationError::EdgeOverShared`] or
    ///   [`TriangulationError::InconsistentTopology`] if rounding on nearly
    ///   cocircular input produced overlapping triangles
    ///
    /// # Example
    ///
    /// ```
    /// use sweepline::{Point2, Triangulation, TriangulationError};
    ///
    /// let line = [
    ///     Point2::new(0.0_f64, 0.0),
    ///     Point2::new(1.0, 0.0),
    ///     Point2::new(2.0, 0.0),
    /// ];
    /// assert_eq!(
    ///     Triangulation::new(&line).unwrap_err(),
    ///     TriangulationError::CollinearPoints
    /// );
    /// ```
    pub fn new(points: &[Point2<F>]) -> Result<Self> {
        Self::with_options(points, SweepOptions::default())
    }

    /// Triangulates `points` with the given options.
    pub fn with_options(points: &[Point2<F>], options: SweepOptions<F>) -> Result<Self> {
        if points.len() < 3 {
            return Err(TriangulationError::InsufficientPoints {
                count: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(TriangulationError::NonFiniteCoordinate { index });
        }

        let mut index_of: HashMap<Point2<F>, usize> = HashMap::with_capacity(points.len());
        let mut unique: Vec<Point2<F>> = Vec::with_capacity(points.len());
        for (i, &p) in points.iter().enumerate() {
            match index_of.entry(p) {
                Entry::Vacant(slot) => {
                    slot.insert(i);
                    unique.push(p);
                }
                Entry::Occupied(slot) => match options.duplicate_policy {
                    DuplicatePolicy::Reject => {
                        return Err(TriangulationError::DuplicatePoint {
                            first: *slot.get(),
                            second: i,
                        });
                    }
                    DuplicatePolicy::KeepFirst => {
                        warn!(first = *slot.get(), second = i, "ignoring duplicate point");
                    }
                },
            }
        }

        if unique.len() < 3 {
            return Err(TriangulationError::InsufficientPoints {
                count: unique.len(),
            });
        }
        if all_collinear(&unique) {
            warn!(points = unique.len(), "rejecting collinear input");
            return Err(TriangulationError::CollinearPoints);
        }

        unique.sort_by(|a, b| a.lex_cmp(b));
        let output = sweep::sweep(&unique, options.effective_perimeter_scale())?;
        if output.triangles.is_empty() {
            warn!(points = unique.len(), "no triangle survived perimeter removal");
            return Err(TriangulationError::CollinearPoints);
        }
        check_topology(&output.triangles, &output.adjacency)?;

        debug!(
            points = unique.len(),
            triangles = output.triangles.len(),
            edges = output.adjacency.len(),
            closed_early = output.stats.closed_early,
            excluded = output.stats.excluded,
            "triangulation complete"
        );

        let triangulation = Self {
            points: points.to_vec(),
            index_of,
            triangles: output.triangles,
            adjacency: output.adjacency,
            stats: output.stats,
        };

        if options.check_delaunay {
            if let Some((triangle, point)) = triangulation.delaunay_violations().into_iter().next() {
                return Err(TriangulationError::DelaunayViolation { triangle, point });
            }
        }

        Ok(triangulation)
    }

    /// The input points, in input order.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Input index of the point at `p`, if it is an input point.
    ///
    /// With [`DuplicatePolicy::KeepFirst`] this is the first occurrence.
    #[inline]
    pub fn index_of(&self, p: Point2<F>) -> Option<usize> {
        self.index_of.get(&p).copied()
    }

    /// The finalized triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle<F>] {
        &self.triangles
    }

    /// The triangles as triples of input indices.
    pub fn triangle_indices(&self) -> Vec<[usize; 3]> {
        self.triangles
            .iter()
            .filter_map(|t| {
                let [a, b, c] = t.vertices();
                Some([self.index_of(a)?, self.index_of(b)?, self.index_of(c)?])
            })
            .collect()
    }

    /// Edge-to-triangle adjacency.
    #[inline]
    pub fn adjacency(&self) -> &Adjacency<F> {
        &self.adjacency
    }

    /// Counters from the sweep.
    #[inline]
    pub fn stats(&self) -> SweepStats {
        self.stats
    }

    /// Every distinct triangulation edge, in canonical form.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<F>> + '_ {
        self.adjacency.iter().map(|(edge, _)| edge)
    }

    /// Every distinct Delaunay edge as a pair of input indices, smaller index
    /// first.
    pub fn delaunay_edges(&self) -> Vec<(usize, usize)> {
        self.edges().filter_map(|e| self.index_pair(e)).collect()
    }

    /// Edges on the boundary of the triangulation as pairs of input indices.
    pub fn hull_edges(&self) -> Vec<(usize, usize)> {
        self.adjacency
            .hull()
            .filter_map(|(e, _)| self.index_pair(e))
            .collect()
    }

    /// Number of edges shared by two triangles.
    pub fn interior_edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .filter(|(_, slot)| slot.is_interior())
            .count()
    }

    /// Finite Voronoi edges. Zero-length edges between cocircular triangles
    /// are omitted.
    pub fn voronoi_segments(&self) -> Vec<VoronoiSegment<F>> {
        voronoi::segments(&self.triangles, &self.adjacency)
    }

    /// Finite Voronoi edges as raw coordinate pairs.
    pub fn voronoi_segment_coords(&self) -> Vec<((F, F), (F, F))> {
        self.voronoi_segments().iter().map(|s| s.to_coords()).collect()
    }

    /// Unbounded Voronoi edges, one per hull edge.
    pub fn voronoi_rays(&self) -> Vec<VoronoiRay<F>> {
        voronoi::rays(&self.triangles, &self.adjacency)
    }

    /// Brute-force check of the empty-circumcircle property.
    ///
    /// Returns `(triangle index, input point index)` for every input point
    /// strictly inside a triangle's circumcircle. Uses the determinant
    /// in-circle test rather than the stored circumcircle. O(n · t).
    pub fn delaunay_violations(&self) -> Vec<(usize, usize)> {
        let mut violations = Vec::new();
        for (ti, tri) in self.triangles.iter().enumerate() {
            let [a, b, c] = tri.vertices();
            for (&p, &pi) in &self.index_of {
                if !tri.contains_vertex(p) && in_circle(a, b, c, p) {
                    violations.push((ti, pi));
                }
            }
        }
        violations.sort_unstable();
        violations
    }

    fn index_pair(&self, edge: &Edge<F>) -> Option<(usize, usize)> {
        let a = self.index_of(edge.low())?;
        let b = self.index_of(edge.high())?;
        Some((a.min(b), a.max(b)))
    }
}

/// Checks `T = 2V − B − 2` and `E = 3V − B − 3` over the produced output.
///
/// Both hold for any set of triangles that tile a simply connected region
/// without overlap. Overlapping triangles from inconsistent in-circle
/// decisions add triangles without adding vertices and break them.
fn check_topology<F: Float>(triangles: &[Triangle<F>], adjacency: &Adjacency<F>) -> Result<()> {
    let vertices: HashSet<Point2<F>> = triangles.iter().flat_map(|t| t.vertices()).collect();
    let v = vertices.len();
    let b = adjacency.hull().count();
    let t = triangles.len();
    let e = adjacency.len();

    if t + b + 2 != 2 * v || e + b + 3 != 3 * v {
        warn!(triangles = t, edges = e, vertices = v, boundary = b, "euler relation violated");
        return Err(TriangulationError::InconsistentTopology {
            triangles: t,
            edges: e,
            vertices: v,
            boundary: b,
        });
    }
    Ok(())
}
