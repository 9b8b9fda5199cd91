//! Edge-to-triangle adjacency.
//!
//! Every finalized triangle registers its three edges. An edge seen once is
//! on the hull; an edge seen twice is interior and has a Voronoi dual. A
//! third registration means the triangle set is not a planar triangulation.

use crate::error::{Result, TriangulationError};
use crate::primitives::{Edge, Triangle};
use num_traits::Float;
use std::collections::HashMap;

/// The finalized triangles that contain one edge, as indices into
/// [`Triangulation::triangles`](crate::Triangulation::triangles).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSlot {
    /// Edge on the boundary: one adjacent triangle.
    Hull(usize),
    /// Edge shared by two triangles, in registration order.
    Interior(usize, usize),
}

impl EdgeSlot {
    #[inline]
    pub fn is_interior(self) -> bool {
        matches!(self, EdgeSlot::Interior(..))
    }
}

/// Map from canonical edge to its adjacent triangles.
///
/// Iteration follows registration order, so repeated runs over the same
/// input report edges in the same order.
#[derive(Debug, Clone)]
pub struct Adjacency<F> {
    index: HashMap<Edge<F>, usize>,
    entries: Vec<(Edge<F>, EdgeSlot)>,
}

impl<F: Float> Adjacency<F> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Registers the three edges of `triangle`, stored at `triangle_index`.
    ///
    /// Fails with [`TriangulationError::EdgeOverShared`] if an edge already
    /// has two triangles. Edges registered before the failing one stay
    /// registered; callers abandon the map on error.
    pub fn register(&mut self, triangle: &Triangle<F>, triangle_index: usize) -> Result<()> {
        for edge in triangle.edges() {
            match self.index.get(edge).copied() {
                None => {
                    self.index.insert(*edge, self.entries.len());
                    self.entries.push((*edge, EdgeSlot::Hull(triangle_index)));
                }
                Some(slot) => {
                    let (_, entry) = &mut self.entries[slot];
                    match *entry {
                        EdgeSlot::Hull(first) => *entry = EdgeSlot::Interior(first, triangle_index),
                        EdgeSlot::Interior(..) => return Err(over_shared(edge)),
                    }
                }
            }
        }
        Ok(())
    }

    /// Looks up the triangles adjacent to `edge`.
    pub fn get(&self, edge: &Edge<F>) -> Option<EdgeSlot> {
        self.index.get(edge).map(|&i| self.entries[i].1)
    }

    /// Number of distinct edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over every distinct edge with its adjacent triangles.
    pub fn iter(&self) -> impl Iterator<Item = (&Edge<F>, EdgeSlot)> + '_ {
        self.entries.iter().map(|(edge, slot)| (edge, *slot))
    }

    /// Iterates over interior edges and their two triangles.
    pub fn interior(&self) -> impl Iterator<Item = (&Edge<F>, usize, usize)> + '_ {
        self.iter().filter_map(|(edge, slot)| match slot {
            EdgeSlot::Interior(a, b) => Some((edge, a, b)),
            EdgeSlot::Hull(_) => None,
        })
    }

    /// Iterates over hull edges and their single triangle.
    pub fn hull(&self) -> impl Iterator<Item = (&Edge<F>, usize)> + '_ {
        self.iter().filter_map(|(edge, slot)| match slot {
            EdgeSlot::Hull(t) => Some((edge, t)),
            EdgeSlot::Interior(..) => None,
        })
    }
}

impl<F: Float> Default for Adjacency<F> {
    fn default() -> Self {
        Self::new()
    }
}

fn over_shared<F: Float>(edge: &Edge<F>) -> TriangulationError {
    let coord = |v: F| v.to_f64().unwrap_or(f64::NAN);
    TriangulationError::EdgeOverShared {
        low_x: coord(edge.low().x),
        low_y: coord(edge.low().y),
        high_x: coord(edge.high().x),
        high_y: coord(edge.high().y),
    }
}
