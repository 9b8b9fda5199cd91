//! Triangulation over caller-identified points.

use super::{SweepOptions, Triangulation};
use crate::error::Result;
use crate::primitives::Point2;
use num_traits::Float;

/// A [`Triangulation`] whose points carry an opaque caller key.
///
/// Keys are never inspected; they are stored alongside the points and handed
/// back in place of indices.
///
/// # Example
///
/// ```
/// use sweepline::{KeyedTriangulation, Point2};
///
/// let sites = vec![
///     ("north", Point2::new(0.0_f64, 1.0)),
///     ("east", Point2::new(1.0, 0.0)),
///     ("west", Point2::new(-1.0, 0.0)),
/// ];
///
/// let tri = KeyedTriangulation::new(sites).unwrap();
/// let edges = tri.delaunay_edges();
///
/// assert_eq!(edges.len(), 3);
/// assert!(edges.iter().any(|&(a, b)| (a, b) == ("north", "east") || (a, b) == ("east", "north")));
/// ```
#[derive(Debug, Clone)]
pub struct KeyedTriangulation<K, F> {
    keys: Vec<K>,
    inner: Triangulation<F>,
}

impl<K: Clone, F: Float> KeyedTriangulation<K, F> {
    /// Triangulates keyed points with default options.
    pub fn new<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Point2<F>)>,
    {
        Self::with_options(items, SweepOptions::default())
    }

    /// Triangulates keyed points with the given options.
    pub fn with_options<I>(items: I, options: SweepOptions<F>) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Point2<F>)>,
    {
        let (keys, points): (Vec<K>, Vec<Point2<F>>) = items.into_iter().unzip();
        let inner = Triangulation::with_options(&points, options)?;
        Ok(Self { keys, inner })
    }

    /// The underlying index-based triangulation.
    #[inline]
    pub fn triangulation(&self) -> &Triangulation<F> {
        &self.inner
    }

    /// Key of the input point at `index`.
    #[inline]
    pub fn key(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    /// Every distinct Delaunay edge as a pair of keys.
    pub fn delaunay_edges(&self) -> Vec<(K, K)> {
        self.resolve(self.inner.delaunay_edges())
    }

    /// Hull edges as pairs of keys.
    pub fn hull_edges(&self) -> Vec<(K, K)> {
        self.resolve(self.inner.hull_edges())
    }

    fn resolve(&self, pairs: Vec<(usize, usize)>) -> Vec<(K, K)> {
        pairs
            .into_iter()
            .filter_map(|(a, b)| Some((self.key(a)?.clone(), self.key(b)?.clone())))
            .collect()
    }
}
