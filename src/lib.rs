//! sweepline - Delaunay triangulation by x-sorted sweep, and its Voronoi dual
//!
//! Points are inserted left to right into a working set of open triangles.
//! Triangles the sweep has moved past are finalized early, the rest are
//! flushed at the end, and an edge adjacency map built along the way yields
//! both the Delaunay edges and the Voronoi segments.
//!
//! ```
//! use sweepline::{Point2, Triangulation};
//!
//! let points = [
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(2.0, 3.0),
//!     Point2::new(2.0, -2.0),
//! ];
//! let tri = Triangulation::new(&points).unwrap();
//!
//! assert_eq!(tri.triangles().len(), 2);
//! assert_eq!(tri.voronoi_segments().len(), 1);
//! ```

pub mod bounds;
pub mod error;
pub mod input;
pub mod predicates;
pub mod primitives;
pub mod triangulation;

pub use error::{Result, TriangulationError};
pub use primitives::{Edge, Point2, Triangle, Vec2};
pub use triangulation::{
    DuplicatePolicy, KeyedTriangulation, SweepOptions, SweepStats, Triangulation, VoronoiRay,
    VoronoiSegment,
};
