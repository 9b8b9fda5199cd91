//! Error types for triangulation.

use thiserror::Error;

/// Errors that can occur while building a triangulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    /// Fewer than three points were supplied.
    #[error("at least 3 points are required, got {count}")]
    InsufficientPoints {
        /// Number of points supplied.
        count: usize,
    },

    /// A raw coordinate slice did not hold exactly two values.
    #[error("coordinate {index} has {len} components, expected 2")]
    InvalidArity {
        /// Position of the offending entry in the input.
        index: usize,
        /// Number of components found.
        len: usize,
    },

    /// A coordinate was NaN or infinite.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input.
        index: usize,
    },

    /// Two input points have identical coordinates.
    #[error("points {first} and {second} are coincident")]
    DuplicatePoint {
        /// Input index of the first occurrence.
        first: usize,
        /// Input index of the repeated occurrence.
        second: usize,
    },

    /// All points lie on a single line, so no triangle can be formed.
    #[error("degenerate input: all points are collinear")]
    CollinearPoints,

    /// A triangle was requested whose circumcircle is undefined.
    #[error("degenerate triangle: circumcircle is undefined")]
    DegenerateTriangle,

    /// An edge was requested between two identical points.
    #[error("degenerate edge: endpoints are coincident")]
    CoincidentPoints,

    /// The finalized triangles do not form a single planar triangulation:
    /// their counts break the Euler relation over the output boundary.
    #[error(
        "inconsistent triangulation: {triangles} triangles and {edges} edges over \
         {vertices} vertices with {boundary} boundary edges"
    )]
    InconsistentTopology {
        /// Number of finalized triangles.
        triangles: usize,
        /// Number of distinct edges.
        edges: usize,
        /// Number of distinct vertices used by the triangles.
        vertices: usize,
        /// Number of edges with a single adjacent triangle.
        boundary: usize,
    },

    /// More than two finalized triangles were registered on one edge.
    #[error("edge ({low_x}, {low_y})-({high_x}, {high_y}) is shared by more than two triangles")]
    EdgeOverShared {
        /// Lower endpoint x.
        low_x: f64,
        /// Lower endpoint y.
        low_y: f64,
        /// Upper endpoint x.
        high_x: f64,
        /// Upper endpoint y.
        high_y: f64,
    },

    /// An input point lies strictly inside a triangle's circumcircle.
    #[error("point {point} lies inside the circumcircle of triangle {triangle}")]
    DelaunayViolation {
        /// Index of the triangle in [`Triangulation::triangles`](crate::Triangulation::triangles).
        triangle: usize,
        /// Input index of the offending point.
        point: usize,
    },
}

/// Result alias for triangulation operations.
pub type Result<T> = std::result::Result<T, TriangulationError>;
