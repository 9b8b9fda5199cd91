//! Configuration for a triangulation run.

use num_traits::Float;

/// What to do when two input points have identical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail with [`TriangulationError::DuplicatePoint`](crate::TriangulationError::DuplicatePoint).
    #[default]
    Reject,
    /// Keep the first occurrence and ignore later copies. Edges that touch
    /// the shared location report the first occurrence's index.
    KeepFirst,
}

/// Options for [`Triangulation::with_options`](crate::Triangulation::with_options).
///
/// # Example
///
/// ```
/// use sweepline::{DuplicatePolicy, SweepOptions};
///
/// let options = SweepOptions::<f64>::default()
///     .duplicate_policy(DuplicatePolicy::KeepFirst)
///     .check_delaunay(true);
///
/// assert_eq!(options.duplicate_policy, DuplicatePolicy::KeepFirst);
/// assert_eq!(options.perimeter_scale, 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SweepOptions<F> {
    /// Multiplier on the radius of the circle the perimeter triangle is built
    /// around. The base radius is the larger side of the input's bounding box.
    /// Larger values keep more of the convex hull when hull triangles are very
    /// flat. Values below 1 (or non-finite) are treated as 1.
    pub perimeter_scale: F,
    /// Handling of coincident input points.
    pub duplicate_policy: DuplicatePolicy,
    /// Verify the empty-circumcircle property after construction.
    pub check_delaunay: bool,
}

impl<F: Float> Default for SweepOptions<F> {
    fn default() -> Self {
        Self {
            perimeter_scale: F::one(),
            duplicate_policy: DuplicatePolicy::Reject,
            check_delaunay: false,
        }
    }
}

impl<F: Float> SweepOptions<F> {
    /// Sets the perimeter scale.
    pub fn perimeter_scale(mut self, scale: F) -> Self {
        self.perimeter_scale = scale;
        self
    }

    /// Sets the duplicate policy.
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Enables or disables the post-construction Delaunay check.
    pub fn check_delaunay(mut self, check: bool) -> Self {
        self.check_delaunay = check;
        self
    }

    /// The scale actually used by the sweep.
    pub(crate) fn effective_perimeter_scale(&self) -> F {
        if self.perimeter_scale.is_finite() && self.perimeter_scale >= F::one() {
            self.perimeter_scale
        } else {
            F::one()
        }
    }
}
