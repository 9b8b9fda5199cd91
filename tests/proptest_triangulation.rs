//! Property-based tests for the sweep triangulation.
//!
//! - Empty circumcircle: no input point strictly inside any triangle's circle
//! - Edge multiplicity: every edge belongs to one or two triangles
//! - Euler relation over the produced boundary
//! - Voronoi duality: one segment per interior edge with distinct centers
//! - Input-order independence of the edge set
//! - Translation invariance of the edge set for offsets up to 1e6

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use sweepline::predicates::all_collinear;
use sweepline::{Edge, Point2, SweepOptions, Triangulation, TriangulationError};

// =============================================================================
// TEST CONFIGURATION
// =============================================================================

fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-100.0..100.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

fn point_set() -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec((finite_coordinate(), finite_coordinate()), 3..40).prop_map(|coords| {
        let mut seen = HashSet::new();
        coords
            .into_iter()
            .map(|(x, y)| Point2::new(x, y))
            .filter(|p| seen.insert(*p))
            .collect()
    })
}

fn offset() -> impl Strategy<Value = (f64, f64)> {
    (-1.0e6..1.0e6, -1.0e6..1.0e6)
}

fn usable(points: &[Point2<f64>]) -> bool {
    points.len() >= 3 && !all_collinear(points)
}

/// Builds a triangulation, or `None` when every triangle touched the
/// perimeter triangle (nearly collinear input).
fn build(points: &[Point2<f64>], perimeter_scale: f64) -> Option<Triangulation<f64>> {
    let options = SweepOptions::default().perimeter_scale(perimeter_scale);
    match Triangulation::with_options(points, options) {
        Ok(tri) => Some(tri),
        Err(TriangulationError::CollinearPoints) => None,
        Err(e) => panic!("unexpected error: {e}"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_empty_circumcircle(points in point_set()) {
        prop_assume!(usable(&points));
        let tri = build(&points, 1.0);
        prop_assume!(tri.is_some());
        let violations = tri.unwrap().delaunay_violations();
        prop_assert!(violations.is_empty(), "violations: {:?}", violations);
    }

    #[test]
    fn prop_edge_multiplicity(points in point_set()) {
        prop_assume!(usable(&points));
        let tri = build(&points, 1.0);
        prop_assume!(tri.is_some());
        let tri = tri.unwrap();

        let mut counts: HashMap<Edge<f64>, usize> = HashMap::new();
        for t in tri.triangles() {
            for e in t.edges() {
                *counts.entry(*e).or_insert(0) += 1;
            }
        }
        prop_assert!(counts.values().all(|&c| c == 1 || c == 2));
        prop_assert_eq!(counts.len(), tri.delaunay_edges().len());
    }

    #[test]
    fn prop_euler_relation(points in point_set()) {
        prop_assume!(usable(&points));
        // A wide perimeter keeps flat hull triangles, so the result is a
        // single triangulated disk.
        let tri = build(&points, 1000.0);
        prop_assume!(tri.is_some());
        let tri = tri.unwrap();

        let used: HashSet<usize> = tri.triangle_indices().into_iter().flatten().collect();
        let n = used.len();
        let b = tri.hull_edges().len();
        prop_assert_eq!(tri.triangles().len(), 2 * n - b - 2);
        prop_assert_eq!(tri.delaunay_edges().len(), 3 * n - b - 3);
    }

    #[test]
    fn prop_voronoi_duality(points in point_set()) {
        prop_assume!(usable(&points));
        let tri = build(&points, 1.0);
        prop_assume!(tri.is_some());
        let tri = tri.unwrap();

        let expected = tri
            .adjacency()
            .interior()
            .filter(|&(_, a, b)| tri.triangles()[a].circumcenter() != tri.triangles()[b].circumcenter())
            .count();
        prop_assert_eq!(tri.voronoi_segments().len(), expected);
        prop_assert_eq!(tri.voronoi_rays().len(), tri.hull_edges().len());
    }

    #[test]
    fn prop_input_order_independent(points in point_set()) {
        prop_assume!(usable(&points));
        let mut reversed = points.clone();
        reversed.reverse();
        let mut rotated = points.clone();
        rotated.rotate_left(points.len() / 2);

        let edges = |pts: &[Point2<f64>]| -> Option<HashSet<Edge<f64>>> {
            build(pts, 1.0).map(|tri| tri.edges().copied().collect())
        };
        let base = edges(&points);
        prop_assert_eq!(&base, &edges(&reversed));
        prop_assert_eq!(&base, &edges(&rotated));
    }

    #[test]
    fn prop_translation_invariant(points in point_set(), (dx, dy) in offset()) {
        prop_assume!(usable(&points));
        let shifted: Vec<Point2<f64>> = points
            .iter()
            .map(|p| Point2::new(p.x + dx, p.y + dy))
            .collect();

        let index_edges = |pts: &[Point2<f64>]| -> Option<HashSet<(usize, usize)>> {
            build(pts, 1.0).map(|tri| tri.delaunay_edges().into_iter().collect())
        };
        let base = index_edges(&points);
        prop_assume!(base.is_some());
        prop_assert_eq!(base, index_edges(&shifted), "offset ({}, {})", dx, dy);
    }
}

#[test]
fn large_perimeter_recovers_convex_hull() {
    let points: Vec<Point2<f64>> = [
        (0.1, 0.2),
        (0.8, 0.1),
        (0.9, 0.9),
        (0.2, 0.85),
        (0.5, 0.5),
        (0.3, 0.3),
        (0.7, 0.6),
        (0.4, 0.8),
    ]
    .into_iter()
    .map(Point2::from)
    .collect();

    let tri =
        Triangulation::with_options(&points, SweepOptions::default().perimeter_scale(100.0)).unwrap();

    // Four hull vertices: 2·8 − 4 − 2 triangles, 3·8 − 4 − 3 edges.
    assert_eq!(tri.hull_edges().len(), 4);
    assert_eq!(tri.triangles().len(), 10);
    assert_eq!(tri.delaunay_edges().len(), 17);
}
