//! Benchmarks for the sweep triangulation and Voronoi extraction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sweepline::{Point2, SweepOptions, Triangulation};

/// Generates random points in a 100x100 square.
fn generate_random_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for _ in 0..count {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = (state as f64 / u64::MAX as f64) * 100.0;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let y = (state as f64 / u64::MAX as f64) * 100.0;

        points.push(Point2::new(x, y));
    }

    points
}

/// Generates a jittered grid, which keeps the open set small.
fn generate_grid_points(side: usize) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(side * side);
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;

    for i in 0..side {
        for j in 0..side {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let jitter = (state as f64 / u64::MAX as f64) * 0.1;
            points.push(Point2::new(i as f64 + jitter, j as f64 - jitter));
        }
    }

    points
}

fn bench_triangulate_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate_random");

    for count in [100, 500, 1000, 5000] {
        let points = generate_random_points(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("points", count), &points, |b, pts| {
            b.iter(|| Triangulation::new(black_box(pts)))
        });
    }

    group.finish();
}

fn bench_triangulate_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate_grid");

    for side in [10, 30, 70] {
        let points = generate_grid_points(side);
        group.throughput(Throughput::Elements(points.len() as u64));

        group.bench_with_input(BenchmarkId::new("side", side), &points, |b, pts| {
            b.iter(|| Triangulation::new(black_box(pts)))
        });
    }

    group.finish();
}

fn bench_perimeter_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("perimeter_scale");
    let points = generate_random_points(1000, 777);

    for scale in [1.0, 10.0, 100.0] {
        let options = SweepOptions::default().perimeter_scale(scale);
        group.bench_with_input(BenchmarkId::new("scale", scale), &options, |b, opts| {
            b.iter(|| Triangulation::with_options(black_box(&points), *opts))
        });
    }

    group.finish();
}

fn bench_voronoi(c: &mut Criterion) {
    let mut group = c.benchmark_group("voronoi");

    for count in [100, 1000, 5000] {
        let points = generate_random_points(count, 4242);
        let tri = Triangulation::new(&points).unwrap();
        group.throughput(Throughput::Elements(tri.triangles().len() as u64));

        group.bench_with_input(BenchmarkId::new("segments", count), &tri, |b, t| {
            b.iter(|| black_box(t).voronoi_segments())
        });

        group.bench_with_input(BenchmarkId::new("rays", count), &tri, |b, t| {
            b.iter(|| black_box(t).voronoi_rays())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_triangulate_random,
    bench_triangulate_grid,
    bench_perimeter_scale,
    bench_voronoi,
);

criterion_main!(benches);
