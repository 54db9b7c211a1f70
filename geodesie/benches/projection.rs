//! Benchmarks pour le calcul d'offsets

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geodesie::bearing::project_destination;
use geodesie::scale::LocalScale;
use geodesie::{compute_offsets, GeoPoint};

fn bench_local_scale(c: &mut Criterion) {
    c.bench_function("local_scale_at", |b| {
        b.iter(|| black_box(LocalScale::at(black_box(35.0))))
    });
}

fn bench_projection(c: &mut Criterion) {
    let start = GeoPoint::new(35.0, 135.0);
    c.bench_function("project_destination", |b| {
        b.iter(|| {
            black_box(project_destination(
                black_box(start),
                black_box(220.0),
                black_box(45.0),
            ))
        })
    });
}

fn bench_compute_offsets(c: &mut Criterion) {
    let origin = GeoPoint::new(34.5, 134.5);
    let start = GeoPoint::new(35.0, 135.2);
    c.bench_function("compute_offsets", |b| {
        b.iter(|| {
            black_box(compute_offsets(
                black_box(origin),
                black_box(start),
                black_box(220.0),
                black_box(45.0),
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_local_scale,
    bench_projection,
    bench_compute_offsets
);
criterion_main!(benches);
