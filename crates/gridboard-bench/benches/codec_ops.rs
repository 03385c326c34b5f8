//! Criterion micro-benchmarks for direction and orientation codecs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gridboard_core::{decode, direction, GridDirection, Orientation, OrientationConverter};

const CODES: [&str; 6] = ["F", "FFR", "BBLL", "RRRRB", "LF", "BR"];

/// Benchmark: uncached decode of compass codes.
fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_codes", |b| {
        b.iter(|| {
            for code in CODES {
                black_box(decode(black_box(code)));
            }
        });
    });
}

/// Benchmark: cached lookup through the shared direction cache.
fn bench_direction_cached(c: &mut Criterion) {
    for code in CODES {
        direction(code);
    }
    c.bench_function("direction_cached", |b| {
        b.iter(|| {
            for code in CODES {
                black_box(direction(black_box(code)));
            }
        });
    });
}

/// Benchmark: orient every packed direction through every orientation.
fn bench_grid_direction_oriented(c: &mut Criterion) {
    c.bench_function("grid_direction_oriented_all", |b| {
        b.iter(|| {
            for d in GridDirection::COMPASS.into_iter().chain(GridDirection::KNIGHT) {
                for o in Orientation::ALL {
                    black_box(d.to_vector_in(o));
                }
            }
        });
    });
}

/// Benchmark: absolute conversion over a 100x100 view.
fn bench_convert_absolute_10k(c: &mut Criterion) {
    let conv = OrientationConverter::new(100, 100, Orientation::LRBF);
    c.bench_function("convert_absolute_10k", |b| {
        b.iter(|| {
            for x in 0..100 {
                for y in 0..100 {
                    black_box(conv.convert_absolute(x, y));
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_decode,
    bench_direction_cached,
    bench_grid_direction_oriented,
    bench_convert_absolute_10k,
);
criterion_main!(benches);
