//! Criterion micro-benchmarks for board navigation and snapshots.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gridboard_bench::{reference_board, stress_board};
use gridboard_core::{GridDirection, Orientation};

/// Benchmark: neighbors8() on all 10K cells of a 100x100 board.
fn bench_neighbors8_10k(c: &mut Criterion) {
    let board = reference_board(42);

    c.bench_function("neighbors8_10k", |b| {
        b.iter(|| {
            for g in board.iter() {
                black_box(g.neighbors8());
            }
        });
    });
}

/// Benchmark: oriented lookup of every cell through RLBF.
fn bench_cell_at_oriented_10k(c: &mut Criterion) {
    let mut board = reference_board(42);
    board.set_orientation(Orientation::RLBF);

    c.bench_function("cell_at_oriented_10k", |b| {
        b.iter(|| {
            for x in 0..100 {
                for y in 0..100 {
                    black_box(board.cell_at_oriented(x, y));
                }
            }
        });
    });
}

/// Benchmark: walk a full row of a wrapping 316x316 board.
fn bench_walk_wrapping_row(c: &mut Criterion) {
    let board = stress_board(42);
    let start = board.cell_at(0, 0).unwrap();

    c.bench_function("walk_wrapping_row_316", |b| {
        b.iter(|| black_box(start.walk_until_boundary(GridDirection::R)));
    });
}

/// Benchmark: 32x32 range query.
fn bench_cells_in_range(c: &mut Criterion) {
    let board = reference_board(42);

    c.bench_function("cells_in_range_32x32", |b| {
        b.iter(|| black_box(board.cells_in_range(10, 10, 41, 41)));
    });
}

/// Benchmark: snapshot and restore of a 10K board.
fn bench_snapshot_restore_10k(c: &mut Criterion) {
    let board = reference_board(42);
    let snap = board.snapshot();

    c.bench_function("snapshot_10k", |b| {
        b.iter(|| black_box(board.snapshot()));
    });
    c.bench_function("restore_10k", |b| {
        b.iter(|| board.restore(black_box(&snap)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_neighbors8_10k,
    bench_cell_at_oriented_10k,
    bench_walk_wrapping_row,
    bench_cells_in_range,
    bench_snapshot_restore_10k,
);
criterion_main!(benches);
