//! Criterion micro-benchmarks for table growth and element access.

use criterion::{criterion_group, criterion_main, Criterion};
use rectab_bench::{grow_by_builder, grow_by_expand, TableProfile};
use rectab_test_utils::cyclic_cayley_table;

/// Benchmark: 10K single-row expansions with no reservation.
fn bench_expand_reference(c: &mut Criterion) {
    c.bench_function("expand_reference_unreserved", |b| {
        b.iter(|| {
            let table = grow_by_expand(TableProfile::REFERENCE, false);
            std::hint::black_box(table.size());
        });
    });
}

/// Benchmark: same as above with storage reserved up front.
fn bench_expand_reference_reserved(c: &mut Criterion) {
    c.bench_function("expand_reference_reserved", |b| {
        b.iter(|| {
            let table = grow_by_expand(TableProfile::REFERENCE, true);
            std::hint::black_box(table.size());
        });
    });
}

/// Benchmark: 100K narrow rows through the row builder.
fn bench_builder_narrow(c: &mut Criterion) {
    c.bench_function("builder_narrow", |b| {
        b.iter(|| {
            let table = grow_by_builder(TableProfile::NARROW);
            std::hint::black_box(table.size());
        });
    });
}

/// Benchmark: chase products through a 256-element Cayley table.
fn bench_get_cayley_walk(c: &mut Criterion) {
    let table = cyclic_cayley_table(256);
    c.bench_function("get_cayley_walk_64k", |b| {
        b.iter(|| {
            let mut x = 1u32;
            for step in 0..65_536usize {
                x = table.get(x as usize, step % 256);
            }
            std::hint::black_box(x);
        });
    });
}

/// Benchmark: clone of the reference profile.
fn bench_clone_reference(c: &mut Criterion) {
    let table = grow_by_expand(TableProfile::REFERENCE, true);
    c.bench_function("clone_reference", |b| {
        b.iter(|| {
            let copy = table.clone();
            std::hint::black_box(copy.size());
        });
    });
}

criterion_group!(
    benches,
    bench_expand_reference,
    bench_expand_reference_reserved,
    bench_builder_narrow,
    bench_get_cayley_walk,
    bench_clone_reference
);
criterion_main!(benches);
