//! Benchmark for view pipelines vs standard iterator chains.
//!
//! Compares seqview pipelines against the equivalent `std::iter` adapters
//! for forward traversal and for backward traversal of node-based
//! containers. Also measures the cost of synthesized backward steps and of
//! type-erased pipelines.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqview::prelude::*;
use std::collections::{BTreeSet, HashSet, LinkedList};
use std::hint::black_box;

// =============================================================================
// filter + reverse over a Vec
// =============================================================================

fn benchmark_filter_reverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_reverse");

    for size in [100, 1000, 10000] {
        let values: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("seqview", size), &values, |bencher, values| {
            bencher.iter(|| {
                let collection = from_container(values)
                    .filter(|value| **value % 3 == 0)
                    .reverse();
                let sum: u64 = collection.iter().sum();
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &values, |bencher, values| {
            bencher.iter(|| {
                let sum: u64 = values.iter().filter(|value| **value % 3 == 0).rev().sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Range materialization
// =============================================================================

fn benchmark_range(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("range_to_vec");

    for size in [100_i64, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("seqview", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let collected: Vec<i64> = range_by(0, black_box(size), 7)
                    .map(|collection| collection.to::<Vec<i64>>())
                    .unwrap_or_default();
                black_box(collected)
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let collected: Vec<i64> = (0..black_box(size)).step_by(7).collect();
                black_box(collected)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Backward traversal of node-based containers
// =============================================================================

fn benchmark_node_containers_backward(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("node_containers_backward");

    for size in [100, 1000, 10000] {
        let list: LinkedList<u32> = (0..size).collect();
        let set: BTreeSet<u32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("LinkedList/seqview", size), &list, |bencher, list| {
            bencher.iter(|| black_box(from_container(list).iter_rev().count()));
        });

        group.bench_with_input(BenchmarkId::new("LinkedList/std", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.iter().rev().count()));
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet/seqview", size), &set, |bencher, set| {
            bencher.iter(|| black_box(from_container(set).iter_rev().count()));
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet/std", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.iter().rev().count()));
        });
    }

    group.finish();
}

// =============================================================================
// Backward traversal of a source without reverse iteration
// =============================================================================

fn benchmark_forward_only_backward(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("forward_only_backward");

    for size in [10, 100, 1000] {
        let set: HashSet<u32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("seqview", size), &set, |bencher, set| {
            bencher.iter(|| black_box(from_container(set).iter_rev().count()));
        });

        group.bench_with_input(BenchmarkId::new("std", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.iter().count()));
        });
    }

    group.finish();
}

// =============================================================================
// Static vs type-erased pipelines
// =============================================================================

fn benchmark_boxed(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("boxed_pipeline");
    let values: Vec<i32> = (0..10000).collect();

    group.bench_function("static", |bencher| {
        bencher.iter(|| {
            let collection = from_container(&values).filter(|value| **value % 2 == 0);
            black_box(collection.iter().count())
        });
    });

    group.bench_function("boxed", |bencher| {
        bencher.iter(|| {
            let collection = from_container(&values)
                .filter(|value| **value % 2 == 0)
                .boxed();
            black_box(collection.iter().count())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_filter_reverse,
    benchmark_range,
    benchmark_node_containers_backward,
    benchmark_forward_only_backward,
    benchmark_boxed
);
criterion_main!(benches);
