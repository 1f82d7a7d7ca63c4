//! Benchmarks for the Littlewood criterion
//!
//! Measures performance of:
//! - Initial pair generation
//! - Criterion evaluation per backend
//! - Subdivision with and without pruning

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use littlewood_core::{
    convergent_pairs, subdivide, ConvergentPair, Cutoff, LittlewoodCriterion, Numeric,
};
use num_bigint::BigInt;

/// Benchmark generation of the initial search space
fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("convergent_pairs");
    group.sample_size(20);

    for &n in &[5u32, 7, 9] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| convergent_pairs::<i128>(black_box(n), 0))
        });
    }
    group.finish();
}

fn evaluate_all<T: Numeric>(criterion: &LittlewoodCriterion<T>, pairs: &[ConvergentPair<T>]) -> usize {
    pairs
        .iter()
        .filter(|p| criterion.evaluate(black_box(p)).meets_criteria)
        .count()
}

/// Benchmark evaluating every initial pair, fixed-width against arbitrary precision
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &n in &[6u32, 8] {
        let small = convergent_pairs::<i128>(n, 1);
        let big = convergent_pairs::<BigInt>(n, 1);
        group.throughput(Throughput::Elements(small.len() as u64));

        let criterion = LittlewoodCriterion::<i128>::new(n);
        group.bench_with_input(BenchmarkId::new("i128", n), &small, |b, pairs| {
            b.iter(|| evaluate_all(&criterion, pairs))
        });

        let criterion = LittlewoodCriterion::<BigInt>::new(n);
        group.bench_with_input(BenchmarkId::new("bigint", n), &big, |b, pairs| {
            b.iter(|| evaluate_all(&criterion, pairs))
        });
    }
    group.finish();
}

/// Benchmark subdivision of unverified pairs
fn bench_subdivide(c: &mut Criterion) {
    let mut group = c.benchmark_group("subdivide");

    let n = 7;
    let criterion = LittlewoodCriterion::<i128>::new(n);
    let unverified: Vec<_> = convergent_pairs::<i128>(n, 0)
        .into_iter()
        .filter_map(|p| {
            let result = criterion.evaluate(&p);
            (!result.meets_criteria).then_some((p, result.best_q))
        })
        .collect();
    group.throughput(Throughput::Elements(unverified.len() as u64));

    group.bench_function("plain", |b| {
        b.iter(|| {
            unverified
                .iter()
                .map(|(p, _)| subdivide(black_box(p), n, None).len())
                .sum::<usize>()
        })
    });

    group.bench_function("pruned", |b| {
        b.iter(|| {
            unverified
                .iter()
                .map(|(p, q)| {
                    let cutoff = Cutoff::new(&criterion, q);
                    subdivide(black_box(p), n, Some(&cutoff)).len()
                })
                .sum::<usize>()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_generation, bench_evaluate, bench_subdivide);

criterion_main!(benches);
