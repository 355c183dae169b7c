use std::hint::black_box;

use complexity_core::{binary_search, solve_n_queens, Counter, SortAlgorithm};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting");
    for size in [100usize, 1000] {
        let reversed: Vec<u64> = (0..size as u64).rev().collect();
        for algorithm in [SortAlgorithm::Insertion, SortAlgorithm::Merge] {
            group.bench_with_input(BenchmarkId::new(algorithm.to_string(), size), &reversed, |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |items| {
                        let mut counter = Counter::new();
                        black_box(algorithm.sort(items, &mut counter));
                        counter
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn searching(c: &mut Criterion) {
    let items: Vec<u64> = (0..100_000).map(|i| i * 3).collect();
    c.bench_function("binary search miss", |b| {
        b.iter(|| {
            let mut counter = Counter::new();
            black_box(binary_search(&items, black_box(&1), &mut counter))
        })
    });
}

fn queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("n-queens");
    for n in [6usize, 8, 10] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut counter = Counter::new();
                black_box(solve_n_queens(n, &mut counter))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, sorting, searching, queens);
criterion_main!(benches);
