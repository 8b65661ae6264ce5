use complexity_exhaustive::{distribution, enumerate_all};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_enumerate_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_all");
    for l in [10u32, 14, 18] {
        let mut out = vec![0i64; 1usize << l];
        group.bench_with_input(BenchmarkId::new("L", l), &l, |b, &l| {
            b.iter(|| enumerate_all(black_box(l), &mut out).unwrap())
        });
    }
    group.finish();
}

fn bench_distribution_workers(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribution/workers");
    let l = 20u32;
    for workers in [1usize, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("workers", workers), &workers, |b, &workers| {
            b.iter(|| distribution(black_box(l), 30, workers).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_enumerate_all, bench_distribution_workers);
criterion_main!(benches);
