use complexity_kernels::{batch_lz76, batch_lz_tree};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_batch_lz76(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_lz76");
    for n_rows in [10usize, 100, 1_000] {
        let row: Vec<u8> = (0..200).map(|i| (i % 4) as u8).collect();
        let rows: Vec<&[u8]> = std::iter::repeat(row.as_slice()).take(n_rows).collect();
        group.bench_with_input(BenchmarkId::new("rows", n_rows), &rows, |b, rows| {
            b.iter(|| batch_lz76(black_box(rows)))
        });
    }
    group.finish();
}

fn bench_batch_lz_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_lz_tree");
    for n_rows in [10usize, 100, 1_000] {
        let row: Vec<u8> = (0..200).map(|i| (i % 4) as u8).collect();
        let rows: Vec<&[u8]> = std::iter::repeat(row.as_slice()).take(n_rows).collect();
        group.bench_with_input(BenchmarkId::new("rows", n_rows), &rows, |b, rows| {
            b.iter(|| batch_lz_tree(black_box(rows)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_batch_lz76, bench_batch_lz_tree);
criterion_main!(benches);
