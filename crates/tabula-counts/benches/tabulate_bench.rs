//! Benchmarks comparing dense and sparse tabulation strategies

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tabula_counts::{CountAlgorithm, DenseCounter, JointDenseCounter, LevelRange, SparseCounter};

/// Generate integer codes in `[0, levels)`
fn generate_codes(size: usize, levels: i32, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(0..levels)).collect()
}

/// Generate positive weights
fn generate_weights(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| 0.1 + (i as f64 * 0.01).cos().abs())
        .collect()
}

fn bench_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_tabulate");

    for &size in &[1_000, 100_000, 1_000_000] {
        let data = generate_codes(size, 100, 42);
        let weights = generate_weights(size);
        let counter = DenseCounter::new(LevelRange::new(0, 99).unwrap());

        group.bench_with_input(BenchmarkId::new("unweighted", size), &data, |b, data| {
            b.iter(|| black_box(counter.tabulate(data)));
        });

        group.bench_with_input(
            BenchmarkId::new("weighted", size),
            &(&data, &weights),
            |b, (data, weights)| {
                b.iter(|| black_box(counter.tabulate_weighted(data, weights).unwrap()));
            },
        );

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", size), &data, |b, data| {
            b.iter(|| black_box(counter.par_tabulate(data)));
        });
    }

    group.finish();
}

fn bench_joint(c: &mut Criterion) {
    let mut group = c.benchmark_group("joint_tabulate");

    for &size in &[10_000, 1_000_000] {
        let x = generate_codes(size, 20, 1);
        let y = generate_codes(size, 30, 2);
        let counter = JointDenseCounter::new(
            LevelRange::new(0, 19).unwrap(),
            LevelRange::new(0, 29).unwrap(),
        );

        group.bench_with_input(BenchmarkId::new("unweighted", size), &(&x, &y), |b, (x, y)| {
            b.iter(|| black_box(counter.tabulate(x, y).unwrap()));
        });
    }

    group.finish();
}

fn bench_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_tabulate");

    for &size in &[1_000, 100_000] {
        for &distinct in &[16, 10_000] {
            let data = generate_codes(size, distinct, 7);

            for algorithm in [CountAlgorithm::Hash, CountAlgorithm::Sort] {
                let counter = SparseCounter::new().with_algorithm(algorithm);
                group.bench_with_input(
                    BenchmarkId::new(
                        format!("{algorithm:?}"),
                        format!("{size}_values_{distinct}_distinct"),
                    ),
                    &data,
                    |b, data| {
                        b.iter(|| black_box(counter.tabulate_ordered(data)));
                    },
                );
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_dense, bench_joint, bench_sparse);
criterion_main!(benches);
