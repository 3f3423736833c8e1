//! Measures [`latency_stats::DistributionStats::compute`] over sample arrays
//! of a few sizes, dominated by the in-place sort.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use latency_stats::DistributionStats;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    for size in [100, 10_000, 1_000_000] {
        let values: Vec<i32> = (0..size).map(|_| rng.gen_range(0..100_000_000)).collect();

        c.bench_function(&format!("compute({size})"), |b| {
            b.iter_batched_ref(
                || values.clone(),
                |values| DistributionStats::compute(values),
                BatchSize::LargeInput,
            )
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
