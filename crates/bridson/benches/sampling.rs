use std::hint::black_box;
use std::time::Duration;

use bridson::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

const MIN_DISTANCES: [f32; 6] = [64.0, 32.0, 16.0, 8.0, 4.0, 2.0];

fn run_once(min_distance: f32, seed: u64) -> usize {
    let config = Config::new(1024.0, 1024.0).with_min_distance(min_distance);
    let mut random = UniformRandom::new(StdRng::seed_from_u64(seed));
    let area = RectArea::new(1024.0, 1024.0);
    let mut sink = VecSink::new();
    distribute(config, &mut random, &area, &mut sink).expect("valid config");
    sink.len()
}

fn poisson_disc_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/poisson_disc");

    for &min_distance in &MIN_DISTANCES {
        let expected = run_once(min_distance, 0xBEEFu64 ^ (min_distance as u64));
        group.throughput(Throughput::Elements(expected.max(1) as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(min_distance),
            &min_distance,
            |b, &min_distance| {
                b.iter(|| {
                    let count = run_once(min_distance, 0xC0FFEEu64 ^ (min_distance as u64));
                    black_box(count);
                });
            },
        );
    }

    group.finish();
}

fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(20)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = default_criterion();
    targets = poisson_disc_benches
}
criterion_main!(benches);
