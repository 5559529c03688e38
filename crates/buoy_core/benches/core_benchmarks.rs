//! Criterion benchmarks for buoy_core.
//!
//! Measures the per-sample update across all groups, prune-and-repartition,
//! a full cast at the reference parameters and the buoy linker.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use buoy_core::cast::{CastConfig, CastController};
use buoy_core::group::{partition, prune};
use buoy_core::linker::link_buoys;
use buoy_core::rng::BuoyRng;
use buoy_core::sampler::SamplerKind;

/// Benchmark one shared-draw update of every tracer for several group counts.
fn bench_apply_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_sample");

    for groups in [9, 49, 99] {
        let config = CastConfig::builder().num_groups(groups).build().unwrap();
        let mut controller = CastController::new(config).unwrap();
        let mut rng = BuoyRng::from_seed(42);

        group.bench_function(BenchmarkId::new("groups", groups), |b| {
            b.iter(|| {
                let s = rng.gen_uniform();
                let u = rng.gen_uniform();
                controller.apply_sample(black_box((s * 1_000_000.0) as u32), black_box(u));
            });
        });
    }

    group.finish();
}

/// Benchmark prune-and-repartition of a single drifted group.
fn bench_prune(c: &mut Criterion) {
    let mut group = c.benchmark_group("prune");

    for tracers in [5, 11, 51] {
        let mut baseline = vec![0u32; tracers];
        partition(&mut baseline, 0, 1_000_000);
        let drifted: Vec<u32> = baseline
            .iter()
            .enumerate()
            .map(|(j, &b)| if j < tracers / 2 { b + 10 } else { b })
            .collect();

        group.bench_with_input(BenchmarkId::new("tracers", tracers), &drifted, |b, drifted| {
            b.iter(|| {
                let mut row = drifted.clone();
                prune(black_box(&mut row), black_box(&baseline))
            });
        });
    }

    group.finish();
}

/// Benchmark a complete run at the reference parameters.
fn bench_full_cast(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_cast");
    group.sample_size(10);

    for kind in [SamplerKind::Uniform, SamplerKind::Gaussian] {
        let sampler = kind.build().unwrap();
        let config = CastConfig::builder().seed(1).build().unwrap();

        group.bench_function(BenchmarkId::new("default", kind), |b| {
            b.iter(|| {
                let mut rng = BuoyRng::from_seed(1);
                let mut controller = CastController::new(config.clone()).unwrap();
                controller.run(&sampler, &mut rng).unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark linking for the coarsest and finest group counts.
fn bench_link_buoys(c: &mut Criterion) {
    let mut group = c.benchmark_group("link_buoys");

    for groups in [1usize, 9, 99] {
        let locations: Vec<u32> = (0..groups + 2)
            .map(|i| (i as u64 * 999_999 / (groups as u64 + 1)) as u32)
            .collect();

        group.bench_with_input(BenchmarkId::new("groups", groups), &locations, |b, locations| {
            b.iter(|| link_buoys(black_box(locations)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_apply_sample,
    bench_prune,
    bench_full_cast,
    bench_link_buoys
);
criterion_main!(benches);
