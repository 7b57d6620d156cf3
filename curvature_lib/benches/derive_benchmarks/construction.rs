use criterion::{BenchmarkId, Criterion, Throughput};

use crate::common::*;

// Doubling one dimension should roughly double the time
pub fn gradient_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient construction");
    let options = single_thread();

    for depth in Z_STEPS {
        let volume = get_volume(depth);
        group.throughput(Throughput::Elements((BASE_SIDE * BASE_SIDE * depth) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &volume, |b, volume| {
            b.iter(|| GradientVolume::with_options(volume, &options))
        });
    }
    group.finish();
}

pub fn curvature_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("curvature construction");
    let options = single_thread();

    for depth in Z_STEPS {
        let volume = get_volume(depth);
        group.throughput(Throughput::Elements((BASE_SIDE * BASE_SIDE * depth) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &volume, |b, volume| {
            b.iter(|| CurvatureVolume::with_options(volume, &options))
        });
    }
    group.finish();
}

pub fn curvature_workers(c: &mut Criterion) {
    let mut group = c.benchmark_group("curvature workers");
    let volume = get_volume(128);

    for workers in [1, 2, 4, 8] {
        let options = DerivativeOptions::builder()
            .worker_count(workers)
            .build_unchecked();
        group.bench_with_input(BenchmarkId::from_parameter(workers), &options, |b, options| {
            b.iter(|| CurvatureVolume::with_options(&volume, options))
        });
    }
    group.finish();
}
