use criterion::{criterion_group, criterion_main, Criterion};
use derive_benchmarks::{construction::*, sampling::*};

mod common;
mod derive_benchmarks;

criterion_group! {
    name = construction;
    config = Criterion::default().significance_level(0.1).sample_size(10);
    targets = gradient_scaling, curvature_scaling, curvature_workers
}

criterion_group! {
    name = sampling;
    config = Criterion::default().significance_level(0.1).sample_size(20);
    targets = sample_nearest, sample_linear
}

criterion_main!(construction, sampling);
//criterion_main!(sampling);
