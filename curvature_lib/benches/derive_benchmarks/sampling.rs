use criterion::{black_box, Criterion};

use crate::common::*;

fn bench_mode(c: &mut Criterion, name: &str, mode: InterpolationMode) {
    let volume = get_volume(BASE_SIDE);
    let curvature = CurvatureVolume::from_volume(&volume);
    let positions = ray_positions(curvature.get_size());

    c.bench_function(name, |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &pos in &positions {
                acc += curvature.sample_with(black_box(pos), mode).magnitude;
            }
            acc
        })
    });
}

pub fn sample_nearest(c: &mut Criterion) {
    bench_mode(c, "sample nearest", InterpolationMode::NearestNeighbour);
}

pub fn sample_linear(c: &mut Criterion) {
    bench_mode(c, "sample linear", InterpolationMode::Linear);
}
