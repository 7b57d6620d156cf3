use std::time::Instant;

use curvature_lib::LinearVolume;
use indicatif::{ProgressBar, ProgressStyle};
use nalgebra::{vector, Vector3};
use rayon::prelude::*;

use crate::config::{Config, GeneratorConfig};

mod ramp;
mod shapes;
mod solid;
mod sphere;

// Generates one sample at a time, at any location
pub trait SampleGenerator: Sync {
    fn sample_at(&self, coords: Vector3<usize>) -> u8;
}

pub fn get_sample_generator(config: &Config) -> Box<dyn SampleGenerator> {
    match config.generator {
        GeneratorConfig::Solid { sample } => {
            Box::new(solid::SolidGenerator::new(config.dims, sample))
        }
        GeneratorConfig::Ramp => Box::new(ramp::RampGenerator::new(config.dims)),
        GeneratorConfig::Sphere => Box::new(sphere::SphereGenerator::new(config.dims)),
        GeneratorConfig::Shapes {
            n_of_shapes,
            sample,
            obj_size,
        } => Box::new(shapes::ShapesGenerator::new(
            config.dims,
            n_of_shapes,
            sample,
            obj_size as usize,
            config.seed,
        )),
    }
}

/// Fill the whole volume, one z slice per task
pub fn generate_samples(gen: &dyn SampleGenerator, dims: Vector3<usize>) -> Vec<u8> {
    let slice_len = dims.x * dims.y;
    let mut samples = vec![0u8; slice_len * dims.z];
    if slice_len == 0 {
        return samples;
    }

    let progress = ProgressBar::new(dims.z as u64);
    progress.set_style(
        ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40} {pos}/{len} slices"),
    );

    samples
        .par_chunks_mut(slice_len)
        .enumerate()
        .for_each(|(z, slice)| {
            for y in 0..dims.y {
                for x in 0..dims.x {
                    slice[x + y * dims.x] = gen.sample_at(vector![x, y, z]);
                }
            }
            progress.inc(1);
        });

    progress.finish_and_clear();
    samples
}

pub fn generate_volume(config: &Config) -> Result<LinearVolume, String> {
    let start = Instant::now();
    let gen = get_sample_generator(config);
    let samples = generate_samples(gen.as_ref(), config.dims);
    log::info!(
        "Generated {:?} volume {}x{}x{} in {:?}",
        config.generator,
        config.dims.x,
        config.dims.y,
        config.dims.z,
        start.elapsed()
    );

    LinearVolume::from_bytes(config.dims, &samples).map_err(|e| e.to_string())
}
