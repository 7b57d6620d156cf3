pub use curvature_lib::{
    test_helpers::sphere_volume,
    volumetric::{CurvatureVolume, DerivativeOptions, GradientVolume, InterpolationMode},
    LinearVolume,
};
pub use nalgebra::{vector, Point3, Vector3};

/// Base volume side, every scaling step doubles the z axis
pub const BASE_SIDE: usize = 64;
pub const Z_STEPS: [usize; 3] = [32, 64, 128];

pub const SAMPLES_PER_ITER: usize = 10_000;

pub fn get_volume(depth: usize) -> LinearVolume {
    sphere_volume(vector![BASE_SIDE, BASE_SIDE, depth], BASE_SIDE as f32 / 4.0)
}

pub fn single_thread() -> DerivativeOptions {
    DerivativeOptions::builder().single_thread().build_unchecked()
}

/// Points along a diagonal ray through the volume
pub fn ray_positions(size: Vector3<usize>) -> Vec<Point3<f32>> {
    let extent = (size - vector![1, 1, 1]).cast::<f32>();
    (0..SAMPLES_PER_ITER)
        .map(|i| {
            let t = i as f32 / SAMPLES_PER_ITER as f32;
            Point3::from(extent * t)
        })
        .collect()
}
