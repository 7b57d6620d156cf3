//! Module with helper functions
//! Synthetic volumes for unit tests, integration tests and benchmarks

use nalgebra::{vector, Vector3};

use crate::volumetric::LinearVolume;

/// 2x2x2 volume with increasing samples
pub fn white_volume() -> LinearVolume {
    let data = vec![0, 32, 64, 64 + 32, 128, 128 + 32, 128 + 64, 255];
    LinearVolume::from_bytes(vector![2, 2, 2], &data).unwrap()
}

/// Same intensity everywhere
pub fn flat_volume(size: Vector3<usize>, value: f32) -> LinearVolume {
    LinearVolume::from_fn(size, |_, _, _| value).unwrap()
}

/// Intensity equals the x coordinate
pub fn ramp_volume(size: Vector3<usize>) -> LinearVolume {
    LinearVolume::from_fn(size, |x, _, _| x as f32).unwrap()
}

/// Smooth blob centred in the volume, 255 in the centre,
/// half of that at distance `radius`
pub fn sphere_volume(size: Vector3<usize>, radius: f32) -> LinearVolume {
    let centre = (size.cast::<f32>() - vector![1.0, 1.0, 1.0]) / 2.0;
    LinearVolume::from_fn(size, |x, y, z| {
        let offset = vector![x as f32, y as f32, z as f32] - centre;
        let d = offset.norm() / radius;
        255.0 / (1.0 + d * d)
    })
    .unwrap()
}
