//! Second derivative volume.
//!
//! Curvature-like measure of every voxel, computed from the Hessian of the
//! scalar field projected on the gradient direction, following
//! "Multi-Dimensional Transfer Functions for Interactive Volume Rendering", Kniss et al.
//! The Hessian is approximated by central differences of the gradient volume.

use std::time::Instant;

use nalgebra::{Matrix3, Point3, Vector3};

use crate::{common::ValueRange, Result, VolumeError};

use super::{
    grid::{Lerp, VoxelGrid},
    slabs::fill_interior,
    DerivativeOptions, GradientVolume, GradientVoxel, InterpolationMode, InterpolationSelector,
    Volume,
};

/// Gradients with squared magnitude up to this value are treated as flat,
/// their curvature is zero.
///
/// The threshold is absolute, in squared intensity units per voxel, so it
/// depends on the intensity scale. Gradients of `1e-3` per voxel or less are
/// dropped, which is negligible for byte data but removes low contrast
/// regions of data normalised to `<0;1>`.
pub const GRADIENT_EPSILON: f32 = 1e-6;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CurvatureVoxel {
    /// Absolute value of the curvature estimate, never negative or NaN
    pub magnitude: f32,
}

impl CurvatureVoxel {
    pub fn zero() -> CurvatureVoxel {
        CurvatureVoxel::default()
    }
}

impl Lerp for CurvatureVoxel {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        CurvatureVoxel {
            magnitude: self.magnitude.lerp(&other.magnitude, t),
        }
    }
}

/// Hessian approximation at an interior voxel,
/// element `(i, j)` is the derivative of gradient component `i` along axis `j`.
pub fn hessian(gradients: &VoxelGrid<GradientVoxel>, x: usize, y: usize, z: usize) -> Matrix3<f32> {
    let g = |x, y, z| gradients.get(x, y, z).direction;

    let along_x = (g(x + 1, y, z) - g(x - 1, y, z)) / 2.0;
    let along_y = (g(x, y + 1, z) - g(x, y - 1, z)) / 2.0;
    let along_z = (g(x, y, z + 1) - g(x, y, z - 1)) / 2.0;

    Matrix3::from_columns(&[along_x, along_y, along_z])
}

/// `|dot(H * intensity * g, g)| / |g|^2`
///
/// Zero for near flat gradients (see [`GRADIENT_EPSILON`]) and for non finite results.
pub fn second_derivative(hessian: &Matrix3<f32>, intensity: f32, gradient: &Vector3<f32>) -> f32 {
    let norm_sq = gradient.norm_squared();
    if norm_sq <= GRADIENT_EPSILON {
        return 0.0;
    }

    let curvature = (hessian * gradient * intensity).dot(gradient) / norm_sq;

    if curvature.is_finite() {
        curvature.abs()
    } else {
        0.0
    }
}

/// Second derivative magnitude of every voxel of a scalar volume.
/// Immutable after construction, except for the interpolation mode.
#[derive(Debug, Clone)]
pub struct CurvatureVolume {
    grid: VoxelGrid<CurvatureVoxel>,
    magnitude_range: ValueRange,
    interpolation: InterpolationSelector,
}

impl CurvatureVolume {
    pub fn from_volume<V>(volume: &V) -> CurvatureVolume
    where
        V: Volume + Sync + ?Sized,
    {
        CurvatureVolume::with_options(volume, &DerivativeOptions::default())
    }

    pub fn with_options<V>(volume: &V, options: &DerivativeOptions) -> CurvatureVolume
    where
        V: Volume + Sync + ?Sized,
    {
        // Only needed during construction
        let gradients = GradientVolume::with_options(volume, options);
        CurvatureVolume::build(volume, gradients.grid(), options)
    }

    /// Reuses an already built gradient volume of the same source.
    pub fn from_gradients<V>(
        volume: &V,
        gradients: &GradientVolume,
        options: &DerivativeOptions,
    ) -> Result<CurvatureVolume>
    where
        V: Volume + Sync + ?Sized,
    {
        if volume.get_size() != gradients.get_size() {
            return Err(VolumeError::DimensionMismatch(
                volume.get_size(),
                gradients.get_size(),
            ));
        }
        Ok(CurvatureVolume::build(volume, gradients.grid(), options))
    }

    fn build<V>(
        volume: &V,
        gradients: &VoxelGrid<GradientVoxel>,
        options: &DerivativeOptions,
    ) -> CurvatureVolume
    where
        V: Volume + Sync + ?Sized,
    {
        let start = Instant::now();
        let size = volume.get_size();
        let mut grid = VoxelGrid::zeroed(size);

        let magnitude_range = fill_interior(
            size,
            grid.as_mut_slice(),
            options.workers(),
            |x, y, z| {
                let h = hessian(gradients, x, y, z);
                let gradient = gradients.get(x, y, z).direction;
                CurvatureVoxel {
                    magnitude: second_derivative(&h, volume.get_voxel(x, y, z), &gradient),
                }
            },
            |voxel| voxel.magnitude,
        );

        let (min, max) = magnitude_range.bounds_or_zero();
        log::debug!(
            "Curvature volume {size:?} built in {:?}, magnitude <{min};{max}>",
            start.elapsed()
        );

        CurvatureVolume {
            grid,
            magnitude_range,
            interpolation: InterpolationSelector::new(options.interpolation),
        }
    }

    pub fn get_size(&self) -> Vector3<usize> {
        self.grid.size()
    }

    /// Lowest stored magnitude, zero for a volume without voxels.
    pub fn min_magnitude(&self) -> f32 {
        self.magnitude_range.bounds_or_zero().0
    }

    /// Highest stored magnitude, zero for a volume without voxels.
    pub fn max_magnitude(&self) -> f32 {
        self.magnitude_range.bounds_or_zero().1
    }

    pub fn magnitude_range(&self) -> ValueRange {
        self.magnitude_range
    }

    /// Direct lookup without interpolation.
    /// Coordinates must be inside the volume, debug builds check it.
    pub fn get_voxel(&self, x: usize, y: usize, z: usize) -> CurvatureVoxel {
        self.grid.get(x, y, z)
    }

    pub fn get_data(&self, x: usize, y: usize, z: usize) -> Option<CurvatureVoxel> {
        self.grid.get_checked(x, y, z)
    }

    /// Sample at `pos` using the current interpolation mode.
    /// Zero voxel outside of the sampleable range:
    /// `[0, size)` for nearest neighbour, `[0, size - 1)` for linear and cubic.
    pub fn sample_at(&self, pos: Point3<f32>) -> CurvatureVoxel {
        self.grid.sample(pos, self.interpolation.get())
    }

    /// Like [`CurvatureVolume::sample_at`], with an explicit mode.
    pub fn sample_with(&self, pos: Point3<f32>, mode: InterpolationMode) -> CurvatureVoxel {
        self.grid.sample(pos, mode)
    }

    pub fn interpolation_mode(&self) -> InterpolationMode {
        self.interpolation.get()
    }

    /// Safe to call while other threads sample.
    pub fn set_interpolation_mode(&self, mode: InterpolationMode) {
        self.interpolation.set(mode);
    }

    pub fn voxels(&self) -> &[CurvatureVoxel] {
        self.grid.as_slice()
    }
}
