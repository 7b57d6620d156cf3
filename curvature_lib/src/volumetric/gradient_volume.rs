use std::time::Instant;

use nalgebra::{Point3, Vector3};

use crate::common::ValueRange;

use super::{
    grid::{Lerp, VoxelGrid},
    slabs::fill_interior,
    DerivativeOptions, InterpolationMode, InterpolationSelector, Volume,
};

/// First derivative of the scalar field at a voxel.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GradientVoxel {
    pub direction: Vector3<f32>,
    /// `direction.norm()`
    pub magnitude: f32,
}

impl GradientVoxel {
    pub fn new(direction: Vector3<f32>) -> GradientVoxel {
        GradientVoxel {
            direction,
            magnitude: direction.norm(),
        }
    }

    pub fn zero() -> GradientVoxel {
        GradientVoxel::default()
    }
}

// Direction is blended as well, shading uses it as a normal
impl Lerp for GradientVoxel {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        GradientVoxel {
            direction: self.direction * (1.0 - t) + other.direction * t,
            magnitude: self.magnitude.lerp(&other.magnitude, t),
        }
    }
}

/// Central difference gradient at an interior voxel.
pub fn central_difference<V>(volume: &V, x: usize, y: usize, z: usize) -> GradientVoxel
where
    V: Volume + ?Sized,
{
    let gx = (volume.get_voxel(x + 1, y, z) - volume.get_voxel(x - 1, y, z)) / 2.0;
    let gy = (volume.get_voxel(x, y + 1, z) - volume.get_voxel(x, y - 1, z)) / 2.0;
    let gz = (volume.get_voxel(x, y, z + 1) - volume.get_voxel(x, y, z - 1)) / 2.0;

    GradientVoxel::new(Vector3::new(gx, gy, gz))
}

/// Gradient of every voxel of a scalar volume.
/// The one voxel thick border holds zero gradients.
#[derive(Debug, Clone)]
pub struct GradientVolume {
    grid: VoxelGrid<GradientVoxel>,
    magnitude_range: ValueRange,
    interpolation: InterpolationSelector,
}

impl GradientVolume {
    pub fn from_volume<V>(volume: &V) -> GradientVolume
    where
        V: Volume + Sync + ?Sized,
    {
        GradientVolume::with_options(volume, &DerivativeOptions::default())
    }

    pub fn with_options<V>(volume: &V, options: &DerivativeOptions) -> GradientVolume
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
            |x, y, z| central_difference(volume, x, y, z),
            |voxel| voxel.magnitude,
        );

        log::debug!(
            "Gradient volume {size:?} from {} built in {:?}",
            volume.get_name(),
            start.elapsed()
        );

        GradientVolume {
            grid,
            magnitude_range,
            interpolation: InterpolationSelector::new(options.interpolation),
        }
    }

    pub fn get_size(&self) -> Vector3<usize> {
        self.grid.size()
    }

    pub fn min_magnitude(&self) -> f32 {
        self.magnitude_range.bounds_or_zero().0
    }

    pub fn max_magnitude(&self) -> f32 {
        self.magnitude_range.bounds_or_zero().1
    }

    pub fn magnitude_range(&self) -> ValueRange {
        self.magnitude_range
    }

    /// Unchecked lookup, see [`VoxelGrid::get`].
    pub fn get_voxel(&self, x: usize, y: usize, z: usize) -> GradientVoxel {
        self.grid.get(x, y, z)
    }

    pub fn get_data(&self, x: usize, y: usize, z: usize) -> Option<GradientVoxel> {
        self.grid.get_checked(x, y, z)
    }

    /// Sample with the current interpolation mode.
    pub fn sample_at(&self, pos: Point3<f32>) -> GradientVoxel {
        self.grid.sample(pos, self.interpolation.get())
    }

    pub fn sample_with(&self, pos: Point3<f32>, mode: InterpolationMode) -> GradientVoxel {
        self.grid.sample(pos, mode)
    }

    pub fn interpolation_mode(&self) -> InterpolationMode {
        self.interpolation.get()
    }

    pub fn set_interpolation_mode(&self, mode: InterpolationMode) {
        self.interpolation.set(mode);
    }

    pub fn grid(&self) -> &VoxelGrid<GradientVoxel> {
        &self.grid
    }

    pub fn voxels(&self) -> &[GradientVoxel] {
        self.grid.as_slice()
    }
}
