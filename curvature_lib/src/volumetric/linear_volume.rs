use nalgebra::{Point3, Vector3};

use crate::{common::ValueRange, Result, VolumeError};

use super::{grid::VoxelGrid, InterpolationMode, Volume};

/// Scalar volume with samples stored linearly in memory (x fastest).
pub struct LinearVolume {
    grid: VoxelGrid<f32>,
}

impl std::fmt::Debug for LinearVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Volume")
            .field("size", &self.grid.size())
            .field("data len ", &self.grid.as_slice().len())
            .finish()
    }
}

impl LinearVolume {
    /// `data` must hold exactly `size.x * size.y * size.z` samples.
    pub fn new(size: Vector3<usize>, data: Vec<f32>) -> Result<LinearVolume> {
        if size.iter().any(|&dim| dim == 0) {
            return Err(VolumeError::EmptyVolume);
        }
        let grid = VoxelGrid::from_vec(size, data)?;

        log::debug!("New linear volume, size {size:?}");

        Ok(LinearVolume { grid })
    }

    /// Volume from raw byte samples.
    pub fn from_bytes(size: Vector3<usize>, data: &[u8]) -> Result<LinearVolume> {
        let data = data.iter().map(|&val| val.into()).collect();
        LinearVolume::new(size, data)
    }

    /// Volume where sample at `(x, y, z)` is `f(x, y, z)`.
    pub fn from_fn<F>(size: Vector3<usize>, f: F) -> Result<LinearVolume>
    where
        F: Fn(usize, usize, usize) -> f32,
    {
        let mut data = Vec::with_capacity(size.product());
        for z in 0..size.z {
            for y in 0..size.y {
                for x in 0..size.x {
                    data.push(f(x, y, z));
                }
            }
        }
        LinearVolume::new(size, data)
    }

    pub fn data(&self) -> &[f32] {
        self.grid.as_slice()
    }

    /// Sample with an explicit mode, same bounds as the derived volumes.
    pub fn sample_with(&self, pos: Point3<f32>, mode: InterpolationMode) -> f32 {
        self.grid.sample(pos, mode)
    }

    /// Lowest and highest intensity.
    pub fn value_range(&self) -> ValueRange {
        ValueRange::from_samples(self.grid.as_slice().iter().copied())
    }
}

impl Volume for LinearVolume {
    fn get_size(&self) -> Vector3<usize> {
        self.grid.size()
    }

    fn get_data(&self, x: usize, y: usize, z: usize) -> Option<f32> {
        self.grid.get_checked(x, y, z)
    }

    fn get_voxel(&self, x: usize, y: usize, z: usize) -> f32 {
        self.grid.get(x, y, z)
    }

    fn sample_at(&self, pos: Point3<f32>) -> f32 {
        self.grid.trilinear(pos)
    }

    fn get_name(&self) -> &str {
        "LinearVolume"
    }
}
