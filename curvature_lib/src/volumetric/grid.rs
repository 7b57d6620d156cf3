use nalgebra::{Point3, Vector3};

use crate::{Result, VolumeError};

use super::InterpolationMode;

/// Linear blend of two voxels, `t` in <0;1>.
/// `t == 0` must return `self` exactly.
pub trait Lerp: Copy {
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }
}

/// Flat index of voxel `(x, y, z)` in a grid of `size`.
/// X is the fastest changing axis, one z slice is a contiguous run of `size.x * size.y` voxels.
#[inline]
pub fn flat_index(size: &Vector3<usize>, x: usize, y: usize, z: usize) -> usize {
    x + size.x * (y + size.y * z)
}

/// Dense, axis aligned grid of voxels.
/// Voxels are one unit apart, voxel `(0,0,0)` lies at the origin.
#[derive(Clone, PartialEq)]
pub struct VoxelGrid<T> {
    size: Vector3<usize>,
    data: Vec<T>,
}

impl<T> std::fmt::Debug for VoxelGrid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoxelGrid")
            .field("size", &self.size)
            .field("data len", &self.data.len())
            .finish()
    }
}

impl<T> VoxelGrid<T>
where
    T: Copy + Default,
{
    /// Grid filled with default (zero) voxels.
    pub fn zeroed(size: Vector3<usize>) -> VoxelGrid<T> {
        VoxelGrid {
            size,
            data: vec![T::default(); size.product()],
        }
    }
}

impl<T> VoxelGrid<T> {
    pub fn from_vec(size: Vector3<usize>, data: Vec<T>) -> Result<VoxelGrid<T>> {
        let expected = size.product();
        if data.len() != expected {
            return Err(VolumeError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(VoxelGrid { size, data })
    }

    pub fn size(&self) -> Vector3<usize> {
        self.size
    }

    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        flat_index(&self.size, x, y, z)
    }

    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.size.x && y < self.size.y && z < self.size.z
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> VoxelGrid<T>
where
    T: Copy,
{
    /// Unchecked lookup, coordinates must be inside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> T {
        debug_assert!(
            self.contains(x, y, z),
            "voxel ({x},{y},{z}) outside grid of size {:?}",
            self.size
        );
        self.data[self.index(x, y, z)]
    }

    pub fn get_checked(&self, x: usize, y: usize, z: usize) -> Option<T> {
        if self.contains(x, y, z) {
            Some(self.data[self.index(x, y, z)])
        } else {
            None
        }
    }
}

impl<T> VoxelGrid<T>
where
    T: Lerp + Default,
{
    pub fn sample(&self, pos: Point3<f32>, mode: InterpolationMode) -> T {
        match mode {
            InterpolationMode::NearestNeighbour => self.nearest(pos),
            InterpolationMode::Linear => self.trilinear(pos),
            // no cubic kernel for derived data
            InterpolationMode::Cubic => self.trilinear(pos),
        }
    }

    /// Nearest voxel, zero voxel if `pos` is outside `[0, size)` on any axis.
    pub fn nearest(&self, pos: Point3<f32>) -> T {
        let mut coords = [0usize; 3];
        for axis in 0..3 {
            let v = pos[axis];
            let dim = self.size[axis];
            // NaN fails the comparison too
            if !(v >= 0.0 && v < dim as f32) {
                return T::default();
            }
            let rounded = (v + 0.5).floor() as usize;
            if rounded >= dim {
                return T::default();
            }
            coords[axis] = rounded;
        }
        self.get(coords[0], coords[1], coords[2])
    }

    /// Trilinear interpolation, zero voxel if `pos` is outside `[0, size - 1)` on any axis.
    /// The stencil reads one voxel past the floor in every direction.
    pub fn trilinear(&self, pos: Point3<f32>) -> T {
        for axis in 0..3 {
            let v = pos[axis];
            if !(v >= 0.0 && v < self.size[axis] as f32 - 1.0) {
                return T::default();
            }
        }

        let floor = pos.map(f32::floor);
        let t = pos - floor;

        let x = floor.x as usize;
        let y = floor.y as usize;
        let z = floor.z as usize;

        let c000 = self.get(x, y, z);
        let c001 = self.get(x, y, z + 1);
        let c010 = self.get(x, y + 1, z);
        let c011 = self.get(x, y + 1, z + 1);
        let c100 = self.get(x + 1, y, z);
        let c101 = self.get(x + 1, y, z + 1);
        let c110 = self.get(x + 1, y + 1, z);
        let c111 = self.get(x + 1, y + 1, z + 1);

        // z
        let c00 = c000.lerp(&c001, t.z);
        let c01 = c010.lerp(&c011, t.z);
        let c10 = c100.lerp(&c101, t.z);
        let c11 = c110.lerp(&c111, t.z);

        // y
        let c0 = c00.lerp(&c01, t.y);
        let c1 = c10.lerp(&c11, t.y);

        // x
        c0.lerp(&c1, t.x)
    }
}
