use nalgebra::{Point3, Vector3};

// Volume assumes f32 data
// Voxels are one unit apart on every axis, voxel (0,0,0) sits at the origin
pub trait Volume {
    // get data dimensions
    fn get_size(&self) -> Vector3<usize>;

    // checked lookup, None outside the grid
    fn get_data(&self, x: usize, y: usize, z: usize) -> Option<f32>;

    /// Indexed lookup for callers that already validated the coordinates.
    /// Out of range coordinates are a contract violation, debug builds panic.
    fn get_voxel(&self, x: usize, y: usize, z: usize) -> f32 {
        debug_assert!(
            self.is_in_grid(x, y, z),
            "voxel ({x},{y},{z}) outside volume of size {:?}",
            self.get_size()
        );
        self.get_data(x, y, z).unwrap_or(0.0)
    }

    // trilinear interpolation sample, zero if outside
    // pos in volume coordinates
    fn sample_at(&self, pos: Point3<f32>) -> f32;

    // position can be sampled by trilinear interpolation
    fn is_in(&self, pos: &Point3<f32>) -> bool {
        let size = self.get_size();
        (0..3).all(|axis| pos[axis] >= 0.0 && pos[axis] < (size[axis] as f32 - 1.0))
    }

    fn is_in_grid(&self, x: usize, y: usize, z: usize) -> bool {
        let size = self.get_size();
        x < size.x && y < size.y && z < size.z
    }

    fn voxel_count(&self) -> usize {
        self.get_size().product()
    }

    fn get_name(&self) -> &str;
}
