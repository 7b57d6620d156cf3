use std::ops::RangeInclusive;

use nalgebra::{vector, Vector3};

use super::SampleGenerator;

/// Generate volume with a number of randomly placed shapes
pub struct ShapesGenerator {
    shapes: Vec<ShapeInfo>,
}

impl ShapesGenerator {
    pub fn new(
        dims: Vector3<usize>,
        n_of_shapes: usize,
        sample: u8,
        obj_size: usize,
        seed: Option<u64>,
    ) -> ShapesGenerator {
        let size = Vector3::repeat(obj_size);
        let variance = Vector3::repeat(obj_size / 4);
        let random_shape_gen = ShapeInfoGenerator::new(dims, size, variance, sample, 10, seed);
        let shapes = random_shape_gen.get_shapes(n_of_shapes);
        log::debug!("Placed {} shapes", shapes.len());
        ShapesGenerator { shapes }
    }
}

impl SampleGenerator for ShapesGenerator {
    fn sample_at(&self, coords: Vector3<usize>) -> u8 {
        // First shape containing the point wins
        self.shapes
            .iter()
            .find(|shape| shape.contains(coords))
            .map(|shape| shape.render_at(coords - shape.position_low))
            .unwrap_or(0)
    }
}

// # of enum ShapeType variants
const N_OF_SHAPE_KINDS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeType {
    Cuboid,
    Sphere,
}

/// One shape in volume, bounds are inclusive
#[derive(Debug)]
pub struct ShapeInfo {
    pub position_low: Vector3<usize>,
    pub position_high: Vector3<usize>,
    pub shape_type: ShapeType,
    pub sample: u8,
}

impl ShapeInfo {
    fn contains(&self, coords: Vector3<usize>) -> bool {
        (0..3).all(|i| self.position_low[i] <= coords[i] && coords[i] <= self.position_high[i])
    }

    fn render_at(&self, offset: Vector3<usize>) -> u8 {
        match self.shape_type {
            ShapeType::Cuboid => self.sample,
            ShapeType::Sphere => self.render_sphere(offset),
        }
    }

    fn render_sphere(&self, offset: Vector3<usize>) -> u8 {
        let extent = (self.position_high - self.position_low).cast::<f32>();
        let center = extent / 2.0;
        let r = extent.x / 2.0;

        if (offset.cast::<f32>() - center).magnitude() <= r {
            self.sample
        } else {
            0
        }
    }
}

/// Helper type, draws random shapes that fit the volume
pub struct ShapeInfoGenerator {
    rng: fastrand::Rng,
    vol_dims: Vector3<usize>,
    size: Vector3<usize>,
    size_variance: Vector3<usize>,
    sample: u8,
    sample_variance: u8,
}

impl ShapeInfoGenerator {
    #[must_use]
    pub fn new(
        vol_dims: Vector3<usize>,
        size: Vector3<usize>,
        size_variance: Vector3<usize>,
        sample: u8,
        sample_variance: u8,
        seed: Option<u64>,
    ) -> Self {
        let rng = fastrand::Rng::new();
        if let Some(seed) = seed {
            rng.seed(seed);
        }

        Self {
            rng,
            vol_dims,
            size,
            size_variance,
            sample,
            sample_variance,
        }
    }

    fn random_shape(&self) -> ShapeType {
        match self.rng.u8(0..N_OF_SHAPE_KINDS) {
            0 => ShapeType::Cuboid,
            _ => ShapeType::Sphere,
        }
    }

    fn random_vector(&self, ranges: [RangeInclusive<usize>; 3]) -> Vector3<usize> {
        let [x, y, z] = ranges;
        vector![self.rng.usize(x), self.rng.usize(y), self.rng.usize(z)]
    }

    pub fn get_shapes(&self, n: usize) -> Vec<ShapeInfo> {
        if self.vol_dims.min() == 0 {
            return vec![];
        }
        (0..n).map(|_| self.get_shape()).collect()
    }

    /// Volume must not be empty
    pub fn get_shape(&self) -> ShapeInfo {
        let shape_type = self.random_shape();

        // Extent is the distance between inclusive bounds
        let max_extent = self.vol_dims - Vector3::repeat(1);
        let size_range = |i: usize| {
            let low = self.size[i].saturating_sub(self.size_variance[i]).min(max_extent[i]);
            let high = (self.size[i] + self.size_variance[i]).min(max_extent[i]);
            low..=high
        };
        let extent = self.random_vector([size_range(0), size_range(1), size_range(2)]);

        // Spawn shape in positions it fits
        let pos_range = |i: usize| 0..=(max_extent[i] - extent[i]);
        let position_low = self.random_vector([pos_range(0), pos_range(1), pos_range(2)]);
        let position_high = position_low + extent;

        ShapeInfo {
            position_low,
            position_high,
            shape_type,
            sample: self.random_sample(),
        }
    }

    fn random_sample(&self) -> u8 {
        // Uses saturating intrinsics, so there is no overflow
        let low = self.sample.saturating_sub(self.sample_variance);
        let high = self.sample.saturating_add(self.sample_variance);
        self.rng.u8(low..=high)
    }
}
