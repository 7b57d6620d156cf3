use nalgebra::{Point3, Vector3};

use super::SampleGenerator;

/// Smooth blob, `255 / (1 + (d / r)^2)` where `d` is distance from the centre
pub struct SphereGenerator {
    centre: Point3<f32>,
    radius: f32,
}

impl SphereGenerator {
    pub fn new(dims: Vector3<usize>) -> SphereGenerator {
        let dims_f = dims.cast::<f32>();
        let centre = Point3::from((dims_f - Vector3::repeat(1.0)) / 2.0);
        let radius = (dims_f.min() / 4.0).max(1.0);
        SphereGenerator { centre, radius }
    }
}

impl SampleGenerator for SphereGenerator {
    fn sample_at(&self, coords: Vector3<usize>) -> u8 {
        let pos = Point3::from(coords.cast::<f32>());
        let d = (pos - self.centre).magnitude() / self.radius;
        (255.0 / (1.0 + d * d)).round() as u8
    }
}
