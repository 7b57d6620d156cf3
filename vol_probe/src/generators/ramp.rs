use nalgebra::Vector3;

use super::SampleGenerator;

/// Intensity grows linearly along x, from 0 to 255
pub struct RampGenerator {
    step: f32,
}

impl RampGenerator {
    pub fn new(dims: Vector3<usize>) -> RampGenerator {
        let step = if dims.x > 1 {
            255.0 / (dims.x - 1) as f32
        } else {
            0.0
        };
        RampGenerator { step }
    }
}

impl SampleGenerator for RampGenerator {
    fn sample_at(&self, coords: Vector3<usize>) -> u8 {
        (coords.x as f32 * self.step).round().min(255.0) as u8
    }
}
