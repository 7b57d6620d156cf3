use nalgebra::Vector3;

use super::SampleGenerator;

const PAD: usize = 5;

/// Solid block of one value, surrounded by empty padding
pub struct SolidGenerator {
    sample: u8,
    pad: usize,
    dims: Vector3<usize>,
}

impl SolidGenerator {
    pub fn new(dims: Vector3<usize>, sample: u8) -> SolidGenerator {
        // Small volumes would have no solid part
        let pad = PAD.min(dims.min() / 4);
        SolidGenerator { sample, pad, dims }
    }
}

impl SampleGenerator for SolidGenerator {
    fn sample_at(&self, coords: Vector3<usize>) -> u8 {
        let inside = (0..3).all(|axis| {
            coords[axis] >= self.pad && coords[axis] + self.pad < self.dims[axis]
        });
        if inside {
            self.sample
        } else {
            0
        }
    }
}
