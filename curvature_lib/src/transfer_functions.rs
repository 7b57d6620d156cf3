//! Transfer functions consuming derived volumes.
//!
//! Parameters come from the render configuration owned by the UI,
//! this module only evaluates them.

use nalgebra::Point3;

use crate::{
    color::{self, RGBA},
    common::ValueRange,
    histogram::bin_index,
    volumetric::{CurvatureVolume, Volume},
};

pub const COLOR_MAP_LEN: usize = 256;

/// 1D transfer function, a table of colors over an intensity interval.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    colors: Vec<RGBA>,
    /// Value mapped to the first entry
    pub index_start: f32,
    /// Width of the interval covered by the table
    pub index_range: f32,
}

impl ColorMap {
    pub fn new(colors: Vec<RGBA>, index_start: f32, index_range: f32) -> ColorMap {
        ColorMap {
            colors,
            index_start,
            index_range,
        }
    }

    /// Grayscale ramp with opacity rising along the interval.
    pub fn grayscale(index_start: f32, index_range: f32) -> ColorMap {
        let last = (COLOR_MAP_LEN - 1) as f32;
        let colors = (0..COLOR_MAP_LEN)
            .map(|i| {
                let v = i as f32 / last;
                color::mono(v, v)
            })
            .collect();
        ColorMap::new(colors, index_start, index_range)
    }

    pub fn colors(&self) -> &[RGBA] {
        &self.colors
    }

    /// `index = (value - start) / range * len`
    pub fn lookup(&self, value: f32) -> RGBA {
        if self.colors.is_empty() {
            return color::zero();
        }
        let range = ValueRange {
            low: self.index_start,
            high: self.index_start + self.index_range,
        };
        self.colors[bin_index(value, &range, self.colors.len())]
    }
}

/// 2D transfer function over intensity and second derivative magnitude.
///
/// Opacity falls off linearly with distance from `intensity`, reaching zero at `radius`.
/// Voxels with curvature magnitude of at least `threshold` (boundaries) take `color_high`,
/// the rest `color_low`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondDerivativeTf {
    pub intensity: f32,
    pub radius: f32,
    pub threshold: f32,
    pub color_low: RGBA,
    pub color_high: RGBA,
}

impl Default for SecondDerivativeTf {
    fn default() -> Self {
        SecondDerivativeTf {
            intensity: 128.0,
            radius: 32.0,
            threshold: 1.0,
            color_low: color::new(0.0, 0.0, 1.0, 0.3),
            color_high: color::new(0.9, 0.3, 0.3, 1.0),
        }
    }
}

impl SecondDerivativeTf {
    pub fn evaluate(&self, intensity: f32, curvature_magnitude: f32) -> RGBA {
        let distance = (intensity - self.intensity).abs();
        if !(self.radius > 0.0) || !(distance <= self.radius) {
            return color::zero();
        }

        let falloff = 1.0 - distance / self.radius;
        let base = if curvature_magnitude >= self.threshold {
            self.color_high
        } else {
            self.color_low
        };
        color::fade(base, falloff)
    }

    /// Samples both volumes at `pos` with their current interpolation, then evaluates.
    pub fn evaluate_at<V>(&self, volume: &V, curvature: &CurvatureVolume, pos: Point3<f32>) -> RGBA
    where
        V: Volume + ?Sized,
    {
        let intensity = volume.sample_at(pos);
        let magnitude = curvature.sample_at(pos).magnitude;
        self.evaluate(intensity, magnitude)
    }
}

#[cfg(test)]
mod test {

    use nalgebra::{point, vector};

    use super::*;
    use crate::{test_helpers::*, InterpolationMode};

    fn tf() -> SecondDerivativeTf {
        SecondDerivativeTf {
            intensity: 100.0,
            radius: 20.0,
            threshold: 5.0,
            color_low: color::new(0.0, 0.0, 1.0, 0.5),
            color_high: color::new(1.0, 0.0, 0.0, 1.0),
        }
    }

    #[test]
    fn falloff() {
        let tf = tf();

        assert_eq!(tf.evaluate(100.0, 0.0), color::new(0.0, 0.0, 1.0, 0.5));
        assert_eq!(tf.evaluate(110.0, 0.0).w, 0.25);
        assert_eq!(tf.evaluate(90.0, 0.0).w, 0.25);
        assert_eq!(tf.evaluate(120.0, 0.0).w, 0.0);
        assert_eq!(tf.evaluate(121.0, 0.0), color::zero());
        assert_eq!(tf.evaluate(f32::NAN, 0.0), color::zero());
    }

    #[test]
    fn threshold_picks_color() {
        let tf = tf();

        assert_eq!(tf.evaluate(100.0, 4.9), tf.color_low);
        assert_eq!(tf.evaluate(100.0, 5.0), tf.color_high);
        assert_eq!(tf.evaluate(105.0, 50.0), color::new(1.0, 0.0, 0.0, 0.75));
    }

    #[test]
    fn zero_radius_is_invisible() {
        let tf = SecondDerivativeTf {
            radius: 0.0,
            ..tf()
        };
        assert_eq!(tf.evaluate(100.0, 10.0), color::zero());
    }

    #[test]
    fn evaluate_at_samples_volumes() {
        let vol = flat_volume(vector![4, 4, 4], 100.0);
        let curvature = CurvatureVolume::from_volume(&vol);
        curvature.set_interpolation_mode(InterpolationMode::Linear);
        let tf = tf();

        assert_eq!(tf.evaluate_at(&vol, &curvature, point![1.5, 1.5, 1.5]), tf.color_low);
        // outside, intensity sample is zero
        assert_eq!(tf.evaluate_at(&vol, &curvature, point![9.0, 1.0, 1.0]), color::zero());
    }

    #[test]
    fn color_map_lookup() {
        let map = ColorMap::grayscale(0.0, 256.0);

        assert_eq!(map.colors().len(), COLOR_MAP_LEN);
        assert_eq!(map.lookup(-5.0), color::mono(0.0, 0.0));
        assert_eq!(map.lookup(255.5), color::mono(1.0, 1.0));
        assert_eq!(map.lookup(1000.0), color::mono(1.0, 1.0));
        assert_eq!(map.lookup(1.0), map.colors()[1]);

        let empty = ColorMap::new(vec![], 0.0, 1.0);
        assert_eq!(empty.lookup(0.5), color::zero());
    }
}
