//! 2D histogram of intensity against curvature magnitude.
//!
//! Transfer function editors draw it as a background image, so the user can
//! see where boundaries (high curvature) sit in the intensity range.

use crate::{
    color::{self, RGBA},
    common::ValueRange,
    volumetric::{CurvatureVolume, Volume},
    Result, VolumeError,
};

/// Maps `value` to one of `bins` bins spread over `range`.
/// `index = (value - start) / range * bins`, clamped to the valid indexes.
pub fn bin_index(value: f32, range: &ValueRange, bins: usize) -> usize {
    let span = range.span();
    if bins == 0 || !(span > 0.0) {
        return 0;
    }
    let t = (value - range.low) / span * bins as f32;
    if !(t > 0.0) {
        return 0;
    }
    (t as usize).min(bins - 1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// (intensity bins, magnitude bins)
    resolution: (usize, usize),
    intensity_range: ValueRange,
    magnitude_range: ValueRange,
    /// Row major, row = magnitude bin
    counts: Vec<u32>,
}

impl Histogram {
    /// Bins every voxel of `volume` by its intensity (x axis)
    /// and its curvature magnitude (y axis).
    pub fn from_volumes<V>(
        volume: &V,
        curvature: &CurvatureVolume,
        resolution: (usize, usize),
    ) -> Result<Histogram>
    where
        V: Volume + ?Sized,
    {
        let (width, height) = resolution;
        if width == 0 || height == 0 {
            return Err(VolumeError::InvalidResolution(width, height));
        }

        let size = volume.get_size();
        if size != curvature.get_size() {
            return Err(VolumeError::DimensionMismatch(size, curvature.get_size()));
        }

        let mut intensity_range = ValueRange::empty();
        for z in 0..size.z {
            for y in 0..size.y {
                for x in 0..size.x {
                    intensity_range.extend(volume.get_voxel(x, y, z));
                }
            }
        }
        let magnitude_range = curvature.magnitude_range();

        let mut counts = vec![0u32; width * height];
        for z in 0..size.z {
            for y in 0..size.y {
                for x in 0..size.x {
                    let col = bin_index(volume.get_voxel(x, y, z), &intensity_range, width);
                    let row = bin_index(
                        curvature.get_voxel(x, y, z).magnitude,
                        &magnitude_range,
                        height,
                    );
                    counts[row * width + col] += 1;
                }
            }
        }

        log::debug!(
            "Histogram {width}x{height} of {} voxels",
            counts.iter().map(|&c| c as u64).sum::<u64>()
        );

        Ok(Histogram {
            resolution,
            intensity_range,
            magnitude_range,
            counts,
        })
    }

    pub fn resolution(&self) -> (usize, usize) {
        self.resolution
    }

    pub fn intensity_range(&self) -> ValueRange {
        self.intensity_range
    }

    pub fn magnitude_range(&self) -> ValueRange {
        self.magnitude_range
    }

    /// Voxels in intensity bin `x` and magnitude bin `y`.
    pub fn count(&self, x: usize, y: usize) -> u32 {
        self.counts[y * self.resolution.0 + x]
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Grayscale image, brightness is `count / max_count`.
    /// Image row 0 holds the highest magnitude bin.
    pub fn to_image(&self) -> Vec<RGBA> {
        let (width, height) = self.resolution;
        let max = self.max_count().max(1) as f32;

        let mut image = Vec::with_capacity(width * height);
        for row in (0..height).rev() {
            for col in 0..width {
                let v = self.count(col, row) as f32 / max;
                image.push(color::mono(v, 1.0));
            }
        }
        image
    }
}
