//! Text output of the derived volumes

use std::fmt::Write;

use curvature_lib::{
    histogram::Histogram, CurvatureVolume, GradientVolume, InterpolationMode, LinearVolume, Volume,
};
use nalgebra::Point3;

use crate::config::Config;

// Darkest to brightest
const SHADES: &[u8] = b" .:-=+*#%@";

pub fn summary(
    volume: &LinearVolume,
    gradients: &GradientVolume,
    curvature: &CurvatureVolume,
) -> String {
    let size = volume.get_size();
    let intensity = volume.value_range();
    let (i_low, i_high) = intensity.bounds_or_zero();
    let mut out = String::new();

    writeln!(out, "Volume {}x{}x{}", size.x, size.y, size.z).ok();
    writeln!(out, "  intensity  {i_low:>12.4} .. {i_high:<12.4}").ok();
    writeln!(
        out,
        "  gradient   {:>12.4} .. {:<12.4}",
        gradients.min_magnitude(),
        gradients.max_magnitude()
    )
    .ok();
    writeln!(
        out,
        "  curvature  {:>12.4} .. {:<12.4}",
        curvature.min_magnitude(),
        curvature.max_magnitude()
    )
    .ok();
    out
}

pub fn probes(
    config: &Config,
    volume: &LinearVolume,
    gradients: &GradientVolume,
    curvature: &CurvatureVolume,
) -> String {
    let mut out = String::new();
    if config.probes.is_empty() {
        return out;
    }

    writeln!(out, "Probes ({})", config.interpolation.name()).ok();
    for &pos in &config.probes {
        let line = probe_line(pos, config.interpolation, volume, gradients, curvature);
        writeln!(out, "  {line}").ok();
    }
    out
}

// all three volumes are sampled in the same mode
fn probe_line(
    pos: Point3<f32>,
    mode: InterpolationMode,
    volume: &LinearVolume,
    gradients: &GradientVolume,
    curvature: &CurvatureVolume,
) -> String {
    let intensity = volume.sample_with(pos, mode);
    let gradient = gradients.sample_with(pos, mode);
    let magnitude = curvature.sample_with(pos, mode).magnitude;
    format!(
        "[{:.2}, {:.2}, {:.2}] intensity {intensity:.4} gradient {:.4} curvature {magnitude:.4}",
        pos.x, pos.y, pos.z, gradient.magnitude
    )
}

/// Histogram as characters, top row holds the highest curvature
pub fn histogram(histogram: &Histogram) -> String {
    let (width, height) = histogram.resolution();
    let max = histogram.max_count().max(1) as f32;
    let intensity = histogram.intensity_range();
    let magnitude = histogram.magnitude_range();
    let mut out = String::new();

    writeln!(
        out,
        "Histogram intensity {:.2} .. {:.2}, curvature {:.2} .. {:.2}",
        intensity.low, intensity.high, magnitude.low, magnitude.high
    )
    .ok();
    for row in (0..height).rev() {
        let line: String = (0..width)
            .map(|col| shade(histogram.count(col, row) as f32 / max))
            .collect();
        writeln!(out, "|{line}|").ok();
    }
    out
}

fn shade(t: f32) -> char {
    let last = SHADES.len() - 1;
    let i = (t.clamp(0.0, 1.0) * last as f32).ceil() as usize;
    SHADES[i.min(last)] as char
}

#[cfg(test)]
mod test {

    use curvature_lib::test_helpers;
    use nalgebra::{point, vector};

    use super::*;

    #[test]
    fn shades() {
        assert_eq!(shade(0.0), ' ');
        assert_eq!(shade(0.01), '.');
        assert_eq!(shade(1.0), '@');
        assert_eq!(shade(f32::NAN), ' ');
    }

    #[test]
    fn histogram_rows() {
        let vol = test_helpers::sphere_volume(vector![8, 8, 8], 2.0);
        let curvature = CurvatureVolume::from_volume(&vol);
        let hist = Histogram::from_volumes(&vol, &curvature, (10, 4)).unwrap();

        let text = histogram(&hist);
        let rows: Vec<_> = text.lines().skip(1).collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.chars().count() == 12));
        assert!(text.contains('@'));
    }

    #[test]
    fn probe_outside_is_zero() {
        let vol = test_helpers::flat_volume(vector![4, 4, 4], 3.0);
        let gradients = GradientVolume::from_volume(&vol);
        let curvature = CurvatureVolume::from_volume(&vol);

        let linear = InterpolationMode::Linear;
        let line = probe_line(point![-1.0, 0.0, 0.0], linear, &vol, &gradients, &curvature);
        assert!(line.contains("intensity 0.0000"));
        let line = probe_line(point![1.0, 1.0, 1.0], linear, &vol, &gradients, &curvature);
        assert!(line.contains("intensity 3.0000"));
    }

    #[test]
    fn nearest_probe_reaches_last_voxel() {
        let vol = test_helpers::ramp_volume(vector![6, 5, 5]);
        let gradients = GradientVolume::from_volume(&vol);
        let curvature = CurvatureVolume::from_volume(&vol);
        let edge = point![5.0, 2.0, 2.0];

        let line = probe_line(
            edge,
            InterpolationMode::NearestNeighbour,
            &vol,
            &gradients,
            &curvature,
        );
        assert!(line.contains("intensity 5.0000"), "{line}");

        let line = probe_line(edge, InterpolationMode::Linear, &vol, &gradients, &curvature);
        assert!(line.contains("intensity 0.0000"), "{line}");
    }
}
