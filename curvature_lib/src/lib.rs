//! Derived volumes for transfer function driven volume rendering.
//!
//! A scalar [`Volume`](volumetric::Volume) is turned into a
//! [`GradientVolume`](volumetric::GradientVolume) and a
//! [`CurvatureVolume`](volumetric::CurvatureVolume) once, at load time.
//! Renderers then resample the derived volumes per ray step.

pub mod color;
pub mod common;
mod error;
pub mod histogram;
pub mod test_helpers;
pub mod transfer_functions;
pub mod volumetric;

pub use error::{Result, VolumeError};
pub use volumetric::{CurvatureVolume, GradientVolume, InterpolationMode, LinearVolume, Volume};

/// Builds the curvature volume of `volume` with `workers` construction threads.
pub fn curvature_of<V>(volume: &V, workers: usize) -> Result<CurvatureVolume>
where
    V: Volume + Sync,
{
    let options = volumetric::DerivativeOptions::builder()
        .worker_count(workers)
        .build()?;
    Ok(CurvatureVolume::with_options(volume, &options))
}
