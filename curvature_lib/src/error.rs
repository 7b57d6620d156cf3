//! Error types of the library.
//!
//! Only input validation can fail. Building derived volumes from a valid
//! [`Volume`](crate::volumetric::Volume) never returns an error.

use nalgebra::Vector3;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VolumeError {
    /// At least one dimension of a volume is zero.
    #[error("volume has a zero dimension")]
    EmptyVolume,

    /// Sample buffer does not match the volume dimensions.
    #[error("data size mismatch: expected {expected} samples, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Two volumes that should share a grid do not.
    #[error("volume dimensions differ: {0:?} vs {1:?}")]
    DimensionMismatch(Vector3<usize>, Vector3<usize>),

    /// Histogram resolution with a zero axis.
    #[error("invalid resolution {0}x{1}")]
    InvalidResolution(usize, usize),

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Raw interpolation mode value that names no mode.
    #[error("unknown interpolation mode {0}")]
    UnknownInterpolationMode(u8),
}

pub type Result<T> = std::result::Result<T, VolumeError>;
