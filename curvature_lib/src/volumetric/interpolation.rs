use std::sync::atomic::{AtomicU8, Ordering};

use crate::VolumeError;

/// Resampling policy of derived volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InterpolationMode {
    NearestNeighbour = 0,
    Linear = 1,
    /// Aliases `Linear`
    Cubic = 2,
}

impl InterpolationMode {
    pub const ALL: [InterpolationMode; 3] = [
        InterpolationMode::NearestNeighbour,
        InterpolationMode::Linear,
        InterpolationMode::Cubic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InterpolationMode::NearestNeighbour => "nearest",
            InterpolationMode::Linear => "linear",
            InterpolationMode::Cubic => "cubic",
        }
    }
}

impl Default for InterpolationMode {
    fn default() -> Self {
        InterpolationMode::NearestNeighbour
    }
}

impl TryFrom<u8> for InterpolationMode {
    type Error = VolumeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(InterpolationMode::NearestNeighbour),
            1 => Ok(InterpolationMode::Linear),
            2 => Ok(InterpolationMode::Cubic),
            v => Err(VolumeError::UnknownInterpolationMode(v)),
        }
    }
}

impl From<InterpolationMode> for u8 {
    fn from(mode: InterpolationMode) -> Self {
        mode as u8
    }
}

/// Interpolation mode that can be switched through a shared reference,
/// while render threads keep sampling.
#[derive(Debug)]
pub struct InterpolationSelector(AtomicU8);

impl InterpolationSelector {
    pub fn new(mode: InterpolationMode) -> InterpolationSelector {
        InterpolationSelector(AtomicU8::new(mode.into()))
    }

    /// Current mode.
    ///
    /// # Panics
    /// If the stored value names no mode.
    pub fn get(&self) -> InterpolationMode {
        let raw = self.0.load(Ordering::Relaxed);
        match InterpolationMode::try_from(raw) {
            Ok(mode) => mode,
            Err(err) => panic!("interpolation selector corrupted: {err}"),
        }
    }

    pub fn set(&self, mode: InterpolationMode) {
        self.0.store(mode.into(), Ordering::Relaxed);
    }
}

impl Default for InterpolationSelector {
    fn default() -> Self {
        InterpolationSelector::new(InterpolationMode::default())
    }
}

impl Clone for InterpolationSelector {
    fn clone(&self) -> Self {
        InterpolationSelector::new(self.get())
    }
}
