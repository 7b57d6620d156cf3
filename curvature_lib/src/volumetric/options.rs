use std::{num::NonZeroUsize, thread};

use crate::{Result, VolumeError};

use super::InterpolationMode;

/// Settings for building derived volumes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DerivativeOptions {
    /// Number of construction threads, `None` means one per available core
    pub worker_count: Option<usize>,
    /// Interpolation mode the built volume starts with
    pub interpolation: InterpolationMode,
}

impl DerivativeOptions {
    pub fn builder() -> DerivativeOptionsBuilder {
        DerivativeOptionsBuilder::default()
    }

    /// Effective number of workers, at least 1.
    pub fn workers(&self) -> usize {
        match self.worker_count {
            Some(n) => n.max(1),
            None => thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}

#[derive(Debug, Default)]
pub struct DerivativeOptionsBuilder {
    worker_count: Option<usize>,
    interpolation: InterpolationMode,
}

impl DerivativeOptionsBuilder {
    pub fn worker_count(mut self, workers: usize) -> Self {
        self.worker_count = Some(workers);
        self
    }

    /// Run construction on the calling thread only.
    pub fn single_thread(self) -> Self {
        self.worker_count(1)
    }

    pub fn interpolation(mut self, mode: InterpolationMode) -> Self {
        self.interpolation = mode;
        self
    }

    pub fn build(self) -> Result<DerivativeOptions> {
        if self.worker_count == Some(0) {
            return Err(VolumeError::InvalidOptions(
                "worker count must be at least 1".into(),
            ));
        }
        Ok(self.build_unchecked())
    }

    /// Skips validation, zero workers are treated as one.
    pub fn build_unchecked(self) -> DerivativeOptions {
        DerivativeOptions {
            worker_count: self.worker_count,
            interpolation: self.interpolation,
        }
    }
}
