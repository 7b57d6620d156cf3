mod curvature_volume;
mod gradient_volume;
mod grid;
mod interpolation;
mod linear_volume;
mod options;
mod slabs;
mod volume;

pub use curvature_volume::{
    hessian, second_derivative, CurvatureVolume, CurvatureVoxel, GRADIENT_EPSILON,
};
pub use gradient_volume::{central_difference, GradientVolume, GradientVoxel};
pub use grid::{flat_index, Lerp, VoxelGrid};
pub use interpolation::{InterpolationMode, InterpolationSelector};
pub use linear_volume::LinearVolume;
pub use options::{DerivativeOptions, DerivativeOptionsBuilder};
pub use volume::Volume;
