pub mod construction;
pub mod sampling;
