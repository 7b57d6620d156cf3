//! RGBA colors used by transfer functions and histogram images.
//! Channels are in range <0;1>.

use nalgebra::{vector, Vector4};

pub type RGBA = Vector4<f32>;

pub fn new(r: f32, g: f32, b: f32, a: f32) -> RGBA {
    vector![r, g, b, a]
}

pub fn zero() -> RGBA {
    vector![0.0, 0.0, 0.0, 0.0]
}

pub fn mono(v: f32, opacity: f32) -> RGBA {
    vector![v, v, v, opacity]
}

/// Same color, opacity multiplied by `factor`.
pub fn fade(color: RGBA, factor: f32) -> RGBA {
    vector![color.x, color.y, color.z, color.w * factor]
}
