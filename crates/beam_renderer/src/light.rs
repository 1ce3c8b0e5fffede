//! Point light source.

use crate::Color;
use beam_math::Vec3;

/// A point light. `color` doubles as the light's intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}
