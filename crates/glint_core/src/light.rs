//! Point light sources.

use glint_math::{Color, Vec3};

/// A point light with a position and an emission color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    /// Create a new light.
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}
