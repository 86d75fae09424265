//! Surface appearance: a pigment plus the Phong coefficients.

use glint_math::Color;

use crate::image::Image;

/// What a surface shows before lighting is applied.
///
/// Exactly one source is authoritative per material: either a flat color or
/// a texture image sampled through the shape's UV mapping.
#[derive(Clone, Debug)]
pub enum Pigment {
    Solid(Color),
    Texture(Image),
}

/// A Phong material.
#[derive(Clone, Debug)]
pub struct Material {
    pub pigment: Pigment,
    /// Ambient intensity
    pub ka: f64,
    /// Diffuse intensity
    pub kd: f64,
    /// Specular intensity; also scales the mirror reflection
    pub ks: f64,
    /// Exponent for specular highlight size
    pub n: f64,
}

impl Material {
    /// Material with a flat color.
    pub fn solid(color: Color, ka: f64, kd: f64, ks: f64, n: f64) -> Self {
        Self {
            pigment: Pigment::Solid(color),
            ka,
            kd,
            ks,
            n,
        }
    }

    /// Material colored by a texture image.
    pub fn textured(texture: Image, ka: f64, kd: f64, ks: f64, n: f64) -> Self {
        Self {
            pigment: Pigment::Texture(texture),
            ka,
            kd,
            ks,
            n,
        }
    }
}
