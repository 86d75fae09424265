//! Ray intersection result.

use glint_math::Vec3;

/// A valid ray intersection.
///
/// "No intersection" is represented by `Option::<Hit>::None`, so a `Hit`
/// always carries a finite distance and a usable normal.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Distance from the ray origin along its (unit) direction
    pub t: f64,
    /// Unit surface normal at the hit point, oriented against the ray for
    /// two-sided shapes
    pub normal: Vec3,
}

impl Hit {
    /// Create a new hit record.
    #[inline]
    pub fn new(t: f64, normal: Vec3) -> Self {
        Self { t, normal }
    }
}
