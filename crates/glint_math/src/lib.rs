// Re-export the f64 glam vector under the names the renderer uses
pub use glam::DVec3 as Vec3;

/// Linear RGB color. Channels are unbounded during shading; clamping to
/// [0, 1] happens only when a pixel is written to the framebuffer.
pub type Color = Vec3;

mod ray;
pub use ray::Ray;

/// Reflect `v` about the unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Rotate `v` around `axis` by `angle` radians (Rodrigues' formula).
///
/// A zero axis or a zero angle is the identity rotation.
#[inline]
pub fn rotate_axis_angle(v: Vec3, axis: Vec3, angle: f64) -> Vec3 {
    if angle == 0.0 || axis.length_squared() < 1e-12 {
        return v;
    }
    let k = axis.normalize();
    let (sin, cos) = angle.sin_cos();
    v * cos + k.cross(v) * sin + k * k.dot(v) * (1.0 - cos)
}
