//! Sphere primitive.

use std::f64::consts::{PI, TAU};

use glint_math::{rotate_axis_angle, Ray, Vec3};

use crate::{Hit, EPSILON};

/// A sphere, optionally with a rotated texture orientation.
#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    /// Texture orientation axis; zero leaves the mapping unrotated
    axis: Vec3,
    /// Texture orientation angle in degrees
    angle: f64,
}

impl Sphere {
    /// Create a new sphere with the default texture orientation.
    pub fn new(center: Vec3, radius: f64) -> Self {
        Self {
            center,
            radius,
            axis: Vec3::ZERO,
            angle: 0.0,
        }
    }

    /// Reorient the texture mapping: surface points are rotated around
    /// `axis` by `angle` degrees before being projected to UV.
    pub fn with_texture_rotation(mut self, axis: Vec3, angle: f64) -> Self {
        self.axis = axis;
        self.angle = angle;
        self
    }

    /// Ray-sphere intersection.
    ///
    /// Solves |O + tD - C|^2 = r^2 for a unit-length D and keeps the
    /// nearest root beyond EPSILON, which handles origins inside the
    /// sphere as well.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc = ray.origin() - self.center;
        let h = ray.direction().dot(oc);
        let discriminant = h * h - oc.length_squared() + self.radius * self.radius;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Prefer the nearer root, fall back to the farther one
        let mut root = -h - sqrtd;
        if root <= EPSILON {
            root = -h + sqrtd;
            if root <= EPSILON {
                return None;
            }
        }

        let normal = (ray.at(root) - self.center).normalize();
        Some(Hit::new(root, normal))
    }

    /// Map a point on the unit sphere to equirectangular UV coordinates.
    ///
    /// `p` is the unit vector from the surface point toward the sphere
    /// center. The texture rotation is applied to `p` first, so the image
    /// can be reoriented without moving the geometry.
    pub fn to_uv(&self, p: Vec3) -> (f64, f64) {
        let p = rotate_axis_angle(p, self.axis, self.angle.to_radians()).normalize();
        let u = 0.5 + p.y.atan2(p.x) / TAU;
        let v = 0.5 + p.z.asin() / PI;
        (u, v)
    }
}
