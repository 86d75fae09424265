//! Infinite plane primitive.

use glint_math::{Ray, Vec3};

use crate::{Hit, EPSILON};

/// An infinite plane in implicit form ax + by + cz + d = 0.
#[derive(Clone, Debug)]
pub struct Plane {
    normal: Vec3,
    d: f64,
}

impl Plane {
    /// Create a plane from its implicit coefficients. The normal (a, b, c)
    /// is normalized on construction.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            normal: Vec3::new(a, b, c).normalize_or_zero(),
            d,
        }
    }

    /// Ray-plane intersection.
    ///
    /// Planes are two-sided: the normal is flipped to face the incoming
    /// ray before the distance is computed.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let mut normal = self.normal;
        if normal.dot(ray.direction()) > 0.0 {
            normal = -normal;
        }

        let denom = normal.dot(ray.direction());
        if denom.abs() < EPSILON {
            return None;
        }

        let t = -(normal.dot(ray.origin()) + self.d) / denom;
        if t <= EPSILON {
            return None;
        }
        Some(Hit::new(t, normal))
    }

    /// Placeholder mapping; planes have no meaningful texture projection.
    pub fn to_uv(&self, p: Vec3) -> (f64, f64) {
        if p.x > 1.0 || p.y > 1.0 {
            (0.0, 0.0)
        } else {
            (p.x, p.y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_hit_head_on() {
        // XY plane through the origin
        let plane = Plane::new(0.0, 0.0, 1.0, 0.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        let hit = plane.intersect(&ray).unwrap();
        assert!((hit.t - 5.0).abs() < 1e-9);
        assert!(hit.normal.abs_diff_eq(Vec3::new(0.0, 0.0, 1.0), 1e-9));
    }

    #[test]
    fn test_plane_normal_faces_ray_from_either_side() {
        let plane = Plane::new(0.0, 0.0, 1.0, 0.0);
        let from_below = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));

        let hit = plane.intersect(&from_below).unwrap();
        assert!((hit.t - 5.0).abs() < 1e-9);
        assert!(hit.normal.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-9));
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let plane = Plane::new(0.0, 0.0, 1.0, 0.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_behind_ray_misses() {
        let plane = Plane::new(0.0, 0.0, 1.0, 0.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_offset_along_normal() {
        // z = 3 plane: 0x + 0y + 1z - 3 = 0
        let plane = Plane::new(0.0, 0.0, 1.0, -3.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));

        let hit = plane.intersect(&ray).unwrap();
        assert!((hit.t - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_plane_unnormalized_coefficients() {
        // Same plane as z = 3 but with scaled coefficients; d is taken as
        // given relative to the normalized normal
        let plane = Plane::new(0.0, 0.0, 2.0, -3.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));

        let hit = plane.intersect(&ray).unwrap();
        assert!((hit.t - 7.0).abs() < 1e-9);
    }
}
