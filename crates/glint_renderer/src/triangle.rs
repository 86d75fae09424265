//! Triangle primitive.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use glint_math::{Ray, Vec3};

use crate::{Hit, EPSILON};

/// A triangle primitive.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    v1: Vec3,
    v2: Vec3,
    v3: Vec3,
    /// Pre-computed face normal (unit length)
    normal: Vec3,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v1: Vec3, v2: Vec3, v3: Vec3) -> Self {
        let normal = (v2 - v1).cross(v3 - v1).normalize_or_zero();
        Self { v1, v2, v3, normal }
    }

    /// The three vertices, in construction order.
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v1, self.v2, self.v3]
    }

    /// Möller-Trumbore ray-triangle intersection.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let edge1 = self.v2 - self.v1;
        let edge2 = self.v3 - self.v1;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to the triangle plane
        if a.abs() < EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v1;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        if t <= EPSILON {
            return None;
        }

        // Triangles are two-sided; orient the normal against the ray
        let normal = if self.normal.dot(ray.direction()) > 0.0 {
            -self.normal
        } else {
            self.normal
        };
        Some(Hit::new(t, normal))
    }

    /// Placeholder mapping, same convention as `Plane`.
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

    fn unit_triangle() -> Triangle {
        // Triangle in the XY plane at z = -1
        Triangle::new(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
        )
    }

    #[test]
    fn test_triangle_hit() {
        let tri = unit_triangle();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = tri.intersect(&ray).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-9);
        assert!(hit.normal.abs_diff_eq(Vec3::new(0.0, 0.0, 1.0), 1e-9));
    }

    #[test]
    fn test_triangle_miss_outside_edges() {
        let tri = unit_triangle();
        let ray = Ray::new(Vec3::new(2.0, 2.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_parallel_ray_misses() {
        let tri = unit_triangle();
        // Direction lies in the triangle's plane
        let ray = Ray::new(Vec3::new(-5.0, 0.0, -1.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_behind_ray_misses() {
        let tri = unit_triangle();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_normal_faces_ray_from_behind() {
        let tri = unit_triangle();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -2.0), Vec3::new(0.0, 0.0, 1.0));

        let hit = tri.intersect(&ray).unwrap();
        assert!(hit.normal.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-9));
    }
}
