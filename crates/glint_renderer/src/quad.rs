//! Planar quad primitive, decomposed into two triangles.

use glint_math::{Ray, Vec3};

use crate::{Hit, Triangle};

/// A planar convex quad.
///
/// The quad is split into two triangles at construction. The first triangle
/// keeps `v1` and drops the vertex farthest from it; the second is rooted at
/// that farthest vertex and again keeps its two nearest companions. For a
/// planar convex quad the farthest vertex is the diagonal one, so the two
/// triangles tile the quad and share the other diagonal.
#[derive(Clone, Debug)]
pub struct Quad {
    first: Triangle,
    second: Triangle,
}

impl Quad {
    /// Create a quad from four vertices, assumed planar and convex.
    pub fn new(v1: Vec3, v2: Vec3, v3: Vec3, v4: Vec3) -> Self {
        let rest = [v2, v3, v4];
        let far = farthest_index(v1, rest);
        let (a, b) = companions(rest, far);
        let first = Triangle::new(v1, a, b);

        // The second triangle is rooted at the far vertex; its candidates
        // keep the original vertex order with that vertex removed
        let far_vertex = rest[far];
        let rest = match far {
            0 => [v1, v3, v4],
            1 => [v1, v2, v4],
            _ => [v1, v2, v3],
        };
        let (a, b) = companions(rest, farthest_index(far_vertex, rest));
        let second = Triangle::new(far_vertex, a, b);

        Self { first, second }
    }

    /// Ray-quad intersection: the first triangle wins when both are hit.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.first
            .intersect(ray)
            .or_else(|| self.second.intersect(ray))
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

/// Index of the candidate farthest from `base`. Ties fall through to the
/// last candidate.
fn farthest_index(base: Vec3, candidates: [Vec3; 3]) -> usize {
    let d0 = base.distance(candidates[0]);
    let d1 = base.distance(candidates[1]);
    let d2 = base.distance(candidates[2]);
    if d0 > d1 && d0 > d2 {
        0
    } else if d1 > d0 && d1 > d2 {
        1
    } else {
        2
    }
}

/// The two candidates that are not at `skip`, keeping their order.
fn companions(candidates: [Vec3; 3], skip: usize) -> (Vec3, Vec3) {
    match skip {
        0 => (candidates[1], candidates[2]),
        1 => (candidates[0], candidates[2]),
        _ => (candidates[0], candidates[1]),
    }
}
