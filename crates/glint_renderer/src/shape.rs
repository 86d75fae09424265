//! The closed set of renderable primitives.

use glint_core::Material;
use glint_math::{Ray, Vec3};

use crate::{Hit, Plane, Quad, Sphere, Triangle};

/// Every shape the renderer can intersect.
///
/// A closed enum instead of a trait object: the set of primitives is small
/// and fixed, and match dispatch keeps all intersection entry points in one
/// place.
#[derive(Clone, Debug)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
    Quad(Quad),
}

impl Shape {
    /// Ray intersection, dispatched to the concrete primitive.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        match self {
            Shape::Sphere(s) => s.intersect(ray),
            Shape::Plane(p) => p.intersect(ray),
            Shape::Triangle(t) => t.intersect(ray),
            Shape::Quad(q) => q.intersect(ray),
        }
    }

    /// Surface-to-texture mapping, dispatched to the concrete primitive.
    #[inline]
    pub fn to_uv(&self, p: Vec3) -> (f64, f64) {
        match self {
            Shape::Sphere(s) => s.to_uv(p),
            Shape::Plane(pl) => pl.to_uv(p),
            Shape::Triangle(t) => t.to_uv(p),
            Shape::Quad(q) => q.to_uv(p),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}

impl From<Plane> for Shape {
    fn from(p: Plane) -> Self {
        Shape::Plane(p)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

impl From<Quad> for Shape {
    fn from(q: Quad) -> Self {
        Shape::Quad(q)
    }
}

/// A renderable object: a shape plus the material covering it.
#[derive(Clone, Debug)]
pub struct Object {
    pub shape: Shape,
    pub material: Material,
}

impl Object {
    /// Create a new object.
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Color;

    #[test]
    fn test_shape_dispatch() {
        let shape = Shape::from(Sphere::new(Vec3::ZERO, 1.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = shape.intersect(&ray).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_object_construction_from_any_primitive() {
        let material = Material::solid(Color::ONE, 1.0, 0.0, 0.0, 1.0);
        let objects = [
            Object::new(Sphere::new(Vec3::ZERO, 1.0), material.clone()),
            Object::new(Plane::new(0.0, 0.0, 1.0, 0.0), material.clone()),
            Object::new(
                Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y),
                material.clone(),
            ),
            Object::new(
                Quad::new(
                    Vec3::ZERO,
                    Vec3::X,
                    Vec3::new(1.0, 1.0, 0.0),
                    Vec3::Y,
                ),
                material,
            ),
        ];
        assert!(matches!(objects[0].shape, Shape::Sphere(_)));
        assert!(matches!(objects[1].shape, Shape::Plane(_)));
        assert!(matches!(objects[2].shape, Shape::Triangle(_)));
        assert!(matches!(objects[3].shape, Shape::Quad(_)));
    }
}
