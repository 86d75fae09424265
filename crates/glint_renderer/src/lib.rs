//! glint renderer - CPU Whitted ray tracing.
//!
//! Recursive ray tracing with Phong shading, shadow rays, mirror
//! reflection, and grid supersampling. Every primitive is intersected by a
//! linear scan; there is no acceleration structure.

mod hit;
mod loader;
mod plane;
mod quad;
mod scene;
mod shape;
mod sphere;
mod triangle;

pub use hit::Hit;
pub use loader::{build_scene, LoadError, LoadResult};
pub use plane::Plane;
pub use quad::Quad;
pub use scene::Scene;
pub use shape::{Object, Shape};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export the math and core types used in the public API
pub use glint_core::{Image, Light, Material, Pigment};
pub use glint_math::{Color, Ray, Vec3};

/// Shared geometric tolerance: denominators smaller than this count as
/// parallel, and hits closer than this are rejected as self-intersections.
pub const EPSILON: f64 = 1e-6;
