//! Scene graph and the recursive trace/render core.
//!
//! A `Scene` owns every object and light plus the global render settings.
//! It is immutable while rendering: rayon workers share the scene read-only
//! and each writes its own rows of the framebuffer.

use std::time::Instant;

use log::info;
use rayon::prelude::*;

use glint_core::{Image, Light, Pigment};
use glint_math::{reflect, Color, Ray, Vec3};

use crate::{Hit, Object};

/// Distance the origin of a reflected ray is nudged along its direction to
/// escape the surface it bounced off.
const REFLECTION_OFFSET: f64 = 0.1;

/// The renderable world and its render settings.
pub struct Scene {
    objects: Vec<Object>,
    lights: Vec<Light>,
    eye: Vec3,
    shadows: bool,
    max_recursion_depth: u32,
    super_sampling: u32,
}

impl Scene {
    /// Create an empty scene with the default settings: shadows off, no
    /// reflection bounces, one sample per pixel.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            eye: Vec3::ZERO,
            shadows: false,
            max_recursion_depth: 0,
            super_sampling: 1,
        }
    }

    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn set_eye(&mut self, eye: Vec3) {
        self.eye = eye;
    }

    pub fn set_shadows(&mut self, enabled: bool) {
        self.shadows = enabled;
    }

    pub fn set_max_recursion_depth(&mut self, depth: u32) {
        self.max_recursion_depth = depth;
    }

    /// Set the supersampling factor. Values below 1 are treated as 1.
    pub fn set_super_sampling(&mut self, factor: u32) {
        self.super_sampling = factor.max(1);
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// The nearest object hit by `ray`, if any, with its hit data.
    fn closest_hit(&self, ray: &Ray) -> Option<(usize, Hit)> {
        let mut nearest: Option<(usize, Hit)> = None;
        for (index, object) in self.objects.iter().enumerate() {
            if let Some(hit) = object.shape.intersect(ray) {
                if nearest.map_or(true, |(_, best)| hit.t < best.t) {
                    nearest = Some((index, hit));
                }
            }
        }
        nearest
    }

    /// Whether `light` reaches `point` on the object at `index`.
    ///
    /// The probe ray is cast from the light toward the point; the light
    /// counts as visible exactly when the nearest thing it strikes is that
    /// same object.
    fn light_reaches(&self, light: &Light, point: Vec3, index: usize) -> bool {
        let ray = Ray::new(light.position, (point - light.position).normalize());
        matches!(self.closest_hit(&ray), Some((hit_index, _)) if hit_index == index)
    }

    /// Trace a ray into the scene and return its color.
    ///
    /// `depth` is the number of reflection bounces still allowed; at zero
    /// only local Phong shading is evaluated. The result is unclamped so
    /// that reflected energy is not lost before pixel averaging.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        let Some((index, hit)) = self.closest_hit(ray) else {
            return Color::ZERO; // background
        };
        let object = &self.objects[index];
        let material = &object.material;

        let hit_point = ray.at(hit.t);
        let normal = hit.normal;
        let view = -ray.direction();

        let base = match &material.pigment {
            Pigment::Solid(color) => *color,
            Pigment::Texture(texture) => {
                // The mapping takes the unit vector from the surface point
                // toward the shape's interior, i.e. the negated normal
                let (u, v) = object.shape.to_uv(-normal);
                texture.color_at(u, v)
            }
        };

        let ambient = base * material.ka;
        let mut diffuse = Color::ZERO;
        let mut specular = Color::ZERO;

        for light in &self.lights {
            if self.shadows && !self.light_reaches(light, hit_point, index) {
                continue;
            }

            let l = (light.position - hit_point).normalize();
            diffuse += light.color * normal.dot(l).max(0.0);

            let r = (normal * (2.0 * normal.dot(l)) - l).normalize();
            specular += light.color * r.dot(view).max(0.0).powf(material.n);
        }
        diffuse = diffuse * material.kd * base;
        specular *= material.ks;

        let mut reflected = Color::ZERO;
        if depth > 0 && material.ks > 0.0 {
            let direction = reflect(ray.direction(), normal).normalize();
            let bounce = Ray::new(hit_point + REFLECTION_OFFSET * direction, direction);
            reflected = self.trace(&bounce, depth - 1) * material.ks;
        }

        ambient + diffuse + specular + reflected
    }

    /// Color of the pixel at (x, y): an SxS grid of sub-samples on the
    /// z = 0 image plane, traced, averaged, and clamped to [0, 1].
    fn render_pixel(&self, x: u32, y: u32, height: u32) -> Color {
        let factor = self.super_sampling;
        let step = 1.0 / f64::from(factor + 1);

        let mut color = Color::ZERO;
        for i in 1..=factor {
            for j in 1..=factor {
                let sample = Vec3::new(
                    f64::from(x) + f64::from(i) * step,
                    f64::from(height - 1 - y) + f64::from(j) * step,
                    0.0,
                );
                let ray = Ray::new(self.eye, (sample - self.eye).normalize());
                color += self.trace(&ray, self.max_recursion_depth);
            }
        }
        color /= f64::from(factor * factor);
        color.clamp(Color::ZERO, Color::ONE)
    }

    /// Render the scene into `image`, overwriting every pixel.
    ///
    /// Scanlines are distributed over the rayon thread pool; rows are
    /// disjoint so no synchronization is needed beyond the join.
    pub fn render(&self, image: &mut Image) {
        let width = image.width;
        let height = image.height;
        if width == 0 || height == 0 {
            return;
        }

        info!(
            "rendering {}x{}: {} objects, {} lights, {}x{} samples per pixel",
            width, height, self.objects.len(), self.lights.len(),
            self.super_sampling, self.super_sampling,
        );
        let start = Instant::now();

        image
            .pixels
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = self.render_pixel(x as u32, y as u32, height);
                }
            });

        info!("render finished in {:.2?}", start.elapsed());
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
