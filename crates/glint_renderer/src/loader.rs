//! Build a renderable `Scene` from a parsed scene description.

use std::path::Path;

use log::info;
use thiserror::Error;

use glint_core::desc::{MaterialDesc, ObjectDesc, SceneDesc};
use glint_core::{Image, ImageError, Light, Material, Pigment};
use glint_math::Color;

use crate::{Object, Plane, Quad, Scene, Shape, Sphere, Triangle};

/// Errors that can occur while assembling a scene.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to load texture {path}: {source}")]
    Texture {
        path: String,
        #[source]
        source: ImageError,
    },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Build a scene from `desc`. Texture paths are resolved relative to
/// `base_dir`, the directory containing the scene file.
pub fn build_scene(desc: &SceneDesc, base_dir: &Path) -> LoadResult<Scene> {
    let mut scene = Scene::new();
    scene.set_eye(desc.eye.into());
    scene.set_shadows(desc.shadows);
    scene.set_max_recursion_depth(desc.max_recursion_depth);
    scene.set_super_sampling(desc.super_sampling_factor);

    for light in &desc.lights {
        scene.add_light(Light::new(light.position.into(), light.color.into()));
    }

    for object in &desc.objects {
        let (shape, material) = match object {
            ObjectDesc::Sphere {
                position,
                radius,
                rotation,
                angle,
                material,
            } => {
                let mut sphere = Sphere::new((*position).into(), *radius);
                if let Some(axis) = rotation {
                    sphere = sphere.with_texture_rotation((*axis).into(), angle.unwrap_or(0.0));
                }
                (Shape::from(sphere), material)
            }
            ObjectDesc::Triangle {
                vertex1,
                vertex2,
                vertex3,
                material,
            } => (
                Shape::from(Triangle::new(
                    (*vertex1).into(),
                    (*vertex2).into(),
                    (*vertex3).into(),
                )),
                material,
            ),
            ObjectDesc::Plane {
                a,
                b,
                c,
                d,
                material,
            } => (Shape::from(Plane::new(*a, *b, *c, *d)), material),
            ObjectDesc::Quad {
                vertex1,
                vertex2,
                vertex3,
                vertex4,
                material,
            } => (
                Shape::from(Quad::new(
                    (*vertex1).into(),
                    (*vertex2).into(),
                    (*vertex3).into(),
                    (*vertex4).into(),
                )),
                material,
            ),
        };
        let material = build_material(material, base_dir)?;
        scene.add_object(Object::new(shape, material));
    }

    info!(
        "parsed {} objects and {} lights",
        scene.object_count(),
        scene.light_count()
    );
    Ok(scene)
}

/// Resolve a material description. A flat color wins over a texture when
/// both are present; neither present falls back to solid black.
fn build_material(desc: &MaterialDesc, base_dir: &Path) -> LoadResult<Material> {
    let pigment = if let Some(color) = desc.color {
        Pigment::Solid(color.into())
    } else if let Some(name) = &desc.texture {
        let path = base_dir.join(name);
        let image = Image::load(&path).map_err(|source| LoadError::Texture {
            path: path.display().to_string(),
            source,
        })?;
        Pigment::Texture(image)
    } else {
        Pigment::Solid(Color::ZERO)
    };
    Ok(Material {
        pigment,
        ka: desc.ka,
        kd: desc.kd,
        ks: desc.ks,
        n: desc.n,
    })
}
