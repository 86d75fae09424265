//! JSON scene description.
//!
//! These types mirror the on-disk schema one to one: top-level render
//! settings plus `Lights` and `Objects` arrays. They hold parsed data only;
//! turning a description into a renderable scene (including texture
//! decoding) happens in the renderer crate.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while reading a scene description.
#[derive(Error, Debug)]
pub enum DescError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed scene description: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DescResult<T> = Result<T, DescError>;

/// A full scene description document.
#[derive(Clone, Debug, Deserialize)]
pub struct SceneDesc {
    #[serde(rename = "Eye")]
    pub eye: [f64; 3],

    /// Shadow rays are skipped unless enabled
    #[serde(rename = "Shadows", default)]
    pub shadows: bool,

    /// Zero means no reflection bounces at all
    #[serde(rename = "MaxRecursionDepth", default)]
    pub max_recursion_depth: u32,

    /// Samples per pixel axis; 1 is a single centered ray
    #[serde(rename = "SuperSamplingFactor", default = "default_super_sampling")]
    pub super_sampling_factor: u32,

    #[serde(rename = "Lights")]
    pub lights: Vec<LightDesc>,

    #[serde(rename = "Objects")]
    pub objects: Vec<ObjectDesc>,
}

fn default_super_sampling() -> u32 {
    1
}

/// A light entry.
#[derive(Clone, Debug, Deserialize)]
pub struct LightDesc {
    pub position: [f64; 3],
    pub color: [f64; 3],
}

/// An object entry; the `type` field selects the variant.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectDesc {
    Sphere {
        position: [f64; 3],
        radius: f64,
        /// Texture orientation axis; optional
        #[serde(default)]
        rotation: Option<[f64; 3]>,
        /// Texture orientation angle in degrees; optional
        #[serde(default)]
        angle: Option<f64>,
        material: MaterialDesc,
    },
    Triangle {
        vertex1: [f64; 3],
        vertex2: [f64; 3],
        vertex3: [f64; 3],
        material: MaterialDesc,
    },
    Plane {
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        material: MaterialDesc,
    },
    Quad {
        vertex1: [f64; 3],
        vertex2: [f64; 3],
        vertex3: [f64; 3],
        vertex4: [f64; 3],
        material: MaterialDesc,
    },
}

/// A material entry.
///
/// `color` and `texture` may both appear; the loader gives `color`
/// precedence and falls back to black when neither is present.
#[derive(Clone, Debug, Deserialize)]
pub struct MaterialDesc {
    #[serde(default)]
    pub color: Option<[f64; 3]>,

    /// Texture file path, relative to the scene file
    #[serde(default)]
    pub texture: Option<String>,

    pub ka: f64,
    pub kd: f64,
    pub ks: f64,
    pub n: f64,
}

impl SceneDesc {
    /// Read and parse a scene description file.
    pub fn from_path(path: &Path) -> DescResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse a scene description from a JSON string.
    pub fn from_json(text: &str) -> DescResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
