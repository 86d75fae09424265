//! glint core - scene data types shared by the renderer and the CLI.
//!
//! This crate provides:
//!
//! - **Images**: `Image`, used both as render target and as texture source
//! - **Surface data**: `Material`, `Pigment`, `Light`
//! - **Scene description**: serde types mirroring the JSON scene format

pub mod desc;
pub mod image;
pub mod light;
pub mod material;

// Re-export commonly used types
pub use desc::{DescError, DescResult, SceneDesc};
// `self::` keeps the module distinct from the image crate
pub use self::image::{Image, ImageError, ImageResult};
pub use light::Light;
pub use material::{Material, Pigment};
