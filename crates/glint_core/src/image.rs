//! Image storage used for both render output and texture input.
//!
//! Pixels are linear RGB `Color` values in row-major order with row 0 at the
//! top. Conversion to and from 8-bit channels is a plain scale by 255 with
//! no gamma step, so decoded textures round-trip through the framebuffer
//! unchanged.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use thiserror::Error;

use glint_math::Color;

/// Errors that can occur while reading or writing image files.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),
}

pub type ImageResult<T> = Result<T, ImageError>;

/// An image with linear RGB float pixels.
///
/// Serves as the framebuffer written by the renderer and as the in-memory
/// form of texture files sampled during shading.
#[derive(Clone, Debug)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Image {
    /// Create a new image filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Create an image from existing pixel data (row-major, row 0 on top).
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Decode an image file into linear float pixels.
    pub fn load(path: &Path) -> ImageResult<Self> {
        let data = image::open(path)?.to_rgb8();
        let (width, height) = data.dimensions();
        let pixels = data
            .pixels()
            .map(|p| Color::new(f64::from(p[0]), f64::from(p[1]), f64::from(p[2])) / 255.0)
            .collect();

        log::debug!("Loaded texture: {} ({}x{})", path.display(), width, height);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Encode the image as PNG, clamping each channel to [0, 1].
    pub fn save_png(&self, path: &Path) -> ImageResult<()> {
        let data = RgbImage::from_fn(self.width, self.height, |x, y| {
            Rgb(color_to_rgb(self.get(x, y)))
        });
        data.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    /// Get the pixel at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Sample the image at texture coordinates, nearest-pixel.
    ///
    /// `u` and `v` are clamped to [0, 1]; (0, 0) maps to the top-left pixel
    /// and (1, 1) to the bottom-right one.
    pub fn color_at(&self, u: f64, v: f64) -> Color {
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        let x = (f64::from(self.width - 1) * u) as u32;
        let y = (f64::from(self.height - 1) * v) as u32;
        self.get(x, y)
    }
}

/// Convert a linear color to 8-bit RGB, clamping each channel to [0, 1].
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = color.clamp(Color::ZERO, Color::ONE);
    [
        (255.0 * c.x) as u8,
        (255.0 * c.y) as u8,
        (255.0 * c.z) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let img = Image::new(3, 2);
        assert_eq!(img.pixels.len(), 6);
        assert!(img.pixels.iter().all(|p| *p == Color::ZERO));
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut img = Image::new(4, 4);
        let c = Color::new(0.25, 0.5, 0.75);
        img.set(3, 1, c);
        assert_eq!(img.get(3, 1), c);
        assert_eq!(img.get(0, 0), Color::ZERO);
    }

    #[test]
    fn test_color_at_corners() {
        let pixels = vec![
            Color::new(1.0, 0.0, 0.0), // top-left
            Color::new(0.0, 1.0, 0.0), // top-right
            Color::new(0.0, 0.0, 1.0), // bottom-left
            Color::new(1.0, 1.0, 1.0), // bottom-right
        ];
        let img = Image::from_pixels(2, 2, pixels);

        assert_eq!(img.color_at(0.0, 0.0), Color::new(1.0, 0.0, 0.0));
        assert_eq!(img.color_at(1.0, 0.0), Color::new(0.0, 1.0, 0.0));
        assert_eq!(img.color_at(0.0, 1.0), Color::new(0.0, 0.0, 1.0));
        assert_eq!(img.color_at(1.0, 1.0), Color::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_color_at_clamps_out_of_range() {
        let img = Image::from_pixels(
            2,
            1,
            vec![Color::new(1.0, 0.0, 0.0), Color::new(0.0, 1.0, 0.0)],
        );
        assert_eq!(img.color_at(-3.0, 0.0), img.color_at(0.0, 0.0));
        assert_eq!(img.color_at(7.0, 2.0), img.color_at(1.0, 1.0));
    }

    #[test]
    fn test_color_to_rgb_clamps() {
        assert_eq!(color_to_rgb(Color::new(0.0, 0.5, 1.0)), [0, 127, 255]);
        assert_eq!(color_to_rgb(Color::new(-1.0, 2.0, 0.0)), [0, 255, 0]);
    }

    #[test]
    fn test_save_load_round_trip() {
        let pixels = vec![
            Color::new(1.0, 0.0, 0.0),
            Color::new(0.0, 1.0, 0.0),
            Color::new(0.0, 0.0, 1.0),
            Color::new(1.0, 1.0, 1.0),
        ];
        let img = Image::from_pixels(2, 2, pixels.clone());

        let path = std::env::temp_dir().join("glint_image_round_trip.png");
        img.save_png(&path).unwrap();
        let loaded = Image::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.width, 2);
        assert_eq!(loaded.height, 2);
        assert_eq!(loaded.pixels, pixels);
    }
}
