//! Texture images for materials.
//!
//! Textures are sampled with nearest-pixel lookup only; there is no filtering.

use std::path::Path;

use lumen_math::Vec3;
use thiserror::Error;

/// Errors that can occur during texture loading.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Texture has zero size: {width}x{height}")]
    Empty { width: u32, height: u32 },
}

pub type TextureResult<T> = Result<T, TextureError>;

/// A loaded texture with pixel data.
///
/// Pixels are RGBA floats in 0-1, row-major, with row 0 at the top of the
/// source image.
#[derive(Clone, Debug)]
pub struct Texture {
    /// Texture width in pixels
    pub width: u32,

    /// Texture height in pixels
    pub height: u32,

    /// Pixel data, [R, G, B, A] per pixel
    pub pixels: Vec<[f32; 4]>,

    /// Original file path (for debugging)
    pub path: String,
}

impl Texture {
    /// Create a new texture from pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<[f32; 4]>, path: impl Into<String>) -> Self {
        Self {
            width,
            height,
            pixels,
            path: path.into(),
        }
    }

    /// Create a solid color texture (1x1).
    pub fn solid_color(color: Vec3) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![[color.x, color.y, color.z, 1.0]],
            path: "<solid>".to_string(),
        }
    }

    /// Procedural checkerboard with `cells` squares along each side.
    pub fn checkerboard(size: u32, cells: u32, a: Vec3, b: Vec3) -> Self {
        let size = size.max(1);
        let cell = (size / cells.max(1)).max(1);
        let mut pixels = Vec::with_capacity(pixel_offset(0, size, size));
        for y in 0..size {
            for x in 0..size {
                let c = if ((x / cell) + (y / cell)) % 2 == 0 { a } else { b };
                pixels.push([c.x, c.y, c.z, 1.0]);
            }
        }
        Self::new(size, size, pixels, "<checkerboard>")
    }

    /// Load a texture from an image file.
    ///
    /// Channel values are mapped linearly from 0-255 to 0-1, matching the
    /// un-gamma'd 8-bit output of the renderer.
    pub fn load(path: impl AsRef<Path>) -> TextureResult<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|e| {
            TextureError::LoadError(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(TextureError::Empty { width, height });
        }

        let pixels: Vec<[f32; 4]> = rgba
            .pixels()
            .map(|p| {
                [
                    p[0] as f32 / 255.0,
                    p[1] as f32 / 255.0,
                    p[2] as f32 / 255.0,
                    p[3] as f32 / 255.0,
                ]
            })
            .collect();

        log::debug!(
            "Loaded texture: {} ({}x{}, {:.1} KB)",
            path.display(),
            width,
            height,
            (pixels.len() * std::mem::size_of::<[f32; 4]>()) as f32 / 1024.0
        );

        Ok(Self::new(width, height, pixels, path.to_string_lossy()))
    }

    /// Nearest-pixel lookup at texture coordinates in [0, 1).
    ///
    /// Coordinates are scaled by the texture size and truncated; out-of-range
    /// pixel indices are clamped to the border.
    pub fn sample(&self, u: f32, v: f32) -> Vec3 {
        if self.width == 0 || self.height == 0 {
            return Vec3::ONE;
        }
        let x = pixel_index(u, self.width);
        let y = pixel_index(v, self.height);
        let p = self.pixel(x, y);
        Vec3::new(p[0], p[1], p[2])
    }

    /// Get pixel at integer coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        self.pixels
            .get(pixel_offset(x, y, self.width))
            .copied()
            .unwrap_or([0.0, 0.0, 0.0, 1.0])
    }
}

/// Row-major offset of pixel (x, y), computed in `usize` so large images
/// cannot wrap.
fn pixel_offset(x: u32, y: u32, width: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Scale a coordinate to an index in `0..extent`, NaN mapping to 0.
fn pixel_index(coord: f32, extent: u32) -> u32 {
    let scaled = coord * extent as f32;
    if scaled.is_nan() || scaled < 0.0 {
        0
    } else {
        (scaled as u32).min(extent - 1)
    }
}
