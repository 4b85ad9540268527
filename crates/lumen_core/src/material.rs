//! Surface materials.

use std::sync::Arc;

use lumen_math::{Vec2, Vec3};

use crate::texture::Texture;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Index of a material in its owning [`Scene`](crate::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub usize);

/// A Phong-style material: separate ambient, diffuse and specular colors plus
/// an optional texture that modulates all of them.
#[derive(Clone, Debug)]
pub struct Material {
    /// Material name (for logs and error messages)
    pub name: String,

    /// Color reflected from the scene's ambient light
    pub ambient: Color,

    /// Color reflected from point lights
    pub diffuse: Color,

    /// Mirror reflectance
    pub specular: Color,

    /// Refractive index. Carried for scene descriptions; shading ignores it.
    pub refractive_index: f32,

    /// Texture modulating the surface; white when absent
    pub texture: Option<Arc<Texture>>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            ambient: Color::splat(0.2),
            diffuse: Color::splat(0.5), // Grey default
            specular: Color::ZERO,
            refractive_index: 1.0,
            texture: None,
        }
    }
}

impl Material {
    /// Create a new material with a name, using `color` for ambient and diffuse.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            ambient: color,
            diffuse: color,
            ..Default::default()
        }
    }

    /// Set the specular (mirror) color.
    pub fn with_specular(mut self, specular: Color) -> Self {
        self.specular = specular;
        self
    }

    /// Set the ambient color.
    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    /// Attach a texture.
    pub fn with_texture(mut self, texture: Arc<Texture>) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Check if this material uses a texture.
    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }

    /// Texture color at the given coordinates, or white without a texture.
    pub fn texture_color(&self, coords: Vec2) -> Color {
        match &self.texture {
            Some(texture) => texture.sample(coords.x, coords.y),
            None => Color::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untextured_material_samples_white() {
        let material = Material::new("plain", Color::new(0.3, 0.4, 0.5));
        assert!(!material.has_texture());
        assert_eq!(material.texture_color(Vec2::new(0.25, 0.75)), Color::ONE);
    }

    #[test]
    fn test_textured_material_samples_texture() {
        let texture = Arc::new(Texture::solid_color(Color::new(0.1, 0.2, 0.3)));
        let material = Material::new("tex", Color::ONE).with_texture(texture);

        let c = material.texture_color(Vec2::new(0.5, 0.5));
        assert!((c - Color::new(0.1, 0.2, 0.3)).length() < 1e-6);
    }

    #[test]
    fn test_builder() {
        let material = Material::new("mirror", Color::ZERO)
            .with_specular(Color::ONE)
            .with_ambient(Color::splat(0.1));

        assert_eq!(material.specular, Color::ONE);
        assert_eq!(material.ambient, Color::splat(0.1));
        assert_eq!(material.diffuse, Color::ZERO);
    }
}
