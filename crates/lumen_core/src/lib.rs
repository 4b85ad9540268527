//! Lumen Core - scene description types for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Scene container**: `Scene`, owning geometries, materials, meshes and lights
//! - **Geometry data**: `Geometry` with a `Transform` and a closed `Shape` enum
//!   (sphere, triangle, mesh-backed model)
//! - **Materials and textures**: Phong-style colors with nearest-pixel textures
//! - **Validation**: `Scene::validate` rejects dangling references before tracing
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::{Geometry, Material, Scene, Transform};
//!
//! let mut scene = Scene::new("demo");
//! let red = scene.add_material(Material::new("red", Color::new(0.8, 0.1, 0.1)));
//! scene.add_geometry(Geometry::sphere(Transform::default(), 1.0, red));
//! scene.validate()?;
//! ```

pub mod camera;
pub mod geometry;
pub mod material;
pub mod mesh;
pub mod scene;
pub mod texture;

// Re-export commonly used types
pub use camera::Camera;
pub use geometry::{Geometry, Model, Shape, Sphere, Triangle, Vertex};
pub use material::{Color, Material, MaterialId};
pub use mesh::{Mesh, MeshId, MeshVertex};
pub use scene::{Attenuation, PointLight, Scene, SceneError, SceneResult, Transform};
pub use texture::{Texture, TextureError, TextureResult};
