//! Scene container types for Lumen.
//!
//! A [`Scene`] is populated once (by a loader or by hand), validated, and then
//! only borrowed immutably while an image is traced.

use lumen_math::{Mat3, Mat4, Quat, Vec3};
use thiserror::Error;

use crate::camera::Camera;
use crate::geometry::{Geometry, Shape};
use crate::material::{Color, Material, MaterialId};
use crate::mesh::{Mesh, MeshId};

/// Problems that make a scene unsafe to trace.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("geometry {geometry} ({kind}) references material {material}, but the scene has {count} materials")]
    MissingMaterial {
        geometry: usize,
        kind: &'static str,
        material: usize,
        count: usize,
    },

    #[error("geometry {geometry} references mesh {mesh}, but the scene has {count} meshes")]
    MissingMesh {
        geometry: usize,
        mesh: usize,
        count: usize,
    },

    #[error("mesh {mesh} index {index} is out of range for {vertex_count} vertices")]
    MeshIndexOutOfRange {
        mesh: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("mesh {mesh} has {index_count} indices, which is not a whole number of triangles")]
    IncompleteTriangle { mesh: usize, index_count: usize },

    #[error("mesh {mesh} has no per-vertex normals")]
    MissingNormals { mesh: usize },

    #[error("light {light} has an all-zero attenuation")]
    ZeroAttenuation { light: usize },
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Transform components that can be composed into a matrix.
///
/// World transforms apply scale, then orientation, then position.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    /// Translation
    pub position: Vec3,

    /// Rotation (as quaternion)
    pub orientation: Quat,

    /// Scale
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform with only translation.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Set a uniform scale.
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Set the orientation.
    pub fn with_orientation(mut self, orientation: Quat) -> Self {
        self.orientation = orientation;
        self
    }

    /// Local-to-world matrix.
    ///
    /// Order: Scale -> Rotate -> Translate (SRT)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation, self.position)
    }

    /// World-to-local matrix, built from the inverted components rather than by
    /// a general 4x4 inversion.
    pub fn inverse_matrix(&self) -> Mat4 {
        Mat4::from_scale(self.scale.recip())
            * Mat4::from_quat(self.orientation.inverse())
            * Mat4::from_translation(-self.position)
    }

    /// Matrix carrying local normals to world space (inverse transpose of the
    /// linear part). The result still needs normalizing.
    pub fn normal_matrix(&self) -> Mat3 {
        Mat3::from_quat(self.orientation) * Mat3::from_diagonal(self.scale.recip())
    }

    /// True if any scale component is zero (the transform cannot be inverted).
    pub fn is_degenerate(&self) -> bool {
        self.scale.cmpeq(Vec3::ZERO).any()
    }
}

/// Distance falloff coefficients for a point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for Attenuation {
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.0,
            quadratic: 0.0,
        }
    }
}

impl Attenuation {
    pub fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    /// `constant + linear * d + quadratic * d²`
    pub fn at(&self, distance: f32) -> f32 {
        self.constant + self.linear * distance + self.quadratic * distance * distance
    }

    fn is_zero(&self) -> bool {
        self.constant == 0.0 && self.linear == 0.0 && self.quadratic == 0.0
    }
}

/// A point light.
#[derive(Clone, Debug, PartialEq)]
pub struct PointLight {
    /// World position
    pub position: Vec3,
    /// Color (and intensity) of the light
    pub color: Color,
    pub attenuation: Attenuation,
}

impl PointLight {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self {
            position,
            color,
            attenuation: Attenuation::default(),
        }
    }

    pub fn with_attenuation(mut self, attenuation: Attenuation) -> Self {
        self.attenuation = attenuation;
        self
    }
}

/// A complete scene: global parameters plus geometries, materials, meshes and
/// lights.
///
/// Collections are append-only; ids handed out by the `add_*` methods stay
/// valid for the scene's lifetime.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Scene name (for logs)
    pub name: String,

    pub camera: Camera,

    /// Color returned for rays that hit nothing
    pub background_color: Color,

    /// Ambient light, modulated by each surface's ambient color
    pub ambient_light: Color,

    /// Refractive index of the surrounding medium. Not used by shading.
    pub refractive_index: f32,

    geometries: Vec<Geometry>,
    materials: Vec<Material>,
    meshes: Vec<Mesh>,
    lights: Vec<PointLight>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            name: String::new(),
            camera: Camera::default(),
            background_color: Color::ZERO,
            ambient_light: Color::ZERO,
            refractive_index: 1.0,
            geometries: Vec::new(),
            materials: Vec::new(),
            meshes: Vec::new(),
            lights: Vec::new(),
        }
    }
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a geometry and return its index.
    pub fn add_geometry(&mut self, geometry: Geometry) -> usize {
        self.geometries.push(geometry);
        self.geometries.len() - 1
    }

    /// Add a material to the scene and return its ID.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    /// Add a mesh to the scene and return its ID.
    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Get a material by ID.
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    /// Get a mesh by ID.
    pub fn mesh(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id.0)
    }

    pub fn geometry_count(&self) -> usize {
        self.geometries.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check every cross reference the tracer will follow.
    ///
    /// After this returns `Ok`, material and mesh lookups made while tracing
    /// cannot fail.
    pub fn validate(&self) -> SceneResult<()> {
        for (index, mesh) in self.meshes.iter().enumerate() {
            if mesh.indices.len() % 3 != 0 {
                return Err(SceneError::IncompleteTriangle {
                    mesh: index,
                    index_count: mesh.indices.len(),
                });
            }
            if let Some(bad) = mesh.find_invalid_index() {
                return Err(SceneError::MeshIndexOutOfRange {
                    mesh: index,
                    index: bad,
                    vertex_count: mesh.vertex_count(),
                });
            }
            if !mesh.has_normals() {
                return Err(SceneError::MissingNormals { mesh: index });
            }
            if mesh.tex_coords.is_none() {
                log::debug!("mesh {} has no texture coordinates, using (0, 0)", index);
            }
        }

        for (index, geometry) in self.geometries.iter().enumerate() {
            for material in geometry.shape.materials() {
                if self.material(material).is_none() {
                    return Err(SceneError::MissingMaterial {
                        geometry: index,
                        kind: geometry.shape.kind(),
                        material: material.0,
                        count: self.materials.len(),
                    });
                }
            }

            if let Shape::Model(model) = &geometry.shape {
                if self.mesh(model.mesh).is_none() {
                    return Err(SceneError::MissingMesh {
                        geometry: index,
                        mesh: model.mesh.0,
                        count: self.meshes.len(),
                    });
                }
            }

            if geometry.transform.is_degenerate() {
                log::warn!(
                    "geometry {} ({}) has a zero scale component and will never be hit",
                    index,
                    geometry.shape.kind()
                );
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            if light.attenuation.is_zero() {
                return Err(SceneError::ZeroAttenuation { light: index });
            }
        }

        log::debug!(
            "Scene '{}' validated: {} geometries, {} materials, {} meshes, {} lights",
            self.name,
            self.geometry_count(),
            self.material_count(),
            self.mesh_count(),
            self.light_count()
        );

        Ok(())
    }
}
