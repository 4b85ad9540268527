//! Geometry primitives as plain data.
//!
//! The set of primitive kinds is closed: a [`Geometry`] is a [`Transform`]
//! plus one [`Shape`] variant. All shape data is in local space.

use lumen_math::{Vec2, Vec3};

use crate::material::MaterialId;
use crate::mesh::MeshId;
use crate::scene::Transform;

/// A sphere centred on the local origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub material: MaterialId,
}

/// One corner of a [`Triangle`]. Position and normal are in local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub tex_coord: Vec2,
    pub material: MaterialId,
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, tex_coord: Vec2, material: MaterialId) -> Self {
        Self {
            position,
            normal,
            tex_coord,
            material,
        }
    }
}

/// A single triangle whose vertices carry their own attributes and materials,
/// interpolated across the face. Vertices are in counter-clockwise order.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

/// An indexed mesh drawn with a single material.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub mesh: MeshId,
    pub material: MaterialId,
}

/// The primitive kinds the tracer understands.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Triangle(Triangle),
    Model(Model),
}

impl Shape {
    /// Short name used in logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Triangle(_) => "triangle",
            Shape::Model(_) => "model",
        }
    }

    /// Every material this shape refers to.
    pub fn materials(&self) -> Vec<MaterialId> {
        match self {
            Shape::Sphere(sphere) => vec![sphere.material],
            Shape::Triangle(triangle) => triangle.vertices.iter().map(|v| v.material).collect(),
            Shape::Model(model) => vec![model.material],
        }
    }
}

/// A positioned primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    pub transform: Transform,
    pub shape: Shape,
}

impl Geometry {
    pub fn new(transform: Transform, shape: Shape) -> Self {
        Self { transform, shape }
    }

    /// A sphere of `radius` centred on the transform's position.
    pub fn sphere(transform: Transform, radius: f32, material: MaterialId) -> Self {
        Self::new(transform, Shape::Sphere(Sphere { radius, material }))
    }

    /// A triangle from three fully specified vertices.
    pub fn triangle(transform: Transform, vertices: [Vertex; 3]) -> Self {
        Self::new(transform, Shape::Triangle(Triangle { vertices }))
    }

    /// A flat, single-material triangle with its face normal at every corner
    /// and texture coordinates (0,0), (1,0), (0,1).
    pub fn flat_triangle(transform: Transform, positions: [Vec3; 3], material: MaterialId) -> Self {
        let normal = (positions[1] - positions[0])
            .cross(positions[2] - positions[0])
            .normalize();
        let uvs = [Vec2::ZERO, Vec2::X, Vec2::Y];
        let vertices = [0usize, 1, 2].map(|i| Vertex::new(positions[i], normal, uvs[i], material));
        Self::triangle(transform, vertices)
    }

    /// A mesh-backed model.
    pub fn model(transform: Transform, mesh: MeshId, material: MaterialId) -> Self {
        Self::new(transform, Shape::Model(Model { mesh, material }))
    }
}
