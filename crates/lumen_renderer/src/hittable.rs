//! Hittable trait and hit records for ray-primitive intersection.

use lumen_core::{Color, Scene, Shape, Transform};
use lumen_math::{Interval, Ray, Vec3};

/// Bounds on accepted local hit times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceLimits {
    /// Hits at or below this time are rejected (self-intersection guard)
    pub slop: f32,
    /// Largest local time accepted for triangle-based primitives
    pub max_local_distance: f32,
}

impl TraceLimits {
    /// Times above the slop with no upper bound (spheres).
    pub fn open(&self) -> Interval {
        Interval::above(self.slop)
    }

    /// Times in (slop, max_local_distance] (triangles and models).
    pub fn bounded(&self) -> Interval {
        Interval::new(self.slop, self.max_local_distance)
    }
}

/// What a primitive reports about a hit, in its own local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Local ray parameter of the hit
    pub t: f32,
    /// Local intersection point
    pub point: Vec3,
    /// Local surface normal (unit length)
    pub normal: Vec3,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    /// Texture color at the hit (white for untextured materials)
    pub texture: Color,
}

/// A resolved world-space hit against one geometry of the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Index of the geometry that was hit
    pub geometry: usize,
    /// World-space distance along the ray
    pub time: f32,
    pub local_point: Vec3,
    pub world_point: Vec3,
    /// World-space normal (unit length)
    pub normal: Vec3,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub texture: Color,
}

impl HitRecord {
    /// Carry a local hit into world space.
    pub fn from_surface(geometry: usize, time: f32, surface: &SurfaceHit, transform: &Transform) -> Self {
        Self {
            geometry,
            time,
            local_point: surface.point,
            world_point: transform.to_matrix().transform_point3(surface.point),
            normal: (transform.normal_matrix() * surface.normal).normalize(),
            ambient: surface.ambient,
            diffuse: surface.diffuse,
            specular: surface.specular,
            texture: surface.texture,
        }
    }
}

/// Trait for primitives that can be hit by rays.
///
/// `ray` is already in the primitive's local space. Material and mesh lookups
/// go through `scene`; a lookup that fails is treated as a miss, which a
/// validated scene never produces.
pub trait Hittable {
    fn hit(&self, ray: &Ray, scene: &Scene, limits: &TraceLimits) -> Option<SurfaceHit>;
}

impl Hittable for Shape {
    fn hit(&self, ray: &Ray, scene: &Scene, limits: &TraceLimits) -> Option<SurfaceHit> {
        match self {
            Shape::Sphere(sphere) => sphere.hit(ray, scene, limits),
            Shape::Triangle(triangle) => triangle.hit(ray, scene, limits),
            Shape::Model(model) => model.hit(ray, scene, limits),
        }
    }
}
