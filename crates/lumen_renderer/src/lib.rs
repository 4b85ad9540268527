//! Lumen Renderer - Whitted-style CPU ray tracing
//!
//! Traces one primary ray per pixel against a [`lumen_core::Scene`]:
//! - Spheres, triangles and mesh-backed models, each intersected in local space
//! - Ambient plus diffuse shading with hard shadows from point lights
//! - Recursive mirror reflection up to a configurable depth
//! - Row-by-row rendering under a time budget, resumable across calls

mod camera;
mod hittable;
mod intersector;
mod model;
mod renderer;
mod shader;
mod sphere;
mod transform;
mod triangle;

#[cfg(test)]
mod test_scenes;

pub use camera::PrimaryRays;
pub use hittable::{HitRecord, Hittable, SurfaceHit, TraceLimits};
pub use intersector::{find_nearest, is_occluded};
pub use renderer::{
    color_to_rgba, AttenuationModel, RenderConfig, RenderError, RenderJob, RenderResult,
    Raytracer,
};
pub use shader::{reflect, shade, trace};
pub use transform::{to_local, LocalRay};
