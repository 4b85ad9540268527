//! Recursive Whitted shading.
//!
//! A surface color is the sum of an ambient term and a diffuse term per
//! unshadowed light, modulated by the texture, plus a mirror reflection traced
//! one level deeper.

use crate::hittable::HitRecord;
use crate::intersector::{find_nearest, is_occluded};
use crate::renderer::{AttenuationModel, RenderConfig};
use lumen_core::{Attenuation, Color, Scene};
use lumen_math::{Ray, Vec3};

impl AttenuationModel {
    /// Divisor applied to a light's color at `distance`.
    pub fn factor(&self, attenuation: &Attenuation, distance: f32) -> f32 {
        match self {
            AttenuationModel::Quadratic => attenuation.at(distance),
            AttenuationModel::ConstantAsQuadratic => {
                attenuation.constant
                    + attenuation.linear * distance
                    + attenuation.constant * distance * distance
            }
        }
    }
}

/// Mirror `direction` about `normal`.
#[inline]
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    direction - 2.0 * direction.dot(normal) * normal
}

/// Color seen along a world-space ray.
///
/// `depth` is the number of reflection bounces still allowed. Returns the
/// scene background when nothing is hit.
pub fn trace(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    exclude: Option<usize>,
    config: &RenderConfig,
) -> Color {
    match find_nearest(ray, scene, exclude, f32::INFINITY, &config.limits()) {
        Some(hit) => shade(&hit, ray, scene, depth, config),
        None => scene.background_color,
    }
}

/// Color leaving a surface toward the origin of `incoming`.
pub fn shade(
    hit: &HitRecord,
    incoming: &Ray,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
) -> Color {
    let limits = config.limits();
    let mut color = hit.ambient * scene.ambient_light;

    for light in scene.lights() {
        let shadow_ray = Ray::through(hit.world_point, light.position);
        let distance = hit.world_point.distance(light.position);

        if is_occluded(&shadow_ray, scene, Some(hit.geometry), distance, &limits) {
            continue;
        }

        let lambert = hit.normal.dot(shadow_ray.direction()).max(0.0);
        let falloff = config.attenuation.factor(&light.attenuation, distance);
        color += hit.diffuse * light.color / falloff * lambert;
    }

    color *= hit.texture;

    // Nothing to add for non-reflective surfaces
    if depth > 0 && hit.specular != Color::ZERO {
        let reflected = Ray::from_direction(
            hit.world_point,
            reflect(incoming.direction(), hit.normal),
        );
        let mirrored = trace(&reflected, scene, depth - 1, Some(hit.geometry), config);
        color += mirrored * hit.texture * hit.specular;
    }

    color
}
