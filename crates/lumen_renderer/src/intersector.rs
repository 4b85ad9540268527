//! Scene intersection: a linear scan over every geometry.

use crate::hittable::{HitRecord, Hittable, TraceLimits};
use crate::transform::to_local;
use lumen_core::Scene;
use lumen_math::{Interval, Ray};

/// Find the nearest hit of a world-space ray.
///
/// Each geometry is intersected in its local space and the hit time is
/// converted back to world units before comparing. Only hits with a world time
/// in `(limits.slop, max_time)` count. `exclude` skips one geometry, which is
/// how secondary rays avoid hitting the surface they start on.
pub fn find_nearest(
    ray: &Ray,
    scene: &Scene,
    exclude: Option<usize>,
    max_time: f32,
    limits: &TraceLimits,
) -> Option<HitRecord> {
    let mut window = Interval::new(limits.slop, max_time);
    let mut closest = None;

    for (index, geometry) in scene.geometries().iter().enumerate() {
        if exclude == Some(index) {
            continue;
        }

        let local = to_local(ray, &geometry.transform);
        let Some(surface) = geometry.shape.hit(&local.ray, scene, limits) else {
            continue;
        };

        let time = local.to_world_time(surface.t);
        if !window.surrounds(time) {
            continue;
        }

        window = window.with_max(time);
        closest = Some(HitRecord::from_surface(index, time, &surface, &geometry.transform));
    }

    closest
}

/// Whether anything blocks `ray` before `max_time`.
///
/// Same acceptance rules as [`find_nearest`], but stops at the first blocker.
pub fn is_occluded(
    ray: &Ray,
    scene: &Scene,
    exclude: Option<usize>,
    max_time: f32,
    limits: &TraceLimits,
) -> bool {
    let window = Interval::new(limits.slop, max_time);

    scene.geometries().iter().enumerate().any(|(index, geometry)| {
        if exclude == Some(index) {
            return false;
        }
        let local = to_local(ray, &geometry.transform);
        geometry
            .shape
            .hit(&local.ray, scene, limits)
            .is_some_and(|surface| window.surrounds(local.to_world_time(surface.t)))
    })
}
