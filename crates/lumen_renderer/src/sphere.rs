//! Sphere intersection.

use crate::hittable::{Hittable, SurfaceHit, TraceLimits};
use lumen_core::{Scene, Sphere};
use lumen_math::{Ray, Vec2, Vec3};
use std::f32::consts::PI;

/// Texture coordinates for a point on the unit sphere.
///
/// u follows longitude around +Y, v is the latitude measured down from the
/// north pole.
fn sphere_tex_coords(p: Vec3) -> Vec2 {
    let latitude = p.y.clamp(-1.0, 1.0).acos();
    let longitude = p.x.atan2(p.z);

    let u = (longitude / (2.0 * PI)).rem_euclid(1.0);
    let v = latitude / PI;
    Vec2::new(u, v)
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, scene: &Scene, limits: &TraceLimits) -> Option<SurfaceHit> {
        let material = scene.material(self.material)?;

        // The sphere sits on the local origin, so the origin is also the
        // center-to-eye vector.
        let oc = ray.origin();

        // Rays starting inside the sphere never hit it
        if oc.length() < self.radius {
            return None;
        }

        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant.is_nan() || discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let interval = limits.open();
        let mut root = (-h - sqrtd) / a;
        if !interval.surrounds(root) {
            root = (-h + sqrtd) / a;
            if !interval.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        let normal = point / self.radius;

        Some(SurfaceHit {
            t: root,
            point,
            normal,
            ambient: material.ambient,
            diffuse: material.diffuse,
            specular: material.specular,
            texture: material.texture_color(sphere_tex_coords(normal)),
        })
    }
}
