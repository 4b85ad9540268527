//! Triangle intersection.
//!
//! Solves `e + t·d = p0 + β(p1 − p0) + γ(p2 − p0)` for `(β, γ, t)` with
//! Cramer's rule. Vertex 0 gets weight `1 − β − γ`, vertex 1 `β`, vertex 2 `γ`.

use std::ops::{Add, Mul};

use crate::hittable::{Hittable, SurfaceHit, TraceLimits};
use lumen_core::{Scene, Triangle};
use lumen_math::{Interval, Ray, Vec2, Vec3};

/// A ray-triangle solution inside the triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Barycentric {
    pub t: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl Barycentric {
    /// Solve for the hit of `ray` against `(p0, p1, p2)`.
    ///
    /// Returns `None` when `t` is outside `interval`, the hit lies outside the
    /// triangle, or the system is singular (ray parallel to the plane, or a
    /// zero-area triangle), which shows up as a non-finite `t`.
    pub fn solve(p0: Vec3, p1: Vec3, p2: Vec3, ray: &Ray, interval: Interval) -> Option<Self> {
        let ab = p0 - p1;
        let ac = p0 - p2;
        let ao = p0 - ray.origin();
        let d = ray.direction();

        // det[ab | ac | d]
        let m = ab.dot(ac.cross(d));

        let t = ab.dot(ac.cross(ao)) / m;
        if !interval.accepts(t) {
            return None;
        }

        let gamma = ab.dot(ao.cross(d)) / m;
        if !(0.0..=1.0).contains(&gamma) {
            return None;
        }

        let beta = ao.dot(ac.cross(d)) / m;
        if beta < 0.0 || beta > 1.0 - gamma || beta.is_nan() {
            return None;
        }

        Some(Self { t, beta, gamma })
    }

    /// Weighted sum of per-vertex values.
    pub fn blend<T>(&self, v0: T, v1: T, v2: T) -> T
    where
        T: Mul<f32, Output = T> + Add<Output = T>,
    {
        v0 * (1.0 - self.beta - self.gamma) + v1 * self.beta + v2 * self.gamma
    }
}

/// Wrap texture coordinates into [0, 1).
pub(crate) fn wrap_tex_coords(coords: Vec2) -> Vec2 {
    Vec2::new(coords.x.rem_euclid(1.0), coords.y.rem_euclid(1.0))
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, scene: &Scene, limits: &TraceLimits) -> Option<SurfaceHit> {
        let [v0, v1, v2] = &self.vertices;
        let bary = Barycentric::solve(v0.position, v1.position, v2.position, ray, limits.bounded())?;

        let m0 = scene.material(v0.material)?;
        let m1 = scene.material(v1.material)?;
        let m2 = scene.material(v2.material)?;

        let coords = wrap_tex_coords(bary.blend(v0.tex_coord, v1.tex_coord, v2.tex_coord));

        Some(SurfaceHit {
            t: bary.t,
            point: ray.at(bary.t),
            normal: bary.blend(v0.normal, v1.normal, v2.normal).normalize(),
            ambient: bary.blend(m0.ambient, m1.ambient, m2.ambient),
            diffuse: bary.blend(m0.diffuse, m1.diffuse, m2.diffuse),
            specular: bary.blend(m0.specular, m1.specular, m2.specular),
            texture: bary.blend(
                m0.texture_color(coords),
                m1.texture_color(coords),
                m2.texture_color(coords),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_scenes::limits;
    use lumen_core::{Color, Material, Vertex};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Triangle in XY plane at z=-1
    const P0: Vec3 = Vec3::new(-1.0, -1.0, -1.0);
    const P1: Vec3 = Vec3::new(1.0, -1.0, -1.0);
    const P2: Vec3 = Vec3::new(0.0, 1.0, -1.0);

    fn test_triangle(scene: &mut Scene) -> Triangle {
        let red = scene.add_material(Material::new("red", Color::X));
        let green = scene.add_material(Material::new("green", Color::Y));
        let blue = scene.add_material(Material::new("blue", Color::Z));
        Triangle {
            vertices: [
                Vertex::new(P0, Vec3::Z, Vec2::new(0.0, 0.0), red),
                Vertex::new(P1, Vec3::Z, Vec2::new(1.0, 0.0), green),
                Vertex::new(P2, Vec3::Z, Vec2::new(0.5, 1.0), blue),
            ],
        }
    }

    #[test]
    fn test_triangle_hit() {
        let mut scene = Scene::new("tri");
        let tri = test_triangle(&mut scene);

        // Ray pointing at triangle center
        let ray = Ray::from_direction(Vec3::ZERO, Vec3::NEG_Z);
        let hit = tri.hit(&ray, &scene, &limits()).expect("should hit");

        assert!((hit.t - 1.0).abs() < 0.001);
        assert!((hit.normal - Vec3::Z).length() < 1e-5);
        assert!((hit.point - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_triangle_miss() {
        let mut scene = Scene::new("tri");
        let tri = test_triangle(&mut scene);

        // Ray pointing away
        let ray = Ray::from_direction(Vec3::ZERO, Vec3::Z);
        assert!(tri.hit(&ray, &scene, &limits()).is_none());

        // Ray passing outside the edges
        let ray = Ray::from_direction(Vec3::new(3.0, 0.0, 0.0), Vec3::NEG_Z);
        assert!(tri.hit(&ray, &scene, &limits()).is_none());
    }

    #[test]
    fn test_parallel_ray_misses() {
        let mut scene = Scene::new("tri");
        let tri = test_triangle(&mut scene);

        // In the triangle's plane, aimed across it
        let ray = Ray::from_direction(Vec3::new(-5.0, 0.0, -1.0), Vec3::X);
        assert!(tri.hit(&ray, &scene, &limits()).is_none());

        // Parallel and above the plane
        let ray = Ray::from_direction(Vec3::new(-5.0, 0.0, 0.0), Vec3::X);
        assert!(tri.hit(&ray, &scene, &limits()).is_none());
    }

    #[test]
    fn test_degenerate_triangle_misses() {
        let ray = Ray::from_direction(Vec3::new(0.0, 0.0, 1.0), Vec3::NEG_Z);
        let solved = Barycentric::solve(Vec3::ZERO, Vec3::X, Vec3::X * 2.0, &ray, limits().bounded());
        assert!(solved.is_none());
    }

    #[test]
    fn test_interior_points_recover_barycentrics() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let beta: f32 = rng.gen_range(0.01..0.9);
            let gamma: f32 = rng.gen_range(0.01..(0.99 - beta));
            let target = P0 + beta * (P1 - P0) + gamma * (P2 - P0);
            let origin = target + Vec3::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0), 3.0);
            let ray = Ray::through(origin, target);

            let solved = Barycentric::solve(P0, P1, P2, &ray, limits().bounded())
                .expect("interior point should hit");

            assert!(solved.beta >= 0.0);
            assert!(solved.gamma >= 0.0);
            assert!(solved.beta + solved.gamma <= 1.0);
            assert!((solved.beta - beta).abs() < 1e-3, "beta {} vs {}", solved.beta, beta);
            assert!((solved.gamma - gamma).abs() < 1e-3, "gamma {} vs {}", solved.gamma, gamma);
            assert!((ray.at(solved.t) - target).length() < 1e-3);
        }
    }

    #[test]
    fn test_distance_cap() {
        let far = [P0, P1, P2].map(|p| p - Vec3::Z * 150.0);
        let ray = Ray::from_direction(Vec3::ZERO, Vec3::NEG_Z);

        assert!(Barycentric::solve(far[0], far[1], far[2], &ray, limits().bounded()).is_none());

        let wide = TraceLimits {
            max_local_distance: 1000.0,
            ..limits()
        };
        let solved = Barycentric::solve(far[0], far[1], far[2], &ray, wide.bounded()).expect("hit");
        assert!((solved.t - 151.0).abs() < 1e-3);
    }

    #[test]
    fn test_vertex_attributes_interpolate() {
        let mut scene = Scene::new("tri");
        let tri = test_triangle(&mut scene);

        // Straight at vertex 1: all weight on the green material
        let ray = Ray::through(Vec3::new(0.999, -0.9995, 1.0), Vec3::new(0.999, -0.9995, -1.0));
        let hit = tri.hit(&ray, &scene, &limits()).expect("should hit near vertex 1");
        assert!(hit.diffuse.y > 0.99);
        assert!(hit.diffuse.x < 0.01 && hit.diffuse.z < 0.01);

        // Centroid: equal thirds
        let centroid = (P0 + P1 + P2) / 3.0;
        let ray = Ray::through(centroid + Vec3::Z, centroid);
        let hit = tri.hit(&ray, &scene, &limits()).expect("should hit centroid");
        assert!((hit.ambient - Color::splat(1.0 / 3.0)).length() < 1e-4);
        // Untextured materials blend to white
        assert!((hit.texture - Color::ONE).length() < 1e-5);
    }

    #[test]
    fn test_wrap_tex_coords() {
        let wrapped = wrap_tex_coords(Vec2::new(1.25, -0.25));
        assert!((wrapped - Vec2::new(0.25, 0.75)).length() < 1e-6);
    }
}
