//! Mesh-backed model intersection.

use crate::hittable::{Hittable, SurfaceHit, TraceLimits};
use crate::triangle::{wrap_tex_coords, Barycentric};
use lumen_core::{MeshVertex, Model, Scene};
use lumen_math::Ray;

impl Hittable for Model {
    /// Nearest front-facing triangle of the mesh.
    ///
    /// A triangle whose interpolated normal does not face the ray
    /// (`n · d >= 0`) is skipped, so models are one-sided.
    fn hit(&self, ray: &Ray, scene: &Scene, limits: &TraceLimits) -> Option<SurfaceHit> {
        let mesh = scene.mesh(self.mesh)?;
        let material = scene.material(self.material)?;

        let mut closest: Option<(Barycentric, [MeshVertex; 3])> = None;
        let mut interval = limits.bounded();

        for face in mesh.triangles() {
            let [v0, v1, v2] = &face;
            let Some(bary) = Barycentric::solve(v0.position, v1.position, v2.position, ray, interval)
            else {
                continue;
            };

            let normal = bary.blend(v0.normal, v1.normal, v2.normal);
            if normal.dot(ray.direction()) >= 0.0 {
                continue;
            }

            // Shrink the window to the nearest hit so far
            interval = interval.with_max(bary.t);
            closest = Some((bary, face));
        }

        let (bary, [v0, v1, v2]) = closest?;
        let coords = wrap_tex_coords(bary.blend(v0.tex_coord, v1.tex_coord, v2.tex_coord));

        Some(SurfaceHit {
            t: bary.t,
            point: ray.at(bary.t),
            normal: bary.blend(v0.normal, v1.normal, v2.normal).normalize(),
            ambient: material.ambient,
            diffuse: material.diffuse,
            specular: material.specular,
            texture: material.texture_color(coords),
        })
    }
}
