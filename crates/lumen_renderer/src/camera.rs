//! Primary ray generation.

use lumen_core::Camera;
use lumen_math::{Ray, Vec3};

/// Generates one primary ray per pixel for a fixed camera and image size.
///
/// Pixel `(0, 0)` is the bottom-left corner of the image. Rays start at the
/// eye and pass through the pixel's projection on the near plane.
#[derive(Debug, Clone)]
pub struct PrimaryRays {
    width: u32,
    height: u32,

    // Cached computed values
    eye: Vec3,
    near_center: Vec3,
    up: Vec3,
    left: Vec3,
    /// Near plane half-height
    alpha: f32,
    /// Near plane half-width
    beta: f32,
}

impl PrimaryRays {
    pub fn new(camera: &Camera, width: u32, height: u32) -> Self {
        let near = camera.near_clip.abs();
        let alpha = near * (camera.fov_radians() / 2.0).tan();

        Self {
            width,
            height,
            eye: camera.position,
            near_center: camera.position + camera.direction * near,
            up: camera.up,
            left: camera.up.cross(camera.direction).normalize(),
            alpha,
            beta: camera.aspect_ratio * alpha,
        }
    }

    /// The ray through pixel `(x, y)`.
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        // Screen coordinates in [-1, 1)
        let h = (x as f32 / self.width as f32 - 0.5) * 2.0;
        let v = (y as f32 / self.height as f32 - 0.5) * 2.0;

        let target = self.near_center + self.alpha * v * self.up - self.beta * h * self.left;
        Ray::through(self.eye, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pixel_looks_forward() {
        let camera = Camera::default();
        let rays = PrimaryRays::new(&camera, 64, 48);

        let ray = rays.ray(32, 24);
        assert!((ray.origin() - camera.position).length() < 1e-6);
        assert!((ray.direction() - camera.direction).length() < 1e-5);
    }

    #[test]
    fn test_bottom_left_origin() {
        let rays = PrimaryRays::new(&Camera::default(), 64, 48);

        // Default camera looks down -Z with +Y up, so +X is to the right
        let bottom_left = rays.ray(0, 0).direction();
        assert!(bottom_left.x < 0.0 && bottom_left.y < 0.0);

        let top_right = rays.ray(63, 47).direction();
        assert!(top_right.x > 0.0 && top_right.y > 0.0);
    }

    #[test]
    fn test_field_of_view() {
        // 90 degree vertical fov with a unit near plane: bottom edge is 45 degrees down
        let camera = Camera::default().with_lens(90.0, 1.0, 1.0);
        let rays = PrimaryRays::new(&camera, 10, 10);

        let dir = rays.ray(5, 0).direction();
        assert!((dir.y - dir.z).abs() < 1e-5, "direction {dir}");
        assert!(dir.y < 0.0);
    }

    #[test]
    fn test_aspect_widens_horizontally() {
        let camera = Camera::default().with_lens(60.0, 2.0, 0.5);
        let rays = PrimaryRays::new(&camera, 200, 100);

        let side = rays.ray(0, 50).direction();
        let bottom = rays.ray(100, 0).direction();
        assert!(side.x.abs() > bottom.y.abs());
    }

    #[test]
    fn test_negative_near_clip_uses_magnitude() {
        let forward = Camera::default().with_lens(60.0, 1.0, 0.5);
        let flipped = Camera::default().with_lens(60.0, 1.0, -0.5);

        let a = PrimaryRays::new(&forward, 16, 16).ray(3, 7);
        let b = PrimaryRays::new(&flipped, 16, 16).ray(3, 7);
        assert!((a.direction() - b.direction()).length() < 1e-6);
    }

    #[test]
    fn test_oriented_camera() {
        let camera = Camera::default().with_position(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(10.0, 0.0, 10.0),
            Vec3::Y,
        );
        let rays = PrimaryRays::new(&camera, 32, 32);

        let ray = rays.ray(16, 16);
        assert!((ray.direction() - Vec3::X).length() < 1e-5);
    }
}
