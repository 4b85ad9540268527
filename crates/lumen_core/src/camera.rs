//! Camera parameters.
//!
//! Only the parameters live here; turning them into primary rays is the
//! renderer's job.

use lumen_math::Vec3;

/// A pinhole camera.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    /// Eye position
    pub position: Vec3,
    /// Viewing direction (unit length)
    pub direction: Vec3,
    /// Up vector (unit length, perpendicular to `direction`)
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Width / height
    pub aspect_ratio: f32,
    /// Distance to the near plane (sign ignored)
    pub near_clip: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::NEG_Z,
            up: Vec3::Y,
            fov: 60.0,
            aspect_ratio: 4.0 / 3.0,
            near_clip: 0.1,
        }
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the camera at `look_from` looking toward `look_at`.
    ///
    /// `vup` only needs to be roughly up; it is re-orthogonalized against the
    /// viewing direction.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        let direction = (look_at - look_from).normalize();
        let left = vup.cross(direction).normalize();
        self.position = look_from;
        self.direction = direction;
        self.up = direction.cross(left).normalize();
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, fov: f32, aspect_ratio: f32, near_clip: f32) -> Self {
        self.fov = fov;
        self.aspect_ratio = aspect_ratio;
        self.near_clip = near_clip;
        self
    }

    /// Vertical field of view in radians.
    pub fn fov_radians(&self) -> f32 {
        self.fov.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_position_orthonormal_basis() {
        let camera = Camera::new().with_position(
            Vec3::new(0.0, 2.0, 10.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::Y,
        );

        assert!((camera.direction.length() - 1.0).abs() < 1e-5);
        assert!((camera.up.length() - 1.0).abs() < 1e-5);
        assert!(camera.direction.dot(camera.up).abs() < 1e-5);
        // Up stays on the +Y side
        assert!(camera.up.y > 0.0);
    }

    #[test]
    fn test_fov_radians() {
        let camera = Camera::new().with_lens(90.0, 1.0, 1.0);
        assert!((camera.fov_radians() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
