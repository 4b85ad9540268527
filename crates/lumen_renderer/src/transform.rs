//! Moving rays into a primitive's local space.
//!
//! Each primitive is intersected in its own coordinates. The ray's origin and
//! endpoint are pushed through the inverse transform as points, so a scaled
//! primitive changes the length of the origin→endpoint segment. The returned
//! [`LocalRay`] keeps both lengths so local hit times can be converted back.

use lumen_core::Transform;
use lumen_math::Ray;

/// A ray expressed in a primitive's local space.
#[derive(Debug, Clone, Copy)]
pub struct LocalRay {
    /// The ray in local coordinates (unit direction)
    pub ray: Ray,
    /// Origin→endpoint distance in world space
    world_length: f32,
    /// Origin→endpoint distance in local space
    local_length: f32,
}

impl LocalRay {
    /// Convert a local hit time into a world-space hit time.
    ///
    /// Both rays have unit directions, so the ratio of segment lengths is the
    /// scale between the two parameterizations.
    #[inline]
    pub fn to_world_time(&self, local_time: f32) -> f32 {
        local_time * self.world_length / self.local_length
    }

    pub fn world_length(&self) -> f32 {
        self.world_length
    }

    pub fn local_length(&self) -> f32 {
        self.local_length
    }
}

/// Express a world-space ray in the local space of `transform`.
pub fn to_local(ray: &Ray, transform: &Transform) -> LocalRay {
    let inverse = transform.inverse_matrix();
    let origin = inverse.transform_point3(ray.origin());
    let endpoint = inverse.transform_point3(ray.endpoint());
    let local = Ray::through(origin, endpoint);

    LocalRay {
        ray: local,
        world_length: ray.segment_length(),
        local_length: local.segment_length(),
    }
}
