use crate::Vec3;

/// A ray in 3D space with origin, unit direction, and the far point it was built from.
///
/// The `endpoint` is kept so a ray can be pushed through an affine transform
/// (origin and endpoint both as points) and re-normalized on the other side.
/// Invariant: `direction == (endpoint - origin).normalize()`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    endpoint: Vec3,
}

impl Ray {
    /// Create a ray from `origin` passing through `endpoint`.
    ///
    /// If the two points coincide the direction is non-finite and every
    /// intersection test against the ray reports a miss.
    pub fn through(origin: Vec3, endpoint: Vec3) -> Self {
        Self {
            origin,
            direction: (endpoint - origin).normalize(),
            endpoint,
        }
    }

    /// Create a ray from an origin and a direction.
    ///
    /// The direction is normalized and the endpoint is placed one unit along it.
    pub fn from_direction(origin: Vec3, direction: Vec3) -> Self {
        let direction = direction.normalize();
        Self {
            origin,
            direction,
            endpoint: origin + direction,
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the far point the direction was derived from.
    #[inline]
    pub fn endpoint(&self) -> Vec3 {
        self.endpoint
    }

    /// Distance between origin and endpoint.
    #[inline]
    pub fn segment_length(&self) -> f32 {
        (self.endpoint - self.origin).length()
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
