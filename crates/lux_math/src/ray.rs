use crate::Vec3;

/// A half-line in 3D space with an origin and a unit-length direction.
///
/// Rays are used for visibility queries - they represent the points
/// `origin + t * direction`. The direction is normalized on construction,
/// so `t` measures true distance from the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    ///
    /// Returns `None` if the direction is zero-length or not finite.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Create the ray starting at `from` and passing through `to`.
    ///
    /// Returns `None` if the two points coincide.
    pub fn through(from: Vec3, to: Vec3) -> Option<Self> {
        Self::new(from, to - from)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the (unit) direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::Z,
        }
    }
}
