//! Geometry trait and the Intersection record returned by ray queries.

use std::fmt;

use crate::{Color, Material, Ray};
use lux_math::{Interval, Vec3};

/// Result of a ray query against one primitive or the whole scene.
///
/// A miss is not an error: it is an intersection with both flags cleared
/// and no primitive attached.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    /// The ray met the primitive's surface
    pub valid: bool,
    /// The hit lies inside the queried distance window
    pub visible: bool,
    /// Primitive that was hit
    pub geometry: Option<&'a dyn Geometry>,
    /// Ray that produced the hit
    pub ray: Ray,
    /// Distance along the ray to the hit point
    pub t: f32,
}

impl<'a> Intersection<'a> {
    /// A valid, visible hit on `geometry` at distance `t` along `ray`.
    pub fn new(geometry: &'a dyn Geometry, ray: Ray, t: f32) -> Self {
        Self {
            valid: true,
            visible: true,
            geometry: Some(geometry),
            ray,
            t,
        }
    }

    /// The "no hit" intersection.
    pub fn none() -> Self {
        Self {
            valid: false,
            visible: false,
            geometry: None,
            ray: Ray::default(),
            t: 0.0,
        }
    }

    /// True if this records a usable hit.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.valid && self.visible && self.geometry.is_some()
    }

    /// Point of intersection (`ray.at(t)`).
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.ray.at(self.t)
    }
}

impl Default for Intersection<'_> {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for Intersection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection")
            .field("valid", &self.valid)
            .field("visible", &self.visible)
            .field("has_geometry", &self.geometry.is_some())
            .field("ray", &self.ray)
            .field("t", &self.t)
            .finish()
    }
}

/// Trait for primitives that can be hit by rays.
pub trait Geometry: Send + Sync {
    /// Intersect a ray with this primitive, only accepting hits inside `range`.
    ///
    /// Never fails: a miss is reported as [`Intersection::none`].
    fn intersect(&self, ray: &Ray, range: Interval) -> Intersection<'_>;

    /// Outward unit surface normal at `point`.
    fn normal(&self, point: Vec3) -> Vec3;

    /// Surface material.
    fn material(&self) -> &Material;

    /// Base color of the primitive.
    fn color(&self) -> Color;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_intersection_is_a_miss() {
        let intersection = Intersection::default();

        assert!(!intersection.valid);
        assert!(!intersection.visible);
        assert!(intersection.geometry.is_none());
        assert!(!intersection.is_hit());
    }

    #[test]
    fn test_intersection_position() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X).unwrap();
        let intersection = Intersection {
            ray,
            t: 3.0,
            ..Intersection::none()
        };

        assert_eq!(intersection.position(), Vec3::new(3.0, 1.0, 0.0));
    }
}
