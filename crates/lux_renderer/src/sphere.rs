//! Sphere primitive for ray tracing.

use crate::{
    geometry::{Geometry, Intersection},
    Color, Material, Ray,
};
use lux_math::{Interval, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
    color: Color,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: Material, color: Color) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
            color,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Geometry for Sphere {
    fn intersect(&self, ray: &Ray, range: Interval) -> Intersection<'_> {
        // Distance along the ray to the point closest to the center
        let t = (self.center - ray.origin()).dot(ray.direction());
        // Distance from the center to that point
        let y = (self.center - ray.at(t)).length();

        let discriminant = self.radius * self.radius - y * y;
        if discriminant.is_nan() || discriminant < 0.0 {
            return Intersection::none();
        }

        // Half-chord length; t - x is the near root
        let x = discriminant.sqrt();
        let t1 = t - x;

        // The window is tested against the closest-approach distance `t`,
        // while the reported hit is the near root `t1`.
        if range.surrounds(t) && y <= self.radius {
            Intersection::new(self, *ray, t1)
        } else {
            Intersection::none()
        }
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn color(&self) -> Color {
        self.color
    }
}
