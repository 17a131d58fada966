//! Infinite plane primitive.

use crate::{
    geometry::{Geometry, Intersection},
    Color, Material, Ray, RenderError, RenderResult,
};
use lux_math::{Interval, Vec3};

/// Rays closer to parallel than this never hit the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite plane through `point`, facing along `normal`.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Material,
    color: Color,
}

impl Plane {
    /// Create a new plane. Fails if `normal` has zero length.
    pub fn new(point: Vec3, normal: Vec3, material: Material, color: Color) -> RenderResult<Self> {
        let normal = normal.try_normalize().ok_or_else(|| {
            RenderError::InvalidGeometry(format!("plane through {} has a zero normal", point))
        })?;

        Ok(Self {
            point,
            normal,
            material,
            color,
        })
    }
}

impl Geometry for Plane {
    fn intersect(&self, ray: &Ray, range: Interval) -> Intersection<'_> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < PARALLEL_EPSILON {
            return Intersection::none();
        }

        let t = self.normal.dot(self.point - ray.origin()) / denom;
        if range.surrounds(t) {
            Intersection::new(self, *ray, t)
        } else {
            Intersection::none()
        }
    }

    fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 4.0, 0.0),
            Material::default(),
            Color::ONE,
        )
        .unwrap()
    }

    #[test]
    fn test_plane_hit() {
        let ray = Ray::new(Vec3::new(0.0, 3.0, 0.0), -Vec3::Y).unwrap();
        let plane = floor();
        let hit = plane.intersect(&ray, Interval::new(0.0, 100.0));

        assert!(hit.is_hit());
        assert!((hit.t - 4.0).abs() < 1e-6);
        assert_eq!(hit.position(), Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X).unwrap();
        let everywhere = Interval::new(f32::NEG_INFINITY, f32::INFINITY);
        assert!(!floor().intersect(&ray, everywhere).is_hit());
    }

    #[test]
    fn test_plane_outside_range_misses() {
        let ray = Ray::new(Vec3::new(0.0, 3.0, 0.0), -Vec3::Y).unwrap();
        assert!(!floor().intersect(&ray, Interval::new(0.0, 2.0)).is_hit());

        let away = Ray::new(Vec3::new(0.0, 3.0, 0.0), Vec3::Y).unwrap();
        assert!(!floor().intersect(&away, Interval::new(0.0, 100.0)).is_hit());
    }

    #[test]
    fn test_plane_normal_is_normalized() {
        assert_eq!(floor().normal(Vec3::new(7.0, -1.0, 2.0)), Vec3::Y);
    }

    #[test]
    fn test_plane_zero_normal_is_rejected() {
        let result = Plane::new(Vec3::ZERO, Vec3::ZERO, Material::default(), Color::ONE);
        assert!(matches!(result, Err(RenderError::InvalidGeometry(_))));
    }
}
