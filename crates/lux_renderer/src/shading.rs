//! Phong local illumination with shadow rays.

use crate::{geometry::Intersection, Camera, Color, Light, Ray, RenderConfig, Scene};
use lux_math::{Interval, Vec3};
use serde::{Deserialize, Serialize};

/// Default per-axis tolerance for deciding that a shadow ray reached its target.
pub const DEFAULT_SHADOW_TOLERANCE: f32 = 1.0;

/// Default distance window searched by shadow rays.
pub const DEFAULT_SHADOW_RANGE: Interval = Interval {
    min: 0.0,
    max: 1000.0,
};

/// How a shadow ray's first hit is compared with the shaded point.
///
/// The shadow ray travels from the light towards the point; the point is lit
/// when the first surface the ray meets is (close enough to) the point itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ShadowTest {
    /// Every axis of the offset must be smaller than `tolerance`.
    PerAxis { tolerance: f32 },
    /// The Euclidean offset must be smaller than `epsilon`.
    Distance { epsilon: f32 },
    /// Every point is lit.
    Disabled,
}

impl Default for ShadowTest {
    fn default() -> Self {
        Self::PerAxis {
            tolerance: DEFAULT_SHADOW_TOLERANCE,
        }
    }
}

impl ShadowTest {
    /// True if a shadow ray stopping at `found` counts as reaching `target`.
    pub fn reaches(&self, found: Vec3, target: Vec3) -> bool {
        let offset = (found - target).abs();
        match *self {
            Self::PerAxis { tolerance } => offset.max_element() < tolerance,
            Self::Distance { epsilon } => offset.length() < epsilon,
            Self::Disabled => true,
        }
    }
}

/// Check whether `light` reaches `point` without being blocked.
///
/// A light sitting exactly on the point, or a shadow ray that meets no
/// surface at all, counts as lit.
pub fn is_lit(scene: &Scene, point: Vec3, light: &Light, config: &RenderConfig) -> bool {
    if config.shadow_test == ShadowTest::Disabled {
        return true;
    }

    let Some(ray) = Ray::through(light.position, point) else {
        return true;
    };

    let hit = scene.find_first_intersection(&ray, config.shadow_range);
    if !hit.is_hit() {
        return true;
    }

    config.shadow_test.reaches(hit.position(), point)
}

/// Color contributed by one light at an intersection.
///
/// The ambient term is always applied. Diffuse and specular terms are added
/// only when the point is lit, after which the whole sum is scaled by the
/// light's intensity. Returns black for a miss.
pub fn shade(
    scene: &Scene,
    camera: &Camera,
    intersection: &Intersection<'_>,
    light: &Light,
    config: &RenderConfig,
) -> Color {
    let Some(geometry) = intersection.geometry else {
        return Color::ZERO;
    };

    let material = geometry.material();
    let point = intersection.position();

    let mut color = material.ambient * light.ambient;

    if is_lit(scene, point, light, config) {
        let n = geometry.normal(point);

        if let Some(to_light) = (light.position - point).try_normalize() {
            let n_dot_l = n.dot(to_light);
            if n_dot_l > 0.0 {
                color += material.diffuse * light.diffuse * n_dot_l;
            }

            if let Some(to_eye) = (camera.position() - point).try_normalize() {
                // Mirror of the light direction about the normal
                let reflected = n * n_dot_l * 2.0 - to_light;
                let e_dot_r = to_eye.dot(reflected);
                if e_dot_r > 0.0 {
                    color += material.specular * light.specular * e_dot_r.powf(material.shininess);
                }
            }
        }

        color *= light.intensity;
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere};

    const POINT: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    fn material() -> Material {
        Material::new(
            Color::splat(0.2),
            Color::splat(0.5),
            Color::splat(0.5),
            10.0,
        )
    }

    fn unit_sphere_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(Vec3::ZERO, 1.0, material(), Color::ONE)));
        scene
    }

    fn camera_on_z() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z, Vec3::Y).unwrap()
    }

    fn hit_front(scene: &Scene) -> Intersection<'_> {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z).unwrap();
        scene.find_first_intersection(&ray, Interval::new(0.0, 100.0))
    }

    #[test]
    fn test_shadow_test_per_axis() {
        let test = ShadowTest::default();
        assert!(test.reaches(Vec3::new(0.9, -0.9, 0.9), Vec3::ZERO));
        assert!(!test.reaches(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO));
    }

    #[test]
    fn test_shadow_test_distance() {
        let test = ShadowTest::Distance { epsilon: 1.0 };
        // Within 1 on each axis but not in Euclidean distance
        assert!(!test.reaches(Vec3::new(0.9, 0.9, 0.0), Vec3::ZERO));
        assert!(test.reaches(Vec3::new(0.5, 0.5, 0.0), Vec3::ZERO));
    }

    #[test]
    fn test_shadow_test_deserialize() {
        let test: ShadowTest =
            serde_json::from_str(r#"{ "mode": "distance", "epsilon": 0.01 }"#).unwrap();
        assert_eq!(test, ShadowTest::Distance { epsilon: 0.01 });
    }

    #[test]
    fn test_unobstructed_point_is_lit() {
        let scene = unit_sphere_scene();
        let light = Light::white(Vec3::new(0.0, 0.0, 10.0), 1.0);

        assert!(is_lit(&scene, POINT, &light, &RenderConfig::default()));
    }

    #[test]
    fn test_blocker_casts_shadow() {
        let mut scene = unit_sphere_scene();
        let light = Light::white(Vec3::new(0.0, 0.0, 10.0), 1.0);
        let config = RenderConfig::default();

        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
            material(),
            Color::ONE,
        )));

        assert!(!is_lit(&scene, POINT, &light, &config));

        let disabled = RenderConfig {
            shadow_test: ShadowTest::Disabled,
            ..config
        };
        assert!(is_lit(&scene, POINT, &light, &disabled));
    }

    #[test]
    fn test_light_at_point_is_lit() {
        let scene = unit_sphere_scene();
        let light = Light::white(POINT, 1.0);
        assert!(is_lit(&scene, POINT, &light, &RenderConfig::default()));
    }

    #[test]
    fn test_shade_lit_head_on() {
        let scene = unit_sphere_scene();
        let camera = camera_on_z();
        let light = Light::new(
            Vec3::new(0.0, 0.0, 10.0),
            Color::splat(0.5),
            Color::ONE,
            Color::ONE,
            2.0,
        );

        let hit = hit_front(&scene);
        let color = shade(&scene, &camera, &hit, &light, &RenderConfig::default());

        // (ambient 0.2 * 0.5 + diffuse 0.5 * 1 + specular 0.5 * 1^10) * 2
        assert!((color - Color::splat(2.2)).length() < 1e-4, "got {}", color);
    }

    #[test]
    fn test_shade_shadowed_keeps_ambient() {
        let mut scene = unit_sphere_scene();
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, 20.0),
            1.0,
            material(),
            Color::ONE,
        )));
        let camera = camera_on_z();
        let light = Light::new(
            Vec3::new(0.0, 0.0, 30.0),
            Color::splat(0.5),
            Color::ONE,
            Color::ONE,
            2.0,
        );

        let hit = hit_front(&scene);
        let color = shade(&scene, &camera, &hit, &light, &RenderConfig::default());

        // Ambient only, not scaled by intensity
        assert!((color - Color::splat(0.1)).length() < 1e-5, "got {}", color);
    }

    #[test]
    fn test_shade_light_behind_surface_adds_nothing() {
        let scene = unit_sphere_scene();
        let camera = camera_on_z();
        let light = Light::new(
            Vec3::new(0.0, 0.0, 1.5),
            Color::ZERO,
            Color::ONE,
            Color::ONE,
            1.0,
        );

        // Hit the floor of a sphere from above; the light is on the far side
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), -Vec3::Y).unwrap();
        let hit = scene.find_first_intersection(&ray, Interval::new(0.0, 100.0));
        assert!(hit.is_hit());

        let color = shade(&scene, &camera, &hit, &light, &RenderConfig {
            shadow_test: ShadowTest::Disabled,
            ..RenderConfig::default()
        });
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_shade_miss_is_black() {
        let scene = unit_sphere_scene();
        let light = Light::white(Vec3::ONE, 1.0);
        let color = shade(
            &scene,
            &camera_on_z(),
            &Intersection::none(),
            &light,
            &RenderConfig::default(),
        );
        assert_eq!(color, Color::ZERO);
    }
}
