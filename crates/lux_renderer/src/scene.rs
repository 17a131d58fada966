//! Renderable scene: an ordered list of primitives and lights.

use crate::{
    geometry::{Geometry, Intersection},
    Light, Plane, Ray, RenderResult, Sphere,
};
use lux_core::{PrimitiveDescription, SceneDescription};
use lux_math::Interval;

/// Primitives and lights, read-only while rendering.
pub struct Scene {
    geometries: Vec<Box<dyn Geometry>>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            geometries: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Build a scene from a validated description.
    pub fn from_description(description: &SceneDescription) -> RenderResult<Self> {
        let mut scene = Self::new();

        for primitive in &description.primitives {
            let material = *description.material(primitive.material_name())?;
            match primitive {
                PrimitiveDescription::Sphere {
                    center,
                    radius,
                    color,
                    ..
                } => {
                    if *radius < 0.0 {
                        log::warn!("Sphere at {} has negative radius {}; clamping to 0", center, radius);
                    }
                    scene.add(Box::new(Sphere::new(*center, *radius, material, *color)));
                }
                PrimitiveDescription::Plane {
                    point,
                    normal,
                    color,
                    ..
                } => {
                    scene.add(Box::new(Plane::new(*point, *normal, material, *color)?));
                }
            }
        }

        for light in &description.lights {
            scene.add_light(*light);
        }

        Ok(scene)
    }

    /// Add a primitive. Order decides exact-distance ties.
    pub fn add(&mut self, geometry: Box<dyn Geometry>) {
        self.geometries.push(geometry);
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn geometries(&self) -> &[Box<dyn Geometry>] {
        &self.geometries
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// Find the nearest visible hit along `ray` within `range`.
    ///
    /// Primitives reporting an invalid or invisible hit are skipped. On an
    /// exact distance tie the primitive added first wins. Returns
    /// [`Intersection::none`] when nothing is hit.
    pub fn find_first_intersection(&self, ray: &Ray, range: Interval) -> Intersection<'_> {
        let mut nearest = Intersection::none();

        for geometry in &self.geometries {
            let hit = geometry.intersect(ray, range);
            if !hit.is_hit() {
                continue;
            }

            if !nearest.is_hit() || hit.t < nearest.t {
                nearest = hit;
            }
        }

        nearest
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
