//! Surface and light types shared by every scene.
//!
//! These are plain values: they are built once, attached to primitives or
//! the light list, and read without mutation during a render.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB values, typically 0-1 but unbounded while accumulating)
pub type Color = Vec3;

/// Phong surface coefficients.
///
/// Each term is an RGB color multiplied component-wise with the matching
/// term of a light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "MaterialFields")]
pub struct Material {
    /// Reflectance of the light's ambient term
    pub ambient: Color,

    /// Reflectance of the light's diffuse term
    pub diffuse: Color,

    /// Reflectance of the light's specular term
    pub specular: Color,

    /// Specular exponent (>= 0, larger is a tighter highlight)
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::splat(0.1),
            diffuse: Color::splat(0.5), // Grey default
            specular: Color::splat(0.5),
            shininess: 32.0,
        }
    }
}

impl Material {
    /// Create a new material. Negative shininess is clamped to zero.
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess: shininess.max(0.0),
        }
    }

    /// A plastic-like material derived from a single base color.
    pub fn from_color(color: Color, shininess: f32) -> Self {
        Self::new(color * 0.1, color * 0.7, Color::splat(0.5), shininess)
    }
}

/// Serialized form of [`Material`], validated through [`Material::new`].
#[derive(Deserialize)]
struct MaterialFields {
    ambient: Color,
    diffuse: Color,
    specular: Color,
    shininess: f32,
}

impl From<MaterialFields> for Material {
    fn from(fields: MaterialFields) -> Self {
        Material::new(
            fields.ambient,
            fields.diffuse,
            fields.specular,
            fields.shininess,
        )
    }
}

/// A point light source.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,

    /// Scales the light's whole contribution at a lit point
    pub intensity: f32,
}

impl Light {
    pub fn new(
        position: Vec3,
        ambient: Color,
        diffuse: Color,
        specular: Color,
        intensity: f32,
    ) -> Self {
        Self {
            position,
            ambient,
            diffuse,
            specular,
            intensity,
        }
    }

    /// A white light with a dim ambient term.
    pub fn white(position: Vec3, intensity: f32) -> Self {
        Self::new(
            position,
            Color::splat(0.2),
            Color::ONE,
            Color::ONE,
            intensity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_clamps_shininess() {
        let material = Material::new(Color::ZERO, Color::ONE, Color::ONE, -4.0);
        assert_eq!(material.shininess, 0.0);
    }

    #[test]
    fn test_material_deserialize_clamps_shininess() {
        let json = r#"{
            "ambient": [0.1, 0.1, 0.1],
            "diffuse": [0.5, 0.5, 0.5],
            "specular": [1.0, 1.0, 1.0],
            "shininess": -4.0
        }"#;
        let material: Material = serde_json::from_str(json).unwrap();
        assert_eq!(material.shininess, 0.0);
        assert_eq!(material.specular, Color::ONE);
    }

    #[test]
    fn test_material_from_color() {
        let material = Material::from_color(Color::new(1.0, 0.0, 0.0), 10.0);
        assert!(material.ambient.x > 0.0);
        assert_eq!(material.diffuse.y, 0.0);
        assert_eq!(material.shininess, 10.0);
    }

    #[test]
    fn test_light_deserialize() {
        let json = r#"{
            "position": [0.0, 10.0, 0.0],
            "ambient": [0.1, 0.1, 0.1],
            "diffuse": [1.0, 1.0, 1.0],
            "specular": [1.0, 1.0, 1.0],
            "intensity": 0.8
        }"#;
        let light: Light = serde_json::from_str(json).unwrap();
        assert_eq!(light.position, Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(light.intensity, 0.8);
    }
}
