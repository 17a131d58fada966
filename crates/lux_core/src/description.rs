//! JSON scene descriptions.
//!
//! A description names its materials once and lets primitives refer to them
//! by name:
//!
//! ```json
//! {
//!   "image": { "width": 320, "height": 240 },
//!   "camera": { "position": [0, 0, 10], "direction": [0, 0, -1], "up": [0, 1, 0] },
//!   "materials": { "red": { "ambient": [0.1, 0, 0], "diffuse": [0.7, 0, 0],
//!                           "specular": [0.5, 0.5, 0.5], "shininess": 32 } },
//!   "primitives": [ { "type": "sphere", "center": [0, 0, 0], "radius": 1, "material": "red" } ],
//!   "lights": [ { "position": [5, 5, 10], "ambient": [0.2, 0.2, 0.2],
//!                 "diffuse": [1, 1, 1], "specular": [1, 1, 1], "intensity": 1 } ]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, CameraDescription};
use crate::scene::{Color, Light, Material};
use crate::{SceneError, SceneResult};

/// Output image settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub width: u32,
    pub height: u32,

    /// Destination file; the extension selects the encoding
    pub output: Option<String>,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            output: None,
        }
    }
}

/// A primitive entry referring to a named material.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimitiveDescription {
    Sphere {
        center: Vec3,
        radius: f32,
        material: String,
        #[serde(default)]
        color: Color,
    },
    Plane {
        point: Vec3,
        normal: Vec3,
        material: String,
        #[serde(default)]
        color: Color,
    },
}

impl PrimitiveDescription {
    /// Name of the material this primitive uses.
    pub fn material_name(&self) -> &str {
        match self {
            Self::Sphere { material, .. } | Self::Plane { material, .. } => material,
        }
    }
}

/// A complete scene: camera, image settings, geometry and lights.
///
/// Primitive and light order is preserved; it decides exact-distance ties
/// during the nearest-hit search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub image: ImageSettings,

    #[serde(default)]
    pub camera: CameraDescription,

    #[serde(default)]
    pub materials: HashMap<String, Material>,

    #[serde(default)]
    pub primitives: Vec<PrimitiveDescription>,

    #[serde(default)]
    pub lights: Vec<Light>,
}

impl SceneDescription {
    /// Look up a material by name.
    pub fn material(&self, name: &str) -> SceneResult<&Material> {
        self.materials
            .get(name)
            .ok_or_else(|| SceneError::UnknownMaterial(name.to_string()))
    }

    /// Build and validate the camera.
    pub fn camera(&self) -> SceneResult<Camera> {
        self.camera.build()
    }

    /// Check that the camera is valid and every material reference resolves.
    pub fn validate(&self) -> SceneResult<()> {
        self.camera()?;
        for primitive in &self.primitives {
            self.material(primitive.material_name())?;
        }
        Ok(())
    }
}

/// Load and validate a scene description from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    log::info!("Loading scene {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    load_scene_from_str(&contents)
}

/// Parse and validate a scene description from a JSON string.
pub fn load_scene_from_str(json: &str) -> SceneResult<SceneDescription> {
    load_scene_from_value(serde_json::from_str(json)?)
}

/// Validate a scene description from an already parsed JSON document.
///
/// Keys the description does not know, such as renderer settings kept in
/// the same file, are ignored.
pub fn load_scene_from_value(value: serde_json::Value) -> SceneResult<SceneDescription> {
    let description = SceneDescription::deserialize(value)?;
    description.validate()?;

    log::info!(
        "Loaded scene: {} primitives, {} lights, {} materials",
        description.primitives.len(),
        description.lights.len(),
        description.materials.len()
    );
    if description.lights.is_empty() {
        log::warn!("Scene has no lights; only the background will be visible");
    }

    Ok(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "image": { "width": 4, "height": 2 },
        "camera": {
            "position": [0.0, 0.0, 10.0],
            "direction": [0.0, 0.0, -1.0],
            "up": [0.0, 1.0, 0.0],
            "view_plane_distance": 1.0,
            "view_plane_width": 1.0,
            "view_plane_height": 1.0
        },
        "materials": {
            "red": {
                "ambient": [0.1, 0.0, 0.0],
                "diffuse": [0.7, 0.0, 0.0],
                "specular": [0.5, 0.5, 0.5],
                "shininess": 32.0
            }
        },
        "primitives": [
            { "type": "sphere", "center": [0.0, 0.0, 0.0], "radius": 1.0, "material": "red" },
            { "type": "plane", "point": [0.0, -1.0, 0.0], "normal": [0.0, 1.0, 0.0],
              "material": "red", "color": [0.5, 0.5, 0.5] }
        ],
        "lights": [
            { "position": [5.0, 5.0, 10.0], "ambient": [0.2, 0.2, 0.2],
              "diffuse": [1.0, 1.0, 1.0], "specular": [1.0, 1.0, 1.0], "intensity": 1.0 }
        ]
    }"#;

    #[test]
    fn test_load_scene_from_str() {
        let scene = load_scene_from_str(SCENE).unwrap();

        assert_eq!(scene.image.width, 4);
        assert_eq!(scene.image.height, 2);
        assert!(scene.image.output.is_none());
        assert_eq!(scene.primitives.len(), 2);
        assert_eq!(scene.lights.len(), 1);
        assert!(matches!(
            scene.primitives[0],
            PrimitiveDescription::Sphere { radius, .. } if radius == 1.0
        ));
        assert_eq!(scene.material("red").unwrap().shininess, 32.0);
    }

    #[test]
    fn test_unknown_material_is_rejected() {
        let json = r#"{
            "primitives": [
                { "type": "sphere", "center": [0.0, 0.0, 0.0], "radius": 1.0, "material": "gold" }
            ]
        }"#;

        let err = load_scene_from_str(json).unwrap_err();
        assert!(matches!(err, SceneError::UnknownMaterial(name) if name == "gold"));
    }

    #[test]
    fn test_invalid_camera_is_rejected() {
        let json = r#"{ "camera": { "direction": [0.0, 1.0, 0.0], "up": [0.0, 1.0, 0.0] } }"#;
        assert!(matches!(
            load_scene_from_str(json),
            Err(SceneError::InvalidCamera(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        assert!(matches!(
            load_scene_from_str("{ not json"),
            Err(SceneError::Parse(_))
        ));
    }

    #[test]
    fn test_load_scene_from_value_ignores_extra_keys() {
        let mut value: serde_json::Value = serde_json::from_str(SCENE).unwrap();
        value["render"] = serde_json::json!({ "parallel": false });

        let scene = load_scene_from_value(value).unwrap();
        assert_eq!(scene.primitives.len(), 2);
    }

    #[test]
    fn test_load_scene_missing_file() {
        let path = std::env::temp_dir().join("lux_core_missing_scene.json");
        assert!(matches!(load_scene(&path), Err(SceneError::Io(_))));
    }
}
