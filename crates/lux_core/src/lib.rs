//! Lux Core - Scene data for the Lux ray tracer.
//!
//! This crate provides:
//!
//! - **Scene values**: `Material`, `Light`, `Camera`
//! - **Scene descriptions**: JSON loading into `SceneDescription`
//!
//! # Example
//!
//! ```ignore
//! use lux_core::load_scene;
//!
//! let description = load_scene("scene.json")?;
//! let camera = description.camera()?;
//! println!("Loaded {} primitives, {} lights",
//!     description.primitives.len(),
//!     description.lights.len());
//! ```

pub mod camera;
pub mod description;
pub mod error;
pub mod scene;

// Re-export commonly used types
pub use camera::{Camera, CameraDescription};
pub use description::{
    load_scene, load_scene_from_str, load_scene_from_value, ImageSettings, PrimitiveDescription,
    SceneDescription,
};
pub use error::{SceneError, SceneResult};
pub use scene::{Color, Light, Material};
