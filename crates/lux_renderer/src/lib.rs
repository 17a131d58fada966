//! Lux Renderer - CPU Phong ray tracing
//!
//! A Whitted-style ray tracer without secondary bounces: one ray per pixel,
//! nearest-hit search over every primitive, and ambient/diffuse/specular
//! shading with shadow rays towards each point light.
//!
//! # Example
//!
//! ```ignore
//! use lux_renderer::{Camera, Light, Material, RayTracer, Scene, Sphere, Vec3, Color};
//!
//! let mut scene = Scene::new();
//! scene.add(Box::new(Sphere::new(Vec3::ZERO, 1.0, Material::default(), Color::ONE)));
//! scene.add_light(Light::white(Vec3::new(5.0, 5.0, 10.0), 1.0));
//!
//! let camera = Camera::new(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z, Vec3::Y)?;
//! RayTracer::new(&scene).render_to_file(&camera, 320, 240, "sphere.png")?;
//! ```

mod bucket;
mod error;
mod geometry;
mod image_buffer;
mod plane;
mod renderer;
mod scene;
mod shading;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use error::{RenderError, RenderResult};
pub use geometry::{Geometry, Intersection};
pub use image_buffer::{color_to_rgb, Image};
pub use plane::Plane;
pub use renderer::{image_to_view_plane, primary_ray, RayTracer, RenderConfig};
pub use scene::Scene;
pub use shading::{
    is_lit, shade, ShadowTest, DEFAULT_SHADOW_RANGE, DEFAULT_SHADOW_TOLERANCE,
};
pub use sphere::Sphere;

/// Re-export scene values from lux_core
pub use lux_core::{Camera, Color, Light, Material};

/// Re-export Vec3 and common math types from lux_math
pub use lux_math::{Interval, Ray, Vec3};
