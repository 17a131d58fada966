//! Core ray tracing renderer.
//!
//! Casts one ray per pixel through the camera's view plane, finds the
//! nearest visible surface and sums the Phong contribution of every light.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::shading::{self, ShadowTest, DEFAULT_SHADOW_RANGE};
use crate::{Camera, Color, Image, Intersection, Light, Ray, RenderError, RenderResult, Scene};
use lux_math::{Interval, Vec3};

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Color of pixels whose ray hits nothing
    pub background: Color,
    /// How shadow ray hits are matched against the shaded point
    pub shadow_test: ShadowTest,
    /// Distance window searched by shadow rays
    pub shadow_range: Interval,
    /// Edge length of the square tiles rendered in parallel
    pub bucket_size: u32,
    /// Render buckets on the rayon thread pool instead of serially
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Color::ZERO,
            shadow_test: ShadowTest::default(),
            shadow_range: DEFAULT_SHADOW_RANGE,
            bucket_size: DEFAULT_BUCKET_SIZE,
            parallel: true,
        }
    }
}

/// Map pixel index `n` of `image_size` to an offset on a view plane of
/// `view_plane_size`, centered on the viewing axis.
#[inline]
pub fn image_to_view_plane(n: u32, image_size: u32, view_plane_size: f32) -> f32 {
    n as f32 * view_plane_size / image_size as f32 - view_plane_size / 2.0
}

/// Generate the primary ray for pixel (i, j).
///
/// Returns `None` only for a degenerate camera whose view plane collapses
/// onto the eye point.
pub fn primary_ray(camera: &Camera, i: u32, j: u32, width: u32, height: u32) -> Option<Ray> {
    let u = image_to_view_plane(i, width, camera.view_plane_width());
    let v = image_to_view_plane(j, height, camera.view_plane_height());

    let through: Vec3 = camera.position()
        + camera.direction() * camera.view_plane_distance()
        + camera.right() * u
        + camera.up() * v;

    Ray::through(camera.position(), through)
}

/// Renders a borrowed scene.
///
/// The scene is shared read-only across worker threads for the duration
/// of a render.
pub struct RayTracer<'s> {
    scene: &'s Scene,
    config: RenderConfig,
}

impl<'s> RayTracer<'s> {
    /// Create a ray tracer with the default configuration.
    pub fn new(scene: &'s Scene) -> Self {
        Self {
            scene,
            config: RenderConfig::default(),
        }
    }

    /// Replace the render configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn scene(&self) -> &'s Scene {
        self.scene
    }

    /// Nearest visible hit along `ray` within `range`.
    pub fn find_first_intersection(&self, ray: &Ray, range: Interval) -> Intersection<'s> {
        self.scene.find_first_intersection(ray, range)
    }

    /// Whether `light` reaches `point` unobstructed.
    pub fn is_lit(&self, point: Vec3, light: &Light) -> bool {
        shading::is_lit(self.scene, point, light, &self.config)
    }

    /// Color contributed by `light` at `intersection`.
    pub fn shade(&self, camera: &Camera, intersection: &Intersection<'_>, light: &Light) -> Color {
        shading::shade(self.scene, camera, intersection, light, &self.config)
    }

    /// Compute the color of pixel (i, j) of a `width` x `height` image.
    pub fn render_pixel(&self, camera: &Camera, i: u32, j: u32, width: u32, height: u32) -> Color {
        let Some(ray) = primary_ray(camera, i, j, width, height) else {
            return self.config.background;
        };

        let intersection = self.find_first_intersection(&ray, camera.clipping());
        if !intersection.is_hit() {
            return self.config.background;
        }

        self.scene
            .lights()
            .iter()
            .fold(Color::ZERO, |color, light| {
                color + self.shade(camera, &intersection, light)
            })
    }

    /// Render the entire scene to an image buffer.
    pub fn render(&self, camera: &Camera, width: u32, height: u32) -> RenderResult<Image> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyImage { width, height });
        }

        log::info!(
            "Rendering {}x{} ({} primitives, {} lights, {})",
            width,
            height,
            self.scene.len(),
            self.scene.lights().len(),
            if self.config.parallel { "parallel" } else { "serial" }
        );
        let start = Instant::now();

        let buckets = generate_buckets(width, height, self.config.bucket_size);
        let render_one = |bucket: &crate::Bucket| {
            BucketResult::new(*bucket, render_bucket(bucket, self, camera, width, height))
        };

        let results: Vec<BucketResult> = if self.config.parallel {
            buckets.par_iter().map(render_one).collect()
        } else {
            buckets.iter().map(render_one).collect()
        };

        let mut image = Image::new(width, height);
        for result in &results {
            image.write_bucket(result);
        }

        log::info!(
            "Rendered {} buckets in {:?}",
            results.len(),
            start.elapsed()
        );

        Ok(image)
    }

    /// Render the scene and store the image at `path`.
    ///
    /// The image is fully rendered before anything is written.
    pub fn render_to_file<P: AsRef<Path>>(
        &self,
        camera: &Camera,
        width: u32,
        height: u32,
        path: P,
    ) -> RenderResult<()> {
        let image = self.render(camera, width, height)?;
        image.store(path)
    }
}
