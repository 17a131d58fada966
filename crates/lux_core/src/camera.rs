//! Pinhole camera described by an eye point and a view plane.

use glam::Vec3;
use lux_math::Interval;
use serde::{Deserialize, Serialize};

use crate::{SceneError, SceneResult};

/// Vectors shorter than this (or crossings with a smaller sine) are degenerate.
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Camera for generating rays into the scene.
///
/// The view plane sits `view_plane_distance` in front of the eye, centered on
/// the viewing direction. Only hits between the front and back clipping
/// distances are visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    direction: Vec3,
    up: Vec3,

    view_plane_distance: f32,
    view_plane_width: f32,
    view_plane_height: f32,

    front_plane_distance: f32,
    back_plane_distance: f32,
}

impl Camera {
    /// Create a camera at `position` looking along `direction`.
    ///
    /// Both `direction` and `up` are normalized. They must be non-zero and
    /// not parallel, otherwise the view plane has no horizontal axis.
    pub fn new(position: Vec3, direction: Vec3, up: Vec3) -> SceneResult<Self> {
        let direction = direction
            .try_normalize()
            .ok_or_else(|| SceneError::InvalidCamera("direction has zero length".into()))?;
        let up = up
            .try_normalize()
            .ok_or_else(|| SceneError::InvalidCamera("up vector has zero length".into()))?;

        if up.cross(direction).length() < DEGENERATE_EPSILON {
            return Err(SceneError::InvalidCamera(
                "direction and up vector are parallel".into(),
            ));
        }

        Ok(Self {
            position,
            direction,
            up,
            view_plane_distance: 1.0,
            view_plane_width: 1.0,
            view_plane_height: 1.0,
            front_plane_distance: 0.0,
            back_plane_distance: 1000.0,
        })
    }

    /// Set view plane distance and size.
    pub fn with_view_plane(mut self, distance: f32, width: f32, height: f32) -> SceneResult<Self> {
        if !(distance > 0.0 && width > 0.0 && height > 0.0) {
            return Err(SceneError::InvalidCamera(format!(
                "view plane must be positive, got distance={} width={} height={}",
                distance, width, height
            )));
        }
        self.view_plane_distance = distance;
        self.view_plane_width = width;
        self.view_plane_height = height;
        Ok(self)
    }

    /// Set front and back clipping distances.
    pub fn with_clipping(mut self, front: f32, back: f32) -> SceneResult<Self> {
        if Interval::new(front, back).is_empty() {
            return Err(SceneError::InvalidCamera(format!(
                "front plane ({}) must be closer than back plane ({})",
                front, back
            )));
        }
        self.front_plane_distance = front;
        self.back_plane_distance = back;
        Ok(self)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit viewing direction.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Unit up vector.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Horizontal axis of the view plane (`up × direction`).
    pub fn right(&self) -> Vec3 {
        self.up.cross(self.direction)
    }

    pub fn view_plane_distance(&self) -> f32 {
        self.view_plane_distance
    }

    pub fn view_plane_width(&self) -> f32 {
        self.view_plane_width
    }

    pub fn view_plane_height(&self) -> f32 {
        self.view_plane_height
    }

    pub fn front_plane_distance(&self) -> f32 {
        self.front_plane_distance
    }

    pub fn back_plane_distance(&self) -> f32 {
        self.back_plane_distance
    }

    /// Distances at which primary hits are visible.
    pub fn clipping(&self) -> Interval {
        Interval::new(self.front_plane_distance, self.back_plane_distance)
    }
}

/// Serializable camera settings, validated into a [`Camera`] by [`CameraDescription::build`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    pub position: Vec3,
    pub direction: Vec3,
    pub up: Vec3,
    pub view_plane_distance: f32,
    pub view_plane_width: f32,
    pub view_plane_height: f32,
    pub front_plane_distance: f32,
    pub back_plane_distance: f32,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            view_plane_distance: 1.0,
            view_plane_width: 1.0,
            view_plane_height: 1.0,
            front_plane_distance: 0.0,
            back_plane_distance: 1000.0,
        }
    }
}

impl CameraDescription {
    pub fn build(&self) -> SceneResult<Camera> {
        Camera::new(self.position, self.direction, self.up)?
            .with_view_plane(
                self.view_plane_distance,
                self.view_plane_width,
                self.view_plane_height,
            )?
            .with_clipping(self.front_plane_distance, self.back_plane_distance)
    }
}
