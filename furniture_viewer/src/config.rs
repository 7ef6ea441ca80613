/// Viewer and framing configuration.

use glam::Vec3;
use crate::error::{Error, Result};

/// Direction from target to camera when neither the camera offset nor the
/// configured fallback gives one.
pub const DEFAULT_FALLBACK_DIRECTION: Vec3 = Vec3::NEG_Y;

/// Tuning for `frame()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramingConfig {
    /// Lower bound on the framed radius (also the radius of an empty scene)
    pub min_radius: f32,
    /// `far = distance * far_scale`
    pub far_scale: f32,
    /// `near = far * near_ratio`
    pub near_ratio: f32,
    /// Unit direction from target to camera, used when the camera sits on its target
    pub fallback_direction: Vec3,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            min_radius: 1.0,
            far_scale: 50.0,
            near_ratio: 0.001,
            fallback_direction: DEFAULT_FALLBACK_DIRECTION,
        }
    }
}

impl FramingConfig {
    /// Check that framing keeps `0 < near < far` and a usable camera pose.
    ///
    /// # Errors
    ///
    /// `InvalidFramingConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::InvalidFramingConfig(msg));

        if !(self.min_radius.is_finite() && self.min_radius > 0.0) {
            return invalid(format!("min_radius {} must be finite and > 0", self.min_radius));
        }
        if !(self.far_scale.is_finite() && self.far_scale > 0.0) {
            return invalid(format!("far_scale {} must be finite and > 0", self.far_scale));
        }
        if !(self.near_ratio > 0.0 && self.near_ratio < 1.0) {
            return invalid(format!("near_ratio {} must lie in (0, 1)", self.near_ratio));
        }
        if !self.fallback_direction.is_finite() || self.fallback_direction.try_normalize().is_none() {
            return invalid(format!(
                "fallback_direction {} must be a finite non-zero vector",
                self.fallback_direction
            ));
        }
        Ok(())
    }
}

/// Initial camera and framing settings.
///
/// The default camera sits 100 units down -Y, looking at the origin with
/// +Z up (the table model is built Z-up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Width / height of the viewport
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub camera_position: Vec3,
    pub camera_up: Vec3,
    pub framing: FramingConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 50.0,
            aspect: 16.0 / 9.0,
            near: 1.0,
            far: 200.0,
            camera_position: Vec3::new(0.0, -100.0, 0.0),
            camera_up: Vec3::Z,
            framing: FramingConfig::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
