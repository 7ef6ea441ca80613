/// PerspectiveCamera — the viewer's single camera.
///
/// Holds pose (position, look target, up) and projection parameters
/// (vertical fov in degrees, aspect, near/far). Matrices are derived on
/// demand; nothing is cached.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};
use super::frustum::Frustum;

/// Below this, the view direction is treated as parallel to `up`.
const PARALLEL_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    target: Vec3,
    pub up: Vec3,
    fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    /// Create a camera looking at the origin.
    ///
    /// # Errors
    ///
    /// `InvalidFieldOfView` unless `0 < fov_degrees < 180`.
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Result<Self> {
        Self::validate_fov(fov_degrees)?;
        Ok(Self {
            position: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees,
            aspect,
            near,
            far,
        })
    }

    fn validate_fov(fov_degrees: f32) -> Result<()> {
        if fov_degrees > 0.0 && fov_degrees < 180.0 {
            Ok(())
        } else {
            Err(Error::InvalidFieldOfView(fov_degrees))
        }
    }

    // ===== GETTERS =====

    /// Vertical field of view in degrees, always in (0, 180).
    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }

    /// Point the camera is aimed at.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }

    // ===== SETTERS =====

    pub fn set_fov_degrees(&mut self, fov_degrees: f32) -> Result<()> {
        Self::validate_fov(fov_degrees)?;
        self.fov_degrees = fov_degrees;
        Ok(())
    }

    /// Aim the camera at `target`.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    // ===== DERIVED =====

    /// `up`, or a substitute axis when `up` is parallel to the view direction.
    fn effective_up(&self) -> Vec3 {
        let forward = (self.target - self.position).normalize_or_zero();
        if forward.cross(self.up).length_squared() > PARALLEL_EPSILON {
            return self.up;
        }
        [Vec3::Z, Vec3::Y, Vec3::X]
            .into_iter()
            .find(|axis| forward.cross(*axis).length_squared() > PARALLEL_EPSILON)
            .unwrap_or(Vec3::Y)
    }

    /// Right-handed view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.effective_up())
    }

    /// Right-handed perspective with OpenGL depth range [-1, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.view_projection_matrix())
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
