/// OrbitControls — the point the camera orbits around.
///
/// Rotation and zoom from user input belong to the host's control layer;
/// this type only carries the shared target and re-aims the camera at it.

use glam::Vec3;
use super::camera::PerspectiveCamera;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitControls {
    pub target: Vec3,
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self { target }
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Per-frame: aim the camera at the target.
    pub fn update(&self, camera: &mut PerspectiveCamera) {
        camera.look_at(self.target);
    }
}
