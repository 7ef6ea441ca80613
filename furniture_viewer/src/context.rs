/// RenderContext — everything one viewer instance mutates.
///
/// Camera, scene and orbit controls are owned here and passed by reference
/// to the framer and event handlers. The host event loop calls:
/// - `on_model_loaded` once the asynchronous model load settles
/// - `handle_key` / `handle_resize` for window events
/// - `update` once per displayed frame, before drawing

use glam::Vec3;
use winit::dpi::PhysicalSize;
use winit::keyboard::Key;
use crate::camera::{OrbitControls, PerspectiveCamera};
use crate::config::ViewerConfig;
use crate::error::{Error, Result};
use crate::framer::{self, FrameResult};
use crate::scene::{Geometry, Light, Material, Scene, SceneNodeKey, rgb_from_hex};
use crate::viewer::Viewer;

const SOURCE: &str = "furniture::RenderContext";

/// Name of the mesh created from the loaded model.
pub const MODEL_NODE_NAME: &str = "model";
/// Name of the directional light that follows the camera.
pub const KEY_LIGHT_NAME: &str = "key light";
/// Key that toggles the target's visibility.
pub const TOGGLE_TARGET_KEY: &str = "t";

pub struct RenderContext {
    pub camera: PerspectiveCamera,
    pub scene: Scene,
    pub controls: OrbitControls,
    config: ViewerConfig,
    key_light: SceneNodeKey,
}

impl RenderContext {
    /// Build the initial camera and the lighting rig.
    ///
    /// # Errors
    ///
    /// `InvalidFieldOfView` if `config.fov_degrees` is outside (0, 180),
    /// `InvalidFramingConfig` if `config.framing` fails validation.
    pub fn new(config: ViewerConfig) -> Result<Self> {
        config.framing.validate().map_err(|e| Viewer::log_and_return_error(SOURCE, e))?;
        let mut camera = PerspectiveCamera::new(config.fov_degrees, config.aspect, config.near, config.far)
            .map_err(|e| Viewer::log_and_return_error(SOURCE, e))?;
        camera.position = config.camera_position;
        camera.up = config.camera_up;

        let controls = OrbitControls::default();
        controls.update(&mut camera);

        let mut scene = Scene::new();
        scene.add_light("ambient", Light::Ambient { color: rgb_from_hex(0x101010) });
        let key_light = scene.add_light(
            KEY_LIGHT_NAME,
            Light::Directional { color: Vec3::ONE, position: Vec3::new(1.0, -1.0, 2.0).normalize() },
        );
        scene.add_light("point", Light::Point { color: Vec3::ONE, position: Vec3::ZERO });

        crate::viewer_info!(
            SOURCE,
            "context ready: fov {}°, camera at {:?}",
            config.fov_degrees, camera.position
        );

        Ok(Self { camera, scene, controls, config, key_light })
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Frame every bounded node of the scene.
    pub fn fit_to_scene(&mut self) -> FrameResult {
        framer::frame(
            self.scene.bounded_nodes(),
            &mut self.camera,
            &mut self.controls,
            &self.config.framing,
        )
    }

    /// Completion of the model load.
    ///
    /// On success the geometry becomes the `model` mesh and the camera is
    /// framed. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// `LoadFailed` wrapping the loader's error.
    pub fn on_model_loaded(&mut self, loaded: Result<Geometry>) -> Result<FrameResult> {
        let geometry = loaded.map_err(|e| {
            let message = match e {
                Error::LoadFailed(msg) => msg,
                other => other.to_string(),
            };
            Viewer::log_and_return_error(SOURCE, Error::LoadFailed(message))
        })?;

        let vertex_count = geometry.vertex_count();
        let material = Material {
            shininess: 0.9,
            ..Material::from_hex(crate::assembly::TABLE_COLOR)
        };
        self.scene.add_mesh(MODEL_NODE_NAME, geometry, material);

        let result = self.fit_to_scene();
        crate::viewer_info!(
            SOURCE,
            "model loaded ({} vertices), camera framed at distance {:.3}",
            vertex_count, result.distance
        );
        Ok(result)
    }

    /// Make a mesh the target of the visibility toggle.
    pub fn select_target(&mut self, key: SceneNodeKey) -> Result<()> {
        self.scene.set_target(key).map_err(|e| Viewer::log_and_return_error(SOURCE, e))
    }

    /// Keyboard input. Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: &Key) -> bool {
        match key {
            Key::Character(c) if c.as_str() == TOGGLE_TARGET_KEY => {
                match self.scene.toggle_target_visibility() {
                    Some(visible) => crate::viewer_debug!(SOURCE, "target visible: {}", visible),
                    None => crate::viewer_debug!(SOURCE, "no target to toggle"),
                }
                true
            }
            _ => false,
        }
    }

    /// Window resize. A zero-height (minimized) window keeps the old aspect.
    pub fn handle_resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            crate::viewer_trace!(SOURCE, "ignoring resize to {}x{}", size.width, size.height);
            return;
        }
        self.camera.aspect = size.width as f32 / size.height as f32;
    }

    /// Per-frame update: re-aim the camera and move the key light onto it.
    pub fn update(&mut self) {
        self.controls.update(&mut self.camera);

        let camera_position = self.camera.position;
        if let Some(Light::Directional { position, .. }) =
            self.scene.node_mut(self.key_light).and_then(|node| node.light_mut())
        {
            *position = camera_position;
        }
    }

    pub fn key_light(&self) -> SceneNodeKey {
        self.key_light
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
