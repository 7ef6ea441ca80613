/// Scene node types: meshes and lights.

use glam::Vec3;
use slotmap::new_key_type;
use super::bounds::{AABB, Bounded};
use super::geometry::Geometry;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a SceneNode within a Scene.
    ///
    /// Keys remain valid even after other nodes are removed.
    pub struct SceneNodeKey;
}

/// Convert a packed `0xRRGGBB` color to RGB components in [0, 1].
pub fn rgb_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

// ===== MATERIAL =====

/// Phong-style surface parameters. `visible == false` hides the mesh
/// without removing it from the scene (or from framing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
    pub visible: bool,
}

impl Material {
    pub fn from_hex(color: u32) -> Self {
        Self { color: rgb_from_hex(color), ..Self::default() }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            specular: Vec3::ONE,
            shininess: 30.0,
            visible: true,
        }
    }
}

// ===== MESH =====

#[derive(Debug, Clone)]
pub struct Mesh {
    geometry: Geometry,
    bounding_box: AABB,
    pub material: Material,
}

impl Mesh {
    /// The bounding box is computed once here; geometry is immutable afterwards.
    pub fn new(geometry: Geometry, material: Material) -> Self {
        let bounding_box = geometry.compute_bounding_box();
        Self { geometry, bounding_box, material }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}

impl Bounded for Mesh {
    fn bounding_box(&self) -> Option<AABB> {
        Some(self.bounding_box)
    }
}

// ===== LIGHTS =====

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient { color: Vec3 },
    /// `position` is the direction the light shines from (towards the origin).
    Directional { color: Vec3, position: Vec3 },
    Point { color: Vec3, position: Vec3 },
}

// ===== NODE =====

#[derive(Debug, Clone)]
pub enum NodeContent {
    Mesh(Mesh),
    Light(Light),
}

#[derive(Debug, Clone)]
pub struct SceneNode {
    name: String,
    pub content: NodeContent,
}

impl SceneNode {
    pub(crate) fn new(name: impl Into<String>, content: NodeContent) -> Self {
        Self { name: name.into(), content }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mesh(&self) -> Option<&Mesh> {
        match &self.content {
            NodeContent::Mesh(mesh) => Some(mesh),
            NodeContent::Light(_) => None,
        }
    }

    pub fn mesh_mut(&mut self) -> Option<&mut Mesh> {
        match &mut self.content {
            NodeContent::Mesh(mesh) => Some(mesh),
            NodeContent::Light(_) => None,
        }
    }

    pub fn light(&self) -> Option<&Light> {
        match &self.content {
            NodeContent::Light(light) => Some(light),
            NodeContent::Mesh(_) => None,
        }
    }

    pub fn light_mut(&mut self) -> Option<&mut Light> {
        match &mut self.content {
            NodeContent::Light(light) => Some(light),
            NodeContent::Mesh(_) => None,
        }
    }
}

impl Bounded for SceneNode {
    fn bounding_box(&self) -> Option<AABB> {
        self.mesh().and_then(|mesh| mesh.bounding_box())
    }
}
