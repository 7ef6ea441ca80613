/// Scene — the viewer's set of meshes and lights.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys, plus a name
/// index so loaders and UI code can address parts by name.

use glam::Vec3;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use crate::error::{Error, Result};
use super::bounds::{AABB, Bounded};
use super::node::{Light, Material, Mesh, NodeContent, SceneNode, SceneNodeKey};
use super::geometry::Geometry;

/// Color applied to the current target while it is selected.
pub const TARGET_HIGHLIGHT: Vec3 = Vec3::new(1.0, 0.65, 0.0);

/// Currently targeted mesh and the color it had before being highlighted.
#[derive(Debug, Clone, Copy)]
struct Target {
    key: SceneNodeKey,
    original_color: Vec3,
}

#[derive(Debug, Default)]
pub struct Scene {
    nodes: SlotMap<SceneNodeKey, SceneNode>,
    names: FxHashMap<String, SceneNodeKey>,
    target: Option<Target>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a mesh built from `geometry`.
    ///
    /// A node with the same name keeps existing but is no longer reachable
    /// through `find`.
    pub fn add_mesh(&mut self, name: &str, geometry: Geometry, material: Material) -> SceneNodeKey {
        self.insert(SceneNode::new(name, NodeContent::Mesh(Mesh::new(geometry, material))))
    }

    pub fn add_light(&mut self, name: &str, light: Light) -> SceneNodeKey {
        self.insert(SceneNode::new(name, NodeContent::Light(light)))
    }

    fn insert(&mut self, node: SceneNode) -> SceneNodeKey {
        let name = node.name().to_string();
        let key = self.nodes.insert(node);
        self.names.insert(name, key);
        key
    }

    /// Remove a node. Clears the target if it pointed at this node.
    pub fn remove(&mut self, key: SceneNodeKey) -> Option<SceneNode> {
        let node = self.nodes.remove(key)?;
        if self.names.get(node.name()) == Some(&key) {
            self.names.remove(node.name());
        }
        if self.target.map(|t| t.key) == Some(key) {
            self.target = None;
        }
        Some(node)
    }

    pub fn node(&self, key: SceneNodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    pub fn node_mut(&mut self, key: SceneNodeKey) -> Option<&mut SceneNode> {
        self.nodes.get_mut(key)
    }

    /// Look up a node key by name.
    pub fn find(&self, name: &str) -> Option<SceneNodeKey> {
        self.names.get(name).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (SceneNodeKey, &SceneNode)> + '_ {
        self.nodes.iter()
    }

    /// Nodes exposing a bounding box, in the form the framer consumes.
    pub fn bounded_nodes(&self) -> impl Iterator<Item = &SceneNode> + '_ {
        self.nodes.values().filter(|node| node.bounding_box().is_some())
    }

    /// Union of every bounded node's box.
    pub fn bounding_box(&self) -> Option<AABB> {
        self.bounded_nodes()
            .filter_map(|node| node.bounding_box())
            .reduce(|acc, aabb| acc.union(&aabb))
    }

    // ===== TARGET =====

    pub fn target(&self) -> Option<SceneNodeKey> {
        self.target.map(|t| t.key)
    }

    /// Make `key` the target: restore the previous target's color, then
    /// highlight the new one.
    ///
    /// # Errors
    ///
    /// `InvalidObject` if `key` is stale or is not a mesh. The current
    /// target is left unchanged in that case.
    pub fn set_target(&mut self, key: SceneNodeKey) -> Result<()> {
        let original_color = self
            .nodes
            .get(key)
            .and_then(SceneNode::mesh)
            .map(|mesh| mesh.material.color)
            .ok_or_else(|| Error::InvalidObject("target must be an existing mesh".to_string()))?;

        if self.target.map(|t| t.key) == Some(key) {
            return Ok(());
        }
        self.clear_target();

        if let Some(mesh) = self.nodes.get_mut(key).and_then(SceneNode::mesh_mut) {
            mesh.material.color = TARGET_HIGHLIGHT;
        }
        self.target = Some(Target { key, original_color });
        Ok(())
    }

    /// Drop the target, restoring its original color.
    pub fn clear_target(&mut self) {
        if let Some(target) = self.target.take() {
            if let Some(mesh) = self.nodes.get_mut(target.key).and_then(SceneNode::mesh_mut) {
                mesh.material.color = target.original_color;
            }
        }
    }

    /// Flip the target's material visibility.
    ///
    /// Returns the new visibility, or `None` when there is no target.
    pub fn toggle_target_visibility(&mut self) -> Option<bool> {
        let key = self.target?.key;
        let mesh = self.nodes.get_mut(key).and_then(SceneNode::mesh_mut)?;
        mesh.material.visible = !mesh.material.visible;
        Some(mesh.material.visible)
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
