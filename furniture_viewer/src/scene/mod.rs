//! Scene module
//!
//! Meshes and lights stored under stable keys, bounding volumes, and the
//! `Bounded` capability the framer queries.

mod bounds;
mod geometry;
mod node;
mod scene;

pub use bounds::{AABB, BoundingSphere, Bounded};
pub use geometry::Geometry;
pub use node::{
    Light, Material, Mesh, NodeContent, SceneNode, SceneNodeKey,
    rgb_from_hex,
};
pub use scene::{Scene, TARGET_HIGHLIGHT};
