//! Camera module — perspective camera, frustum, and orbit target.
//!
//! The camera is owned by the caller's `RenderContext`; the framer and the
//! orbit controls mutate it through `&mut` borrows.

mod camera;
mod frustum;
mod orbit_controls;

pub use camera::PerspectiveCamera;
pub use frustum::{
    Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use orbit_controls::OrbitControls;
