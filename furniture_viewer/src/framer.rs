//! Scene auto-framing.
//!
//! Places the camera so that a loose bounding sphere of all objects fills
//! the vertical field of view, keeping the current viewing direction.
//!
//! The sphere is an estimate: each object contributes its box center and
//! half-diagonal, the aggregate center is the unweighted mean of the box
//! centers, and the radius is the farthest `|c_i - center| + r_i`. This
//! over-estimates on purpose; nothing gets cut off, but the fit is not tight.

use glam::Vec3;
use crate::camera::{OrbitControls, PerspectiveCamera};
use crate::config::{FramingConfig, DEFAULT_FALLBACK_DIRECTION};
use crate::scene::{BoundingSphere, Bounded};

/// Outcome of one framing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameResult {
    /// Aggregate sphere that was framed (radius already clamped to `min_radius`)
    pub sphere: BoundingSphere,
    /// Unit direction from `sphere.center` to the new camera position
    pub direction: Vec3,
    /// Camera distance from `sphere.center`
    pub distance: f32,
    /// Number of objects that contributed a bounding box
    pub object_count: usize,
}

/// Merge per-object spheres into one conservative sphere.
///
/// Objects without a bounding box are skipped. With no boxes at all the
/// result is centered at the origin with radius `min_radius`.
pub fn estimate_bounds<I>(objects: I, min_radius: f32) -> (BoundingSphere, usize)
where
    I: IntoIterator,
    I::Item: Bounded,
{
    let spheres: Vec<BoundingSphere> = objects
        .into_iter()
        .filter_map(|object| object.bounding_box())
        .map(|aabb| aabb.bounding_sphere())
        .collect();

    if spheres.is_empty() {
        return (BoundingSphere::new(Vec3::ZERO, min_radius), 0);
    }

    let center = spheres.iter().map(|s| s.center).sum::<Vec3>() / spheres.len() as f32;
    let radius = spheres
        .iter()
        .map(|s| s.center.distance(center) + s.radius)
        .fold(min_radius, f32::max);

    (BoundingSphere::new(center, radius), spheres.len())
}

/// Distance at which a sphere of `radius` exactly fills a vertical fov.
///
/// `fov_radians` must lie in (0, π); `PerspectiveCamera` guarantees this.
pub fn fit_distance(radius: f32, fov_radians: f32) -> f32 {
    radius / (fov_radians * 0.5).sin()
}

/// Frame `objects`: move the camera, rescale its clip planes, and re-center
/// the orbit target.
///
/// The direction from the orbit target to the camera is preserved; only the
/// distance changes, so framing the same objects again leaves the camera
/// where it is (up to rounding).
///
/// `config` is expected to pass `FramingConfig::validate`; `RenderContext`
/// checks it once at construction. A zero fallback direction still falls
/// back to `DEFAULT_FALLBACK_DIRECTION`.
pub fn frame<I>(
    objects: I,
    camera: &mut PerspectiveCamera,
    controls: &mut OrbitControls,
    config: &FramingConfig,
) -> FrameResult
where
    I: IntoIterator,
    I::Item: Bounded,
{
    let (sphere, object_count) = estimate_bounds(objects, config.min_radius);

    let offset = camera.position - controls.target;
    let direction = offset
        .try_normalize()
        .or_else(|| config.fallback_direction.try_normalize())
        .unwrap_or(DEFAULT_FALLBACK_DIRECTION);

    let distance = fit_distance(sphere.radius, camera.fov_radians());

    camera.position = sphere.center + direction * distance;
    camera.far = distance * config.far_scale;
    camera.near = camera.far * config.near_ratio;

    controls.set_target(sphere.center);
    camera.look_at(sphere.center);

    crate::viewer_debug!(
        "furniture::Framer",
        "framed {} object(s): center {:?}, radius {:.3}, distance {:.3}, near {:.4}, far {:.3}",
        object_count, sphere.center, sphere.radius, distance, camera.near, camera.far
    );

    FrameResult { sphere, direction, distance, object_count }
}

#[cfg(test)]
#[path = "framer_tests.rs"]
mod tests;
