use glam::{Mat4, Vec3};
use super::*;

/// Camera at +Z looking at the origin, 90° vertical fov, square aspect.
fn create_test_frustum() -> Frustum {
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective_rh_gl(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0);
    Frustum::from_view_projection(&(proj * view))
}

// ============================================================================
// Plane extraction
// ============================================================================

#[test]
fn test_planes_are_normalized() {
    let frustum = create_test_frustum();

    for plane in frustum.planes {
        assert!((plane.truncate().length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn test_near_and_far_plane_distances() {
    let frustum = create_test_frustum();

    // Camera at z = 10: near plane at z = 9, far plane at z = -90
    assert!(frustum.signed_distance(PLANE_NEAR, Vec3::new(0.0, 0.0, 9.0)).abs() < 1e-3);
    assert!(frustum.signed_distance(PLANE_FAR, Vec3::new(0.0, 0.0, -90.0)).abs() < 1e-2);
}

// ============================================================================
// Point tests
// ============================================================================

#[test]
fn test_contains_point() {
    let frustum = create_test_frustum();

    assert!(frustum.contains_point(Vec3::ZERO));
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 9.5)));
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -95.0)));
    assert!(!frustum.contains_point(Vec3::new(15.0, 0.0, 0.0)));
}

// ============================================================================
// Sphere classification
// ============================================================================

#[test]
fn test_classify_sphere_inside() {
    let frustum = create_test_frustum();

    assert_eq!(frustum.classify_sphere(Vec3::ZERO, 1.0), FrustumTest::Inside);
}

#[test]
fn test_classify_sphere_partial() {
    let frustum = create_test_frustum();

    // 90° fov at distance 10: top plane passes through y = 10
    assert_eq!(frustum.classify_sphere(Vec3::new(0.0, 10.0, 0.0), 1.0), FrustumTest::Partial);
    assert!(frustum.intersects_sphere(Vec3::new(0.0, 10.0, 0.0), 1.0));
}

#[test]
fn test_classify_sphere_outside() {
    let frustum = create_test_frustum();

    assert_eq!(frustum.classify_sphere(Vec3::new(0.0, 30.0, 0.0), 1.0), FrustumTest::Outside);
    assert!(!frustum.intersects_sphere(Vec3::new(0.0, 0.0, 50.0), 5.0));
}
