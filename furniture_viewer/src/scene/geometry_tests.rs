/// Tests for Geometry
///
/// These tests validate buffer validation, the cuboid generator and
/// bounding-box computation.

use super::*;
use crate::error::Error;
use glam::Vec3;

// ============================================================================
// from_positions
// ============================================================================

#[test]
fn test_from_positions_valid() {
    let geometry = Geometry::from_positions(&[0.0, 0.0, 0.0, 1.0, 2.0, 3.0]).unwrap();

    assert_eq!(geometry.vertex_count(), 2);
    assert_eq!(geometry.positions()[1], [1.0, 2.0, 3.0]);
}

#[test]
fn test_from_positions_truncated_triple() {
    let result = Geometry::from_positions(&[0.0, 1.0, 2.0, 3.0]);

    match result {
        Err(Error::InvalidGeometry(msg)) => assert!(msg.contains("4 floats")),
        other => panic!("expected InvalidGeometry, got {:?}", other),
    }
}

#[test]
fn test_from_positions_empty() {
    assert!(matches!(Geometry::from_positions(&[]), Err(Error::InvalidGeometry(_))));
}

#[test]
fn test_from_vertices_rejects_nan() {
    let result = Geometry::from_vertices(vec![[0.0, 0.0, 0.0], [f32::NAN, 1.0, 1.0]]);

    match result {
        Err(Error::InvalidGeometry(msg)) => assert!(msg.contains("vertex 1")),
        other => panic!("expected InvalidGeometry, got {:?}", other),
    }
}

#[test]
fn test_as_flat_matches_input() {
    let flat = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let geometry = Geometry::from_positions(&flat).unwrap();

    assert_eq!(geometry.as_flat(), &flat);
}

// ============================================================================
// cuboid
// ============================================================================

#[test]
fn test_cuboid_has_eight_distinct_corners() {
    let geometry = Geometry::cuboid(Vec3::ZERO, Vec3::new(3.0, 12.0, 28.5)).unwrap();

    assert_eq!(geometry.vertex_count(), 8);
    let mut corners: Vec<[f32; 3]> = geometry.positions().to_vec();
    corners.sort_by(|a, b| a.partial_cmp(b).unwrap());
    corners.dedup();
    assert_eq!(corners.len(), 8);
}

#[test]
fn test_cuboid_accepts_swapped_corners() {
    let geometry = Geometry::cuboid(Vec3::ONE, Vec3::ZERO).unwrap();
    let aabb = geometry.compute_bounding_box();

    assert_eq!(aabb.min, Vec3::ZERO);
    assert_eq!(aabb.max, Vec3::ONE);
}

#[test]
fn test_cuboid_rejects_nan_corner() {
    let result = Geometry::cuboid(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ONE);

    match result {
        Err(Error::InvalidGeometry(msg)) => assert!(msg.contains("not finite")),
        other => panic!("expected InvalidGeometry, got {:?}", other),
    }
}

#[test]
fn test_cuboid_rejects_infinite_corner() {
    let result = Geometry::cuboid(Vec3::ZERO, Vec3::new(1.0, f32::INFINITY, 1.0));

    assert!(matches!(result, Err(Error::InvalidGeometry(_))));
}

// ============================================================================
// compute_bounding_box
// ============================================================================

#[test]
fn test_bounding_box_is_tight() {
    let geometry = Geometry::from_positions(&[
        -1.0, 0.0, 2.0,
        3.0, -4.0, 0.5,
        0.0, 5.0, -6.0,
    ])
    .unwrap();
    let aabb = geometry.compute_bounding_box();

    assert_eq!(aabb.min, Vec3::new(-1.0, -4.0, -6.0));
    assert_eq!(aabb.max, Vec3::new(3.0, 5.0, 2.0));
}

#[test]
fn test_bounding_box_of_cuboid_roundtrips() {
    let min = Vec3::new(16.0, 20.25, 1.5);
    let max = Vec3::new(19.0, 32.25, 30.0);
    let aabb = Geometry::cuboid(min, max).unwrap().compute_bounding_box();

    assert_eq!(aabb.min, min);
    assert_eq!(aabb.max, max);
}
