use super::*;
use crate::scene::Bounded;

fn bounds_of<'a>(parts: &'a [TablePart], name: &str) -> &'a AABB {
    &parts.iter().find(|p| p.name == name).unwrap().bounds
}

#[test]
fn test_default_specs() {
    let specs = SlabTableSpecs::default();

    assert_eq!(specs.width, 42.0);
    assert_eq!(specs.length, 95.0);
    assert!(specs.split_top);
    assert_eq!(specs.thickness, 1.5);
    assert_eq!(specs.height, 30.0);
    assert_eq!(specs.leg_width(), 26.0);
    assert_eq!(specs.leg_base_inset(), 22.5);
}

#[test]
fn test_parts_order() {
    let names: Vec<String> = SlabTableSpecs::default().parts().into_iter().map(|p| p.name).collect();

    assert_eq!(
        names,
        ["top 0", "top 1", "leg base 0", "leg 0", "leg base 1", "leg 1", "spanner"]
    );
}

// ============================================================================
// Top
// ============================================================================

#[test]
fn test_split_top_halves_leave_the_gap() {
    let parts = SlabTableSpecs::default().parts();
    let side_0 = bounds_of(&parts, "top 0");
    let side_1 = bounds_of(&parts, "top 1");

    assert_eq!(side_0.min, Vec3::ZERO);
    assert_eq!(side_0.max, Vec3::new(95.0, 20.75, 1.5));
    assert_eq!(side_1.min, Vec3::new(0.0, 21.25, 0.0));
    assert_eq!(side_1.max, Vec3::new(95.0, 42.0, 1.5));
    assert_eq!(side_1.min.y - side_0.max.y, TOP_SPLIT);
}

#[test]
fn test_solid_top_is_one_slab() {
    let specs = SlabTableSpecs { split_top: false, ..SlabTableSpecs::default() };
    let parts = specs.parts();

    assert_eq!(parts.len(), 6);
    assert_eq!(parts[0].name, "top");
    assert_eq!(parts[0].bounds, AABB::new(Vec3::ZERO, Vec3::new(95.0, 42.0, 1.5)));
    assert!(parts.iter().all(|p| !p.name.starts_with("top ")));
}

// ============================================================================
// Legs and spanner
// ============================================================================

#[test]
fn test_leg_bases_rest_on_top() {
    let parts = SlabTableSpecs::default().parts();

    let base_0 = bounds_of(&parts, "leg base 0");
    assert_eq!(base_0.min, Vec3::new(22.5, 5.0, 1.5));
    assert_eq!(base_0.max, Vec3::new(27.0, 37.0, 3.0));

    let base_1 = bounds_of(&parts, "leg base 1");
    assert_eq!(base_1.min, Vec3::new(68.0, 5.0, 1.5));
    assert_eq!(base_1.max, Vec3::new(72.5, 37.0, 3.0));
}

#[test]
fn test_legs_stand_on_their_bases() {
    let parts = SlabTableSpecs::default().parts();

    let leg_0 = bounds_of(&parts, "leg 0");
    assert_eq!(leg_0.min, Vec3::new(24.0, 8.0, 3.0));
    assert_eq!(leg_0.max, Vec3::new(25.5, 34.0, 28.5));

    let leg_1 = bounds_of(&parts, "leg 1");
    assert_eq!(leg_1.min, Vec3::new(69.5, 8.0, 3.0));
    assert_eq!(leg_1.max, Vec3::new(71.0, 34.0, 28.5));

    // Centered on the leg length inset from each short edge
    assert_eq!(leg_0.center().x, 24.75);
    assert_eq!(95.0 - leg_1.center().x, 24.75);
}

#[test]
fn test_legs_are_symmetric_about_the_middle() {
    let specs = SlabTableSpecs::default();
    let parts = specs.parts();

    for name in ["leg base", "leg"] {
        let near = bounds_of(&parts, &format!("{} 0", name));
        let far = bounds_of(&parts, &format!("{} 1", name));
        assert_eq!(near.min.x, specs.length - far.max.x);
        assert_eq!(near.min.y, far.min.y);
    }
}

#[test]
fn test_spanner_joins_leg_centers() {
    let parts = SlabTableSpecs::default().parts();
    let spanner = bounds_of(&parts, "spanner");

    assert_eq!(spanner.min, Vec3::new(24.75, 20.25, 3.0));
    assert_eq!(spanner.max, Vec3::new(70.25, 21.75, 9.0));
    assert_eq!(spanner.size().x, 45.5);
    assert_eq!(spanner.center().y, 21.0);
}

// ============================================================================
// Scene
// ============================================================================

#[test]
fn test_populate_scene() {
    let mut scene = Scene::new();
    let keys = SlabTableSpecs::default().populate_scene(&mut scene).unwrap();

    assert_eq!(keys.len(), 7);
    assert_eq!(scene.find("spanner"), Some(keys[6]));

    let leg = scene.node(keys[3]).unwrap();
    assert_eq!(leg.bounding_box().unwrap().max, Vec3::new(25.5, 34.0, 28.5));

    let overall = scene.bounding_box().unwrap();
    assert_eq!(overall.min, Vec3::ZERO);
    assert_eq!(overall.max, Vec3::new(95.0, 42.0, 28.5));
}

#[test]
fn test_populate_scene_rejects_nan_dimension() {
    let mut scene = Scene::new();
    let specs = SlabTableSpecs { leg_length_inset: f32::NAN, ..SlabTableSpecs::default() };

    let result = specs.populate_scene(&mut scene);

    assert!(matches!(result, Err(crate::error::Error::InvalidGeometry(_))));
    assert!(scene.is_empty());
}
