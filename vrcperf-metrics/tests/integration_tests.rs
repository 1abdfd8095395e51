//! Integration tests for vrcperf-metrics
//!
//! These tests build small avatar scenes and check that selection
//! resolution, aggregation and classification agree end to end.

use vrcperf_core::{
    ArmatureData, MaterialSlot, MeshData, Modifier, ObjectId, ObjectKind, Scene, ShapeKeys,
};
use vrcperf_metrics::*;

/// Create a mesh of `quads` quad faces with the given material slots
fn create_quad_mesh(quads: usize, materials: &[&str]) -> MeshData {
    let mut mesh = MeshData::new();
    for i in 0..quads {
        let base = i * 4;
        mesh.add_polygon(vec![base, base + 1, base + 2, base + 3]);
    }
    for name in materials {
        mesh.add_material_slot(MaterialSlot::named(*name));
    }
    mesh
}

/// Create a typical avatar: armature with body, hair and a static prop
fn create_test_avatar() -> (Scene, ObjectId, ObjectId, ObjectId) {
    let mut scene = Scene::new();
    let mut skeleton = ArmatureData::new();
    let hips = skeleton.add_bone("Hips", None);
    let spine = skeleton.add_bone("Spine", Some(hips));
    skeleton.add_bone("Head", Some(spine));
    let rig = scene.add_object("Armature", ObjectKind::Armature(skeleton), None);

    let mut body = create_quad_mesh(3000, &["Skin", "Clothes"]);
    body.add_modifier(Modifier::armature("Armature", Some(rig)));
    let body = scene.add_object("Body", ObjectKind::Mesh(body), Some(rig));

    let mut hair = create_quad_mesh(1000, &["Hair"]);
    hair.set_shape_keys(ShapeKeys::new(vec!["Basis".to_string(), "Wind".to_string()]));
    scene.add_object("Hair", ObjectKind::Mesh(hair), Some(rig));

    scene.add_object("Hat", ObjectKind::Mesh(create_quad_mesh(200, &["Hat"])), Some(rig));

    (scene, rig, body, ObjectId(3))
}

#[test]
fn test_classification_is_monotonic() {
    for kind in MetricKind::ALL {
        for platform in Platform::ALL {
            let table = threshold_table(kind, platform);
            let limit = u64::from(table.last_ceiling()) + 10;
            let mut previous = classify(kind, 0, platform);
            for count in 1..=limit {
                let current = classify(kind, count, platform);
                assert!(current.tier >= previous.tier, "{kind} {platform} at {count}");
                assert!(current.ceiling >= previous.ceiling, "{kind} {platform} at {count}");
                previous = current;
            }
        }
    }
}

#[test]
fn test_ceiling_bounds_count_until_very_poor() {
    for kind in MetricKind::ALL {
        for platform in Platform::ALL {
            let table = threshold_table(kind, platform);
            for count in 0..=u64::from(table.last_ceiling()) * 2 {
                let result = classify(kind, count, platform);
                if result.tier == Tier::VeryPoor {
                    assert!(count > u64::from(result.ceiling));
                    assert_eq!(result.ceiling, table.last_ceiling());
                } else {
                    assert!(count <= u64::from(result.ceiling));
                }
            }
        }
    }
}

#[test]
fn test_selecting_body_measures_whole_rig() {
    let (scene, rig, body, _) = create_test_avatar();

    let target = resolve(&scene, &Selection::object(body)).unwrap();
    assert_eq!(target, AggregateTarget::ArmatureGroup(rig));

    let stats = aggregate(&scene, &target).unwrap();
    assert_eq!(stats.total_tri_count, 8400);
    assert_eq!(stats.total_mat_count, 4);
    assert_eq!(stats.bone_count, 3);
    assert_eq!(stats.skinned_mesh_count, 2);
    assert_eq!(stats.basic_mesh_count, 1);

    let tris = stats.classify(MetricKind::Triangles, Platform::Mobile);
    assert_eq!(tris, Classification { tier: Tier::Good, ceiling: 10_000 });

    let tris = stats.classify(MetricKind::Triangles, Platform::Desktop);
    assert_eq!(tris, Classification { tier: Tier::Excellent, ceiling: 32_000 });

    assert_eq!(stats.overall_tier(Platform::Desktop), Tier::Good);
    assert_eq!(stats.overall_tier(Platform::Mobile), Tier::Poor);
}

#[test]
fn test_multi_select_subset() {
    let (scene, _, body, hat) = create_test_avatar();

    let target = resolve(&scene, &Selection::objects(vec![body, hat])).unwrap();
    let stats = aggregate(&scene, &target).unwrap();
    assert_eq!(stats.total_tri_count, 6400);
    assert_eq!(stats.total_mat_count, 3);
    assert_eq!(stats.bone_count, 0);
}

#[test]
fn test_repeated_selection_counts_once() {
    let (scene, _, body, hat) = create_test_avatar();

    let target = resolve(&scene, &Selection::objects(vec![body, hat, hat, body])).unwrap();
    assert_eq!(target, AggregateTarget::MultiSelect(vec![body, hat]));
    let stats = aggregate(&scene, &target).unwrap();
    assert_eq!(stats.total_tri_count, 6400);
    assert_eq!(stats.mesh_count(), 2);

    let stats = aggregate(&scene, &AggregateTarget::MultiSelect(vec![hat, hat])).unwrap();
    assert_eq!(stats.total_tri_count, 400);
    assert_eq!(stats.basic_mesh_count, 1);
}

#[test]
fn test_multi_select_across_rigs_never_sums() {
    let (mut scene, _, body, _) = create_test_avatar();
    let other_rig = scene.add_object("OtherRig", ObjectKind::Armature(ArmatureData::new()), None);
    let other = scene.add_object(
        "Other",
        ObjectKind::Mesh(create_quad_mesh(10, &[])),
        Some(other_rig),
    );

    let target = resolve(&scene, &Selection::objects(vec![body, other])).unwrap();
    let error = aggregate(&scene, &target).unwrap_err();
    assert!(matches!(error, SelectionError::UnsupportedSelection(_)));
    assert!(error.user_message().starts_with("Unsupported selection"));
}

#[test]
fn test_collection_of_avatar() {
    let (mut scene, rig, body, hat) = create_test_avatar();
    let coll = scene.add_collection("Avatar");
    for id in [rig, body, hat] {
        scene.link_object(coll, id);
    }

    let target = resolve(&scene, &Selection::ActiveCollection(coll)).unwrap();
    let stats = aggregate(&scene, &target).unwrap();
    assert_eq!(stats.bone_count, 3);
    assert_eq!(stats.total_tri_count, 6400);
    assert_eq!(stats.mesh_count(), 2);
}
