//! Metric aggregation over scene selections
//!
//! Each [`AggregateTarget`] pairs a traversal mode with its root. Aggregation
//! either measures the whole target or fails with a [`SelectionError`]; it
//! never returns partial sums.

use crate::error::{SelectionError, SelectionResult};
use crate::stats::MeasuredStats;
use serde::{Deserialize, Serialize};
use vrcperf_core::{CollectionId, ObjectId, SceneGraph, SceneObject};

/// What to measure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateTarget {
    /// Only the object itself
    SingleObject(ObjectId),
    /// An armature's bones plus its direct mesh children
    ArmatureGroup(ObjectId),
    /// Every object linked directly into the collection
    Collection(CollectionId),
    /// Selected meshes that share one armature parent
    MultiSelect(Vec<ObjectId>),
    /// The object and all of its descendants
    Hierarchy(ObjectId),
}

fn lookup<S: SceneGraph + ?Sized>(scene: &S, id: ObjectId) -> SelectionResult<&SceneObject> {
    scene.object(id).ok_or(SelectionError::UnknownObject(id))
}

/// Ids in first-seen order, each once
pub(crate) fn unique_ids(ids: &[ObjectId]) -> Vec<ObjectId> {
    let mut unique = Vec::with_capacity(ids.len());
    for &id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

/// Measure a target in a scene
pub fn aggregate<S: SceneGraph + ?Sized>(
    scene: &S,
    target: &AggregateTarget,
) -> SelectionResult<MeasuredStats> {
    let mut stats = MeasuredStats::new();

    match target {
        AggregateTarget::SingleObject(id) => {
            stats.add_object(&lookup(scene, *id)?.kind);
        }
        AggregateTarget::ArmatureGroup(id) => {
            let armature = lookup(scene, *id)?;
            let skeleton = armature.as_armature().ok_or_else(|| {
                SelectionError::unsupported(format!("'{}' is not an armature", armature.name))
            })?;
            stats.add_armature(skeleton);
            for &child in scene.children(*id) {
                if let Some(mesh) = lookup(scene, child)?.as_mesh() {
                    stats.add_mesh(mesh);
                }
            }
        }
        AggregateTarget::Collection(id) => {
            let collection = scene
                .collection(*id)
                .ok_or(SelectionError::UnknownCollection(*id))?;
            for &member in &collection.objects {
                stats.add_object(&lookup(scene, member)?.kind);
            }
        }
        AggregateTarget::MultiSelect(ids) => {
            // Each selected mesh counts once, however often it is listed.
            let ids = unique_ids(ids);
            check_multi_select(scene, &ids)?;
            for id in ids {
                stats.add_object(&lookup(scene, id)?.kind);
            }
        }
        AggregateTarget::Hierarchy(id) => {
            stats.add_object(&lookup(scene, *id)?.kind);
            for descendant in scene.descendants(*id) {
                stats.add_object(&lookup(scene, descendant)?.kind);
            }
        }
    }

    log::debug!("Aggregated {:?}: {:?}", target, stats);
    Ok(stats)
}

/// Check that a multi-selection is meshes under one shared armature
fn check_multi_select<S: SceneGraph + ?Sized>(
    scene: &S,
    ids: &[ObjectId],
) -> SelectionResult<ObjectId> {
    let mut shared: Option<ObjectId> = None;

    for &id in ids {
        let object = lookup(scene, id)?;
        if !object.is_mesh() {
            return Err(SelectionError::unsupported(format!(
                "'{}' is not a mesh ({})",
                object.name,
                object.kind.type_name()
            )));
        }
        let parent = scene
            .parent(id)
            .filter(|&p| scene.object(p).is_some_and(SceneObject::is_armature))
            .ok_or_else(|| {
                SelectionError::unsupported(format!("'{}' has no armature parent", object.name))
            })?;
        match shared {
            None => shared = Some(parent),
            Some(expected) if expected != parent => {
                return Err(SelectionError::unsupported(
                    "selected meshes belong to different armatures",
                ));
            }
            Some(_) => {}
        }
    }

    shared.ok_or(SelectionError::NothingSelected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrcperf_core::{ArmatureData, MeshData, Modifier, ObjectKind, Scene};

    fn mesh(faces: usize, skinned: bool) -> ObjectKind {
        let mut mesh = MeshData::new();
        for _ in 0..faces {
            mesh.add_polygon(vec![0, 1, 2]);
        }
        if skinned {
            mesh.add_modifier(Modifier::armature("Armature", None));
        }
        ObjectKind::Mesh(mesh)
    }

    fn armature(bones: usize) -> ObjectKind {
        let mut data = ArmatureData::new();
        for i in 0..bones {
            data.add_bone(format!("Bone{}", i), None);
        }
        ObjectKind::Armature(data)
    }

    #[test]
    fn test_single_object_counts_only_itself() {
        let mut scene = Scene::new();
        let body = scene.add_object("Body", mesh(10, false), None);
        scene.add_object("Hat", mesh(5, false), Some(body));

        let stats = aggregate(&scene, &AggregateTarget::SingleObject(body)).unwrap();
        assert_eq!(stats.total_tri_count, 10);
        assert_eq!(stats.basic_mesh_count, 1);
    }

    #[test]
    fn test_armature_group_uses_direct_mesh_children() {
        let mut scene = Scene::new();
        let rig = scene.add_object("Armature", armature(3), None);
        let body = scene.add_object("Body", mesh(4, true), Some(rig));
        scene.add_object("Helper", ObjectKind::Empty, Some(rig));
        scene.add_object("Nested", mesh(100, false), Some(body));

        let stats = aggregate(&scene, &AggregateTarget::ArmatureGroup(rig)).unwrap();
        assert_eq!(stats.bone_count, 3);
        assert_eq!(stats.total_tri_count, 4);
        assert_eq!(stats.skinned_mesh_count, 1);
        assert_eq!(stats.basic_mesh_count, 0);
    }

    #[test]
    fn test_armature_group_requires_armature() {
        let mut scene = Scene::new();
        let body = scene.add_object("Body", mesh(1, false), None);
        let result = aggregate(&scene, &AggregateTarget::ArmatureGroup(body));
        assert!(matches!(result, Err(SelectionError::UnsupportedSelection(_))));
    }

    #[test]
    fn test_hierarchy_counts_descendants() {
        let mut scene = Scene::new();
        let root = scene.add_object("Avatar", ObjectKind::Empty, None);
        let rig = scene.add_object("Armature", armature(2), Some(root));
        scene.add_object("Body", mesh(4, true), Some(rig));
        scene.add_object("Prop", mesh(1, false), Some(root));

        let stats = aggregate(&scene, &AggregateTarget::Hierarchy(root)).unwrap();
        assert_eq!(stats.bone_count, 2);
        assert_eq!(stats.total_tri_count, 5);
        assert_eq!(stats.mesh_count(), 2);
    }

    #[test]
    fn test_collection_counts_members() {
        let mut scene = Scene::new();
        let coll = scene.add_collection("Avatar");
        let rig = scene.add_object("Armature", armature(5), None);
        let body = scene.add_object("Body", mesh(2, true), Some(rig));
        scene.add_object("Unlinked", mesh(50, false), None);
        scene.link_object(coll, rig);
        scene.link_object(coll, body);

        let stats = aggregate(&scene, &AggregateTarget::Collection(coll)).unwrap();
        assert_eq!(stats.bone_count, 5);
        assert_eq!(stats.total_tri_count, 2);
    }

    #[test]
    fn test_multi_select_shared_parent() {
        let mut scene = Scene::new();
        let rig = scene.add_object("Armature", armature(5), None);
        let body = scene.add_object("Body", mesh(2, true), Some(rig));
        let hair = scene.add_object("Hair", mesh(3, false), Some(rig));

        let stats = aggregate(&scene, &AggregateTarget::MultiSelect(vec![body, hair])).unwrap();
        assert_eq!(stats.total_tri_count, 5);
        assert_eq!(stats.bone_count, 0);
        assert_eq!(stats.skinned_mesh_count, 1);
        assert_eq!(stats.basic_mesh_count, 1);
    }

    #[test]
    fn test_multi_select_counts_repeated_mesh_once() {
        let mut scene = Scene::new();
        let rig = scene.add_object("Armature", armature(5), None);
        let body = scene.add_object("Body", mesh(2, true), Some(rig));
        let hair = scene.add_object("Hair", mesh(3, false), Some(rig));

        let target = AggregateTarget::MultiSelect(vec![body, hair, body]);
        let stats = aggregate(&scene, &target).unwrap();
        assert_eq!(stats.total_tri_count, 5);
        assert_eq!(stats.skinned_mesh_count, 1);
        assert_eq!(stats.basic_mesh_count, 1);
    }

    #[test]
    fn test_multi_select_rejects_different_armatures() {
        let mut scene = Scene::new();
        let rig_a = scene.add_object("ArmatureA", armature(1), None);
        let rig_b = scene.add_object("ArmatureB", armature(1), None);
        let body = scene.add_object("Body", mesh(2, true), Some(rig_a));
        let other = scene.add_object("Other", mesh(3, true), Some(rig_b));

        let result = aggregate(&scene, &AggregateTarget::MultiSelect(vec![body, other]));
        assert!(matches!(result, Err(SelectionError::UnsupportedSelection(_))));
    }

    #[test]
    fn test_multi_select_rejects_non_mesh_and_orphans() {
        let mut scene = Scene::new();
        let rig = scene.add_object("Armature", armature(1), None);
        let body = scene.add_object("Body", mesh(2, true), Some(rig));
        let loose = scene.add_object("Loose", mesh(2, false), None);

        let with_armature = aggregate(&scene, &AggregateTarget::MultiSelect(vec![body, rig]));
        assert_eq!(
            with_armature,
            Err(SelectionError::UnsupportedSelection(
                "'Armature' is not a mesh (ARMATURE)".to_string()
            ))
        );

        let with_orphan = aggregate(&scene, &AggregateTarget::MultiSelect(vec![body, loose]));
        assert!(matches!(with_orphan, Err(SelectionError::UnsupportedSelection(_))));
    }

    #[test]
    fn test_multi_select_empty_is_nothing_selected() {
        let scene = Scene::new();
        let result = aggregate(&scene, &AggregateTarget::MultiSelect(Vec::new()));
        assert_eq!(result, Err(SelectionError::NothingSelected));
    }

    #[test]
    fn test_unknown_ids() {
        let scene = Scene::new();
        assert_eq!(
            aggregate(&scene, &AggregateTarget::SingleObject(ObjectId(7))),
            Err(SelectionError::UnknownObject(ObjectId(7)))
        );
        assert_eq!(
            aggregate(&scene, &AggregateTarget::Collection(CollectionId(0))),
            Err(SelectionError::UnknownCollection(CollectionId(0)))
        );
    }
}
