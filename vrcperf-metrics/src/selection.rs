//! Turning the host's current selection into an aggregation target

use crate::aggregate::{unique_ids, AggregateTarget};
use crate::error::{SelectionError, SelectionResult};
use serde::{Deserialize, Serialize};
use vrcperf_core::{CollectionId, ObjectId, ObjectKind, SceneGraph};

/// The host's current selection state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Nothing,
    /// No objects selected, a collection is active
    ActiveCollection(CollectionId),
    /// One or more selected objects; `active` is the last one clicked
    Objects {
        active: ObjectId,
        selected: Vec<ObjectId>,
    },
}

impl Selection {
    /// A single selected object
    pub fn object(id: ObjectId) -> Self {
        Selection::Objects {
            active: id,
            selected: vec![id],
        }
    }

    /// Several selected objects, the first one active
    ///
    /// An empty list means nothing is selected.
    pub fn objects(ids: Vec<ObjectId>) -> Self {
        match ids.first().copied() {
            Some(active) => Selection::Objects { active, selected: ids },
            None => Selection::Nothing,
        }
    }
}

/// Decide what to measure for a selection
///
/// A selected mesh parented to an armature measures the whole rig, the way
/// avatars are usually built. Selecting several distinct objects measures
/// exactly those objects; an object listed twice is still one object.
pub fn resolve<S: SceneGraph + ?Sized>(
    scene: &S,
    selection: &Selection,
) -> SelectionResult<AggregateTarget> {
    let target = match selection {
        Selection::Nothing => return Err(SelectionError::NothingSelected),
        Selection::ActiveCollection(id) => {
            scene
                .collection(*id)
                .ok_or(SelectionError::UnknownCollection(*id))?;
            log::debug!("Collection selected: {}", id);
            AggregateTarget::Collection(*id)
        }
        Selection::Objects { active, selected } => {
            let selected = unique_ids(selected);
            if selected.len() > 1 {
                log::debug!("{} objects selected", selected.len());
                return Ok(AggregateTarget::MultiSelect(selected));
            }
            let object = scene
                .object(*active)
                .ok_or(SelectionError::UnknownObject(*active))?;
            log::debug!("Object selected: {}", object.name);
            let armature_parent = scene
                .parent(*active)
                .filter(|&p| scene.object(p).is_some_and(|parent| parent.is_armature()));
            if let Some(parent) = armature_parent {
                AggregateTarget::ArmatureGroup(parent)
            } else if object.is_armature() {
                AggregateTarget::ArmatureGroup(*active)
            } else if !scene.children(*active).is_empty() {
                AggregateTarget::Hierarchy(*active)
            } else {
                AggregateTarget::SingleObject(*active)
            }
        }
    };
    Ok(target)
}

/// Icon shown next to the selection name in the panel header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderIcon {
    Collection,
    Armature,
    Mesh,
    Empty,
    None,
}

impl HeaderIcon {
    /// Host icon identifier
    pub fn host_name(self) -> &'static str {
        match self {
            HeaderIcon::Collection => "OUTLINER_COLLECTION",
            HeaderIcon::Armature => "OUTLINER_OB_ARMATURE",
            HeaderIcon::Mesh => "MESH_CUBE",
            HeaderIcon::Empty => "OUTLINER_OB_EMPTY",
            HeaderIcon::None => "NONE",
        }
    }
}

/// Name and icon of the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionHeader {
    pub name: String,
    pub icon: HeaderIcon,
}

impl SelectionHeader {
    /// Header for the active collection or object
    ///
    /// Objects of other kinds get an empty header, as do unknown ids.
    pub fn for_selection<S: SceneGraph + ?Sized>(scene: &S, selection: &Selection) -> Option<Self> {
        match selection {
            Selection::Nothing => None,
            Selection::ActiveCollection(id) => scene.collection(*id).map(|c| SelectionHeader {
                name: c.name.clone(),
                icon: HeaderIcon::Collection,
            }),
            Selection::Objects { active, .. } => {
                let header = match scene.object(*active) {
                    Some(object) => {
                        let icon = match object.kind {
                            ObjectKind::Armature(_) => HeaderIcon::Armature,
                            ObjectKind::Mesh(_) => HeaderIcon::Mesh,
                            ObjectKind::Empty => HeaderIcon::Empty,
                            ObjectKind::Other(_) => HeaderIcon::None,
                        };
                        let name = if icon == HeaderIcon::None {
                            String::new()
                        } else {
                            object.name.clone()
                        };
                        SelectionHeader { name, icon }
                    }
                    None => SelectionHeader {
                        name: String::new(),
                        icon: HeaderIcon::None,
                    },
                };
                Some(header)
            }
        }
    }
}
