//! Scene hierarchy: objects, armatures and collections
//!
//! A [`Scene`] is an arena of objects and collections addressed by typed ids.
//! Parent links are the source of truth; child lists are rebuilt from them
//! whenever a scene is assembled or deserialized.

use crate::mesh::MeshData;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of an object in a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub usize);

/// Index of a collection in a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(pub usize);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object #{}", self.0)
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "collection #{}", self.0)
    }
}

/// A single bone of an armature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bone {
    pub name: String,
    /// Index of the parent bone within the same armature
    #[serde(default)]
    pub parent: Option<usize>,
}

impl Bone {
    pub fn new<S: Into<String>>(name: S, parent: Option<usize>) -> Self {
        Self { name: name.into(), parent }
    }
}

/// Skeleton data of an armature object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmatureData {
    #[serde(default)]
    pub bones: Vec<Bone>,
}

impl ArmatureData {
    /// Create an empty skeleton
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a skeleton from a list of bones
    pub fn from_bones(bones: Vec<Bone>) -> Self {
        Self { bones }
    }

    /// Add a bone and return its index
    pub fn add_bone<S: Into<String>>(&mut self, name: S, parent: Option<usize>) -> usize {
        let index = self.bones.len();
        self.bones.push(Bone::new(name, parent));
        index
    }

    /// Number of bones in the skeleton
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }
}

/// Object type and its type-specific data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Mesh(MeshData),
    Armature(ArmatureData),
    Empty,
    /// Any other host object type (camera, light, ...), by type name
    Other(String),
}

impl ObjectKind {
    /// Host-style type name of the object
    pub fn type_name(&self) -> &str {
        match self {
            ObjectKind::Mesh(_) => "MESH",
            ObjectKind::Armature(_) => "ARMATURE",
            ObjectKind::Empty => "EMPTY",
            ObjectKind::Other(name) => name,
        }
    }
}

/// An object in the scene hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
    #[serde(default)]
    pub parent: Option<ObjectId>,
    #[serde(skip)]
    pub children: Vec<ObjectId>,
}

impl SceneObject {
    /// Create an unparented object
    pub fn new<S: Into<String>>(name: S, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Mesh data if this is a mesh object
    pub fn as_mesh(&self) -> Option<&MeshData> {
        match &self.kind {
            ObjectKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    /// Skeleton data if this is an armature object
    pub fn as_armature(&self) -> Option<&ArmatureData> {
        match &self.kind {
            ObjectKind::Armature(armature) => Some(armature),
            _ => None,
        }
    }

    pub fn is_mesh(&self) -> bool {
        matches!(self.kind, ObjectKind::Mesh(_))
    }

    pub fn is_armature(&self) -> bool {
        matches!(self.kind, ObjectKind::Armature(_))
    }
}

/// A named group of objects, possibly nested
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    #[serde(default)]
    pub objects: Vec<ObjectId>,
    #[serde(default)]
    pub children: Vec<CollectionId>,
}

impl Collection {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            children: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
struct SceneDocument {
    #[serde(default)]
    objects: Vec<SceneObject>,
    #[serde(default)]
    collections: Vec<Collection>,
}

impl TryFrom<SceneDocument> for Scene {
    type Error = Error;

    fn try_from(document: SceneDocument) -> Result<Self> {
        Scene::from_parts(document.objects, document.collections)
    }
}

/// Arena of scene objects and collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SceneDocument")]
pub struct Scene {
    objects: Vec<SceneObject>,
    collections: Vec<Collection>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a scene from raw parts, validating every reference
    ///
    /// Child lists are rebuilt from the objects' parent links.
    pub fn from_parts(objects: Vec<SceneObject>, collections: Vec<Collection>) -> Result<Self> {
        let mut scene = Self { objects, collections };
        scene.validate()?;
        scene.relink_children();
        Ok(scene)
    }

    /// Add an object, optionally parented, and return its id
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not name an object of this scene.
    pub fn add_object<S: Into<String>>(
        &mut self,
        name: S,
        kind: ObjectKind,
        parent: Option<ObjectId>,
    ) -> ObjectId {
        let id = ObjectId(self.objects.len());
        let mut object = SceneObject::new(name, kind);
        object.parent = parent;
        if let Some(parent) = parent {
            self.objects[parent.0].children.push(id);
        }
        self.objects.push(object);
        id
    }

    /// Add a top-level collection and return its id
    pub fn add_collection<S: Into<String>>(&mut self, name: S) -> CollectionId {
        let id = CollectionId(self.collections.len());
        self.collections.push(Collection::new(name));
        id
    }

    /// Link an object into a collection
    ///
    /// # Panics
    ///
    /// Panics if `collection` does not name a collection of this scene.
    pub fn link_object(&mut self, collection: CollectionId, object: ObjectId) {
        let objects = &mut self.collections[collection.0].objects;
        if !objects.contains(&object) {
            objects.push(object);
        }
    }

    /// Get an object by id
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    /// Get a collection by id
    pub fn collection(&self, id: CollectionId) -> Option<&Collection> {
        self.collections.get(id.0)
    }

    /// Find the first object with the given name
    pub fn find_object(&self, name: &str) -> Option<ObjectId> {
        self.objects.iter().position(|o| o.name == name).map(ObjectId)
    }

    /// Find the first collection with the given name
    pub fn find_collection(&self, name: &str) -> Option<CollectionId> {
        self.collections.iter().position(|c| c.name == name).map(CollectionId)
    }

    /// Iterate over all objects with their ids
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().enumerate().map(|(i, o)| (ObjectId(i), o))
    }

    /// Iterate over all collections with their ids
    pub fn collections(&self) -> impl Iterator<Item = (CollectionId, &Collection)> {
        self.collections.iter().enumerate().map(|(i, c)| (CollectionId(i), c))
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.collections.is_empty()
    }

    fn validate(&self) -> Result<()> {
        let object_count = self.objects.len();
        for object in &self.objects {
            if let Some(parent) = object.parent.filter(|parent| parent.0 >= object_count) {
                return Err(Error::InvalidData(format!(
                    "object '{}' has unknown parent {}",
                    object.name, parent
                )));
            }
        }
        for (index, object) in self.objects.iter().enumerate() {
            // A parent chain longer than the object count must contain a cycle.
            let mut current = object.parent;
            let mut steps = 0;
            while let Some(parent) = current {
                if parent.0 == index || steps > object_count {
                    return Err(Error::InvalidData(format!(
                        "object '{}' is its own ancestor",
                        object.name
                    )));
                }
                current = self.objects[parent.0].parent;
                steps += 1;
            }
            if let ObjectKind::Mesh(mesh) = &object.kind {
                mesh.validate()
                    .map_err(|e| Error::InvalidData(format!("mesh '{}': {}", object.name, e)))?;
            }
        }
        for collection in &self.collections {
            if let Some(id) = collection.objects.iter().find(|id| id.0 >= object_count) {
                return Err(Error::InvalidData(format!(
                    "collection '{}' links unknown {}",
                    collection.name, id
                )));
            }
            if let Some(id) = collection.children.iter().find(|id| id.0 >= self.collections.len()) {
                return Err(Error::InvalidData(format!(
                    "collection '{}' nests unknown {}",
                    collection.name, id
                )));
            }
        }
        Ok(())
    }

    fn relink_children(&mut self) {
        for object in &mut self.objects {
            object.children.clear();
        }
        for index in 0..self.objects.len() {
            if let Some(parent) = self.objects[index].parent {
                self.objects[parent.0].children.push(ObjectId(index));
            }
        }
    }
}
