//! Core traits for vrcperf

use crate::scene::*;

/// Read-only view of a host scene graph
///
/// Aggregation only ever reads the scene through this trait, so a host
/// integration can expose its own storage without copying it into a
/// [`Scene`].
pub trait SceneGraph {
    /// Look up an object by id
    fn object(&self, id: ObjectId) -> Option<&SceneObject>;

    /// Look up a collection by id
    fn collection(&self, id: CollectionId) -> Option<&Collection>;

    /// Direct children of an object
    fn children(&self, id: ObjectId) -> &[ObjectId] {
        self.object(id).map_or(&[], |object| object.children.as_slice())
    }

    /// The object's parent, if it has one
    fn parent(&self, id: ObjectId) -> Option<ObjectId> {
        self.object(id).and_then(|object| object.parent)
    }

    /// All descendants of an object in depth-first pre-order
    fn descendants(&self, id: ObjectId) -> Vec<ObjectId> {
        let mut result = Vec::new();
        let mut stack: Vec<ObjectId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            result.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        result
    }
}

impl SceneGraph for Scene {
    fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        Scene::object(self, id)
    }

    fn collection(&self, id: CollectionId) -> Option<&Collection> {
        Scene::collection(self, id)
    }
}
