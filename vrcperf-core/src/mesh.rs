//! Mesh data structures and functionality

use crate::point::*;
use crate::scene::ObjectId;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A polygon face referencing mesh vertices by index
///
/// Faces are kept as n-gons, the way modeling hosts store them. Triangle
/// counts are estimated with a fan triangulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    pub vertices: Vec<usize>,
}

impl Polygon {
    /// Create a polygon from vertex indices
    pub fn new(vertices: Vec<usize>) -> Self {
        Self { vertices }
    }

    /// Get the number of vertices in the face
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles a fan triangulation of this face produces
    pub fn triangle_estimate(&self) -> usize {
        self.vertices.len().saturating_sub(2)
    }
}

impl From<Vec<usize>> for Polygon {
    fn from(vertices: Vec<usize>) -> Self {
        Self::new(vertices)
    }
}

/// A material slot on a mesh object; a slot may be left empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSlot {
    #[serde(default)]
    pub material: Option<String>,
}

impl MaterialSlot {
    /// Create a slot holding the named material
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self { material: Some(name.into()) }
    }

    /// Create an empty slot
    pub fn empty() -> Self {
        Self { material: None }
    }
}

/// Kind of a mesh modifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    /// Deforms the mesh by an armature's bones
    Armature {
        #[serde(default)]
        object: Option<ObjectId>,
    },
    Subdivision,
    Mirror,
    Other(String),
}

/// A modifier in a mesh object's modifier stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub name: String,
    pub kind: ModifierKind,
}

impl Modifier {
    /// Create an armature modifier bound to the given armature object
    pub fn armature<S: Into<String>>(name: S, object: Option<ObjectId>) -> Self {
        Self {
            name: name.into(),
            kind: ModifierKind::Armature { object },
        }
    }

    /// Create a modifier of any kind
    pub fn new<S: Into<String>>(name: S, kind: ModifierKind) -> Self {
        Self { name: name.into(), kind }
    }

    /// Check if this is an armature modifier
    pub fn is_armature(&self) -> bool {
        matches!(self.kind, ModifierKind::Armature { .. })
    }
}

/// Shape key (blend shape) data of a mesh
///
/// The first block is the basis; a mesh only carries real blend shapes
/// once there is more than one block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeKeys {
    pub key_blocks: Vec<String>,
}

impl ShapeKeys {
    /// Create shape keys from block names
    pub fn new(key_blocks: Vec<String>) -> Self {
        Self { key_blocks }
    }

    /// Number of key blocks, basis included
    pub fn len(&self) -> usize {
        self.key_blocks.len()
    }

    /// Check if there are no key blocks
    pub fn is_empty(&self) -> bool {
        self.key_blocks.is_empty()
    }
}

/// How a mesh counts towards the performance rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshClass {
    /// Deformed by a skeleton or blend shapes
    Skinned,
    /// Static geometry
    Basic,
}

/// Polygon mesh data attached to a mesh object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    #[serde(default)]
    pub vertices: Vec<Point3f>,
    #[serde(default)]
    pub polygons: Vec<Polygon>,
    #[serde(default)]
    pub material_slots: Vec<MaterialSlot>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub shape_keys: Option<ShapeKeys>,
}

impl MeshData {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.polygons.len()
    }

    /// Check if the mesh has no faces
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Add a vertex to the mesh
    pub fn add_vertex(&mut self, vertex: Point3f) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a polygon to the mesh
    pub fn add_polygon<P: Into<Polygon>>(&mut self, polygon: P) {
        self.polygons.push(polygon.into());
    }

    /// Add a material slot
    pub fn add_material_slot(&mut self, slot: MaterialSlot) {
        self.material_slots.push(slot);
    }

    /// Append a modifier to the modifier stack
    pub fn add_modifier(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }

    /// Set the shape keys
    pub fn set_shape_keys(&mut self, shape_keys: ShapeKeys) {
        self.shape_keys = Some(shape_keys);
    }

    /// Fan-triangulated triangle count summed over all faces
    pub fn triangle_count(&self) -> usize {
        self.polygons.iter().map(Polygon::triangle_estimate).sum()
    }

    /// Number of material slots, empty slots included
    pub fn material_count(&self) -> usize {
        self.material_slots.len()
    }

    /// Check if any modifier deforms this mesh by an armature
    pub fn has_armature_modifier(&self) -> bool {
        self.modifiers.iter().any(Modifier::is_armature)
    }

    /// Number of shape key blocks, zero without shape keys
    pub fn shape_key_count(&self) -> usize {
        self.shape_keys.as_ref().map_or(0, ShapeKeys::len)
    }

    /// Classify the mesh as skinned or basic
    pub fn class(&self) -> MeshClass {
        if self.has_armature_modifier() || self.shape_key_count() > 1 {
            MeshClass::Skinned
        } else {
            MeshClass::Basic
        }
    }

    /// Check that every polygon references an existing vertex
    ///
    /// Meshes without vertex positions are accepted as-is, since counting
    /// only needs face sizes.
    pub fn validate(&self) -> Result<()> {
        if self.vertices.is_empty() {
            return Ok(());
        }
        for (face, polygon) in self.polygons.iter().enumerate() {
            if let Some(&index) = polygon.vertices.iter().find(|&&i| i >= self.vertices.len()) {
                return Err(Error::InvalidData(format!(
                    "face {} references vertex {} but the mesh has {} vertices",
                    face,
                    index,
                    self.vertices.len()
                )));
            }
        }
        Ok(())
    }
}
