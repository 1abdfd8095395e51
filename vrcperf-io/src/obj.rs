//! OBJ format support
//!
//! Every OBJ object becomes one mesh object. Faces are kept as n-gons so the
//! triangle estimate matches what a modeling host would report, and each
//! distinct `usemtl` name of an object becomes one material slot.

use crate::error::IoError;
use crate::SceneReader;
use ::obj::{ObjData, ObjMaterial};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use vrcperf_core::{MaterialSlot, MeshData, ObjectKind, Point3f, Polygon, Result, Scene};

pub struct ObjReader;

impl ObjReader {
    /// Read OBJ data from any reader into a scene
    ///
    /// All imported objects are linked into a collection named `collection`.
    pub fn read_scene_from<R: Read>(reader: R, collection: &str) -> Result<Scene> {
        let data = ObjData::load_buf(reader).map_err(|e| IoError::Obj(e.to_string()))?;
        Ok(scene_from_obj_data(&data, collection))
    }
}

impl SceneReader for ObjReader {
    fn read_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| IoError::open(path, e))?;
        let collection = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("OBJ");
        Self::read_scene_from(BufReader::new(file), collection)
    }
}

fn material_name(material: &ObjMaterial) -> &str {
    match material {
        ObjMaterial::Ref(name) => name,
        ObjMaterial::Mtl(material) => &material.name,
    }
}

fn scene_from_obj_data(data: &ObjData, collection: &str) -> Scene {
    let mut scene = Scene::new();
    let collection = scene.add_collection(collection);

    for object in &data.objects {
        let mut mesh = MeshData::new();
        // OBJ indices are file-global; remap them to per-object vertices.
        let mut remap: HashMap<usize, usize> = HashMap::new();
        let mut materials: Vec<&str> = Vec::new();

        for group in &object.groups {
            if let Some(name) = group.material.as_ref().map(material_name) {
                if !materials.contains(&name) {
                    materials.push(name);
                }
            }
            for poly in &group.polys {
                let vertices = poly
                    .0
                    .iter()
                    .map(|tuple| {
                        let global = tuple.0;
                        *remap.entry(global).or_insert_with(|| {
                            let [x, y, z] = data.position.get(global).copied().unwrap_or([0.0; 3]);
                            mesh.add_vertex(Point3f::new(x, y, z))
                        })
                    })
                    .collect();
                mesh.add_polygon(Polygon::new(vertices));
            }
        }

        if mesh.is_empty() {
            log::debug!("Skipping OBJ object '{}' without faces", object.name);
            continue;
        }
        for name in materials {
            mesh.add_material_slot(MaterialSlot::named(name));
        }

        let id = scene.add_object(object.name.clone(), ObjectKind::Mesh(mesh), None);
        scene.link_object(collection, id);
    }

    log::debug!("Imported {} OBJ objects", scene.object_count());
    scene
}
