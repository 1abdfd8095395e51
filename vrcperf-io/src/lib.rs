//! I/O operations for avatar scenes
//!
//! This crate reads and writes [`Scene`]s so avatars can be ranked outside
//! of a modeling host: JSON scene documents carry the full hierarchy
//! (armatures, modifiers, shape keys), OBJ files provide plain geometry.

pub mod obj;
pub mod json;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::*;
pub use json::{JsonReader, JsonWriter};
pub use obj::ObjReader;

use std::path::Path;
use vrcperf_core::{Result, Scene};

/// Trait for reading scenes from files
pub trait SceneReader {
    fn read_scene<P: AsRef<Path>>(path: P) -> Result<Scene>;
}

/// Trait for writing scenes to files
pub trait SceneWriter {
    fn write_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()>;
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
}

/// Auto-detect format and read a scene
pub fn read_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    match extension(path).as_deref() {
        Some("json") => JsonReader::read_scene(path),
        Some("obj") => ObjReader::read_scene(path),
        other => Err(IoError::UnsupportedExtension {
            extension: other.unwrap_or_default().to_string(),
            expected: "json or obj",
        }
        .into()),
    }
}

/// Auto-detect format and write a scene
///
/// Only JSON preserves the hierarchy, so it is the only writable format.
pub fn write_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()> {
    let path = path.as_ref();
    match extension(path).as_deref() {
        Some("json") => JsonWriter::write_scene(scene, path),
        other => Err(IoError::UnsupportedExtension {
            extension: other.unwrap_or_default().to_string(),
            expected: "json",
        }
        .into()),
    }
}
