//! JSON scene documents

use crate::error::IoError;
use crate::{SceneReader, SceneWriter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use vrcperf_core::{Result, Scene};

pub struct JsonReader;
pub struct JsonWriter;

impl JsonReader {
    /// Parse a scene document from any reader
    pub fn read_scene_from<R: Read>(reader: R) -> Result<Scene> {
        let scene: Scene = serde_json::from_reader(reader).map_err(IoError::Document)?;
        log::debug!(
            "Read JSON scene with {} objects and {} collections",
            scene.object_count(),
            scene.collection_count()
        );
        Ok(scene)
    }
}

impl SceneReader for JsonReader {
    fn read_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| IoError::open(path, e))?;
        Self::read_scene_from(BufReader::new(file))
    }
}

impl JsonWriter {
    /// Write a pretty-printed scene document to any writer
    pub fn write_scene_to<W: Write>(scene: &Scene, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, scene).map_err(IoError::Encode)?;
        Ok(())
    }
}

impl SceneWriter for JsonWriter {
    fn write_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref()).map_err(IoError::Io)?);
        Self::write_scene_to(scene, &mut writer)?;
        writer.flush().map_err(IoError::Io)?;
        Ok(())
    }
}
