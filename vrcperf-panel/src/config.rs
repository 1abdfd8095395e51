//! Panel configuration

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use vrcperf_core::{Error, Result};
use vrcperf_metrics::Platform;

/// Configuration for the rank panels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Directory holding the tier icon PNGs (None for generated icons)
    pub icons_dir: Option<PathBuf>,
    /// Platforms to show a panel for, in order
    pub platforms: Vec<Platform>,
    /// Show the active object's own share next to rig totals
    pub show_selected: bool,
    /// Sidebar tab the panels are listed under
    pub category: String,
    /// Edge length of generated icons in pixels
    pub icon_size: u32,
    /// Line width of the text layout
    pub text_width: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            icons_dir: None,
            platforms: vec![Platform::Desktop, Platform::Mobile],
            show_selected: true,
            category: "VRChat".to_string(),
            icon_size: 32,
            text_width: 40,
        }
    }
}

impl PanelConfig {
    /// Icon directory name relative to the extension's install location
    pub const ICONS_DIR: &'static str = "icons";

    /// Load a configuration from a JSON file; missing keys keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::Serialization(format!("{}: {}", path.as_ref().display(), e)))
    }

    /// Directories the bundled `icons/` directory may live in: next to the
    /// executable, then the working directory
    pub fn install_dirs() -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                dirs.push(dir.to_path_buf());
            }
        }
        if let Ok(cwd) = std::env::current_dir() {
            dirs.push(cwd);
        }
        dirs
    }

    /// Directory to load tier icons from
    ///
    /// A configured `icons_dir` always wins. Otherwise this is the first
    /// existing [`ICONS_DIR`](Self::ICONS_DIR) under `install_dirs`, or `None`
    /// when no icons ship.
    pub fn resolve_icons_dir<I, P>(&self, install_dirs: I) -> Option<PathBuf>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        if let Some(dir) = &self.icons_dir {
            return Some(dir.clone());
        }
        install_dirs
            .into_iter()
            .map(|base| base.as_ref().join(Self::ICONS_DIR))
            .find(|dir| dir.is_dir())
    }

    /// Use icons from a directory
    pub fn with_icons_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.icons_dir = Some(dir.into());
        self
    }

    /// Show panels only for the given platforms
    pub fn with_platforms(mut self, platforms: Vec<Platform>) -> Self {
        self.platforms = platforms;
        self
    }

    /// Toggle the selected-object share on rows
    pub fn with_show_selected(mut self, show_selected: bool) -> Self {
        self.show_selected = show_selected;
        self
    }

    /// Set the text layout line width
    pub fn with_text_width(mut self, width: usize) -> Self {
        self.text_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_shows_both_platforms() {
        let config = PanelConfig::default();
        assert_eq!(config.platforms, vec![Platform::Desktop, Platform::Mobile]);
        assert_eq!(config.category, "VRChat");
        assert!(config.icons_dir.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "platforms": ["mobile"], "text_width": 60 }"#;
        let config: PanelConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.platforms, vec![Platform::Mobile]);
        assert_eq!(config.text_width, 60);
        assert!(config.show_selected);
    }

    #[test]
    fn test_builders() {
        let config = PanelConfig::default()
            .with_icons_dir("assets/icons")
            .with_platforms(vec![Platform::Desktop])
            .with_show_selected(false);
        assert_eq!(config.icons_dir, Some(PathBuf::from("assets/icons")));
        assert_eq!(config.platforms, vec![Platform::Desktop]);
        assert!(!config.show_selected);
    }

    #[test]
    fn test_resolve_icons_dir() {
        let base = std::env::temp_dir().join(format!("vrcperf_install_{}", std::process::id()));
        let missing = base.join("missing");
        fs::create_dir_all(base.join(PanelConfig::ICONS_DIR)).unwrap();

        let config = PanelConfig::default();
        let found = config.resolve_icons_dir([&missing, &base]);
        let none = config.resolve_icons_dir([&missing]);
        let configured = config
            .with_icons_dir("custom/icons")
            .resolve_icons_dir([&base]);
        let _ = fs::remove_dir_all(&base);

        assert_eq!(found, Some(base.join("icons")));
        assert_eq!(none, None);
        assert_eq!(configured, Some(PathBuf::from("custom/icons")));
    }
}
