//! Extension lifecycle
//!
//! [`Extension::register`] loads the icon set and creates the configured
//! panels; [`Extension::unregister`] releases them again. Everything a panel
//! draws with is owned here, so nothing outlives the extension.

use crate::config::PanelConfig;
use crate::icons::IconSet;
use crate::layout::{PanelLayout, RowIcon};
use crate::panel::RankPanel;
use std::path::Path;
use vrcperf_core::{Result, SceneGraph};
use vrcperf_metrics::Selection;

/// The registered rank panels and their resources
#[derive(Debug)]
pub struct Extension {
    config: PanelConfig,
    icons: IconSet,
    panels: Vec<RankPanel>,
}

impl Extension {
    /// Load icons and register one panel per configured platform
    ///
    /// Without a configured icon directory the bundled `icons/` directory is
    /// looked up next to the executable, then in the working directory.
    pub fn register(config: PanelConfig) -> Result<Self> {
        let install_dirs = PanelConfig::install_dirs();
        Self::register_from(config, install_dirs.as_slice())
    }

    /// Like [`Extension::register`], looking for `icons/` under `install_dirs`
    pub fn register_from<P: AsRef<Path>>(config: PanelConfig, install_dirs: &[P]) -> Result<Self> {
        let icons = match config.resolve_icons_dir(install_dirs) {
            Some(dir) => IconSet::load(dir)?,
            None => {
                log::warn!(
                    "No {}/ directory installed, using generated tier icons",
                    PanelConfig::ICONS_DIR
                );
                IconSet::generated(config.icon_size)
            }
        };
        let panels: Vec<RankPanel> = config
            .platforms
            .iter()
            .copied()
            .map(RankPanel::new)
            .collect();
        for panel in &panels {
            log::info!(
                "Registered panel {} ({}) under '{}'",
                panel.id(),
                panel.label(),
                config.category
            );
        }
        Ok(Self { config, icons, panels })
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    pub fn panels(&self) -> &[RankPanel] {
        &self.panels
    }

    /// Draw one panel's body
    pub fn draw_panel<S, L>(
        &self,
        panel: &RankPanel,
        scene: &S,
        selection: &Selection,
        layout: &mut L,
    ) where
        S: SceneGraph + ?Sized,
        L: PanelLayout + ?Sized,
    {
        panel.draw(scene, selection, &self.icons, layout, self.config.show_selected);
    }

    /// Draw every registered panel with its title, separated
    pub fn draw_all<S, L>(&self, scene: &S, selection: &Selection, layout: &mut L)
    where
        S: SceneGraph + ?Sized,
        L: PanelLayout + ?Sized,
    {
        for (index, panel) in self.panels.iter().enumerate() {
            if index > 0 {
                layout.separator();
            }
            layout.label(panel.label(), RowIcon::None);
            self.draw_panel(panel, scene, selection, layout);
        }
    }

    /// Unregister the panels and release the icons
    pub fn unregister(self) {
        for panel in &self.panels {
            log::info!("Unregistered panel {}", panel.id());
        }
        self.icons.release();
    }
}
