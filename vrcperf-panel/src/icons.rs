//! Tier icon resources
//!
//! An [`IconSet`] owns one decoded image per tier for as long as the panels
//! are registered. Handles stay valid until the set is released.

use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use vrcperf_core::{Error, Result};
use vrcperf_metrics::Tier;

/// Opaque handle the host uses to draw an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconHandle(pub u32);

/// Where an icon set came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    Directory(PathBuf),
    Generated,
}

/// Decoded icon of one tier
#[derive(Debug, Clone)]
pub struct TierIcon {
    pub tier: Tier,
    pub handle: IconHandle,
    pub image: RgbaImage,
}

/// One icon per tier, indexed in tier order
#[derive(Debug)]
pub struct IconSet {
    icons: Vec<TierIcon>,
    source: IconSource,
}

fn tier_color(tier: Tier) -> Rgba<u8> {
    match tier {
        Tier::Excellent => Rgba([46, 204, 113, 255]),
        Tier::Good => Rgba([52, 152, 219, 255]),
        Tier::Medium => Rgba([241, 196, 15, 255]),
        Tier::Poor => Rgba([230, 126, 34, 255]),
        Tier::VeryPoor => Rgba([231, 76, 60, 255]),
    }
}

fn handle_for(tier: Tier) -> IconHandle {
    // Zero stays free for "no icon".
    IconHandle(tier as u32 + 1)
}

impl IconSet {
    /// Load `<tier>.png` for every tier from a directory
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut icons = Vec::with_capacity(Tier::ALL.len());
        for tier in Tier::ALL {
            let path = dir.join(format!("{}.png", tier.icon_stem()));
            let image = image::open(&path)
                .map_err(|e| Error::Icon(format!("{}: {}", path.display(), e)))?
                .to_rgba8();
            icons.push(TierIcon {
                tier,
                handle: handle_for(tier),
                image,
            });
        }
        log::debug!("Loaded {} tier icons from {}", icons.len(), dir.display());
        Ok(Self {
            icons,
            source: IconSource::Directory(dir.to_path_buf()),
        })
    }

    /// Solid-color icons of `size` pixels, for when no icon files ship
    pub fn generated(size: u32) -> Self {
        let size = size.max(1);
        let icons = Tier::ALL
            .into_iter()
            .map(|tier| TierIcon {
                tier,
                handle: handle_for(tier),
                image: RgbaImage::from_pixel(size, size, tier_color(tier)),
            })
            .collect();
        Self {
            icons,
            source: IconSource::Generated,
        }
    }

    /// Handle of a tier's icon
    pub fn icon(&self, tier: Tier) -> IconHandle {
        self.icons[tier as usize].handle
    }

    /// Decoded image of a tier's icon
    pub fn image(&self, tier: Tier) -> &RgbaImage {
        &self.icons[tier as usize].image
    }

    /// Tier an icon handle belongs to
    pub fn tier_of(&self, handle: IconHandle) -> Option<Tier> {
        self.icons.iter().find(|icon| icon.handle == handle).map(|icon| icon.tier)
    }

    pub fn source(&self) -> &IconSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Release all icons; their handles must not be used afterwards
    pub fn release(self) {
        log::debug!("Releasing {} tier icons ({:?})", self.icons.len(), self.source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_generated_icons() {
        let icons = IconSet::generated(8);
        assert_eq!(icons.len(), Tier::ALL.len());
        assert_eq!(icons.source(), &IconSource::Generated);
        for tier in Tier::ALL {
            assert_eq!(icons.tier_of(icons.icon(tier)), Some(tier));
            assert_eq!(icons.image(tier).dimensions(), (8, 8));
        }
        assert_ne!(icons.icon(Tier::Excellent), icons.icon(Tier::VeryPoor));
        assert_eq!(icons.tier_of(IconHandle(0)), None);
    }

    #[test]
    fn test_load_from_directory() {
        let dir = std::env::temp_dir().join(format!("vrcperf_icons_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        for tier in Tier::ALL {
            RgbaImage::from_pixel(4, 2, tier_color(tier))
                .save(dir.join(format!("{}.png", tier.icon_stem())))
                .unwrap();
        }

        let icons = IconSet::load(&dir).unwrap();
        let _ = fs::remove_dir_all(&dir);

        assert_eq!(icons.source(), &IconSource::Directory(dir.clone()));
        assert_eq!(icons.image(Tier::Poor).dimensions(), (4, 2));
        assert_eq!(*icons.image(Tier::Good).get_pixel(0, 0), tier_color(Tier::Good));
        icons.release();
    }

    #[test]
    fn test_load_missing_icon_fails() {
        let dir = std::env::temp_dir().join(format!("vrcperf_no_icons_{}", std::process::id()));
        let result = IconSet::load(&dir);
        assert!(matches!(result, Err(Error::Icon(_))));
    }
}
