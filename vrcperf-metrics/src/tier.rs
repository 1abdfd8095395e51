//! Rank tiers, target platforms and metric kinds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Performance rank, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    Good,
    Medium,
    Poor,
    VeryPoor,
}

impl Tier {
    /// All tiers from best to worst
    pub const ALL: [Tier; 5] = [
        Tier::Excellent,
        Tier::Good,
        Tier::Medium,
        Tier::Poor,
        Tier::VeryPoor,
    ];

    /// Display name
    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Medium => "Medium",
            Tier::Poor => "Poor",
            Tier::VeryPoor => "Very Poor",
        }
    }

    /// File stem of the tier's icon image
    pub fn icon_stem(self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Medium => "medium",
            Tier::Poor => "poor",
            Tier::VeryPoor => "verypoor",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Target platform of the rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// PC
    Desktop,
    /// Android and Quest
    Mobile,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Desktop, Platform::Mobile];

    /// Map the host's "is mobile" flag to a platform
    pub fn from_mobile(is_mobile: bool) -> Self {
        if is_mobile {
            Platform::Mobile
        } else {
            Platform::Desktop
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Desktop => "PC",
            Platform::Mobile => "Mobile",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pc" | "desktop" => Ok(Platform::Desktop),
            "mobile" | "android" | "quest" => Ok(Platform::Mobile),
            other => Err(format!("unknown platform '{}'", other)),
        }
    }
}

/// A measured performance metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Triangles,
    SkinnedMeshCount,
    BasicMeshCount,
    MaterialCount,
    BoneCount,
}

impl MetricKind {
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Triangles,
        MetricKind::SkinnedMeshCount,
        MetricKind::BasicMeshCount,
        MetricKind::MaterialCount,
        MetricKind::BoneCount,
    ];

    /// Display name of the metric
    pub fn name(self) -> &'static str {
        match self {
            MetricKind::Triangles => "Tris",
            MetricKind::SkinnedMeshCount => "Skinned Mesh",
            MetricKind::BasicMeshCount => "Basic Mesh",
            MetricKind::MaterialCount => "Materials",
            MetricKind::BoneCount => "Bones",
        }
    }

    /// Look a metric up by its display name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
