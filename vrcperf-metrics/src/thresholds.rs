//! VRChat avatar performance rank limits
//!
//! Every (metric, platform) pair has a fixed table of ascending ceilings.
//! A count at or below a ceiling earns that step's tier; anything past the
//! last ceiling is [`Tier::VeryPoor`]. Not every table has every tier.

use crate::tier::{MetricKind, Platform, Tier};

pub const MOBILE_TRIS_EXCELLENT: u32 = 7_500;
pub const MOBILE_TRIS_GOOD: u32 = 10_000;
pub const MOBILE_TRIS_MEDIUM: u32 = 15_000;
pub const MOBILE_TRIS_POOR: u32 = 20_000;

pub const PC_TRIS_EXCELLENT: u32 = 32_000;
pub const PC_TRIS_GOOD: u32 = 70_000;

pub const MOBILE_SKINNED_MESH_EXCELLENT: u32 = 1;
pub const MOBILE_SKINNED_MESH_MEDIUM: u32 = 2;

pub const PC_SKINNED_MESH_EXCELLENT: u32 = 1;
pub const PC_SKINNED_MESH_GOOD: u32 = 2;
pub const PC_SKINNED_MESH_MEDIUM: u32 = 8;
pub const PC_SKINNED_MESH_POOR: u32 = 16;

pub const MOBILE_BASIC_MESH_EXCELLENT: u32 = 1;
pub const MOBILE_BASIC_MESH_MEDIUM: u32 = 2;

pub const PC_BASIC_MESH_EXCELLENT: u32 = 4;
pub const PC_BASIC_MESH_GOOD: u32 = 8;
pub const PC_BASIC_MESH_MEDIUM: u32 = 16;
pub const PC_BASIC_MESH_POOR: u32 = 24;

pub const MOBILE_MATERIALS_EXCELLENT: u32 = 1;
pub const MOBILE_MATERIALS_MEDIUM: u32 = 2;
pub const MOBILE_MATERIALS_POOR: u32 = 4;

pub const PC_MATERIALS_EXCELLENT: u32 = 4;
pub const PC_MATERIALS_GOOD: u32 = 8;
pub const PC_MATERIALS_MEDIUM: u32 = 16;
pub const PC_MATERIALS_POOR: u32 = 32;

pub const MOBILE_BONES_EXCELLENT: u32 = 75;
pub const MOBILE_BONES_GOOD: u32 = 90;
pub const MOBILE_BONES_MEDIUM: u32 = 150;

pub const PC_BONES_EXCELLENT: u32 = 75;
pub const PC_BONES_GOOD: u32 = 150;
pub const PC_BONES_MEDIUM: u32 = 256;
pub const PC_BONES_POOR: u32 = 400;

/// One finite step of a threshold table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdStep {
    /// Highest count that still earns `tier`
    pub ceiling: u32,
    pub tier: Tier,
}

const fn step(ceiling: u32, tier: Tier) -> ThresholdStep {
    ThresholdStep { ceiling, tier }
}

/// Ascending ceilings for one metric on one platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdTable {
    steps: &'static [ThresholdStep],
}

impl ThresholdTable {
    const fn new(steps: &'static [ThresholdStep]) -> Self {
        Self { steps }
    }

    /// Finite steps in ascending ceiling order
    pub fn steps(&self) -> &'static [ThresholdStep] {
        self.steps
    }

    /// Largest finite ceiling; zero for an empty table
    pub fn last_ceiling(&self) -> u32 {
        self.steps.last().map_or(0, |s| s.ceiling)
    }

    /// Tiers this table can produce, best first, `VeryPoor` last
    pub fn tiers(&self) -> Vec<Tier> {
        let mut tiers: Vec<Tier> = self.steps.iter().map(|s| s.tier).collect();
        tiers.push(Tier::VeryPoor);
        tiers
    }

    /// First step whose ceiling is at least `count`
    pub fn step_for(&self, count: u64) -> Option<&'static ThresholdStep> {
        self.steps.iter().find(|s| count <= u64::from(s.ceiling))
    }
}

static MOBILE_TRIS: [ThresholdStep; 4] = [
    step(MOBILE_TRIS_EXCELLENT, Tier::Excellent),
    step(MOBILE_TRIS_GOOD, Tier::Good),
    step(MOBILE_TRIS_MEDIUM, Tier::Medium),
    step(MOBILE_TRIS_POOR, Tier::Poor),
];

static PC_TRIS: [ThresholdStep; 2] = [
    step(PC_TRIS_EXCELLENT, Tier::Excellent),
    step(PC_TRIS_GOOD, Tier::Good),
];

static MOBILE_SKINNED_MESH: [ThresholdStep; 2] = [
    step(MOBILE_SKINNED_MESH_EXCELLENT, Tier::Excellent),
    step(MOBILE_SKINNED_MESH_MEDIUM, Tier::Medium),
];

static PC_SKINNED_MESH: [ThresholdStep; 4] = [
    step(PC_SKINNED_MESH_EXCELLENT, Tier::Excellent),
    step(PC_SKINNED_MESH_GOOD, Tier::Good),
    step(PC_SKINNED_MESH_MEDIUM, Tier::Medium),
    step(PC_SKINNED_MESH_POOR, Tier::Poor),
];

static MOBILE_BASIC_MESH: [ThresholdStep; 2] = [
    step(MOBILE_BASIC_MESH_EXCELLENT, Tier::Excellent),
    step(MOBILE_BASIC_MESH_MEDIUM, Tier::Medium),
];

static PC_BASIC_MESH: [ThresholdStep; 4] = [
    step(PC_BASIC_MESH_EXCELLENT, Tier::Excellent),
    step(PC_BASIC_MESH_GOOD, Tier::Good),
    step(PC_BASIC_MESH_MEDIUM, Tier::Medium),
    step(PC_BASIC_MESH_POOR, Tier::Poor),
];

static MOBILE_MATERIALS: [ThresholdStep; 3] = [
    step(MOBILE_MATERIALS_EXCELLENT, Tier::Excellent),
    step(MOBILE_MATERIALS_MEDIUM, Tier::Medium),
    step(MOBILE_MATERIALS_POOR, Tier::Poor),
];

static PC_MATERIALS: [ThresholdStep; 4] = [
    step(PC_MATERIALS_EXCELLENT, Tier::Excellent),
    step(PC_MATERIALS_GOOD, Tier::Good),
    step(PC_MATERIALS_MEDIUM, Tier::Medium),
    step(PC_MATERIALS_POOR, Tier::Poor),
];

static MOBILE_BONES: [ThresholdStep; 3] = [
    step(MOBILE_BONES_EXCELLENT, Tier::Excellent),
    step(MOBILE_BONES_GOOD, Tier::Good),
    step(MOBILE_BONES_MEDIUM, Tier::Medium),
];

static PC_BONES: [ThresholdStep; 4] = [
    step(PC_BONES_EXCELLENT, Tier::Excellent),
    step(PC_BONES_GOOD, Tier::Good),
    step(PC_BONES_MEDIUM, Tier::Medium),
    step(PC_BONES_POOR, Tier::Poor),
];

/// Threshold table for a metric on a platform
pub fn threshold_table(kind: MetricKind, platform: Platform) -> ThresholdTable {
    let steps: &'static [ThresholdStep] = match (kind, platform) {
        (MetricKind::Triangles, Platform::Mobile) => &MOBILE_TRIS,
        (MetricKind::Triangles, Platform::Desktop) => &PC_TRIS,
        (MetricKind::SkinnedMeshCount, Platform::Mobile) => &MOBILE_SKINNED_MESH,
        (MetricKind::SkinnedMeshCount, Platform::Desktop) => &PC_SKINNED_MESH,
        (MetricKind::BasicMeshCount, Platform::Mobile) => &MOBILE_BASIC_MESH,
        (MetricKind::BasicMeshCount, Platform::Desktop) => &PC_BASIC_MESH,
        (MetricKind::MaterialCount, Platform::Mobile) => &MOBILE_MATERIALS,
        (MetricKind::MaterialCount, Platform::Desktop) => &PC_MATERIALS,
        (MetricKind::BoneCount, Platform::Mobile) => &MOBILE_BONES,
        (MetricKind::BoneCount, Platform::Desktop) => &PC_BONES,
    };
    ThresholdTable::new(steps)
}
