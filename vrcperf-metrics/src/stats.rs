//! Aggregated avatar statistics

use crate::classify::{classify, Classification};
use crate::tier::{MetricKind, Platform, Tier};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;
use vrcperf_core::{ArmatureData, MeshClass, MeshData, ObjectKind};

/// Counts accumulated over one traversal of a selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasuredStats {
    pub total_tri_count: u64,
    pub total_mat_count: u64,
    pub bone_count: u64,
    pub skinned_mesh_count: u64,
    pub basic_mesh_count: u64,
}

impl MeasuredStats {
    /// Create zeroed statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one mesh
    pub fn add_mesh(&mut self, mesh: &MeshData) {
        self.total_tri_count += mesh.triangle_count() as u64;
        self.total_mat_count += mesh.material_count() as u64;
        match mesh.class() {
            MeshClass::Skinned => self.skinned_mesh_count += 1,
            MeshClass::Basic => self.basic_mesh_count += 1,
        }
    }

    /// Accumulate one armature's bones
    pub fn add_armature(&mut self, armature: &ArmatureData) {
        self.bone_count += armature.bone_count() as u64;
    }

    /// Accumulate any object; kinds without stats are ignored
    pub fn add_object(&mut self, kind: &ObjectKind) {
        match kind {
            ObjectKind::Mesh(mesh) => self.add_mesh(mesh),
            ObjectKind::Armature(armature) => self.add_armature(armature),
            ObjectKind::Empty | ObjectKind::Other(_) => {}
        }
    }

    /// Total number of meshes, skinned and basic
    pub fn mesh_count(&self) -> u64 {
        self.skinned_mesh_count + self.basic_mesh_count
    }

    /// Check if nothing was counted
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Raw count of one metric
    pub fn get(&self, kind: MetricKind) -> u64 {
        match kind {
            MetricKind::Triangles => self.total_tri_count,
            MetricKind::SkinnedMeshCount => self.skinned_mesh_count,
            MetricKind::BasicMeshCount => self.basic_mesh_count,
            MetricKind::MaterialCount => self.total_mat_count,
            MetricKind::BoneCount => self.bone_count,
        }
    }

    /// Classify one metric on a platform
    pub fn classify(&self, kind: MetricKind, platform: Platform) -> Classification {
        classify(kind, self.get(kind), platform)
    }

    /// Overall rank: the worst tier over every metric
    pub fn overall_tier(&self, platform: Platform) -> Tier {
        MetricKind::ALL
            .into_iter()
            .map(|kind| self.classify(kind, platform).tier)
            .max()
            .unwrap_or(Tier::Excellent)
    }
}

impl AddAssign for MeasuredStats {
    fn add_assign(&mut self, other: Self) {
        self.total_tri_count += other.total_tri_count;
        self.total_mat_count += other.total_mat_count;
        self.bone_count += other.bone_count;
        self.skinned_mesh_count += other.skinned_mesh_count;
        self.basic_mesh_count += other.basic_mesh_count;
    }
}
