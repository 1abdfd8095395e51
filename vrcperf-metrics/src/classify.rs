//! Threshold classification of raw metric counts

use crate::thresholds::threshold_table;
use crate::tier::{MetricKind, Platform, Tier};
use serde::{Deserialize, Serialize};

/// Result of classifying a count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub tier: Tier,
    /// Ceiling of the matched step, shown as the "max" next to the count
    ///
    /// Past the last finite ceiling this stays at the last finite ceiling
    /// rather than growing with the count.
    pub ceiling: u32,
}

impl Classification {
    /// Returned for metric names that have no threshold table
    pub const FALLBACK: Classification = Classification {
        tier: Tier::VeryPoor,
        ceiling: 0,
    };
}

/// Classify a count of `kind` on `platform`
///
/// The first ceiling at or above `count` decides the tier. Counts above every
/// ceiling rank [`Tier::VeryPoor`] with the last finite ceiling.
pub fn classify(kind: MetricKind, count: u64, platform: Platform) -> Classification {
    let table = threshold_table(kind, platform);
    match table.step_for(count) {
        Some(step) => Classification {
            tier: step.tier,
            ceiling: step.ceiling,
        },
        None => Classification {
            tier: Tier::VeryPoor,
            ceiling: table.last_ceiling(),
        },
    }
}

/// Classify using the host's mobile flag instead of a [`Platform`]
pub fn classify_for(kind: MetricKind, count: u64, is_mobile: bool) -> Classification {
    classify(kind, count, Platform::from_mobile(is_mobile))
}

/// Classify a metric given by display name, e.g. `"Tris"`
///
/// Unknown names yield [`Classification::FALLBACK`].
pub fn classify_named(name: &str, count: u64, platform: Platform) -> Classification {
    match MetricKind::from_name(name) {
        Some(kind) => classify(kind, count, platform),
        None => {
            log::warn!("No thresholds for metric '{}', ranking it as very poor", name);
            Classification::FALLBACK
        }
    }
}
