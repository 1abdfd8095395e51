//! # vrcperf Metrics
//!
//! Performance statistics and rank classification for avatar hierarchies.
//!
//! This crate aggregates triangle, material, bone and mesh counts over a
//! scene selection and classifies each count against the VRChat performance
//! rank thresholds for desktop and mobile.

pub mod tier;
pub mod thresholds;
pub mod classify;
pub mod stats;
pub mod aggregate;
pub mod selection;
pub mod error;

// Re-export commonly used items
pub use tier::*;
pub use thresholds::*;
pub use classify::*;
pub use stats::*;
pub use aggregate::*;
pub use selection::*;
pub use error::*;
