//! Performance rank panels
//!
//! This crate is the presentation layer on top of `vrcperf-metrics`:
//! - Labeled metric rows with tier icons
//! - Desktop and mobile rank panels
//! - Icon resources with an explicit load/unload lifecycle
//! - A plain-text layout for terminals and tests

pub mod config;
pub mod icons;
pub mod layout;
pub mod rows;
pub mod panel;
pub mod extension;

pub use config::*;
pub use icons::*;
pub use layout::*;
pub use rows::*;
pub use panel::*;
pub use extension::*;
