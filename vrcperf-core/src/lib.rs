//! Core data structures and traits for vrcperf
//!
//! This crate provides the host-independent scene model that avatar
//! performance ranking works on: objects, meshes, armatures, collections
//! and the read-only [`SceneGraph`] trait that host adapters implement.

pub mod point;
pub mod mesh;
pub mod scene;
pub mod traits;
pub mod error;

pub use point::*;
pub use mesh::*;
pub use scene::*;
pub use traits::*;
pub use error::*;
