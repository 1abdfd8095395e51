//! # vrcperf
//!
//! VRChat avatar performance ranking for 3D scene hierarchies.
//!
//! This is the umbrella crate that provides convenient access to all vrcperf
//! functionality. Use the individual crates for more granular control over
//! dependencies.
//!
//! ## Features
//!
//! - **Core**: Scene model (objects, meshes, armatures, collections)
//! - **Metrics**: Statistics aggregation and rank classification
//! - **I/O**: JSON and OBJ scene import
//! - **Panel**: Rank panels, tier icons and a text layout
//!
//! ## Quick Start
//!
//! ```rust
//! use vrcperf::prelude::*;
//!
//! let mut scene = Scene::new();
//! let mut mesh = MeshData::new();
//! mesh.add_polygon(vec![0, 1, 2, 3]);
//! mesh.add_material_slot(MaterialSlot::named("Skin"));
//! let cube = scene.add_object("Cube", ObjectKind::Mesh(mesh), None);
//!
//! let target = resolve(&scene, &Selection::object(cube)).unwrap();
//! let stats = aggregate(&scene, &target).unwrap();
//! assert_eq!(stats.total_tri_count, 2);
//! assert_eq!(stats.classify(MetricKind::Triangles, Platform::Mobile).tier, Tier::Excellent);
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables io and panel
//! - `io`: Scene file import
//! - `panel`: Presentation layer
//! - `all`: Everything

pub use vrcperf_core as core;
pub use vrcperf_metrics as metrics;

#[cfg(feature = "io")]
pub use vrcperf_io as io;

#[cfg(feature = "panel")]
pub use vrcperf_panel as panel;

/// Commonly used types and functions
pub mod prelude {
    pub use vrcperf_core::*;
    pub use vrcperf_metrics::*;

    #[cfg(feature = "io")]
    pub use vrcperf_io::{read_scene, write_scene, SceneReader, SceneWriter};

    #[cfg(feature = "panel")]
    pub use vrcperf_panel::*;
}
