//! Point type used by mesh vertex data

use nalgebra::Point3;

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;
