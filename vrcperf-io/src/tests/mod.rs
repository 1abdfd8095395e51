//! Test modules for vrcperf-io
//!
//! File-based round trips through the format dispatch in the crate root.
