#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Composites of a pair of images.
pub mod composite;

/// Utility functions for parallel row processing.
pub mod parallel;

/// Nearest-neighbor resampling through a transform.
pub mod resample;
