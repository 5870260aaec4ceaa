//! Photomosaic generation by average-color matching
//!
//! The reference image is cut into a grid of blocks, every dataset tile is
//! reduced to its mean color, and each block is replaced by the tile whose
//! color is closest under a configurable metric. Indexing, matching and
//! compositing all run on a bounded worker pool.

#![forbid(unsafe_code)]

/// Matching, compositing and pipeline orchestration
pub mod algorithm;
/// Color values, distance metrics and sampling
pub mod color;
/// Input/output operations, configuration and error handling
pub mod io;
/// Colorimetric conversions
pub mod math;
/// Dataset indexing and tile decode caching
pub mod palette;
/// Block grid and output canvas
pub mod spatial;

pub use algorithm::executor::{MosaicConfig, MosaicPipeline};
pub use algorithm::report::RunReport;
pub use io::error::{MosaicError, Result};
