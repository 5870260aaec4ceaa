//! Spatial layout of the mosaic
//!
//! This module contains:
//! - The block grid laid over the reference image
//! - The output canvas and its disjoint write bands

/// Block grid construction and block geometry
pub mod blocks;
/// Output canvas with exclusive per-band write access
pub mod canvas;

pub use blocks::{Block, BlockGrid};
pub use canvas::{CanvasBand, MosaicCanvas};
