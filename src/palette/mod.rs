//! Dataset tiles: discovery, color indexing and decode caching

/// Thread-safe compute-if-absent cache of decoded tiles
pub mod cache;
/// Tile file discovery in the dataset directory
pub mod dataset;
/// Immutable tile-to-color index built in parallel
pub mod index;

pub use cache::TileCache;
pub use index::{PaletteBuild, PaletteIndex, SkippedTile, TileEntry};
