//! Run-level summary of a mosaic build

use crate::io::error::MosaicError;
use crate::palette::SkippedTile;
use crate::palette::cache::CacheStats;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// A block whose tile could not be placed
///
/// The block keeps the reference pixels in the written output.
#[derive(Debug)]
pub struct BlockFailure {
    /// Block origin in pixels (x, y)
    pub position: (u32, u32),
    /// Tile the block was matched to
    pub tile: PathBuf,
    /// Why placement failed
    pub error: MosaicError,
}

/// Everything a caller needs to judge a finished run
#[derive(Debug)]
pub struct RunReport {
    /// Tiles that made it into the palette
    pub tiles_indexed: usize,
    /// Dataset files excluded from the palette
    pub skipped_tiles: Vec<SkippedTile>,
    /// Blocks in the grid
    pub blocks_total: usize,
    /// Blocks left unplaced, in row-major order
    pub failed_blocks: Vec<BlockFailure>,
    /// Decode cache effectiveness during compositing
    pub cache: CacheStats,
    /// Where the mosaic was written
    pub output: PathBuf,
    /// Wall time of the whole run
    pub elapsed: Duration,
}

impl RunReport {
    /// Whether every block received its tile
    pub fn is_complete(&self) -> bool {
        self.failed_blocks.is_empty()
    }

    /// Number of blocks that received their tile
    pub fn blocks_placed(&self) -> usize {
        self.blocks_total.saturating_sub(self.failed_blocks.len())
    }

    /// Fraction of blocks placed, 1.0 for an empty grid
    pub fn coverage(&self) -> f64 {
        if self.blocks_total == 0 {
            return 1.0;
        }
        self.blocks_placed() as f64 / self.blocks_total as f64
    }

    /// Emit the summary through the logging layer
    pub fn log_summary(&self) {
        info!(
            output = %self.output.display(),
            tiles = self.tiles_indexed,
            skipped_tiles = self.skipped_tiles.len(),
            blocks = self.blocks_total,
            cache_hits = self.cache.hits,
            cache_misses = self.cache.misses,
            elapsed_ms = u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX),
            "mosaic written"
        );

        if !self.is_complete() {
            warn!(
                failed = self.failed_blocks.len(),
                total = self.blocks_total,
                coverage = %format!("{:.1}%", self.coverage() * 100.0),
                "mosaic is incomplete, unplaced blocks show the reference image"
            );
        }
    }
}
