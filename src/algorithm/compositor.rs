//! Tile placement onto the mosaic canvas

use crate::io::error::{MosaicError, Result};
use crate::io::image::{ResampleFilter, load_rgb, resample};
use crate::palette::{TileCache, TileEntry};
use crate::spatial::{Block, CanvasBand, MosaicCanvas};
use image::RgbImage;

/// Scales matched tiles to their blocks and writes them into the canvas
///
/// Owns the decode cache, so every block that picks the same tile shares a
/// single decoded buffer.
#[derive(Debug)]
pub struct Compositor {
    cache: TileCache,
    filter: ResampleFilter,
}

impl Compositor {
    /// Create a compositor with an empty cache
    pub fn new(filter: ResampleFilter, decode_attempts: usize) -> Self {
        Self {
            cache: TileCache::new(decode_attempts),
            filter,
        }
    }

    /// The shared decode cache
    pub const fn cache(&self) -> &TileCache {
        &self.cache
    }

    /// Decode (or reuse) `tile` and scale it to the block's dimensions
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::Compositing`] wrapping the decode or resample failure
    pub fn render(&self, block: &Block, tile: &TileEntry) -> Result<RgbImage> {
        self.cache
            .get_or_load(tile.path(), load_rgb)
            .and_then(|pixels| resample(&pixels, block.width, block.height, self.filter))
            .map_err(|source| compositing_error(block, tile, source))
    }

    /// Render `tile` and write it over `block` in a full canvas
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::Compositing`] if the tile cannot be rendered or written
    pub fn place(&self, canvas: &mut MosaicCanvas, block: &Block, tile: &TileEntry) -> Result<()> {
        let pixels = self.render(block, tile)?;
        canvas
            .place(block, &pixels)
            .map_err(|source| compositing_error(block, tile, source))
    }

    /// Write already rendered `pixels` for `block` into a band owned by the caller
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::Compositing`] if the pixels do not fit the block
    /// or the block does not lie inside the band
    pub fn write(
        band: &mut CanvasBand<'_>,
        block: &Block,
        tile: &TileEntry,
        pixels: &RgbImage,
    ) -> Result<()> {
        band.place(block, pixels)
            .map_err(|source| compositing_error(block, tile, source))
    }
}

fn compositing_error(block: &Block, tile: &TileEntry, source: MosaicError) -> MosaicError {
    match source {
        already @ MosaicError::Compositing { .. } => already,
        source => MosaicError::Compositing {
            position: block.position(),
            tile: tile.path().to_path_buf(),
            source: Box::new(source),
        },
    }
}
