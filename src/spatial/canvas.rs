//! Output canvas with exclusive per-band write access
//!
//! Parallel placement never shares the canvas. [`MosaicCanvas::bands_mut`]
//! splits the pixel buffer into disjoint horizontal bands, one per block row,
//! and each band is a separate `&mut` borrow that a single worker owns.

use crate::io::error::{MosaicError, Result};
use crate::spatial::blocks::Block;
use image::RgbImage;

const CHANNELS: usize = 3;

/// Output image, the same size as the reference
#[derive(Clone, Debug)]
pub struct MosaicCanvas {
    image: RgbImage,
}

impl MosaicCanvas {
    /// Start from a copy of the reference, so unplaced blocks keep their source pixels
    pub fn from_reference(reference: &RgbImage) -> Self {
        Self {
            image: reference.clone(),
        }
    }

    /// Start from a black canvas
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the composed image
    pub const fn as_image(&self) -> &RgbImage {
        &self.image
    }

    /// Take ownership of the composed image
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Write `tile` over exactly the rectangle covered by `block`
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidParameter`] if the tile does not have the
    /// block's dimensions or the block lies outside the canvas
    pub fn place(&mut self, block: &Block, tile: &RgbImage) -> Result<()> {
        let width = self.width();
        let height = self.height();
        let mut band = CanvasBand {
            top: 0,
            width,
            height,
            data: &mut self.image,
        };
        band.place(block, tile)
    }

    /// Split the canvas into horizontal bands of `band_height` rows
    ///
    /// The last band is shorter when the height is not a multiple of
    /// `band_height`. With `band_height` equal to the block size, band `i`
    /// covers exactly block row `i`.
    pub fn bands_mut(&mut self, band_height: u32) -> Vec<CanvasBand<'_>> {
        let width = self.width();
        let stride = width as usize * CHANNELS;
        let band_height = band_height.max(1);
        if stride == 0 {
            return Vec::new();
        }

        self.image
            .chunks_mut(stride * band_height as usize)
            .enumerate()
            .map(|(index, data)| CanvasBand {
                top: index as u32 * band_height,
                width,
                height: (data.len() / stride) as u32,
                data,
            })
            .collect()
    }
}

/// Exclusive view over a run of full canvas rows
#[derive(Debug)]
pub struct CanvasBand<'a> {
    top: u32,
    width: u32,
    height: u32,
    data: &'a mut [u8],
}

impl CanvasBand<'_> {
    /// First canvas row covered by the band
    pub const fn top(&self) -> u32 {
        self.top
    }

    /// Number of rows in the band
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Whether `block` lies entirely inside this band
    pub const fn contains(&self, block: &Block) -> bool {
        block.y >= self.top
            && block.y as u64 + block.height as u64 <= self.top as u64 + self.height as u64
            && block.x as u64 + block.width as u64 <= self.width as u64
    }

    /// Write `tile` over exactly the rectangle covered by `block`
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidParameter`] if the tile does not have the
    /// block's dimensions or the block lies outside the band
    pub fn place(&mut self, block: &Block, tile: &RgbImage) -> Result<()> {
        if tile.dimensions() != (block.width, block.height) {
            return Err(MosaicError::InvalidParameter {
                parameter: "tile",
                value: format!("{}x{}", tile.width(), tile.height()),
                reason: format!("expected {}x{} to fill the block", block.width, block.height),
            });
        }
        if !self.contains(block) {
            return Err(MosaicError::InvalidParameter {
                parameter: "block",
                value: format!("({}, {})", block.x, block.y),
                reason: format!(
                    "outside rows {}..{} of a {} pixel wide canvas",
                    self.top,
                    self.top + self.height,
                    self.width
                ),
            });
        }

        let stride = self.width as usize * CHANNELS;
        let row_len = block.width as usize * CHANNELS;
        let left = block.x as usize * CHANNELS;
        let first_row = (block.y - self.top) as usize;

        for (offset, source) in tile.chunks_exact(row_len.max(1)).enumerate() {
            let start = (first_row + offset) * stride + left;
            if let Some(target) = self.data.get_mut(start..start + row_len) {
                target.copy_from_slice(source);
            }
        }

        Ok(())
    }
}
