//! Partitioning of the reference image into a grid of blocks
//!
//! Blocks are laid out row-major. Every block is `block_size` square except
//! those in the last column and row, which are clipped to the image bounds.
//! Because rows are contiguous in the block list, a row of blocks maps onto
//! one horizontal band of the output canvas.

use crate::color::{Color, mean_color};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use image::RgbImage;
use image::imageops::crop_imm;
use rayon::prelude::*;

/// One grid cell of the reference image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Width in pixels, at most the block size
    pub width: u32,
    /// Height in pixels, at most the block size
    pub height: u32,
    /// Mean color of the reference pixels covered by the block
    pub color: Color,
}

impl Block {
    /// Top-left corner as (x, y)
    pub const fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// Number of pixels covered
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Row-major grid of blocks covering a reference image
#[derive(Clone, Debug)]
pub struct BlockGrid {
    block_size: u32,
    columns: usize,
    rows: usize,
    blocks: Vec<Block>,
}

impl BlockGrid {
    /// Divide `reference` into blocks of at most `block_size` pixels per side
    ///
    /// Block colors are sampled in parallel on the current rayon pool; the
    /// resulting order is deterministic regardless of scheduling.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `block_size` is zero
    /// - The reference image has no pixels
    pub fn divide(reference: &RgbImage, block_size: u32) -> Result<Self> {
        if block_size == 0 {
            return Err(invalid_parameter(
                "block_size",
                &block_size,
                &"must be a positive number of pixels",
            ));
        }

        let (width, height) = reference.dimensions();
        if width == 0 || height == 0 {
            return Err(MosaicError::EmptyBuffer {
                operation: "block grid",
            });
        }

        let columns = width.div_ceil(block_size) as usize;
        let rows = height.div_ceil(block_size) as usize;

        let blocks = (0..rows * columns)
            .into_par_iter()
            .map(|index| -> Result<Block> {
                let x = (index % columns) as u32 * block_size;
                let y = (index / columns) as u32 * block_size;
                let block_width = block_size.min(width - x);
                let block_height = block_size.min(height - y);

                let view = crop_imm(reference, x, y, block_width, block_height);
                let color = mean_color(&*view)?;

                Ok(Block {
                    x,
                    y,
                    width: block_width,
                    height: block_height,
                    color,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            block_size,
            columns,
            rows,
            blocks,
        })
    }

    /// Configured edge length of a full block
    pub const fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Number of block columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of block rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// All blocks in row-major order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Total number of blocks
    pub const fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the grid holds no blocks
    pub const fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks grouped by grid row, top to bottom
    pub fn block_rows(&self) -> std::slice::Chunks<'_, Block> {
        self.blocks.chunks(self.columns.max(1))
    }
}
