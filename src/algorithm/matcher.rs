//! Nearest-color tile lookup

use crate::color::{Color, ColorDistance};
use crate::io::error::{MosaicError, Result};
use crate::palette::{PaletteIndex, TileEntry};
use crate::spatial::Block;

/// Palette entry closest to `color` under `metric`, with its distance
///
/// Scans the palette in its fixed order and only replaces the running best
/// on a strictly smaller distance, so ties go to the first entry scanned.
/// Returns `None` only for an empty palette.
pub fn find_closest<'p, M>(
    color: Color,
    palette: &'p PaletteIndex,
    metric: &M,
) -> Option<(&'p TileEntry, f64)>
where
    M: ColorDistance + ?Sized,
{
    let mut best: Option<(&TileEntry, f64)> = None;
    for entry in palette {
        let distance = metric.distance(color, entry.color());
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((entry, distance));
        }
    }
    best
}

/// Tile that replaces `block`
///
/// # Errors
///
/// Returns [`MosaicError::NoMatchFound`] if the palette is empty
pub fn match_block<'p, M>(
    block: &Block,
    palette: &'p PaletteIndex,
    metric: &M,
) -> Result<&'p TileEntry>
where
    M: ColorDistance + ?Sized,
{
    let position = block.position();
    find_closest(block.color, palette, metric)
        .map(|(entry, _)| entry)
        .ok_or(MosaicError::NoMatchFound { position })
}
