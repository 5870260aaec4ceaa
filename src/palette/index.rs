//! Tile color index
//!
//! Built once per run from the dataset listing and never mutated afterwards.
//! Entries are kept sorted by path, which fixes the scan order the matcher
//! uses and makes tie-breaking reproducible across runs.

use crate::color::{Color, mean_color};
use crate::io::error::{MosaicError, Result};
use crate::io::image::load_rgb;
use crate::io::progress::PhaseProgress;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A dataset tile and its representative color
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileEntry {
    path: PathBuf,
    color: Color,
}

impl TileEntry {
    /// Create an entry for a tile whose mean color is already known
    pub const fn new(path: PathBuf, color: Color) -> Self {
        Self { path, color }
    }

    /// Decode the tile at `path` and sample its mean color
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be decoded or has no pixels
    pub fn from_file(path: &Path) -> Result<Self> {
        let pixels = load_rgb(path)?;
        let color = mean_color(&pixels)?;
        Ok(Self::new(path.to_path_buf(), color))
    }

    /// Identity of the tile, also used as the decode cache key
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mean color of the tile
    pub const fn color(&self) -> Color {
        self.color
    }
}

/// A dataset file left out of the palette
#[derive(Debug)]
pub struct SkippedTile {
    /// File that could not be indexed
    pub path: PathBuf,
    /// Why it was excluded
    pub error: MosaicError,
}

/// Outcome of indexing a dataset
#[derive(Debug)]
pub struct PaletteBuild {
    /// Tiles that were indexed successfully
    pub palette: PaletteIndex,
    /// Tiles that were excluded, in path order
    pub skipped: Vec<SkippedTile>,
}

/// Immutable mapping from tile identity to representative color
#[derive(Clone, Debug, Default)]
pub struct PaletteIndex {
    entries: Vec<TileEntry>,
}

impl PaletteIndex {
    /// Build an index from precomputed entries, sorting them by path
    pub fn from_entries(mut entries: Vec<TileEntry>) -> Self {
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Self { entries }
    }

    /// Decode every tile and record its mean color
    ///
    /// Runs one task per tile on the current rayon pool. A tile that fails to
    /// decode is logged, reported in [`PaletteBuild::skipped`] and left out;
    /// it never aborts the build. An empty result is not an error here, the
    /// caller decides whether an empty palette is fatal.
    pub fn build(paths: &[PathBuf], progress: &PhaseProgress) -> PaletteBuild {
        let outcomes: Vec<(PathBuf, Result<TileEntry>)> = paths
            .par_iter()
            .map(|path| {
                let outcome = TileEntry::from_file(path);
                progress.inc();
                (path.clone(), outcome)
            })
            .collect();

        let mut entries = Vec::with_capacity(outcomes.len());
        let mut skipped = Vec::new();
        for (path, outcome) in outcomes {
            match outcome {
                Ok(entry) => entries.push(entry),
                Err(error) => {
                    warn!(tile = %path.display(), %error, "skipping unreadable tile");
                    skipped.push(SkippedTile { path, error });
                }
            }
        }

        PaletteBuild {
            palette: Self::from_entries(entries),
            skipped,
        }
    }

    /// Entries in scan order
    pub fn entries(&self) -> &[TileEntry] {
        &self.entries
    }

    /// Iterate entries in scan order
    pub fn iter(&self) -> std::slice::Iter<'_, TileEntry> {
        self.entries.iter()
    }

    /// Representative color of the tile at `path`, if indexed
    pub fn color_of(&self, path: &Path) -> Option<Color> {
        self.entries
            .binary_search_by(|entry| entry.path.as_path().cmp(path))
            .ok()
            .and_then(|index| self.entries.get(index))
            .map(TileEntry::color)
    }

    /// Number of indexed tiles
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tile was indexed
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a PaletteIndex {
    type Item = &'a TileEntry;
    type IntoIter = std::slice::Iter<'a, TileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
