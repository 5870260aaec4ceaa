//! Tile file discovery

use crate::io::error::{MosaicError, Result};
use std::path::{Path, PathBuf};

/// Whether `path` carries one of `extensions`, ignoring ASCII case
pub fn has_supported_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// List the tile images directly inside `directory`
///
/// Subdirectories are not descended into. The result is sorted so that
/// palette construction, and with it tie-breaking, is reproducible.
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] if the directory or one of its entries
/// cannot be read
pub fn list_tile_files(directory: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let read_error = |source: std::io::Error| MosaicError::FileSystem {
        path: directory.to_path_buf(),
        operation: "list dataset",
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && has_supported_extension(&path, extensions) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
