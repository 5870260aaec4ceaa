//! Image codec and resampling boundary
//!
//! Decoding, encoding and resizing are delegated to the `image` crate; the
//! rest of the pipeline only sees `RgbImage` buffers and [`MosaicError`]s.

use crate::io::error::{MosaicError, Result, WithPath};
use clap::ValueEnum;
use image::RgbImage;
use image::imageops::{self, FilterType};
use std::path::Path;

/// Interpolation used when scaling a tile to its block
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ResampleFilter {
    /// Nearest neighbour, fastest and blocky
    Nearest,
    /// Bilinear
    Triangle,
    /// Bicubic
    #[default]
    CatmullRom,
    /// Lanczos with window 3, sharpest and slowest
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => Self::Nearest,
            ResampleFilter::Triangle => Self::Triangle,
            ResampleFilter::CatmullRom => Self::CatmullRom,
            ResampleFilter::Lanczos3 => Self::Lanczos3,
        }
    }
}

/// Decode the image at `path` into 8-bit RGB
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] if the file cannot be opened or decoded
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).with_path(path)?;
    Ok(image.to_rgb8())
}

/// Scale `image` to exactly `width` x `height`, ignoring aspect ratio
///
/// # Errors
///
/// Returns [`MosaicError::EmptyBuffer`] if the source or target has no pixels
pub fn resample(
    image: &RgbImage,
    width: u32,
    height: u32,
    filter: ResampleFilter,
) -> Result<RgbImage> {
    if image.width() == 0 || image.height() == 0 || width == 0 || height == 0 {
        return Err(MosaicError::EmptyBuffer {
            operation: "resample",
        });
    }
    if image.dimensions() == (width, height) {
        return Ok(image.clone());
    }
    Ok(imageops::resize(image, width, height, filter.into()))
}

/// Encode `image` to `path`, picking the format from the file extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The format is unsupported or the image cannot be written
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
