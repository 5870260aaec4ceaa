//! Representative color of a pixel buffer

use crate::color::Color;
use crate::io::error::{MosaicError, Result};
use image::{GenericImageView, Rgb};

/// Arithmetic mean of each channel over every pixel of `view`
///
/// Channel means are truncated, not rounded.
///
/// # Errors
///
/// Returns [`MosaicError::EmptyBuffer`] if the view has no pixels
pub fn mean_color<I>(view: &I) -> Result<Color>
where
    I: GenericImageView<Pixel = Rgb<u8>>,
{
    let (width, height) = view.dimensions();
    let total = u64::from(width) * u64::from(height);
    if total == 0 {
        return Err(MosaicError::EmptyBuffer {
            operation: "mean color",
        });
    }

    let mut sums = [0u64; 3];
    for (_, _, Rgb(channels)) in view.pixels() {
        for (sum, channel) in sums.iter_mut().zip(channels) {
            *sum += u64::from(channel);
        }
    }

    let [r, g, b] = sums.map(|sum| u8::try_from(sum / total).unwrap_or(u8::MAX));
    Ok(Color::new(r, g, b))
}
