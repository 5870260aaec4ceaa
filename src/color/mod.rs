//! Color values, distance metrics and mean-color sampling
//!
//! Everything the matcher needs to compare a block against a tile lives here:
//! the 8-bit [`Color`] value, the [`ColorDistance`] capability with its two
//! metrics, and [`mean_color`] for reducing a pixel buffer to one color.

/// Color distance metrics in RGB and CIELAB space
pub mod metric;
/// 8-bit RGB color value type
pub mod rgb;
/// Mean color computation over pixel buffers
pub mod sampler;

pub use metric::{ColorDistance, ColorMetric, EuclideanRgb, PerceptualLab};
pub use rgb::Color;
pub use sampler::mean_color;
