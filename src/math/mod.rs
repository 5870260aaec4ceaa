//! Mathematical utilities for color comparison

/// sRGB to CIE XYZ to CIELAB conversion
pub mod lab;
