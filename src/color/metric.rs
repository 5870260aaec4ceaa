//! Pluggable color distance metrics
//!
//! The matcher only sees the [`ColorDistance`] capability. [`ColorMetric`] is
//! the configuration-selected variant and dispatches to one of the concrete
//! metrics, so swapping metrics never touches pipeline code.

use crate::color::Color;
use crate::math::lab::srgb_to_lab;
use clap::ValueEnum;
use std::fmt;

/// Distance between two colors
///
/// Implementations must be pure, symmetric and return zero for identical colors.
pub trait ColorDistance: Send + Sync {
    /// Non-negative distance between `a` and `b`
    fn distance(&self, a: Color, b: Color) -> f64;
}

/// Straight-line distance between channel triples in RGB space
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanRgb;

impl ColorDistance for EuclideanRgb {
    fn distance(&self, a: Color, b: Color) -> f64 {
        let dr = f64::from(a.r) - f64::from(b.r);
        let dg = f64::from(a.g) - f64::from(b.g);
        let db = f64::from(a.b) - f64::from(b.b);

        dr.mul_add(dr, dg.mul_add(dg, db * db)).sqrt()
    }
}

/// Euclidean distance in CIELAB space (CIE76 delta E)
#[derive(Clone, Copy, Debug, Default)]
pub struct PerceptualLab;

impl ColorDistance for PerceptualLab {
    fn distance(&self, a: Color, b: Color) -> f64 {
        let [l1, a1, b1] = srgb_to_lab(a.channels());
        let [l2, a2, b2] = srgb_to_lab(b.channels());

        let dl = l1 - l2;
        let da = a1 - a2;
        let db = b1 - b2;

        dl.mul_add(dl, da.mul_add(da, db * db)).sqrt()
    }
}

/// Metric selected on the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMetric {
    /// Euclidean distance over raw RGB channels
    #[default]
    EuclideanRgb,
    /// Euclidean distance in CIELAB space
    PerceptualLab,
}

impl ColorDistance for ColorMetric {
    fn distance(&self, a: Color, b: Color) -> f64 {
        match self {
            Self::EuclideanRgb => EuclideanRgb.distance(a, b),
            Self::PerceptualLab => PerceptualLab.distance(a, b),
        }
    }
}

impl fmt::Display for ColorMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EuclideanRgb => "euclidean-rgb",
            Self::PerceptualLab => "perceptual-lab",
        };
        f.write_str(name)
    }
}
