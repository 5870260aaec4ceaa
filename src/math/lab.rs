//! Conversion from 8-bit sRGB to CIELAB
//!
//! Follows the usual chain: gamma-decode each channel to linear light,
//! project onto CIE XYZ with the sRGB primaries under D65, then apply the
//! CIE f(t) transform relative to the reference white. XYZ is scaled to
//! 0..100 so that L* lands in 0..100.

/// D65 reference white in XYZ, scaled so that Y = 100
pub const REFERENCE_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

const SRGB_LINEAR_THRESHOLD: f64 = 0.040_45;
const SRGB_LINEAR_SLOPE: f64 = 12.92;
const SRGB_GAMMA: f64 = 2.4;

const LAB_EPSILON: f64 = 0.008_856;
const LAB_KAPPA: f64 = 7.787;
const LAB_OFFSET: f64 = 16.0 / 116.0;

/// Gamma-decode an 8-bit sRGB channel to linear light in 0..=1
pub fn srgb_to_linear(channel: u8) -> f64 {
    let value = f64::from(channel) / 255.0;
    if value > SRGB_LINEAR_THRESHOLD {
        ((value + 0.055) / 1.055).powf(SRGB_GAMMA)
    } else {
        value / SRGB_LINEAR_SLOPE
    }
}

/// Project linear RGB onto CIE XYZ (D65), scaled to 0..100
pub fn linear_rgb_to_xyz([r, g, b]: [f64; 3]) -> [f64; 3] {
    let x = r.mul_add(0.412_456_4, g.mul_add(0.357_576_1, b * 0.180_437_5));
    let y = r.mul_add(0.212_672_9, g.mul_add(0.715_152_2, b * 0.072_175_0));
    let z = r.mul_add(0.019_333_9, g.mul_add(0.119_192_0, b * 0.950_304_1));

    [x * 100.0, y * 100.0, z * 100.0]
}

// Cube root above the epsilon, linear segment below it
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA.mul_add(t, LAB_OFFSET)
    }
}

/// Convert CIE XYZ (scaled to 0..100) to CIELAB relative to [`REFERENCE_WHITE`]
pub fn xyz_to_lab([x, y, z]: [f64; 3]) -> [f64; 3] {
    let [xn, yn, zn] = REFERENCE_WHITE;

    let fx = lab_f(x / xn);
    let fy = lab_f(y / yn);
    let fz = lab_f(z / zn);

    [
        116.0f64.mul_add(fy, -16.0),
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    ]
}

/// Convert 8-bit sRGB channels straight to (L*, a*, b*)
pub fn srgb_to_lab(channels: [u8; 3]) -> [f64; 3] {
    xyz_to_lab(linear_rgb_to_xyz(channels.map(srgb_to_linear)))
}
