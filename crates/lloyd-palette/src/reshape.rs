//! Image to point-set conversion.

use image::RgbImage;

/// One RGB point per pixel, row-major (y outer, x inner).
///
/// Each coordinate is the raw channel sample in `0.0..=255.0`.
pub fn reshape(image: &RgbImage) -> Vec<[f64; 3]> {
    image
        .pixels()
        .map(|p| [f64::from(p[0]), f64::from(p[1]), f64::from(p[2])])
        .collect()
}
