//! Indexed-color PNG output.
//!
//! [`IndexedImage`] already stores its rows the way PNG color type 3 wants
//! them (MSB-first, byte-aligned), so the packed buffer goes to the encoder
//! unchanged and the color table becomes the PLTE chunk.

use std::io::Write;

use png::{BitDepth, ColorType, Encoder, EncodingError};
use tracing::debug;

use crate::indexed::IndexedImage;

/// Write `image` to `writer` as an indexed-color PNG.
///
/// # Errors
///
/// Returns the encoder's error if the header or image data cannot be written.
pub fn write_indexed_png<W: Write>(image: &IndexedImage, writer: W) -> Result<(), EncodingError> {
    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(ColorType::Indexed);
    encoder.set_depth(png_depth(image.bit_depth()));
    encoder.set_palette(image.color_table().to_rgb_bytes());

    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.packed())?;
    writer.finish()?;

    debug!(
        width = image.width(),
        height = image.height(),
        bit_depth = image.bit_depth(),
        colors = image.color_table().len(),
        "wrote indexed png"
    );
    Ok(())
}

fn png_depth(bit_depth: u8) -> BitDepth {
    match bit_depth {
        1 => BitDepth::One,
        2 => BitDepth::Two,
        4 => BitDepth::Four,
        _ => BitDepth::Eight,
    }
}
