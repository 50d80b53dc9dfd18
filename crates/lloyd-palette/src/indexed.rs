//! Palette-indexed raster with bit-packed pixels.
//!
//! # Layout
//!
//! Each pixel stores its palette index in `bit_depth` bits, most significant
//! bits first within a byte. Every row starts on a byte boundary, so a row
//! occupies `ceil(width * bit_depth / 8)` bytes. This is the layout PNG uses
//! for indexed-color images.

use image::{Rgb, RgbImage};

use crate::color_table::ColorTable;
use crate::error::{PaletteError, PaletteResult};

/// Largest table an 8-bit index can address.
pub const MAX_COLORS: usize = 256;

/// Smallest of 1, 2, 4 or 8 bits that can address `colors` table entries.
pub fn bit_depth_for(colors: usize) -> u8 {
    match colors {
        0..=2 => 1,
        3..=4 => 2,
        5..=16 => 4,
        _ => 8,
    }
}

/// Image stored as a color table plus packed palette indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedImage {
    width: u32,
    height: u32,
    color_table: ColorTable,
    bit_depth: u8,
    data: Vec<u8>,
}

impl IndexedImage {
    /// Pack `indices` (row-major, one per pixel) into a new image.
    ///
    /// # Errors
    ///
    /// - `PaletteError::DimensionMismatch` if `indices.len() != width * height`
    /// - `PaletteError::IndexOutOfRange` if an index does not address `color_table`
    pub fn from_indices(
        width: u32,
        height: u32,
        color_table: ColorTable,
        indices: &[usize],
    ) -> PaletteResult<Self> {
        if color_table.len() > MAX_COLORS {
            return Err(PaletteError::InvalidPaletteSize {
                colors: color_table.len(),
            });
        }
        let expected = width as usize * height as usize;
        if indices.len() != expected {
            return Err(PaletteError::DimensionMismatch {
                expected,
                actual: indices.len(),
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= color_table.len()) {
            return Err(PaletteError::IndexOutOfRange {
                index,
                len: color_table.len(),
            });
        }

        let bit_depth = bit_depth_for(color_table.len());
        let stride = row_stride(width, bit_depth);
        let mut data = vec![0u8; stride * height as usize];

        if stride > 0 {
            for (row, chunk) in indices.chunks(width as usize).enumerate() {
                let line = &mut data[row * stride..(row + 1) * stride];
                for (x, &index) in chunk.iter().enumerate() {
                    let (byte, shift) = locate(x, bit_depth);
                    line[byte] |= (index as u8) << shift;
                }
            }
        }

        Ok(Self {
            width,
            height,
            color_table,
            bit_depth,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bits per stored index.
    #[inline]
    pub fn bit_depth(&self) -> u8 {
        self.bit_depth
    }

    /// The color table.
    #[inline]
    pub fn color_table(&self) -> &ColorTable {
        &self.color_table
    }

    /// Packed index rows.
    #[inline]
    pub fn packed(&self) -> &[u8] {
        &self.data
    }

    /// Bytes per packed row.
    #[inline]
    pub fn row_stride(&self) -> usize {
        row_stride(self.width, self.bit_depth)
    }

    /// Palette index of pixel `(x, y)`, or `None` outside the image.
    pub fn index_at(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let (byte, shift) = locate(x as usize, self.bit_depth);
        let mask = (1u16 << self.bit_depth) - 1;
        let packed = self.data[y as usize * self.row_stride() + byte];
        Some(((u16::from(packed) >> shift) & mask) as usize)
    }

    /// All indices, row-major.
    pub fn indices(&self) -> Vec<usize> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .filter_map(|(x, y)| self.index_at(x, y))
            .collect()
    }

    /// Expand every index through the color table.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            self.index_at(x, y)
                .and_then(|i| self.color_table.get(i))
                .unwrap_or(Rgb([0, 0, 0]))
        })
    }
}

#[inline]
fn row_stride(width: u32, bit_depth: u8) -> usize {
    (width as usize * bit_depth as usize).div_ceil(8)
}

/// Byte offset within a row and left shift for pixel `x`.
#[inline]
fn locate(x: usize, bit_depth: u8) -> (usize, u32) {
    let bit = x * bit_depth as usize;
    let shift = 8 - bit_depth as usize - bit % 8;
    (bit / 8, shift as u32)
}
