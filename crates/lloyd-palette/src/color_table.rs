//! Color table built from cluster centers.

use image::Rgb;
use serde::Serialize;

/// Ordered list of palette colors; entry `i` is the color of palette index `i`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorTable {
    entries: Vec<[u8; 3]>,
}

impl ColorTable {
    /// Round each center to the nearest integer per channel, clamped to 0..=255.
    pub fn from_centers(centers: &[[f64; 3]]) -> Self {
        let entries = centers
            .iter()
            .map(|c| [to_channel(c[0]), to_channel(c[1]), to_channel(c[2])])
            .collect();
        Self { entries }
    }

    /// Table from explicit colors.
    pub fn from_colors(entries: Vec<[u8; 3]>) -> Self {
        Self { entries }
    }

    /// Color at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgb<u8>> {
        self.entries.get(index).map(|&c| Rgb(c))
    }

    /// Number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Colors in index order.
    pub fn iter(&self) -> impl Iterator<Item = Rgb<u8>> + '_ {
        self.entries.iter().map(|&c| Rgb(c))
    }

    /// Raw `[r, g, b]` entries.
    pub fn as_slice(&self) -> &[[u8; 3]] {
        &self.entries
    }

    /// Entries flattened to `r, g, b, r, g, b, ...`, the PLTE chunk layout.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.entries.iter().flatten().copied().collect()
    }
}

#[inline]
fn to_channel(value: f64) -> u8 {
    // NaN saturates to 0 in the cast.
    value.round().clamp(0.0, 255.0) as u8
}
