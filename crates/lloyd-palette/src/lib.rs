//! Lloyd Palette Library
//!
//! Reduces the color palette of RGB images by clustering pixel colors with
//! [`lloyd_core`].
//!
//! # Pipeline
//!
//! 1. [`reshape`] the image into one `[r, g, b]` point per pixel
//! 2. Cluster the points into `colors` clusters
//! 3. Round the centers into a [`ColorTable`]
//! 4. Map each pixel to its nearest center and pack the indices into an
//!    [`IndexedImage`]
//!
//! Decoding input files is left to the caller. [`write_indexed_png`] writes
//! the color table and packed rows as an indexed-color PNG.
//!
//! # Example
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use lloyd_palette::PaletteQuantizer;
//!
//! let image = RgbImage::from_fn(4, 4, |x, _| {
//!     if x < 2 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) }
//! });
//! let quantized = PaletteQuantizer::new(2).unwrap().with_seed(1).quantize(&image).unwrap();
//! assert_eq!(quantized.image.to_rgb_image(), image);
//! ```

pub mod color_table;
pub mod encode;
pub mod error;
pub mod indexed;
pub mod quantizer;
pub mod reshape;

pub use color_table::ColorTable;
pub use encode::write_indexed_png;
pub use error::{PaletteError, PaletteResult};
pub use indexed::{bit_depth_for, IndexedImage, MAX_COLORS};
pub use quantizer::{PaletteQuantizer, Quantized, DEFAULT_COLORS};
pub use reshape::reshape;
