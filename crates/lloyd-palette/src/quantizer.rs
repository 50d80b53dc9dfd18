//! Palette reduction driver.
//!
//! Reshapes an RGB image into one point per pixel, clusters the points with
//! `k = colors`, rounds the centers into a color table and maps every pixel
//! to its nearest center.

use image::RgbImage;
use lloyd_core::{EuclideanDistance, KMeans, KMeansConfig, MeanUpdate, RandomCenterSelector};
use tracing::info;

use crate::color_table::ColorTable;
use crate::error::{PaletteError, PaletteResult};
use crate::indexed::{IndexedImage, MAX_COLORS};
use crate::reshape::reshape;

/// Default palette size: a 4-bit color table.
pub const DEFAULT_COLORS: usize = 16;

/// Output of [`PaletteQuantizer::quantize`].
#[derive(Clone, Debug)]
pub struct Quantized {
    /// The reduced-palette image.
    pub image: IndexedImage,
    /// Unrounded cluster centers, in color-table order.
    pub centers: Vec<[f64; 3]>,
    /// Lloyd iterations performed.
    pub iterations: usize,
    /// Whether the run converged before the iteration cap.
    pub converged: bool,
}

/// Reduces an image to at most `colors` colors.
#[derive(Clone, Debug)]
pub struct PaletteQuantizer {
    colors: usize,
    config: KMeansConfig,
    seed: Option<u64>,
}

impl PaletteQuantizer {
    /// Quantizer for a palette of `colors` entries.
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidPaletteSize` unless `1 <= colors <= 256`.
    pub fn new(colors: usize) -> PaletteResult<Self> {
        if colors == 0 || colors > MAX_COLORS {
            return Err(PaletteError::InvalidPaletteSize { colors });
        }
        Ok(Self {
            colors,
            config: KMeansConfig::default(),
            seed: None,
        })
    }

    /// Use `config` for the clustering run.
    pub fn with_config(mut self, config: KMeansConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the initial-center selection. Unseeded runs draw from OS entropy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Requested palette size.
    pub fn colors(&self) -> usize {
        self.colors
    }

    /// Quantize `image`.
    ///
    /// # Errors
    ///
    /// - `PaletteError::Clustering` wrapping `InsufficientData` when the image
    ///   has fewer pixels than colors
    /// - `PaletteError::Clustering` for an invalid configuration
    pub fn quantize(&self, image: &RgbImage) -> PaletteResult<Quantized> {
        let (width, height) = image.dimensions();
        let points = reshape(image);

        info!(width, height, colors = self.colors, "quantizing image");

        let selector = match self.seed {
            Some(seed) => RandomCenterSelector::seeded(seed),
            None => RandomCenterSelector::from_entropy(),
        };
        let engine = KMeans::new(EuclideanDistance, MeanUpdate).with_config(self.config.clone());
        let outcome = engine.run(&points, self.colors, selector)?;

        let (centers, _) = outcome.clustering.into_parts();
        let color_table = ColorTable::from_centers(&centers);

        // Pixels are mapped against the final centers, which may have moved
        // since the last assignment step.
        let indices = engine.assign(&points, &centers)?;
        let indexed = IndexedImage::from_indices(width, height, color_table, &indices)?;

        info!(
            iterations = outcome.iterations,
            converged = outcome.converged,
            bit_depth = indexed.bit_depth(),
            "palette built"
        );

        Ok(Quantized {
            image: indexed,
            centers,
            iterations: outcome.iterations,
            converged: outcome.converged,
        })
    }
}
