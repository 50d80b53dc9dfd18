//! `lloyd quantize` command
//!
//! Decodes the input image, reduces it to `--colors` colors and writes the
//! result in the format implied by the output extension. `.png` outputs are
//! written as indexed-color PNGs (color table plus packed index rows); other
//! formats get the palette expanded back to RGB.
//!
//! # Configuration
//!
//! `--config` loads a TOML `KMeansConfig`:
//!
//! ```toml
//! max_iterations = 1000
//! tolerance = 1e-4
//! empty_cluster = "retain_previous"   # or "fail"
//! parallel_assignment = false
//! ```
//!
//! Flags given on the command line override the file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use lloyd_core::KMeansConfig;
use lloyd_palette::{
    write_indexed_png, ColorTable, IndexedImage, PaletteQuantizer, Quantized, DEFAULT_COLORS,
};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::error::{CliError, CliExitCode};

/// Arguments for `quantize`.
#[derive(Args, Debug)]
pub struct QuantizeArgs {
    /// Image to read.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the reduced image.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Palette size (1..=256).
    #[arg(short, long, default_value_t = DEFAULT_COLORS)]
    pub colors: usize,

    /// Seed for initial-center selection. Omit for a random seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Iteration cap; overrides the config file.
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Convergence tolerance; overrides the config file.
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Assign pixels to centers on all cores.
    #[arg(long, default_value = "false")]
    pub parallel: bool,

    /// TOML file with a KMeansConfig.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a JSON summary of the palette on stdout.
    #[arg(long, default_value = "false")]
    pub report: bool,
}

/// JSON summary printed by `--report`.
#[derive(Debug, Serialize)]
struct QuantizeReport<'a> {
    colors: usize,
    palette: &'a ColorTable,
    bit_depth: u8,
    iterations: usize,
    converged: bool,
}

/// Run the command and map the outcome to an exit code.
pub fn handle_quantize_command(args: QuantizeArgs) -> i32 {
    match run(&args) {
        Ok(()) => CliExitCode::Success.into(),
        Err(e) => {
            error!(error = %e, "quantize failed");
            eprintln!("error: {}", e);
            CliExitCode::from(&e).into()
        }
    }
}

fn run(args: &QuantizeArgs) -> Result<(), CliError> {
    let config = resolve_config(args)?;
    debug!(?config, "resolved clustering config");

    let mut quantizer = PaletteQuantizer::new(args.colors)?.with_config(config);
    if let Some(seed) = args.seed {
        quantizer = quantizer.with_seed(seed);
    }

    let image = image::open(&args.input)?.to_rgb8();
    info!(
        input = %args.input.display(),
        width = image.width(),
        height = image.height(),
        "decoded input"
    );

    let quantized = quantizer.quantize(&image)?;
    write_output(&quantized.image, &args.output)?;

    if args.report {
        println!("{}", render_report(&quantized)?);
    }
    Ok(())
}

/// Write `image` to `path`, keeping the palette when the format can hold one.
fn write_output(image: &IndexedImage, path: &Path) -> Result<(), CliError> {
    if is_png(path) {
        let io_error = |source| CliError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut out = BufWriter::new(File::create(path).map_err(io_error)?);
        write_indexed_png(image, &mut out)?;
        out.flush().map_err(io_error)?;
        info!(
            output = %path.display(),
            bit_depth = image.bit_depth(),
            "wrote indexed png"
        );
    } else {
        image.to_rgb_image().save(path)?;
        info!(output = %path.display(), "wrote expanded rgb image");
    }
    Ok(())
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Config file (if any) with command-line overrides applied, validated.
fn resolve_config(args: &QuantizeArgs) -> Result<KMeansConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => KMeansConfig::default(),
    };

    if let Some(max_iterations) = args.max_iterations {
        config.max_iterations = max_iterations;
    }
    if let Some(tolerance) = args.tolerance {
        config.tolerance = tolerance;
    }
    if args.parallel {
        config.parallel_assignment = true;
    }

    config
        .validate()
        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<KMeansConfig, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn render_report(quantized: &Quantized) -> Result<String, CliError> {
    let report = QuantizeReport {
        colors: quantized.image.color_table().len(),
        palette: quantized.image.color_table(),
        bit_depth: quantized.image.bit_depth(),
        iterations: quantized.iterations,
        converged: quantized.converged,
    };
    Ok(serde_json::to_string(&report)?)
}
