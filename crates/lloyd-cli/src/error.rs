//! CLI errors and exit code mapping.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Failure reading, decoding, encoding or writing files
//! - 2: Invalid input that retrying with the same arguments cannot fix

use std::path::PathBuf;

use lloyd_palette::PaletteError;
use thiserror::Error;

/// Exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    /// Command completed
    Success = 0,
    /// I/O or codec failure
    Failure = 1,
    /// Bad arguments, config or image for the requested palette
    InvalidInput = 2,
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Filesystem failure.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Image could not be decoded or encoded.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Indexed PNG could not be encoded.
    #[error("png encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    /// Config file is not valid TOML for `KMeansConfig`.
    #[error("invalid config file {path}: {source}")]
    Config {
        /// Config file path
        path: PathBuf,
        /// Parse error
        #[source]
        source: toml::de::Error,
    },

    /// Argument combination rejected before any work was done.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Palette reduction failed.
    #[error(transparent)]
    Palette(#[from] PaletteError),

    /// Report could not be serialized.
    #[error("report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}

impl From<&CliError> for CliExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::Io { .. } => CliExitCode::Failure,
            CliError::Image(_) => CliExitCode::Failure,
            CliError::Png(_) => CliExitCode::Failure,
            CliError::Report(_) => CliExitCode::Failure,
            CliError::Config { .. } => CliExitCode::InvalidInput,
            CliError::InvalidArgument(_) => CliExitCode::InvalidInput,
            CliError::Palette(_) => CliExitCode::InvalidInput,
        }
    }
}
