//! Lloyd CLI
//!
//! Reduces the color palette of an image with k-means clustering.
//!
//! # Commands
//!
//! - `quantize`: Read an image, reduce it to N colors, write the result
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: I/O or image codec failure
//! - 2: Invalid input (arguments, config file, palette size)

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

/// Lloyd - k-means palette reduction
#[derive(Parser)]
#[command(name = "lloyd")]
#[command(version)]
#[command(about = "Reduce an image's color palette with k-means clustering")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce an image to a fixed-size palette
    Quantize(commands::quantize::QuantizeArgs),
}

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Quantize(args) => commands::quantize::handle_quantize_command(args),
    };

    std::process::exit(exit_code);
}
