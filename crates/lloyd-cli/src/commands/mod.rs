//! CLI command handlers
//!
//! # Modules
//!
//! - `quantize`: Palette reduction of a single image file

pub mod quantize;
