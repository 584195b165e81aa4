//! Entry-point crate for the `ppm-gray` workspace.
//!
//! This crate provides:
//! - stable re-exports of the streaming codec in [`ppm_gray_core`]
//! - file-path conversion helpers and a JSON conversion report
//! - an ImageMagick subprocess bridge so non-PPM formats can be converted
//!   by translating them to and from binary PPM on disk
//! - (feature `cli`) the `ppm-gray` command-line binary.
//!
//! ## Quickstart
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = ppm_gray::convert_path("photo.ppm", "gray.ppm")?;
//! println!("converted {}x{}", report.width, report.height);
//! # Ok(())
//! # }
//! ```

pub use ppm_gray_core as core;

pub use ppm_gray_core::{
    convert, init_with_level, luma, parse_header, write_header, ConvertError, HeaderError,
    PpmHeader,
};

#[cfg(feature = "tracing")]
pub use ppm_gray_core::init_tracing;

mod file;
mod magick;

pub use file::{convert_path, ConvertReport, FileError};
pub use magick::{convert_any, MagickBridge, MagickError};
