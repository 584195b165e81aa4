//! Streaming grayscale conversion for binary PPM (P6) images.
//!
//! This crate is intentionally small and purely stream-oriented. It does
//! *not* touch the filesystem and holds no image buffer: pixels are read,
//! transformed, and written one at a time, so memory use is independent of
//! image size.
//!
//! ## Quickstart
//!
//! ```
//! use std::io::Cursor;
//!
//! # fn main() -> Result<(), ppm_gray_core::ConvertError> {
//! let input = b"P6\n2 1\n255\n\x1e\x3c\x5a\x00\x00\x00";
//! let mut reader = Cursor::new(&input[..]);
//! let mut output = Vec::new();
//!
//! let header = ppm_gray_core::convert(&mut reader, &mut output)?;
//! assert_eq!((header.width, header.height), (2, 1));
//! # Ok(())
//! # }
//! ```

mod convert;
mod header;
mod logger;
mod luma;

pub use convert::{convert, ConvertError};
pub use header::{parse_header, write_header, HeaderError, PpmHeader};
pub use luma::luma;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
