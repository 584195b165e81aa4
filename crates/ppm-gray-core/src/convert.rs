//! Streaming PPM-to-grayscale conversion.

use std::io::{BufRead, Write};

use crate::header::{parse_header, write_header, HeaderError, PpmHeader};
use crate::luma::luma;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by [`convert`].
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Header(#[from] HeaderError),

    #[error("max intensity {max} is not supported (expected <= 255)")]
    UnsupportedMaxIntensity { max: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convert a binary PPM stream into its grayscale counterpart.
///
/// Parses the header, emits the canonical output header for the same
/// dimensions, then streams `height * width` pixels in row-major order:
/// three bytes in, one averaged byte written three times. Nothing is
/// buffered beyond the current pixel, and no output byte is written before
/// the header has parsed successfully.
///
/// Headers declaring a max intensity above 255 are rejected; the pixel loop
/// assumes single-byte channels.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(reader, writer))
)]
pub fn convert<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<PpmHeader, ConvertError> {
    let header = parse_header(reader)?;
    if header.max_intensity > 255 {
        return Err(ConvertError::UnsupportedMaxIntensity {
            max: header.max_intensity,
        });
    }
    log::info!(
        "detected width={} height={} max intensity={}",
        header.width,
        header.height,
        header.max_intensity
    );

    write_header(writer, header.width, header.height)?;

    let mut rgb = [0u8; 3];
    for _ in 0..header.height {
        for _ in 0..header.width {
            reader.read_exact(&mut rgb)?;
            let gray = luma(rgb[0], rgb[1], rgb[2]);
            writer.write_all(&[gray, gray, gray])?;
        }
    }

    Ok(header)
}
