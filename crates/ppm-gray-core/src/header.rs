//! PPM (P6) header parsing and serialization.

use std::io::{BufRead, ErrorKind, Write};

use serde::{Deserialize, Serialize};

/// Comment line placed into every serialized header.
const OUTPUT_COMMENT: &str = concat!("# Created by ppm-gray ", env!("CARGO_PKG_VERSION"));

/// Parsed PPM (P6) header fields.
///
/// Comment lines are consumed during parsing and not retained. The parser
/// does not enforce `width > 0` or `height > 0`; callers reject zero
/// dimensions where that matters for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PpmHeader {
    pub width: u32,
    pub height: u32,
    pub max_intensity: u32,
}

/// Errors produced while parsing a PPM header.
#[derive(thiserror::Error, Debug)]
pub enum HeaderError {
    #[error("bad magic tag {found:?} (expected \"P6\")")]
    BadMagic { found: [u8; 2] },

    #[error("end of stream while reading header")]
    UnexpectedEof,

    #[error("invalid numeric token {token:?}")]
    InvalidToken { token: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parse a P6 header, leaving `reader` positioned at the first pixel byte.
///
/// Accepts zero or more `#` comment lines between the magic tag and the
/// width token. `max_intensity` is parsed generically; values above 255 are
/// rejected later by the converter, not here.
pub fn parse_header<R: BufRead>(reader: &mut R) -> Result<PpmHeader, HeaderError> {
    let mut magic = [0u8; 3];
    reader.read_exact(&mut magic).map_err(eof_as_malformed)?;
    if &magic[..2] != b"P6" || !magic[2].is_ascii_whitespace() {
        return Err(HeaderError::BadMagic {
            found: [magic[0], magic[1]],
        });
    }

    skip_comments(reader)?;

    let width = read_entry(reader, b' ')?;
    let height = read_entry(reader, b'\n')?;
    let max_intensity = read_entry(reader, b'\n')?;

    Ok(PpmHeader {
        width,
        height,
        max_intensity,
    })
}

/// Write a canonical P6 header for the given dimensions.
///
/// The max intensity is always 255: converted pixels are normalized to the
/// 8-bit range regardless of what the input header declared.
pub fn write_header<W: Write>(writer: &mut W, width: u32, height: u32) -> std::io::Result<()> {
    writeln!(writer, "P6")?;
    writeln!(writer, "{}", OUTPUT_COMMENT)?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")
}

/// Consume comment lines up to (not including) the first non-comment byte.
///
/// Peeks through `fill_buf` instead of reading and seeking back, so the
/// reader does not have to be seekable.
fn skip_comments<R: BufRead>(reader: &mut R) -> Result<(), HeaderError> {
    loop {
        let next = {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                return Err(HeaderError::UnexpectedEof);
            }
            buf[0]
        };
        if next != b'#' {
            return Ok(());
        }
        let mut line = Vec::new();
        reader.read_until(b'\n', &mut line)?;
        if !line.ends_with(b"\n") {
            return Err(HeaderError::UnexpectedEof);
        }
    }
}

/// Read one decimal token terminated by `delim`.
///
/// Bytes are accumulated while scanning. An empty token (immediate
/// delimiter) parses as 0.
fn read_entry<R: BufRead>(reader: &mut R, delim: u8) -> Result<u32, HeaderError> {
    let mut token = Vec::new();
    loop {
        let mut byte = [0u8; 1];
        reader.read_exact(&mut byte).map_err(eof_as_malformed)?;
        if byte[0] == delim {
            break;
        }
        token.push(byte[0]);
    }

    if token.is_empty() {
        return Ok(0);
    }
    let text = std::str::from_utf8(&token).map_err(|_| HeaderError::InvalidToken {
        token: String::from_utf8_lossy(&token).into_owned(),
    })?;
    text.parse().map_err(|_| HeaderError::InvalidToken {
        token: text.to_owned(),
    })
}

fn eof_as_malformed(err: std::io::Error) -> HeaderError {
    if err.kind() == ErrorKind::UnexpectedEof {
        HeaderError::UnexpectedEof
    } else {
        HeaderError::Io(err)
    }
}
