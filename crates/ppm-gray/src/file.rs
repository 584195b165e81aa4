//! File-path conversion helpers and the JSON conversion report.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ppm_gray_core::{convert, ConvertError};

/// Errors produced by the file-path helpers.
#[derive(thiserror::Error, Debug)]
pub enum FileError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot create {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Summary of one completed conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertReport {
    pub input: String,
    pub output: String,
    pub width: u32,
    pub height: u32,
    /// Max intensity declared by the input header; output is always 255.
    pub max_intensity_in: u32,
    pub bytes_written: u64,
}

impl ConvertReport {
    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), FileError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Convert the binary PPM at `input` into a grayscale PPM at `output`.
///
/// The output file is created (or overwritten) only after the input opened
/// successfully. A malformed header aborts before any output byte is
/// written, leaving the destination empty.
pub fn convert_path(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ConvertReport, FileError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let src = File::open(input).map_err(|source| FileError::Open {
        path: input.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(src);

    let dst = File::create(output).map_err(|source| FileError::Create {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(dst);

    let header = convert(&mut reader, &mut writer)?;
    writer.flush()?;

    Ok(ConvertReport {
        input: input.to_string_lossy().into_owned(),
        output: output.to_string_lossy().into_owned(),
        width: header.width,
        height: header.height,
        max_intensity_in: header.max_intensity,
        bytes_written: std::fs::metadata(output)?.len(),
    })
}
