//! ImageMagick subprocess bridge.
//!
//! The codec core only speaks binary PPM. Arbitrary formats are handled by
//! delegating to ImageMagick, which translates them to and from PPM files
//! in a temporary staging directory.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::file::{convert_path, ConvertReport, FileError};

/// Errors produced by the ImageMagick bridge.
#[derive(thiserror::Error, Debug)]
pub enum MagickError {
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} exited with {status} while converting {path}")]
    Failed {
        program: String,
        status: std::process::ExitStatus,
        path: PathBuf,
    },

    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Handle to an ImageMagick-compatible conversion program.
#[derive(Debug, Clone)]
pub struct MagickBridge {
    program: String,
}

impl Default for MagickBridge {
    fn default() -> Self {
        Self::new("magick")
    }
}

impl MagickBridge {
    /// Use `program` for format translation (`magick`, or `convert` on
    /// older ImageMagick installs).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Translate the image at `src` into a binary PPM at `dst`.
    pub fn to_ppm(&self, src: &Path, dst: &Path) -> Result<(), MagickError> {
        self.run(src, dst)
    }

    /// Translate the PPM at `src` into whatever format `dst`'s extension names.
    pub fn from_ppm(&self, src: &Path, dst: &Path) -> Result<(), MagickError> {
        self.run(src, dst)
    }

    fn run(&self, src: &Path, dst: &Path) -> Result<(), MagickError> {
        log::debug!("running {} {:?} -> {:?}", self.program, src, dst);
        let status = Command::new(&self.program)
            .arg(src)
            .arg(dst)
            .status()
            .map_err(|source| MagickError::Launch {
                program: self.program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(MagickError::Failed {
                program: self.program.clone(),
                status,
                path: src.to_path_buf(),
            });
        }
        Ok(())
    }
}

/// Convert any image at `input` into a grayscale image at `output`.
///
/// PPM-to-PPM conversions run directly and never touch the bridge. Other
/// formats are staged through a temporary directory: input -> PPM ->
/// grayscale PPM -> output.
pub fn convert_any(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    bridge: &MagickBridge,
) -> Result<ConvertReport, MagickError> {
    let input = input.as_ref();
    let output = output.as_ref();

    if is_ppm(input) && is_ppm(output) {
        return Ok(convert_path(input, output)?);
    }

    let staging = tempfile::tempdir()?;
    let src_ppm = staging.path().join("source.ppm");
    let gray_ppm = staging.path().join("gray.ppm");

    let src = if is_ppm(input) {
        input.to_path_buf()
    } else {
        bridge.to_ppm(input, &src_ppm)?;
        src_ppm
    };

    let mut report = if is_ppm(output) {
        convert_path(&src, output)?
    } else {
        let report = convert_path(&src, &gray_ppm)?;
        bridge.from_ppm(&gray_ppm, output)?;
        report
    };

    // Report the caller's paths, not the staging files.
    report.input = input.to_string_lossy().into_owned();
    report.output = output.to_string_lossy().into_owned();
    Ok(report)
}

fn is_ppm(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_ppm_extension() {
        assert!(is_ppm(Path::new("a/b/photo.ppm")));
        assert!(is_ppm(Path::new("photo.PPM")));
        assert!(!is_ppm(Path::new("photo.png")));
        assert!(!is_ppm(Path::new("ppm")));
    }

    #[test]
    fn missing_program_surfaces_as_launch_error() {
        let bridge = MagickBridge::new("ppm-gray-no-such-program");
        let err = bridge
            .to_ppm(Path::new("in.png"), Path::new("out.ppm"))
            .unwrap_err();
        assert!(matches!(err, MagickError::Launch { .. }));
    }
}
