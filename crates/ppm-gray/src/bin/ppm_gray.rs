use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use ppm_gray::{convert_any, init_with_level, MagickBridge};

/// Convert an image to unweighted-average grayscale.
///
/// PPM inputs are converted directly; other formats go through ImageMagick.
#[derive(Parser, Debug)]
#[command(name = "ppm-gray", version, about)]
struct Args {
    /// Source image path.
    input: PathBuf,

    /// Destination image path.
    output: PathBuf,

    /// Write a JSON conversion report to this path.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Conversion program used for non-PPM formats.
    #[arg(long, default_value = "magick")]
    magick_bin: String,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = init_with_level(level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let bridge = MagickBridge::new(args.magick_bin.as_str());
    let report = convert_any(&args.input, &args.output, &bridge)?;

    log::info!(
        "wrote {} ({}x{})",
        report.output,
        report.width,
        report.height
    );

    if let Some(path) = &args.report {
        report.write_json(path)?;
        log::debug!("report written to {}", path.display());
    }
    Ok(())
}
