use ppm_gray::convert_path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(input) = std::env::args().nth(1) else {
        eprintln!("Usage: grayscale <input.ppm> [output.ppm]");
        return Ok(());
    };
    let output = std::env::args().nth(2).unwrap_or_else(|| "gray.ppm".into());

    let report = convert_path(&input, &output)?;
    println!(
        "{}x{} pixels, {} bytes -> {}",
        report.width, report.height, report.bytes_written, report.output
    );

    Ok(())
}
