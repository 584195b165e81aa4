use std::fs;
use std::io::Cursor;

use assert_cmd::Command;
use predicates::prelude::*;

use ppm_gray::parse_header;

fn sample_ppm(width: u32, height: u32, px: [u8; 3]) -> Vec<u8> {
    let mut bytes = format!("P6\n{} {}\n255\n", width, height).into_bytes();
    for _ in 0..width * height {
        bytes.extend_from_slice(&px);
    }
    bytes
}

fn ppm_gray_cmd() -> Command {
    Command::cargo_bin("ppm-gray").expect("binary")
}

#[test]
fn converts_ppm_to_grayscale_ppm() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.ppm");
    let output = dir.path().join("out.ppm");
    fs::write(&input, sample_ppm(10, 5, [30, 60, 90])).expect("write input");

    ppm_gray_cmd()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("width=10 height=5"));

    let out_bytes = fs::read(&output).expect("read output");
    let mut cursor = Cursor::new(&out_bytes[..]);
    let header = parse_header(&mut cursor).expect("output header");
    assert_eq!((header.width, header.height, header.max_intensity), (10, 5, 255));
    assert!(out_bytes[cursor.position() as usize..].iter().all(|&b| b == 60));
}

#[test]
fn malformed_header_fails_with_a_useful_message() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.ppm");
    let output = dir.path().join("out.ppm");
    // Stream ends right after the width token.
    fs::write(&input, b"P6\n10 ").expect("write input");

    ppm_gray_cmd()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("end of stream while reading header"));
}

#[test]
fn missing_input_fails_with_open_error() {
    let dir = tempfile::tempdir().expect("tempdir");

    ppm_gray_cmd()
        .arg(dir.path().join("nope.ppm"))
        .arg(dir.path().join("out.ppm"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn writes_json_report_on_request() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.ppm");
    let output = dir.path().join("out.ppm");
    let report = dir.path().join("report.json");
    fs::write(&input, sample_ppm(4, 4, [12, 34, 56])).expect("write input");

    ppm_gray_cmd()
        .arg(&input)
        .arg(&output)
        .arg("--report")
        .arg(&report)
        .assert()
        .success();

    let raw = fs::read_to_string(&report).expect("read report");
    let loaded: ppm_gray::ConvertReport = serde_json::from_str(&raw).expect("parse report");
    assert_eq!((loaded.width, loaded.height), (4, 4));
}

#[test]
fn non_ppm_input_requires_the_bridge_program() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.ppm");
    fs::write(&input, b"not really a png").expect("write input");

    ppm_gray_cmd()
        .arg(&input)
        .arg(&output)
        .arg("--magick-bin")
        .arg("ppm-gray-no-such-program")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to launch"));
}
