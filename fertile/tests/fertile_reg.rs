//! End-to-end regression test for the fertile pipeline
//!
//! Run with:
//! ```
//! cargo test -p fertile --test fertile_reg
//! ```
//!
//! Generate golden files:
//! ```
//! REGTEST_MODE=generate cargo test -p fertile --test fertile_reg
//! ```

use std::io::Write;
use std::process::{Command, Stdio};

use fertile::{FieldConfig, fertile_areas, format_areas};
use fertile_test::{RegParams, load_test_input, test_data_path};

fn areas_for(name: &str) -> Vec<u32> {
    let rects = match load_test_input(name) {
        Ok(r) => r,
        Err(e) => panic!("Failed to load test input: {}", e),
    };
    fertile_areas(&FieldConfig::default(), &rects).unwrap()
}

/// Run the `fertile` binary with `input` on stdin
fn run_cli(args: &[&str], input: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fertile"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("FERTILE_WIDTH")
        .env_remove("FERTILE_HEIGHT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn fertile");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait on fertile")
}

#[test]
fn fertile_reg() {
    let mut rp = RegParams::new("fertile");

    // Index 1-4: golden outputs for the canonical payloads
    for name in ["one_band.txt", "four_bars.txt", "empty.txt", "all_barren.txt"] {
        let areas = areas_for(name);
        rp.write_areas_and_check(&areas).unwrap();
    }

    // Index 5: malformed payloads never reach the grid
    let malformed = load_test_input("malformed.txt");
    rp.compare_values(1.0, malformed.is_err() as u8 as f64, 0.0);

    assert!(rp.cleanup(), "fertile regression test failed");
}

#[test]
fn test_out_of_field_rect_is_rejected() {
    let rects = fertile::parse_barren_list(r#"{"0 0 400 10"}"#).unwrap();
    let err = fertile_areas(&FieldConfig::default(), &rects).unwrap_err();
    assert!(matches!(err, fertile::Error::OutOfBounds { col: 400, .. }));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = FieldConfig::default().with_width(0);
    assert!(fertile_areas(&config, &[]).is_err());
}

#[test]
fn test_cli_round_trip() {
    let input = std::fs::read_to_string(test_data_path("four_bars.txt")).unwrap();
    let out = run_cli(&[], &input);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "22816 192608 \n");

    let out = run_cli(&[], r#"{"0 292 399 307"}"#);
    assert!(out.status.success());
    assert_eq!(out.stdout, format_areas(&[116800, 116800]).as_bytes());
}

#[test]
fn test_cli_custom_dimensions() {
    let out = run_cli(&["--width", "5", "--height", "5"], r#"{"2 0 2 4"}"#);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "10 10 \n");
}

#[test]
fn test_cli_malformed_input_fails_without_output() {
    let out = run_cli(&[], "not a payload");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}
