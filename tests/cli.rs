//! End-to-end checks of the command-line contract.

use std::process::Command;

use tempfile::tempdir;

fn tres2exr() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tres2exr"))
}

/// A minimal 2x1 RFLOAT resource with samples [1.5, -2.25].
fn sample_tres_text() -> String {
    let bytes: Vec<String> = [1.5f32, -2.25f32]
        .iter()
        .flat_map(|s| s.to_le_bytes())
        .map(|b| b.to_string())
        .collect();
    format!(
        "\"width\": 2\n\"height\": 1\nPackedByteArray({})\n",
        bytes.join(", ")
    )
}

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    let output = tres2exr().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Usage"), "stdout was: {}", stdout);
}

#[test]
fn one_argument_prints_usage_and_exits_1() {
    // The input path does not exist; if extraction ran anyway it would
    // print its own diagnostic on stderr instead of usage on stdout.
    let output = tres2exr().arg("missing.tres").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Usage"), "stdout was: {}", stdout);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        !stderr.contains("Error extracting"),
        "extractor ran: {}",
        stderr
    );
}

#[test]
fn conversion_succeeds_and_confirms_output_path() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("heightmap.tres");
    let output_path = dir.path().join("heightmap.exr");
    std::fs::write(&input, sample_tres_text()).unwrap();

    let output = tres2exr().arg(&input).arg(&output_path).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Saved EXR to"), "stdout was: {}", stdout);
    assert!(output_path.exists());
}

#[test]
fn extraction_failure_reports_diagnostic_and_exits_1() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.tres");
    let output_path = dir.path().join("broken.exr");
    std::fs::write(&input, "\"width\": 2\n\"height\": 1\n").unwrap();

    let output = tres2exr().arg(&input).arg(&output_path).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains("PackedByteArray data not found"),
        "stderr was: {}",
        stderr
    );
    assert!(!output_path.exists());
}
