//! Tests for the `minicheck` binary: input handling, output formats and exit
//! codes.

use std::{
    fs,
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

use pretty_assertions::assert_eq;

const VALID: &str = "int main() {\n  int x;\n  x = 1;\n  return x;\n}\n";
const INVALID: &str = "int main() {\n  y = 2;\n";

fn minicheck(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_minicheck"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

fn write_source(name: &str, contents: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("minicheck_cli_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_json_output_from_stdin() {
    let output = minicheck(&[], VALID.as_bytes());

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["syntaxValid"], true);
    assert_eq!(value["semanticValid"], true);
}

#[test]
fn test_invalid_input_exits_zero_without_strict() {
    let output = minicheck(&[], INVALID.as_bytes());

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["syntaxValid"], false);
}

#[test]
fn test_strict_fails_on_errors() {
    let output = minicheck(&["--strict"], INVALID.as_bytes());

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output)["syntaxValid"], false);
}

#[test]
fn test_strict_passes_valid_input() {
    let output = minicheck(&["--strict", "-"], VALID.as_bytes());

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_report_format() {
    let path = write_source("report.c", INVALID.as_bytes());
    let output = minicheck(&["--format", "report", path.to_str().unwrap()], b"");

    assert!(output.status.success());
    let report = String::from_utf8(output.stdout).unwrap();
    assert!(report.starts_with("Tokens ("));
    assert!(report.contains("\nToken statistics\n"));
    assert!(report.contains("\nSyntax: 2 error(s)\n"));
    assert!(report.contains("Error: Unbalanced braces"));
    assert!(report.contains("Error: Variable 'y' used without declaration"));
    assert!(report.contains(&format!("-> {}:2:3\n", path.display())));
}

#[test]
fn test_request_input() {
    let output = minicheck(
        &["--request", "--strict"],
        br#"{"code": "int main() { return 0; }"}"#,
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["tokens"][0]["type"], "TYPE_INT");
}

#[test]
fn test_rejected_request_fails_before_analysis() {
    for body in [&b"int main() {}"[..], &b"{}"[..]] {
        let output = minicheck(&["--request"], body);

        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Rejected analysis request"), "{}", stderr);
    }
}

#[test]
fn test_latin1_file_is_analysed() {
    let path = write_source("latin1.c", b"int main(){ char c; c = \xe9; return 0; }");
    let output = minicheck(&[path.to_str().unwrap()], b"");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let value = stdout_json(&output);
    assert_eq!(value["syntaxValid"], true);
    assert_eq!(value["tokenStats"]["IDENTIFIER"], 3);
}

#[test]
fn test_latin1_stdin_is_analysed() {
    let output = minicheck(&["--strict"], b"int main(){ char c; c = 'x\xe9'; return 0; }");

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_missing_file_fails() {
    let output = minicheck(&["/nonexistent/minicheck/input.c"], b"");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read input file"));
}
