//! Integration tests for the `lyst` CLI.
//!
//! Each test runs `lyst` as a subprocess and verifies stdout/stderr. The
//! TUI itself is not driven here; these cover the scripting subcommands.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Get the path to the built `lyst` binary.
fn lyst_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("lyst");
    path
}

/// Run `lyst encode` with the given stdin and return the printed link.
fn encode(lines: &str, extra_args: &[&str]) -> String {
    let mut child = Command::new(lyst_bin())
        .arg("encode")
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(lines.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn encode_produces_a_link_with_fragment() {
    let link = encode("Buy milk\nEggs\n", &[]);
    assert!(link.starts_with("https://lyst.page/#"), "{}", link);
    // Percent-encoded JSON array
    assert!(link.contains("%5B%7B%22text%22"), "{}", link);
}

#[test]
fn encode_then_show_round_trips() {
    let link = encode("Buy milk\nEggs\n", &[]);

    let output = Command::new(lyst_bin())
        .args(["show", &link])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "[ ] Buy milk\n[ ] Eggs\n");
}

#[test]
fn encode_done_marks_every_item() {
    let link = encode("a\nb\n", &["--done"]);

    let output = Command::new(lyst_bin())
        .args(["show", &link])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "[x] a\n[x] b\n");
}

#[test]
fn show_json_output() {
    let link = encode("One\n", &[]);

    let output = Command::new(lyst_bin())
        .args(["show", &link, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let items: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(items[0]["text"], "One");
    assert_eq!(items[0]["done"], false);
}

#[test]
fn show_empty_link_prints_nothing() {
    let output = Command::new(lyst_bin())
        .args(["show", "https://lyst.page/"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn show_malformed_link_fails() {
    let output = Command::new(lyst_bin())
        .args(["show", "https://lyst.page/#not-a-list"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error"), "{}", stderr);
}

#[test]
fn qr_prints_generator_url() {
    let link = encode("x\n", &[]);

    let output = Command::new(lyst_bin())
        .args(["qr", &link])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=150x150&data="),
        "{}",
        stdout
    );
    // The payload is the percent-encoded page address
    assert!(stdout.contains("data=https%3A%2F%2Flyst.page%2F%23"), "{}", stdout);
}

#[test]
fn config_file_overrides_base_url() {
    let tmp = tempfile::TempDir::new().unwrap();
    let config_path = tmp.path().join("lyst.toml");
    std::fs::write(
        &config_path,
        "[share]\nbase_url = \"https://example.org/list\"\n",
    )
    .unwrap();

    let mut child = Command::new(lyst_bin())
        .args(["encode", "--config", config_path.to_str().unwrap()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.as_mut().unwrap().write_all(b"a\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let link = String::from_utf8(output.stdout).unwrap();
    assert!(link.starts_with("https://example.org/list#"), "{}", link);
}

#[test]
fn missing_config_file_fails() {
    let output = Command::new(lyst_bin())
        .args(["show", "%5B%5D", "--config", "/nonexistent/lyst.toml"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
