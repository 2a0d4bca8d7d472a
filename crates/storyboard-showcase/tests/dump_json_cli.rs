#![forbid(unsafe_code)]

//! Integration tests for the `storyboard` binary's non-interactive flags.
//!
//! Run: `cargo test -p storyboard-showcase --test dump_json_cli`

use std::process::Command;

use serde_json::Value;
use storyboard_core::Dataset;

fn storyboard(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_storyboard"))
        .args(args)
        .output()
        .expect("spawn storyboard binary")
}

#[test]
fn dump_json_prints_both_datasets() {
    let output = storyboard(&["--dump-json"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    for (key, dataset) in [
        ("deterministic", Dataset::Deterministic),
        ("traditional", Dataset::Traditional),
    ] {
        let entry = &json[key];
        assert_eq!(entry["title"], dataset.title());
        let slots = entry["slots"].as_array().expect("slots array");
        assert_eq!(slots.len(), dataset.slots().len());
        for (value, slot) in slots.iter().zip(dataset.slots()) {
            assert_eq!(value["id"], slot.id);
        }
    }
}

#[test]
fn help_flag_exits_cleanly() {
    let output = storyboard(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--dump-json"));
}

#[test]
fn unknown_flag_is_rejected() {
    let output = storyboard(&["--no-such-flag"]);
    assert!(!output.status.success());
}
