//! Integration tests for the footprint CLI.
//!
//! These run the actual binary and verify end-to-end behavior against
//! scene files written to a temp directory.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_footprint"))
        .args(args)
        .output()
        .expect("failed to execute footprint binary")
}

/// Write a scene file under a unique name in the temp dir and return
/// its path.
fn write_scene(name: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("footprint-test-{}-{}.json", name, std::process::id()));
    fs::write(&path, json).expect("failed to write scene file");
    path
}

const DONUT: &str = r#"{
    "name": "donut",
    "view": { "x": -10, "y": -10, "width": 20, "height": 20 },
    "shape": { "type": "subtract",
        "base": { "type": "circle", "x": 0, "y": 0, "radius": 8 },
        "children": [ { "type": "circle", "x": 0, "y": 0, "radius": 3 } ]
    }
}"#;

#[test]
fn probe_reports_inside_and_outside() {
    let scene = write_scene("probe", DONUT);
    let path = scene.to_str().unwrap();

    let output = run(&["probe", path, "5", "0"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "inside");

    // in the hole
    let output = run(&["probe", path, "0", "0"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "outside");

    // beyond the base circle
    let output = run(&["probe", path, "9", "0"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "outside");

    fs::remove_file(scene).ok();
}

#[test]
fn probe_rejects_bad_arguments() {
    let scene = write_scene("probe-bad-args", DONUT);
    let path = scene.to_str().unwrap();

    let output = run(&["probe", path, "not-a-number", "0"]);
    assert_eq!(output.status.code(), Some(2));

    let output = run(&["probe", path]);
    assert_eq!(output.status.code(), Some(2));

    fs::remove_file(scene).ok();
}

#[test]
fn probe_reports_missing_file() {
    let output = run(&["probe", "/no/such/scene.json", "0", "0"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read"), "stderr was: {}", stderr);
}

#[test]
fn probe_reports_degenerate_scene() {
    let scene = write_scene(
        "degenerate",
        r#"{ "shape": { "type": "circle", "x": 0, "y": 0, "radius": -1 } }"#,
    );
    let output = run(&["probe", scene.to_str().unwrap(), "0", "0"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("radius"), "stderr was: {}", stderr);
    fs::remove_file(scene).ok();
}

#[test]
fn render_draws_the_region() {
    let scene = write_scene("render", DONUT);
    let output = run(&["render", scene.to_str().unwrap(), "20", "10"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("donut (20x10)"));

    let grid: Vec<&str> = lines.collect();
    assert_eq!(grid.len(), 10);
    assert!(grid.iter().all(|row| row.chars().count() == 20));
    // the ring shows up; the center cell is in the hole
    assert!(stdout.contains('#'));
    assert!(grid[5].chars().nth(10) == Some('.') || grid[4].chars().nth(10) == Some('.'));

    fs::remove_file(scene).ok();
}

#[test]
fn render_requires_a_view() {
    let scene = write_scene(
        "render-no-view",
        r#"{ "shape": { "type": "circle", "x": 0, "y": 0, "radius": 1 } }"#,
    );
    let output = run(&["render", scene.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    fs::remove_file(scene).ok();
}

#[test]
fn shapes_lists_all_kinds() {
    let output = run(&["shapes"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for kind in [
        "circle", "aabb", "rect", "arc", "polygon",
        "union", "intersection", "xor", "subtract", "invert",
    ] {
        assert!(stdout.contains(kind), "should list '{}'", kind);
    }
}

#[test]
fn unknown_command_prints_usage() {
    let output = run(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {}", stderr);
}
