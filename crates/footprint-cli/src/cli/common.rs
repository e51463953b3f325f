//! Helpers shared by the CLI commands.

use std::fs;
use std::process::exit;

use footprint::Scene;

/// Load a scene file, printing the failure and exiting on any error.
///
/// Errors here are terminal for every command, so the exit lives in one
/// place instead of being repeated per command.
pub fn load_scene(path: &str) -> Scene {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("error: cannot read {}: {}", path, err);
            exit(1);
        }
    };
    match Scene::from_json(&json) {
        Ok(scene) => scene,
        Err(err) => {
            eprintln!("error: {}: {}", path, err);
            exit(1);
        }
    }
}

/// Parse a numeric CLI argument or exit with a usage-style message.
pub fn parse_f64(arg: &str, what: &str) -> f64 {
    match arg.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("error: {} must be a number, got '{}'", what, arg);
            exit(2);
        }
    }
}
