//! Probe command: test one point against a scene.

use std::process::exit;

use footprint::{Collider, Point};

use super::common::{load_scene, parse_f64};

/// Execute the probe command. Prints `inside` or `outside` and exits 0
/// either way; the printed word is the answer.
pub fn cmd_probe(args: &[String]) {
    if args.len() != 3 {
        eprintln!("usage: footprint probe <scene.json> <x> <y>");
        exit(2);
    }

    let scene = load_scene(&args[0]);
    let x = parse_f64(&args[1], "x");
    let y = parse_f64(&args[2], "y");

    if scene.collider.contains(Point::new(x, y)) {
        println!("inside");
    } else {
        println!("outside");
    }
}
