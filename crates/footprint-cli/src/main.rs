//! footprint - probe and render collider scenes from the command line
//!
//! Usage:
//!   footprint probe <scene.json> <x> <y>        Test a point against a scene
//!   footprint render <scene.json> [cols rows]   ASCII-render a scene's region
//!   footprint shapes                            List supported shape kinds
//!   footprint help                              Show usage

use std::env;
use std::process::exit;

mod cli;

use cli::{cmd_probe, cmd_render, cmd_shapes};

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {} probe <scene.json> <x> <y>        Test a point against a scene", program);
    eprintln!("  {} render <scene.json> [cols rows]   ASCII-render a scene's view region", program);
    eprintln!("  {} shapes                            List supported shape kinds", program);
    eprintln!("  {} help                              Show this message", program);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 {
        match args[1].as_str() {
            "probe" => {
                cmd_probe(&args[2..]);
                return;
            }
            "render" => {
                cmd_render(&args[2..]);
                return;
            }
            "shapes" => {
                cmd_shapes();
                return;
            }
            "help" | "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            _ => {}
        }
    }

    print_usage(&args[0]);
    exit(2);
}
