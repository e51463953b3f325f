//! Render command: sample a scene's region as ASCII art.
//!
//! Each output cell is one containment query at the cell's center -
//! a cheap way to eyeball whether a scene file describes the region you
//! think it does, without any graphics stack.

use std::process::exit;

use footprint::{Collider, Point, View};

use super::common::load_scene;

const DEFAULT_COLS: usize = 60;
const DEFAULT_ROWS: usize = 30;

/// Execute the render command.
pub fn cmd_render(args: &[String]) {
    if args.is_empty() || args.len() == 2 || args.len() > 3 {
        eprintln!("usage: footprint render <scene.json> [cols rows]");
        exit(2);
    }

    let scene = load_scene(&args[0]);
    let (cols, rows) = if args.len() == 3 {
        (parse_dim(&args[1], "cols"), parse_dim(&args[2], "rows"))
    } else {
        (DEFAULT_COLS, DEFAULT_ROWS)
    };

    let Some(view) = scene.view else {
        eprintln!("error: {} has no \"view\" region to render", &args[0]);
        exit(1);
    };

    if let Some(name) = &scene.name {
        println!("{} ({}x{})", name, cols, rows);
    }
    print_grid(&*scene.collider, view, cols, rows);
}

fn parse_dim(arg: &str, what: &str) -> usize {
    match arg.parse::<usize>() {
        Ok(value) if value > 0 => value,
        _ => {
            eprintln!("error: {} must be a positive integer, got '{}'", what, arg);
            exit(2);
        }
    }
}

fn print_grid(collider: &dyn Collider, view: View, cols: usize, rows: usize) {
    let cell_w = view.width / cols as f64;
    let cell_h = view.height / rows as f64;

    let mut line = String::with_capacity(cols);
    for row in 0..rows {
        let y = view.y + (row as f64 + 0.5) * cell_h;
        line.clear();
        for col in 0..cols {
            let x = view.x + (col as f64 + 0.5) * cell_w;
            line.push(if collider.contains(Point::new(x, y)) {
                '#'
            } else {
                '.'
            });
        }
        println!("{}", line);
    }
}
