//! Shapes command: list the shape kinds a scene file may use.

/// Kind name plus the fields it takes, one row per shape.
const SHAPES: &[(&str, &str)] = &[
    ("circle", "x, y, radius"),
    ("aabb", "x, y, width, height"),
    ("rect", "x, y, width, height, angle (degrees, optional)"),
    ("arc", "x, y, radius, start_angle, stop_angle (degrees)"),
    ("polygon", "points: [[x, y], ...] (at least 3)"),
    ("union", "children: [shape, ...]"),
    ("intersection", "children: [shape, ...]"),
    ("xor", "children: [shape, ...]"),
    ("subtract", "base: shape, children: [shape, ...]"),
    ("invert", "child: shape"),
];

/// Execute the shapes command.
pub fn cmd_shapes() {
    println!("Supported shape kinds ({}):", SHAPES.len());
    for (kind, fields) in SHAPES {
        println!("  {:<14} {}", kind, fields);
    }
}
