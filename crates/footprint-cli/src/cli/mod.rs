//! CLI command implementations.
//!
//! - `probe` - test a point against a scene's collider tree
//! - `render` - sample a scene over its view region as ASCII art
//! - `shapes` - list the shape kinds scenes may use

pub mod common;
pub mod probe;
pub mod render;
pub mod shapes;

pub use probe::cmd_probe;
pub use render::cmd_render;
pub use shapes::cmd_shapes;
