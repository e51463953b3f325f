//! # footprint
//!
//! Point-in-shape collision engine: a small library of geometric
//! primitives (circle, axis-aligned box, rotated rectangle, circular arc
//! sector, arbitrary polygon) plus a boolean shape algebra (union,
//! intersection, xor, subtract, invert) for composing them into
//! arbitrarily complex containment regions.
//!
//! The whole engine answers exactly one question: does this shape
//! contain this point. Build a tree of [`Collider`]s once, then query
//! [`Collider::contains`] per frame or interaction:
//!
//! ```
//! use footprint::{Aabb, Circle, Collider, Point, Subtract};
//!
//! // a 4x2 pad with a 0.5-radius mounting hole punched out
//! let pad = Subtract::new(
//!     Box::new(Aabb::new(0.0, 0.0, 4.0, 2.0)?),
//!     vec![Box::new(Circle::new(2.0, 1.0, 0.5)?)],
//! );
//! assert!(pad.contains(Point::new(0.5, 0.5)));
//! assert!(!pad.contains(Point::new(2.0, 1.0)));
//! # Ok::<(), footprint::ShapeError>(())
//! ```
//!
//! Queries are total (never fail), pure, and bounded by tree size;
//! immutable trees are safe to probe from many threads at once.

pub mod collider;
pub mod composite;
pub mod geometry;
pub mod scene;
pub mod shapes;

// Re-export common types at crate root for convenience.
pub use collider::{BoxedCollider, Collider};
pub use composite::{Intersection, Invert, Subtract, Union, Xor};
pub use geometry::{Bounds, Point, Vector2};
pub use scene::{Scene, SceneError, ShapeDef, View};
pub use shapes::{Aabb, Arc, Circle, Polygon, Rect, ShapeError};
