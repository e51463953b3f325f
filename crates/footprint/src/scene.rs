//! Declarative scenes: collider trees loaded from JSON.
//!
//! Callers that keep footprints in data files rather than code (building
//! definitions, selection regions) describe a shape tree declaratively
//! and build it once:
//!
//! ```json
//! {
//!   "name": "splitter",
//!   "shape": { "type": "union", "children": [
//!     { "type": "aabb", "x": 0, "y": 0, "width": 4, "height": 2 },
//!     { "type": "circle", "x": 2, "y": 1, "radius": 1 }
//!   ] }
//! }
//! ```
//!
//! Definitions are plain data, so cycles are impossible by construction;
//! building recurses over the definition tree and can only fail on
//! degenerate geometry.

use serde::Deserialize;

use crate::collider::BoxedCollider;
use crate::composite::{Intersection, Invert, Subtract, Union, Xor};
use crate::geometry::Point;
use crate::shapes::{Aabb, Arc, Circle, Polygon, Rect, ShapeError};

/// Error type for scene loading.
#[derive(Debug)]
pub enum SceneError {
    /// The document is not valid JSON or doesn't match the scene schema.
    Parse(serde_json::Error),
    /// The document parsed, but some shape has degenerate geometry.
    Shape(ShapeError),
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::Parse(err) => write!(f, "scene parse error: {}", err),
            SceneError::Shape(err) => write!(f, "bad shape in scene: {}", err),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Parse(err) => Some(err),
            SceneError::Shape(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        SceneError::Parse(err)
    }
}

impl From<ShapeError> for SceneError {
    fn from(err: ShapeError) -> Self {
        SceneError::Shape(err)
    }
}

// ============================================================================
// SHAPE DEFINITIONS
// ============================================================================

/// One node of a declarative shape tree. Mirrors the collider variants
/// one to one; composite definitions nest.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDef {
    Circle {
        x: f64,
        y: f64,
        radius: f64,
    },
    Aabb {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        /// Rotation in degrees; omitted means axis-aligned.
        #[serde(default)]
        angle: f64,
    },
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        stop_angle: f64,
    },
    Polygon {
        points: Vec<[f64; 2]>,
    },
    Union {
        children: Vec<ShapeDef>,
    },
    Intersection {
        children: Vec<ShapeDef>,
    },
    Xor {
        children: Vec<ShapeDef>,
    },
    Subtract {
        base: Box<ShapeDef>,
        children: Vec<ShapeDef>,
    },
    Invert {
        child: Box<ShapeDef>,
    },
}

impl ShapeDef {
    /// Build the collider tree this definition describes.
    pub fn build(&self) -> Result<BoxedCollider, ShapeError> {
        Ok(match self {
            ShapeDef::Circle { x, y, radius } => Box::new(Circle::new(*x, *y, *radius)?),
            ShapeDef::Aabb { x, y, width, height } => {
                Box::new(Aabb::new(*x, *y, *width, *height)?)
            }
            ShapeDef::Rect { x, y, width, height, angle } => {
                Box::new(Rect::new(*x, *y, *width, *height, *angle)?)
            }
            ShapeDef::Arc { x, y, radius, start_angle, stop_angle } => {
                Box::new(Arc::new(*x, *y, *radius, *start_angle, *stop_angle)?)
            }
            ShapeDef::Polygon { points } => {
                let points = points.iter().map(|[x, y]| Point::new(*x, *y)).collect();
                Box::new(Polygon::new(points)?)
            }
            ShapeDef::Union { children } => Box::new(Union::new(build_all(children)?)),
            ShapeDef::Intersection { children } => {
                Box::new(Intersection::new(build_all(children)?))
            }
            ShapeDef::Xor { children } => Box::new(Xor::new(build_all(children)?)),
            ShapeDef::Subtract { base, children } => {
                Box::new(Subtract::new(base.build()?, build_all(children)?))
            }
            ShapeDef::Invert { child } => Box::new(Invert::new(child.build()?)),
        })
    }
}

fn build_all(defs: &[ShapeDef]) -> Result<Vec<BoxedCollider>, ShapeError> {
    defs.iter().map(ShapeDef::build).collect()
}

// ============================================================================
// SCENE
// ============================================================================

/// A rectangular region of interest, used by tools that need to know
/// where in the plane a scene's shapes live (the collider trees
/// themselves only answer point queries).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct View {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneDoc {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    view: Option<View>,
    shape: ShapeDef,
}

/// A loaded scene: one built collider tree plus optional metadata.
pub struct Scene {
    pub name: Option<String>,
    pub view: Option<View>,
    pub collider: BoxedCollider,
}

impl Scene {
    /// Parse a scene document and build its collider tree.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let doc: SceneDoc = serde_json::from_str(json)?;
        let collider = doc.shape.build()?;
        Ok(Self {
            name: doc.name,
            view: doc.view,
            collider,
        })
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
