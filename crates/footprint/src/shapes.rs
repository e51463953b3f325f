//! Primitive collider shapes.
//!
//! This is the HOT PATH - `contains` runs once per shape per mouse move.
//! Every primitive therefore rejects early against a cached (or trivially
//! derived) axis-aligned bounding box before running its exact test.
//!
//! Construction validates geometry up front: non-finite parameters,
//! negative sizes and under-sized polygons are surfaced as a
//! [`ShapeError`] instead of silently producing a predicate that can
//! never be true. Zero-sized shapes stay legal - with inclusive bounds
//! they degenerate to point and segment tests, which is occasionally
//! exactly what a caller wants.

use std::f64::consts::TAU;

use crate::collider::Collider;
use crate::geometry::{Bounds, Point, Vector2};

/// Error type for degenerate shape construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A coordinate, size or angle was NaN or infinite.
    NonFinite(&'static str),
    /// A circle or arc was given a radius below zero.
    NegativeRadius(f64),
    /// A box or rectangle was given a negative width or height.
    NegativeSize(f64, f64),
    /// A polygon needs at least 3 vertices to enclose anything.
    TooFewVertices(usize),
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::NonFinite(what) => write!(f, "{} must be finite", what),
            ShapeError::NegativeRadius(r) => write!(f, "radius must be >= 0, got {}", r),
            ShapeError::NegativeSize(w, h) => {
                write!(f, "width and height must be >= 0, got {}x{}", w, h)
            }
            ShapeError::TooFewVertices(n) => {
                write!(f, "polygon needs at least 3 vertices, got {}", n)
            }
        }
    }
}

impl std::error::Error for ShapeError {}

fn ensure_finite(value: f64, what: &'static str) -> Result<(), ShapeError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::NonFinite(what))
    }
}

// ============================================================================
// CIRCLE
// ============================================================================

/// A circle: center plus radius, boundary inclusive.
///
/// Fields are public so callers can move or resize the shape between
/// queries without re-validating. Writing a degenerate value directly
/// (negative or non-finite radius) bypasses the checks in [`Circle::new`];
/// `contains` stays total and simply answers `false` everywhere for such
/// a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, radius: f64) -> Result<Self, ShapeError> {
        ensure_finite(x, "circle x")?;
        ensure_finite(y, "circle y")?;
        ensure_finite(radius, "circle radius")?;
        if radius < 0.0 {
            return Err(ShapeError::NegativeRadius(radius));
        }
        Ok(Self { x, y, r: radius })
    }
}

impl Collider for Circle {
    fn contains(&self, point: Point) -> bool {
        // Quick reject against the circumscribing box; fields are public
        // and mutable, so the box is derived here rather than cached.
        if point.x < self.x - self.r
            || point.x > self.x + self.r
            || point.y < self.y - self.r
            || point.y > self.y + self.r
        {
            return false;
        }
        let dx = point.x - self.x;
        let dy = point.y - self.y;
        dx * dx + dy * dy <= self.r * self.r
    }
}

// ============================================================================
// AABB
// ============================================================================

/// An axis-aligned box: origin corner plus width and height, bounds
/// inclusive on all four edges.
///
/// Fields are public so callers can move or resize the shape between
/// queries without re-validating. Writing a degenerate value directly
/// (negative or non-finite size) bypasses the checks in [`Aabb::new`];
/// `contains` stays total and simply answers `false` everywhere for such
/// a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, ShapeError> {
        ensure_finite(x, "aabb x")?;
        ensure_finite(y, "aabb y")?;
        ensure_finite(width, "aabb width")?;
        ensure_finite(height, "aabb height")?;
        if width < 0.0 || height < 0.0 {
            return Err(ShapeError::NegativeSize(width, height));
        }
        Ok(Self { x, y, width, height })
    }
}

impl Collider for Aabb {
    #[inline]
    fn contains(&self, point: Point) -> bool {
        // The box IS its own bounding box - one test is both the quick
        // reject and the exact answer.
        self.x <= point.x
            && point.x <= self.x + self.width
            && self.y <= point.y
            && point.y <= self.y + self.height
    }
}

// ============================================================================
// RECT (rotated rectangle)
// ============================================================================

/// A rectangle rotated about its origin corner by an angle in degrees.
///
/// Rotation is resolved at construction into the four corner points and
/// the bounding box over them; `contains` then only needs two dot-product
/// projections. At angle 0 this behaves identically to [`Aabb`].
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    angle: f64,
    corners: [Point; 4],
    bounds: Bounds,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64, angle: f64) -> Result<Self, ShapeError> {
        ensure_finite(x, "rect x")?;
        ensure_finite(y, "rect y")?;
        ensure_finite(width, "rect width")?;
        ensure_finite(height, "rect height")?;
        ensure_finite(angle, "rect angle")?;
        if width < 0.0 || height < 0.0 {
            return Err(ShapeError::NegativeSize(width, height));
        }
        let mut rect = Self {
            x,
            y,
            width,
            height,
            angle,
            corners: [Point::new(0.0, 0.0); 4],
            bounds: Bounds::new(0.0, 0.0, 0.0, 0.0),
        };
        rect.recompute();
        Ok(rect)
    }

    /// Resolve the current angle into corner points and bounding box.
    fn recompute(&mut self) {
        let rad = self.angle.to_radians();
        let dx = Vector2::UNIT_X.rotated(rad) * self.width;
        let dy = Vector2::new(0.0, 1.0).rotated(rad) * self.height;
        let origin = Vector2::new(self.x, self.y);
        self.corners = [
            origin.into(),
            (origin + dx).into(),
            (origin + dx + dy).into(),
            (origin + dy).into(),
        ];
        // from_points only returns None for an empty slice
        self.bounds = Bounds::from_points(&self.corners).unwrap_or(Bounds::new(
            self.x, self.y, self.x, self.y,
        ));
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Rotation in degrees, counter-clockwise about the origin corner.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The four corner points, origin first, winding in rotation order.
    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Re-aim the rectangle; corners and bounds are recomputed.
    pub fn set_angle(&mut self, angle: f64) -> Result<(), ShapeError> {
        ensure_finite(angle, "rect angle")?;
        self.angle = angle;
        self.recompute();
        Ok(())
    }

    /// Move the origin corner; corners and bounds are recomputed.
    pub fn set_origin(&mut self, x: f64, y: f64) -> Result<(), ShapeError> {
        ensure_finite(x, "rect x")?;
        ensure_finite(y, "rect y")?;
        self.x = x;
        self.y = y;
        self.recompute();
        Ok(())
    }

    /// Resize the rectangle; corners and bounds are recomputed.
    pub fn set_size(&mut self, width: f64, height: f64) -> Result<(), ShapeError> {
        ensure_finite(width, "rect width")?;
        ensure_finite(height, "rect height")?;
        if width < 0.0 || height < 0.0 {
            return Err(ShapeError::NegativeSize(width, height));
        }
        self.width = width;
        self.height = height;
        self.recompute();
        Ok(())
    }
}

impl Collider for Rect {
    fn contains(&self, point: Point) -> bool {
        if !self.bounds.contains(point) {
            return false;
        }
        // Project the origin-to-point vector onto the rectangle's own
        // axes; inside means both projections land within the side
        // lengths. The axes are the local x/y axes rotated by the
        // rectangle's angle.
        let rad = self.angle.to_radians();
        let d1 = Vector2::UNIT_X.rotated(rad);
        let d2 = Vector2::new(0.0, 1.0).rotated(rad);
        let s = Vector2::new(point.x - self.x, point.y - self.y);
        let r1 = Vector2::dot(s, d1);
        let r2 = Vector2::dot(s, d2);
        0.0 <= r1 && r1 <= self.width && 0.0 <= r2 && r2 <= self.height
    }
}

// ============================================================================
// ARC (circular sector)
// ============================================================================

/// A circular sector: everything within `radius` of the center whose
/// angular position falls inside the start..stop span.
///
/// Angles are given in degrees. Start is clamped to [0, 360] and stop to
/// [start, start + 360] - a sector spans at most one full turn measured
/// from its start. Both are stored in radians.
///
/// The angular position of a point is measured as
/// `2π - angle(s, unit_x)` with `s = (px - cx, cy - py)`: a screen-space
/// convention where y grows downward, so the sector sweeps
/// counter-clockwise as seen on screen, starting from the +x direction.
/// The measured angle is folded into [0, 2π) and tested inclusively, so
/// a point on the start ray counts as contained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    x: f64,
    y: f64,
    r: f64,
    start: f64,
    stop: f64,
}

impl Arc {
    pub fn new(
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        stop_angle: f64,
    ) -> Result<Self, ShapeError> {
        ensure_finite(x, "arc x")?;
        ensure_finite(y, "arc y")?;
        ensure_finite(radius, "arc radius")?;
        ensure_finite(start_angle, "arc start angle")?;
        ensure_finite(stop_angle, "arc stop angle")?;
        if radius < 0.0 {
            return Err(ShapeError::NegativeRadius(radius));
        }
        let start = start_angle.clamp(0.0, 360.0);
        let stop = stop_angle.clamp(start, start + 360.0);
        Ok(Self {
            x,
            y,
            r: radius,
            start: start.to_radians(),
            stop: stop.to_radians(),
        })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn radius(&self) -> f64 {
        self.r
    }

    /// Start of the angular span, radians, in [0, 2π].
    pub fn start_radians(&self) -> f64 {
        self.start
    }

    /// End of the angular span, radians, in [start, start + 2π].
    pub fn stop_radians(&self) -> f64 {
        self.stop
    }
}

impl Collider for Arc {
    fn contains(&self, point: Point) -> bool {
        if point.x < self.x - self.r
            || point.x > self.x + self.r
            || point.y < self.y - self.r
            || point.y > self.y + self.r
        {
            return false;
        }
        let dx = point.x - self.x;
        let dy = point.y - self.y;
        if dx * dx + dy * dy > self.r * self.r {
            return false;
        }
        // Angular position, screen-space winding (see type docs). The
        // exact center has no direction; angle() yields NaN there and
        // every comparison below comes out false.
        let s = Vector2::new(point.x - self.x, self.y - point.y);
        let mut ang = TAU - s.angle(Vector2::UNIT_X);
        if ang >= TAU {
            ang -= TAU;
        }
        // Spans that cross the 0/2π seam (start near 360, stop beyond it)
        // are handled by lifting the measured angle one turn.
        if ang < self.start {
            ang += TAU;
        }
        ang <= self.stop
    }
}

// ============================================================================
// POLYGON
// ============================================================================

/// An arbitrary polygon over an ordered vertex list (≥ 3 vertices, owned).
///
/// Containment follows the even-odd ray-casting rule: walk consecutive
/// vertex pairs (wrapping last to first), skip horizontal edges, and for
/// every edge straddling the query's y, toggle parity when the query x is
/// strictly left of the edge's x at that y. That rule makes boundaries
/// half-open - a point on the left edge of a square is inside, on the
/// right edge outside.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    bounds: Bounds,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Result<Self, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::TooFewVertices(points.len()));
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(ShapeError::NonFinite("polygon vertex"));
        }
        // non-empty by the length check above
        let bounds = Bounds::from_points(&points).expect("polygon has vertices");
        Ok(Self { points, bounds })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl Collider for Polygon {
    fn contains(&self, point: Point) -> bool {
        if !self.bounds.contains(point) {
            return false;
        }

        let n = self.points.len();
        let mut inside = false;
        let mut j = n - 1;

        for i in 0..n {
            let (x0, y0) = (self.points[j].x, self.points[j].y);
            let (x1, y1) = (self.points[i].x, self.points[i].y);
            j = i;

            // Horizontal edges cross no horizontal ray.
            if y1 == y0 {
                continue;
            }

            if (point.y > y0) != (point.y > y1) {
                let ux = (x1 - x0) * (point.y - y0) / (y1 - y0) + x0;
                if point.x < ux {
                    inside = !inside;
                }
            }
        }

        inside
    }
}

// ============================================================================
// TESTS
// ============================================================================
