//! Core geometry value types: points, 2D vectors, bounding boxes.
//!
//! Everything here is a small `Copy` value with no identity. Vectors carry
//! the math (rotation, projection, signed angles) that the rotated-rectangle
//! and arc colliders need; `Bounds` is the quick-reject box every primitive
//! caches so the exact test only runs for nearby points.

use std::f64::consts::TAU;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D point with x,y coordinates. Immutable value, no identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Both coordinates are finite (not NaN, not infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Vector2> for Point {
    #[inline]
    fn from(v: Vector2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

// ============================================================================
// VECTOR2
// ============================================================================

/// A 2D vector.
///
/// Equality is exact component equality. When a tolerance is wanted, use
/// [`Vector2::approx_eq`] with an explicit epsilon instead of `==`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The unit vector along +x, the reference direction for angular tests.
    pub const UNIT_X: Vector2 = Vector2 { x: 1.0, y: 0.0 };

    /// The length of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Same as `magnitude() * magnitude()`, but skips the square root.
    /// Enough when only comparing lengths against each other.
    #[inline]
    pub fn squared_magnitude(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Scale the vector in place so its magnitude becomes 1.
    ///
    /// The zero vector has no direction; normalizing it yields NaN
    /// components, same as dividing by zero would.
    #[inline]
    pub fn normalize(&mut self) {
        let m = self.magnitude();
        self.x /= m;
        self.y /= m;
    }

    /// A unit-length copy of this vector.
    #[inline]
    pub fn normal(&self) -> Self {
        let m = self.magnitude();
        Self::new(self.x / m, self.y / m)
    }

    /// Shift the vector in place by (dx, dy).
    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// This vector rotated counter-clockwise about the origin by
    /// `angle` radians.
    #[inline]
    pub fn rotated(&self, angle: f64) -> Self {
        self.rotated_about(angle, Point::new(0.0, 0.0), false)
    }

    /// This vector rotated about `pivot` by `angle` radians.
    ///
    /// The standard counter-clockwise rotation matrix is applied relative
    /// to the pivot; `clockwise` negates the angle first.
    pub fn rotated_about(&self, angle: f64, pivot: Point, clockwise: bool) -> Self {
        let angle = if clockwise { -angle } else { angle };
        let (sn, cs) = angle.sin_cos();
        let (dx, dy) = (pivot.x, pivot.y);
        Self::new(
            (self.x - dx) * cs - (self.y - dy) * sn + dx,
            (self.x - dx) * sn + (self.y - dy) * cs + dy,
        )
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: Vector2, b: Vector2) -> f64 {
        a.x * b.x + a.y * b.y
    }

    /// The 2D "cross product" of two vectors - really the determinant
    /// |a b|. Its sign tells which side of `a` the vector `b` lies on.
    #[inline]
    pub fn cross(a: Vector2, b: Vector2) -> f64 {
        a.x * b.y - a.y * b.x
    }

    /// Signed angle from this vector to `other`, normalized into [0, 2π).
    ///
    /// The magnitude comes from `acos` of the normalized dot product; the
    /// sign from which side `other` lies on (the cross product). Undefined
    /// (NaN) if either vector is zero.
    pub fn angle(&self, other: Vector2) -> f64 {
        let m = self.magnitude() * other.magnitude();
        let a = (Self::dot(*self, other) / m).acos();
        let b = if (Self::cross(*self, other) / m).asin() > 0.0 {
            1.0
        } else {
            -1.0
        };
        let signed = a * b;
        if signed < 0.0 { signed + TAU } else { signed }
    }

    /// Component-wise comparison within `epsilon`.
    #[inline]
    pub fn approx_eq(&self, other: Vector2, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl From<Point> for Vector2 {
    #[inline]
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    #[inline]
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    #[inline]
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    #[inline]
    fn mul(self, v: Vector2) -> Vector2 {
        v * self
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn div(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    #[inline]
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

// ============================================================================
// BOUNDS (quick-reject box)
// ============================================================================

/// An axis-aligned box used to cheaply rule out points before running a
/// shape's exact containment test. Bounds are inclusive on every edge so
/// they never reject a point the exact test would accept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    #[inline]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// The tightest box around a set of points. `None` for an empty set.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        Some(Self::new(min_x, min_y, max_x, max_y))
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.min_x <= point.x
            && point.x <= self.max_x
            && self.min_y <= point.y
            && point.y <= self.max_y
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-10;

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(p2), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn magnitude_and_squared() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.squared_magnitude(), 25.0);
    }

    #[test]
    fn normalize_in_place() {
        let mut v = Vector2::new(3.0, 4.0);
        v.normalize();
        assert!(v.approx_eq(Vector2::new(0.6, 0.8), EPS));
        assert!((v.magnitude() - 1.0).abs() < EPS);
    }

    #[test]
    fn normal_returns_unit_copy() {
        let v = Vector2::new(0.0, -2.0);
        let n = v.normal();
        assert!(n.approx_eq(Vector2::new(0.0, -1.0), EPS));
        // original untouched
        assert_eq!(v, Vector2::new(0.0, -2.0));
    }

    #[test]
    fn translate_shifts_components() {
        let mut v = Vector2::new(1.0, 1.0);
        v.translate(2.0, -3.0);
        assert_eq!(v, Vector2::new(3.0, -2.0));
    }

    #[test]
    fn rotate_quarter_turn() {
        let v = Vector2::new(1.0, 0.0).rotated(FRAC_PI_2);
        assert!(v.approx_eq(Vector2::new(0.0, 1.0), EPS));
    }

    #[test]
    fn rotate_clockwise_negates() {
        let ccw = Vector2::new(1.0, 0.0).rotated_about(FRAC_PI_2, Point::new(0.0, 0.0), false);
        let cw = Vector2::new(1.0, 0.0).rotated_about(FRAC_PI_2, Point::new(0.0, 0.0), true);
        assert!(ccw.approx_eq(Vector2::new(0.0, 1.0), EPS));
        assert!(cw.approx_eq(Vector2::new(0.0, -1.0), EPS));
    }

    #[test]
    fn rotate_about_pivot() {
        // (2, 1) rotated half a turn about (1, 1) lands on (0, 1)
        let v = Vector2::new(2.0, 1.0).rotated_about(PI, Point::new(1.0, 1.0), false);
        assert!(v.approx_eq(Vector2::new(0.0, 1.0), EPS));
    }

    #[test]
    fn dot_and_cross() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 4.0);
        assert_eq!(Vector2::dot(a, b), 11.0);
        assert_eq!(Vector2::cross(a, b), -2.0);
        // perpendicular vectors have zero dot product
        assert_eq!(Vector2::dot(Vector2::new(1.0, 0.0), Vector2::new(0.0, 5.0)), 0.0);
    }

    #[test]
    fn angle_is_signed_and_wraps() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 1.0);
        // counter-clockwise quarter turn
        assert!((x.angle(y) - FRAC_PI_2).abs() < EPS);
        // the reverse direction wraps into [0, 2π)
        assert!((y.angle(x) - 3.0 * FRAC_PI_2).abs() < EPS);
        // opposite vectors are half a turn apart
        assert!((x.angle(Vector2::new(-1.0, 0.0)) - PI).abs() < EPS);
    }

    #[test]
    fn operator_overloads() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -1.0);
        assert_eq!(a + b, Vector2::new(4.0, 1.0));
        assert_eq!(a - b, Vector2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(2.0 * a, Vector2::new(2.0, 4.0));
        assert_eq!(a / 2.0, Vector2::new(0.5, 1.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
    }

    #[test]
    fn bounds_from_points() {
        let b = Bounds::from_points(&[
            Point::new(2.0, 5.0),
            Point::new(-1.0, 0.0),
            Point::new(4.0, 3.0),
        ])
        .unwrap();
        assert_eq!(b, Bounds::new(-1.0, 0.0, 4.0, 5.0));
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn bounds_contains_is_inclusive() {
        let b = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(b.contains(Point::new(5.0, 5.0)));
        assert!(b.contains(Point::new(0.0, 0.0)));
        assert!(b.contains(Point::new(10.0, 10.0)));
        assert!(!b.contains(Point::new(10.01, 5.0)));
        assert!(!b.contains(Point::new(5.0, -0.01)));
    }
}
