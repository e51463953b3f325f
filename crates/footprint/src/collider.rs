//! The one capability every shape offers: does it contain a point.

use crate::geometry::Point;

/// A containment region. Primitive shapes and boolean composites both
/// implement this, which is what lets composites nest arbitrarily deep.
///
/// `contains` is total: it returns a plain bool for every real-valued
/// point and never fails. It is also pure - no allocation, no mutation,
/// so querying an immutable tree from several threads at once is fine.
pub trait Collider {
    /// True if `point` lies inside the region (boundaries inclusive for
    /// the primitive shapes, except where a shape's exact rule says
    /// otherwise - see [`Polygon`](crate::Polygon)).
    fn contains(&self, point: Point) -> bool;
}

/// An owned collider tree node. Composites hold their children through
/// this alias; `Send + Sync` keeps whole trees shareable across threads.
pub type BoxedCollider = Box<dyn Collider + Send + Sync>;

impl<C: Collider + ?Sized> Collider for Box<C> {
    #[inline]
    fn contains(&self, point: Point) -> bool {
        (**self).contains(point)
    }
}

impl<C: Collider + ?Sized> Collider for &C {
    #[inline]
    fn contains(&self, point: Point) -> bool {
        (**self).contains(point)
    }
}
