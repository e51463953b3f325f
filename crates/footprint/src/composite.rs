//! Boolean shape algebra over colliders.
//!
//! Each composite owns its children outright (boxed trait objects) and
//! combines their containment answers. Children may themselves be
//! composites, so a whole footprint - however irregular - is one tree with
//! a single `contains` at the root. Trees are built bottom-up from owned
//! values, which is what rules out cycles; nothing checks for them at
//! query time.
//!
//! Composites cache nothing. Every query re-walks the tree and asks each
//! child for its current answer, so mutating a leaf shape between queries
//! just works.

use crate::collider::{BoxedCollider, Collider};
use crate::geometry::Point;

// ============================================================================
// UNION / INTERSECTION / XOR
// ============================================================================

/// Contains a point if ANY child does. An empty union contains nothing.
pub struct Union {
    children: Vec<BoxedCollider>,
}

impl Union {
    pub fn new(children: Vec<BoxedCollider>) -> Self {
        Self { children }
    }
}

impl Collider for Union {
    fn contains(&self, point: Point) -> bool {
        self.children.iter().any(|c| c.contains(point))
    }
}

/// Contains a point only if ALL children do. An empty intersection
/// contains everything (the vacuous case of "all").
pub struct Intersection {
    children: Vec<BoxedCollider>,
}

impl Intersection {
    pub fn new(children: Vec<BoxedCollider>) -> Self {
        Self { children }
    }
}

impl Collider for Intersection {
    fn contains(&self, point: Point) -> bool {
        self.children.iter().all(|c| c.contains(point))
    }
}

/// Contains a point if an ODD number of children do. Overlaps cancel
/// pairwise, so `Xor(A, A)` is empty everywhere.
pub struct Xor {
    children: Vec<BoxedCollider>,
}

impl Xor {
    pub fn new(children: Vec<BoxedCollider>) -> Self {
        Self { children }
    }
}

impl Collider for Xor {
    fn contains(&self, point: Point) -> bool {
        let mut inside = false;
        for child in &self.children {
            if child.contains(point) {
                inside = !inside;
            }
        }
        inside
    }
}

// ============================================================================
// SUBTRACT / INVERT
// ============================================================================

/// Contains a point if the base collider does AND none of the subtrahend
/// children do: the base shape with holes punched out of it.
pub struct Subtract {
    base: BoxedCollider,
    children: Vec<BoxedCollider>,
}

impl Subtract {
    pub fn new(base: BoxedCollider, children: Vec<BoxedCollider>) -> Self {
        Self { base, children }
    }
}

impl Collider for Subtract {
    fn contains(&self, point: Point) -> bool {
        if !self.base.contains(point) {
            return false;
        }
        !self.children.iter().any(|c| c.contains(point))
    }
}

/// The complement of exactly one child: contains a point iff the child
/// does not.
pub struct Invert {
    child: BoxedCollider,
}

impl Invert {
    pub fn new(child: BoxedCollider) -> Self {
        Self { child }
    }
}

impl Collider for Invert {
    fn contains(&self, point: Point) -> bool {
        !self.child.contains(point)
    }
}

// Children are trait objects, so Debug can't be derived; report arity
// instead of contents.

impl std::fmt::Debug for Union {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Union({} children)", self.children.len())
    }
}

impl std::fmt::Debug for Intersection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Intersection({} children)", self.children.len())
    }
}

impl std::fmt::Debug for Xor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Xor({} children)", self.children.len())
    }
}

impl std::fmt::Debug for Subtract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subtract(base - {} children)", self.children.len())
    }
}

impl std::fmt::Debug for Invert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invert")
    }
}

// ============================================================================
// TESTS
// ============================================================================
