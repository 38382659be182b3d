use glam::Vec2;

/// Axis-aligned bounding box of an actor.
///
/// `position` is the top-left corner and `size` the extent, already scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider {
    pub position: Vec2,
    pub size: Vec2,
}

impl BoxCollider {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Returns (min, max) of the box.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self) -> (Vec2, Vec2) {
        let p0 = self.position;
        let p1 = p0 + self.size;
        (p0.min(p1), p0.max(p1))
    }

    pub fn center(&self) -> Vec2 {
        let (min, max) = self.aabb();
        (min + max) * 0.5
    }

    /// Strict overlap: the intersection must have non-zero area, so boxes that
    /// only share an edge and zero-extent boxes never overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        let (min_a, max_a) = self.aabb();
        let (min_b, max_b) = other.aabb();
        let width = max_a.x.min(max_b.x) - min_a.x.max(min_b.x);
        let height = max_a.y.min(max_b.y) - min_a.y.max(min_b.y);
        width > 0.0 && height > 0.0
    }

    /// Point containment, edges included.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let (min, max) = self.aabb();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
