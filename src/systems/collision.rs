//! Actor overlap tests.
//!
//! [`CollisionDetector`] looks at geometry only: top-left position plus
//! cell size times scale. It does not check `is_active` or `is_removed`; the
//! game layer combines those flags with the result.

use crate::components::actor::{Actor, ActorBehavior};

pub struct CollisionDetector;

impl CollisionDetector {
    /// True iff the bounding boxes intersect with non-zero area.
    pub fn has_collided(a: &Actor, b: &Actor) -> bool {
        a.bounds().overlaps(&b.bounds())
    }

    /// Every overlapping pair `(i, j)` with `i < j`.
    pub fn pairs<T: ActorBehavior>(actors: &[T]) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in actors.iter().enumerate() {
            for (j, b) in actors.iter().enumerate().skip(i + 1) {
                if Self::has_collided(a.actor(), b.actor()) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Indices of `others` that overlap `actor`, in order.
    pub fn hits<'a, T: ActorBehavior + 'a>(
        actor: &'a Actor,
        others: &'a [T],
    ) -> impl Iterator<Item = usize> + 'a {
        others
            .iter()
            .enumerate()
            .filter(move |(_, other)| Self::has_collided(actor, other.actor()))
            .map(|(i, _)| i)
    }
}
