//! Collision events raised by the game layer.
//!
//! [`CollisionDetector`](crate::systems::collision::CollisionDetector) only
//! answers "do these overlap". The scene turns overlaps between actors that
//! are still in play into [`CollisionEvent`]s and resolves them afterwards, so
//! detection never mutates what it is still looking at.

/// Who touched whom. Indices point into the scene's actor lists at the time
/// the event was gathered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    /// The player ran into enemy `n`.
    PlayerEnemy(usize),
    /// The player picked up coin `n`.
    PlayerCoin(usize),
    /// Bullet `bullet` hit enemy `enemy`.
    BulletEnemy { bullet: usize, enemy: usize },
}

impl CollisionEvent {
    /// Player deaths restart the scene, so they are resolved first.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CollisionEvent::PlayerEnemy(_))
    }
}
