//! Owner of dynamically spawned actors (coins, bullets).
//!
//! # How It Works
//!
//! 1. [`ActorCollection::spawn`] appends; iteration order is creation order
//! 2. [`ActorCollection::update`] ticks every live member, then compacts once
//!    so no member is skipped because a neighbour disappeared mid-pass
//! 3. [`ActorCollection::draw`] draws live members in collection order

use log::trace;

use crate::components::actor::ActorBehavior;
use crate::systems::render::DrawSink;

#[derive(Debug, Clone)]
pub struct ActorCollection<T: ActorBehavior> {
    members: Vec<T>,
}

impl<T: ActorBehavior> Default for ActorCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorBehavior> ActorCollection<T> {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Append `actor` and hand back a reference to it.
    pub fn spawn(&mut self, actor: T) -> &mut T {
        let index = self.members.len();
        self.members.push(actor);
        &mut self.members[index]
    }

    /// Update every live member, then prune removed ones.
    ///
    /// Returns how many members were pruned.
    pub fn update(&mut self, dt: f32) -> usize {
        for member in self.members.iter_mut().filter(|m| !m.is_removed()) {
            member.update(dt);
        }
        self.prune()
    }

    /// Drop every member flagged as removed.
    pub fn prune(&mut self) -> usize {
        let before = self.members.len();
        self.members.retain(|m| !m.is_removed());
        let pruned = before - self.members.len();
        if pruned > 0 {
            trace!("Pruned {} removed actors", pruned);
        }
        pruned
    }

    pub fn draw(&self, sink: &mut dyn DrawSink) {
        for member in self.members.iter().filter(|m| !m.is_removed()) {
            member.draw(sink);
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.members.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.members.get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.members.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}
