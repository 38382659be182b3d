//! Input-driven actor.
//!
//! [`PlayerActor`] takes its direction from an [`InputState`] each tick. When
//! no movement key is held the player stands still, facing the last way it
//! walked, on the first frame of that animation.

use glam::Vec2;

use crate::components::actor::{Actor, ActorBehavior, Facing};
use crate::resources::input::InputState;

#[derive(Debug, Clone)]
pub struct PlayerActor {
    actor: Actor,
    can_walk: bool,
    last_direction: Vec2,
}

impl PlayerActor {
    pub fn new(actor: Actor) -> Self {
        let last_direction = if actor.direction() == Vec2::ZERO {
            Vec2::Y
        } else {
            actor.direction()
        };
        Self {
            actor,
            can_walk: true,
            last_direction,
        }
    }

    pub fn with_can_walk(mut self, can_walk: bool) -> Self {
        self.can_walk = can_walk;
        self
    }

    pub fn can_walk(&self) -> bool {
        self.can_walk
    }

    pub fn set_can_walk(&mut self, can_walk: bool) {
        self.can_walk = can_walk;
    }

    /// Last non-zero direction, used for facing while idle.
    pub fn last_direction(&self) -> Vec2 {
        self.last_direction
    }

    pub fn facing(&self) -> Facing {
        Facing::from_direction(self.last_direction).unwrap_or(Facing::Down)
    }

    /// Apply this tick's input. Call before [`ActorBehavior::update`].
    pub fn handle_input(&mut self, input: &InputState) {
        let direction = if self.can_walk {
            input.direction()
        } else {
            Vec2::ZERO
        };

        if direction == Vec2::ZERO {
            if self.actor.direction() != Vec2::ZERO || self.actor.is_animating() {
                self.actor.set_direction(Vec2::ZERO);
                self.actor.play_animation(self.facing().name());
                self.actor.stop_animation();
            }
        } else {
            self.last_direction = direction;
            self.actor.set_direction(direction);
            self.actor.resume_animation();
        }
    }
}

impl ActorBehavior for PlayerActor {
    fn actor(&self) -> &Actor {
        &self.actor
    }

    fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    fn update(&mut self, dt: f32) {
        self.actor.update(dt);
    }
}
