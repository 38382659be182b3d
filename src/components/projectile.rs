//! Short-lived actors.
//!
//! A [`Projectile`] counts its own age every tick and removes itself once the
//! age reaches its lifespan. The countdown runs whether or not the projectile
//! is active, and removal is permanent.
//!
//! # Related
//!
//! - [`crate::resources::actorcollection::ActorCollection`] – prunes removed projectiles

use glam::Vec2;

use crate::components::actor::{Actor, ActorBehavior};

#[derive(Debug, Clone)]
pub struct Projectile {
    actor: Actor,
    lifespan: f32,
    timer: f32,
    linear_velocity: f32,
}

impl Projectile {
    /// Wrap `actor` so it travels at `linear_velocity` units per second for
    /// `lifespan` seconds.
    pub fn new(mut actor: Actor, lifespan: f32, linear_velocity: f32) -> Self {
        actor.set_speed(linear_velocity);
        Self {
            actor,
            lifespan,
            timer: 0.0,
            linear_velocity,
        }
    }

    /// Convenience for a projectile fired from `origin` along `direction`.
    pub fn fired(actor: Actor, origin: Vec2, direction: Vec2, lifespan: f32, linear_velocity: f32) -> Self {
        let actor = actor.with_direction(direction);
        let half = actor.extent() * 0.5;
        Self::new(actor.with_position(origin - half), lifespan, linear_velocity)
    }

    pub fn lifespan(&self) -> f32 {
        self.lifespan
    }

    /// Seconds lived so far.
    pub fn age(&self) -> f32 {
        self.timer
    }

    pub fn linear_velocity(&self) -> f32 {
        self.linear_velocity
    }
}

impl ActorBehavior for Projectile {
    fn actor(&self) -> &Actor {
        &self.actor
    }

    fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    fn update(&mut self, dt: f32) {
        if self.actor.is_removed() {
            return;
        }
        self.timer += dt;
        if self.timer >= self.lifespan {
            self.actor.remove();
            return;
        }
        self.actor.update(dt);
    }
}
