//! Positioned, animated, movable entities.
//!
//! An [`Actor`] owns its own state and mutates it only in [`Actor::update`].
//! It holds a shared, read-only [`AnimationSet`] and picks the sequence that
//! matches the way it is facing. Specializations ([`PlayerActor`],
//! [`Projectile`]) wrap an `Actor` and are driven through the common
//! [`ActorBehavior`] interface.
//!
//! Lifecycle: `Idle <-> Moving -> Removed`. `Removed` is terminal; removed
//! actors are skipped by update and draw and get pruned by their owner.
//!
//! [`PlayerActor`]: crate::components::player::PlayerActor
//! [`Projectile`]: crate::components::projectile::Projectile

use std::rc::Rc;

use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::components::animation::AnimationSet;
use crate::components::boxcollider::BoxCollider;
use crate::components::framegrid::Rect;
use crate::components::tint::Tint;
use crate::resources::texturestore::SheetHandle;
use crate::systems::render::{DrawCommand, DrawSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorState {
    Idle,
    Moving,
    Removed,
}

/// Facing derived from a direction vector. Screen coordinates: +y is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    pub fn name(self) -> &'static str {
        match self {
            Facing::Up => "Up",
            Facing::Down => "Down",
            Facing::Left => "Left",
            Facing::Right => "Right",
        }
    }

    /// Dominant axis wins; horizontal wins ties. `None` for a zero vector.
    pub fn from_direction(direction: Vec2) -> Option<Facing> {
        let (x, y) = (direction.x, direction.y);
        if x == 0.0 && y == 0.0 {
            None
        } else if x.abs() >= y.abs() {
            Some(if x < 0.0 { Facing::Left } else { Facing::Right })
        } else {
            Some(if y < 0.0 { Facing::Up } else { Facing::Down })
        }
    }
}

#[derive(Debug, Clone)]
pub struct Actor {
    position: Vec2,
    direction: Vec2,
    speed: f32,
    scale: f32,
    rotation: f32,
    rotation_speed: f32,
    tint: Tint,

    sheet: Option<SheetHandle>,
    frame_size: Vec2,
    frame: Option<Rect>,
    animations: Option<Rc<AnimationSet>>,
    animation_key: String,
    clock: f32,
    animating: bool,

    is_active: bool,
    is_alive: bool,
    is_removed: bool,
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            direction: Vec2::ZERO,
            speed: 0.0,
            scale: 1.0,
            rotation: 0.0,
            rotation_speed: 0.0,
            tint: Tint::WHITE,
            sheet: None,
            frame_size: Vec2::ZERO,
            frame: None,
            animations: None,
            animation_key: String::new(),
            clock: 0.0,
            animating: true,
            is_active: true,
            is_alive: true,
            is_removed: false,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_direction(mut self, direction: Vec2) -> Self {
        self.set_direction(direction);
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    pub fn with_rotation_speed(mut self, radians_per_second: f32) -> Self {
        self.rotation_speed = radians_per_second;
        self
    }

    pub fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }

    /// Non-animated actor showing one fixed region of `sheet`.
    pub fn with_static_frame(mut self, sheet: SheetHandle, frame: Rect) -> Self {
        self.sheet = Some(sheet);
        self.frame = Some(frame);
        self.frame_size = Vec2::new(frame.w, frame.h);
        self
    }

    /// Share `set` with this actor. The sheet and cell size come from its grid.
    pub fn bind_animations(&mut self, set: Rc<AnimationSet>) {
        let (w, h) = set.grid().cell_size();
        self.sheet = Some(set.grid().sheet().clone());
        self.frame_size = Vec2::new(w, h);

        if !set.contains(&self.animation_key) {
            let facing = Facing::from_direction(self.direction)
                .map(Facing::name)
                .filter(|name| set.contains(name));
            let fallback = facing
                .map(str::to_string)
                .or_else(|| set.names().min().map(str::to_string));
            if let Some(key) = fallback {
                self.animation_key = key;
                self.clock = 0.0;
            }
        }
        // static fallback until a named sequence resolves
        self.frame = set.grid().frame_at(0);
        self.animations = Some(set);
        self.refresh_frame();
    }

    pub fn animations(&self) -> Option<&Rc<AnimationSet>> {
        self.animations.as_ref()
    }

    /// Switch to animation `name`, restarting its clock.
    ///
    /// An unknown name is accepted; the actor keeps its last frame until a
    /// known animation is selected again.
    pub fn play_animation(&mut self, name: &str) {
        if self.animation_key != name {
            self.animation_key = name.to_string();
            self.clock = 0.0;
        }
        self.refresh_frame();
    }

    pub fn current_animation(&self) -> &str {
        &self.animation_key
    }

    /// Seconds since the current animation started.
    pub fn animation_clock(&self) -> f32 {
        self.clock
    }

    /// Freeze on the first frame of the current animation.
    pub fn stop_animation(&mut self) {
        self.animating = false;
        self.clock = 0.0;
        self.refresh_frame();
    }

    pub fn resume_animation(&mut self) {
        self.animating = true;
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn current_frame(&self) -> Option<Rect> {
        self.frame
    }

    pub fn update(&mut self, dt: f32) {
        if self.is_removed {
            return;
        }
        self.advance_animation(dt);
        if self.is_active && self.is_alive {
            self.position += self.direction * self.speed * dt;
            self.rotation += self.rotation_speed * dt;
        }
    }

    fn advance_animation(&mut self, dt: f32) {
        if self.animating {
            self.clock += dt;
        }
        if let Some(facing) = Facing::from_direction(self.direction) {
            if facing.name() != self.animation_key {
                self.play_animation(facing.name());
                return;
            }
        }
        self.refresh_frame();
    }

    fn refresh_frame(&mut self) {
        let Some(set) = &self.animations else {
            return;
        };
        match set.get_frame(&self.animation_key, self.clock) {
            Ok(rect) => self.frame = Some(rect),
            Err(e) => debug!("{}, holding last frame", e),
        }
    }

    pub fn draw(&self, sink: &mut dyn DrawSink) {
        if self.is_removed || !self.is_active {
            return;
        }
        let (Some(sheet), Some(frame)) = (&self.sheet, self.frame) else {
            return;
        };
        let half = Vec2::new(frame.w, frame.h) * self.scale * 0.5;
        sink.submit(DrawCommand {
            sheet: sheet.key().to_string(),
            source: frame,
            position: self.position + half,
            origin: half,
            scale: self.scale,
            rotation: self.rotation,
            tint: self.tint,
        });
    }

    pub fn state(&self) -> ActorState {
        if self.is_removed {
            ActorState::Removed
        } else if self.is_active && self.is_alive && self.speed != 0.0 && self.direction != Vec2::ZERO
        {
            ActorState::Moving
        } else {
            ActorState::Idle
        }
    }

    /// Bounding extent: cell size times scale.
    pub fn extent(&self) -> Vec2 {
        self.frame_size * self.scale
    }

    pub fn bounds(&self) -> BoxCollider {
        BoxCollider::new(self.position, self.extent())
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.extent() * 0.5
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Stored normalized; a zero vector stays zero.
    pub fn set_direction(&mut self, direction: Vec2) {
        self.direction = direction.normalize_or_zero();
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, radians: f32) {
        self.rotation = radians;
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    pub fn tint(&self) -> Tint {
        self.tint
    }

    pub fn set_tint(&mut self, tint: Tint) {
        self.tint = tint;
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.is_alive = alive;
    }

    pub fn is_removed(&self) -> bool {
        self.is_removed
    }

    /// Mark for pruning. There is no way back.
    pub fn remove(&mut self) {
        self.is_removed = true;
    }
}

/// Interface shared by every actor kind so owners can tick them uniformly.
pub trait ActorBehavior {
    fn actor(&self) -> &Actor;

    fn actor_mut(&mut self) -> &mut Actor;

    fn update(&mut self, dt: f32);

    fn draw(&self, sink: &mut dyn DrawSink) {
        self.actor().draw(sink);
    }

    fn is_removed(&self) -> bool {
        self.actor().is_removed()
    }
}

impl ActorBehavior for Actor {
    fn actor(&self) -> &Actor {
        self
    }

    fn actor_mut(&mut self) -> &mut Actor {
        self
    }

    fn update(&mut self, dt: f32) {
        Actor::update(self, dt);
    }
}
