//! Actor building blocks.
//!
//! Submodules overview:
//! - [`actor`] – positioned, animated, movable entity and the shared [`actor::ActorBehavior`] interface
//! - [`animation`] – timed frame sequences, per-direction sets and the controller that builds them
//! - [`boxcollider`] – axis-aligned bounding box used for collision tests
//! - [`framegrid`] – sprite sheet slicing into equal cells
//! - [`player`] – input-driven actor
//! - [`projectile`] – actor with a bounded lifespan
//! - [`timer`] – accumulator that fires every N seconds
//! - [`tint`] – color multiplier for draws

pub mod actor;
pub mod animation;
pub mod boxcollider;
pub mod framegrid;
pub mod player;
pub mod projectile;
pub mod timer;
pub mod tint;
