//! Coin Chase sprite engine library.
//!
//! This module exposes the sprite core (grid animations, actors, collision,
//! actor collections) and the Coin Chase scene built on top of it, for use in
//! integration tests and by host programs.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
