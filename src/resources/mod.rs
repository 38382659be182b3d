//! Long-lived data owned by the scene or handed in by the host.
//!
//! Overview
//! - `actorcollection` – owner of spawned actors, prunes removed ones once per tick
//! - `animationstore` – shared animation sets keyed by sheet
//! - `gameconfig` – INI-backed settings
//! - `input` – per-tick input snapshot
//! - `texturestore` – image handles keyed by string IDs
//! - `worldtime` – simulation time and the fixed-step accumulator
pub mod actorcollection;
pub mod animationstore;
pub mod gameconfig;
pub mod input;
pub mod texturestore;
pub mod worldtime;
