//! Stateless passes over actors.
//!
//! - `collision` – bounding box overlap tests
//! - `render` – draw submission boundary
pub mod collision;
pub mod render;
