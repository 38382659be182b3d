//! Events produced while ticking the scene.
//!
//! - `collision` – overlaps the game layer reacts to
pub mod collision;
