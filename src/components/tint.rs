//! Color tint for draw submissions.

use serde::{Deserialize, Serialize};

/// RGBA multiplier applied by the renderer. White leaves the sprite unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    pub const WHITE: Tint = Tint::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::WHITE
    }
}
