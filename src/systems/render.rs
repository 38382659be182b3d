//! Draw submission boundary.
//!
//! Actors never talk to a graphics API. They emit [`DrawCommand`]s into a
//! [`DrawSink`] supplied by the host:
//!
//! - [`RecordingSink`] keeps the commands in memory (tests, headless runs,
//!   JSON dumps).
//! - `RaylibSink` (feature `raylib`) forwards them to `draw_texture_pro`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::framegrid::Rect;
use crate::components::tint::Tint;

/// One sprite draw.
///
/// `position` is where the pivot lands in world space, `origin` is the pivot
/// inside the scaled destination rectangle (the frame center for actors).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub sheet: String,
    pub source: Rect,
    pub position: Vec2,
    pub origin: Vec2,
    pub scale: f32,
    /// Radians.
    pub rotation: f32,
    pub tint: Tint,
}

impl DrawCommand {
    /// Destination rectangle before rotation, top-left based.
    pub fn destination(&self) -> Rect {
        Rect {
            x: self.position.x - self.origin.x,
            y: self.position.y - self.origin.y,
            w: self.source.w * self.scale,
            h: self.source.h * self.scale,
        }
    }
}

pub trait DrawSink {
    fn submit(&mut self, command: DrawCommand);
}

#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Commands as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.commands)
    }
}

impl DrawSink for RecordingSink {
    fn submit(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

#[cfg(feature = "raylib")]
pub use self::raylib_sink::RaylibSink;

#[cfg(feature = "raylib")]
mod raylib_sink {
    use log::warn;
    use raylib::prelude::*;
    use rustc_hash::FxHashMap;

    use super::{DrawCommand, DrawSink};

    /// Forwards draw commands to a raylib draw handle.
    ///
    /// Textures are looked up by sheet key; unknown keys are skipped.
    pub struct RaylibSink<'a, D: RaylibDraw> {
        d: &'a mut D,
        textures: &'a FxHashMap<String, Texture2D>,
    }

    impl<'a, D: RaylibDraw> RaylibSink<'a, D> {
        pub fn new(d: &'a mut D, textures: &'a FxHashMap<String, Texture2D>) -> Self {
            Self { d, textures }
        }
    }

    impl<D: RaylibDraw> DrawSink for RaylibSink<'_, D> {
        fn submit(&mut self, command: DrawCommand) {
            let Some(tex) = self.textures.get(&command.sheet) else {
                warn!("Texture '{}' not loaded, skipping draw", command.sheet);
                return;
            };
            let src = Rectangle::new(
                command.source.x,
                command.source.y,
                command.source.w,
                command.source.h,
            );
            let dest = Rectangle::new(
                command.position.x,
                command.position.y,
                command.source.w * command.scale,
                command.source.h * command.scale,
            );
            let origin = Vector2::new(command.origin.x, command.origin.y);
            let tint = Color::new(command.tint.r, command.tint.g, command.tint.b, command.tint.a);
            self.d
                .draw_texture_pro(tex, src, dest, origin, command.rotation.to_degrees(), tint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> DrawCommand {
        DrawCommand {
            sheet: "hero".to_string(),
            source: Rect::new(32.0, 0.0, 32.0, 32.0),
            position: Vec2::new(132.0, 132.0),
            origin: Vec2::new(32.0, 32.0),
            scale: 2.0,
            rotation: 0.0,
            tint: Tint::WHITE,
        }
    }

    #[test]
    fn test_destination_covers_scaled_frame() {
        assert_eq!(command().destination(), Rect::new(100.0, 100.0, 64.0, 64.0));
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        let mut second = command();
        second.sheet = "coin".to_string();
        sink.submit(command());
        sink.submit(second);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.commands[0].sheet, "hero");
        assert_eq!(sink.commands[1].sheet, "coin");
    }

    #[test]
    fn test_json_dump() {
        let mut sink = RecordingSink::new();
        sink.submit(command());
        let json = sink.to_json().unwrap();
        let back: Vec<DrawCommand> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sink.commands);
    }
}
