// Accumulates tick time and fires every `duration` seconds.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    pub duration: f32,
    pub elapsed: f32,
}

impl Timer {
    pub fn new(duration: f32) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
        }
    }

    /// Add `dt` and return how many times the timer fired.
    ///
    /// Each firing subtracts one `duration`, so the cadence survives slow
    /// ticks. A non-positive duration never fires.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.duration <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.duration {
            self.elapsed -= self.duration;
            fired += 1;
        }
        fired
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}
