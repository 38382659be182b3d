//! Simulation time.
//!
//! [`WorldTime`] tracks elapsed seconds, the last delta and the frame count.
//! [`FixedStep`] turns variable host frame times into a whole number of fixed
//! ticks, carrying the remainder to the next frame.

use log::warn;

#[derive(Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    /// Advance by the unscaled `dt` and return the scaled delta.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let scaled_dt = dt * self.time_scale;
        self.elapsed += scaled_dt;
        self.delta = scaled_dt;
        self.frame_count += 1;
        scaled_dt
    }
}

/// Fixed-timestep accumulator.
#[derive(Clone, Copy, Debug)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
    max_steps: u32,
}

impl FixedStep {
    /// `step` seconds per tick, at most `max_steps` ticks per frame.
    pub fn new(step: f32, max_steps: u32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
        }
    }

    pub fn from_fps(fps: u32) -> Self {
        Self::new(1.0 / fps.max(1) as f32, 8)
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed host frame time, get the number of ticks to run now.
    ///
    /// Ticks beyond `max_steps` are dropped so a long stall cannot snowball.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }
        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if self.accumulator >= self.step {
            let dropped = (self.accumulator / self.step) as u32;
            warn!("Simulation fell behind, dropping {} ticks", dropped);
            self.accumulator %= self.step;
        }
        steps
    }
}
