//! Per-tick input snapshot.
//!
//! Input handling belongs to the host. The host samples its devices once per
//! frame and writes the result into an [`InputState`]; the game layer only
//! reads it. Press and release edges latch until a tick has seen them, so a
//! frame that runs no tick does not lose them and a frame that runs several
//! ticks reports them only once. Defaults bind WASD and the arrow keys to movement, space to fire
//! and escape to quit when the `raylib` feature is enabled.
use glam::Vec2;

/// Boolean key state with edge detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolState {
    /// Whether the key is currently held this tick.
    pub active: bool,
    /// Whether the key went down this tick.
    pub just_pressed: bool,
    /// Whether the key went up this tick.
    pub just_released: bool,
}

impl BoolState {
    /// Feed the current raw key level and recompute the edges.
    pub fn set(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }

    /// Feed the current raw key level, keeping edges no tick has consumed yet.
    pub fn sample(&mut self, down: bool) {
        self.just_pressed |= down && !self.active;
        self.just_released |= !down && self.active;
        self.active = down;
    }

    pub fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: BoolState,
    pub down: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    pub fire: BoolState,
    pub back: BoolState,
}

impl InputState {
    /// Unit direction from the held movement keys (zero when none or opposing).
    ///
    /// Diagonals are normalized so that speed stays constant.
    pub fn direction(&self) -> Vec2 {
        let mut direction = Vec2::ZERO;
        if self.up.active {
            direction.y -= 1.0;
        }
        if self.down.active {
            direction.y += 1.0;
        }
        if self.left.active {
            direction.x -= 1.0;
        }
        if self.right.active {
            direction.x += 1.0;
        }
        direction.normalize_or_zero()
    }

    /// The host should shut down.
    pub fn quit_requested(&self) -> bool {
        self.back.just_pressed
    }

    /// Forget every press/release edge once a tick has seen them.
    pub fn clear_edges(&mut self) {
        for key in [
            &mut self.up,
            &mut self.down,
            &mut self.left,
            &mut self.right,
            &mut self.fire,
            &mut self.back,
        ] {
            key.clear_edges();
        }
    }

    /// Sample the keyboard through raylib. Edges latch until
    /// [`InputState::clear_edges`].
    #[cfg(feature = "raylib")]
    pub fn update_from_raylib(&mut self, rl: &raylib::RaylibHandle) {
        use raylib::consts::KeyboardKey as Key;

        let held = |a: Key, b: Key| rl.is_key_down(a) || rl.is_key_down(b);
        self.up.sample(held(Key::KEY_W, Key::KEY_UP));
        self.down.sample(held(Key::KEY_S, Key::KEY_DOWN));
        self.left.sample(held(Key::KEY_A, Key::KEY_LEFT));
        self.right.sample(held(Key::KEY_D, Key::KEY_RIGHT));
        self.fire.sample(rl.is_key_down(Key::KEY_SPACE));
        self.back.sample(rl.is_key_down(Key::KEY_ESCAPE));
    }
}
