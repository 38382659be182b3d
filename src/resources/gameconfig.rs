//! Game configuration.
//!
//! Settings loaded from an INI configuration file. Defaults reproduce the
//! stock Coin Chase scene so the game runs without any file present.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//!
//! [sheet]
//! rows = 4
//! columns = 3
//! frame_duration = 0.1
//! scale = 2.0
//!
//! [game]
//! player_speed = 200
//! enemy_speed = 200
//! coin_count = 5
//! score_interval = 2.0
//! score_points = 10
//! coin_points = 20
//! enemy_respawn = 8.0
//! bullet_speed = 400
//! bullet_lifespan = 1.5
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::error::{Result, SpriteError};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_SHEET_ROWS: u32 = 4;
const DEFAULT_SHEET_COLUMNS: u32 = 3;
const DEFAULT_FRAME_DURATION: f32 = 0.1;
const DEFAULT_SCALE: f32 = 2.0;
const DEFAULT_PLAYER_SPEED: f32 = 200.0;
const DEFAULT_ENEMY_SPEED: f32 = 200.0;
const DEFAULT_COIN_COUNT: u32 = 5;
const DEFAULT_SCORE_INTERVAL: f32 = 2.0;
const DEFAULT_SCORE_POINTS: u32 = 10;
const DEFAULT_COIN_POINTS: u32 = 20;
const DEFAULT_ENEMY_RESPAWN: f32 = 8.0;
const DEFAULT_BULLET_SPEED: f32 = 400.0;
const DEFAULT_BULLET_LIFESPAN: f32 = 1.5;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Play area / window width in pixels.
    pub window_width: u32,
    /// Play area / window height in pixels.
    pub window_height: u32,
    /// Fixed simulation rate.
    pub target_fps: u32,
    /// Rows of every walking sheet.
    pub sheet_rows: u32,
    /// Columns of every walking sheet.
    pub sheet_columns: u32,
    /// Seconds each animation frame is shown.
    pub frame_duration: f32,
    /// Draw and collision scale of the walking actors.
    pub scale: f32,
    pub player_speed: f32,
    /// Speed of the first enemy; the other two run at three quarters of it.
    pub enemy_speed: f32,
    pub coin_count: u32,
    pub score_interval: f32,
    pub score_points: u32,
    pub coin_points: u32,
    pub enemy_respawn: f32,
    pub bullet_speed: f32,
    pub bullet_lifespan: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            sheet_rows: DEFAULT_SHEET_ROWS,
            sheet_columns: DEFAULT_SHEET_COLUMNS,
            frame_duration: DEFAULT_FRAME_DURATION,
            scale: DEFAULT_SCALE,
            player_speed: DEFAULT_PLAYER_SPEED,
            enemy_speed: DEFAULT_ENEMY_SPEED,
            coin_count: DEFAULT_COIN_COUNT,
            score_interval: DEFAULT_SCORE_INTERVAL,
            score_points: DEFAULT_SCORE_POINTS,
            coin_points: DEFAULT_COIN_POINTS,
            enemy_respawn: DEFAULT_ENEMY_RESPAWN,
            bullet_speed: DEFAULT_BULLET_SPEED,
            bullet_lifespan: DEFAULT_BULLET_LIFESPAN,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<()> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(|e| {
            SpriteError::ConfigFile(format!("{}: {}", self.config_path.display(), e))
        })?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, sheet {}x{} @ {}s, scale={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.sheet_rows,
            self.sheet_columns,
            self.frame_duration,
            self.scale
        );

        Ok(())
    }

    /// Parse INI text directly, same rules as [`GameConfig::load_from_file`].
    pub fn load_from_str(&mut self, text: &str) -> Result<()> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(SpriteError::ConfigFile)?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        let uint = |section: &str, key: &str| config.getuint(section, key).ok().flatten();
        let float = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };

        // [window] section
        if let Some(width) = uint("window", "width") {
            self.window_width = width as u32;
        }
        if let Some(height) = uint("window", "height") {
            self.window_height = height as u32;
        }
        if let Some(fps) = uint("window", "target_fps") {
            self.target_fps = fps as u32;
        }

        // [sheet] section
        if let Some(rows) = uint("sheet", "rows") {
            self.sheet_rows = rows as u32;
        }
        if let Some(columns) = uint("sheet", "columns") {
            self.sheet_columns = columns as u32;
        }
        if let Some(duration) = float("sheet", "frame_duration") {
            self.frame_duration = duration;
        }
        if let Some(scale) = float("sheet", "scale") {
            self.scale = scale;
        }

        // [game] section
        if let Some(speed) = float("game", "player_speed") {
            self.player_speed = speed;
        }
        if let Some(speed) = float("game", "enemy_speed") {
            self.enemy_speed = speed;
        }
        if let Some(count) = uint("game", "coin_count") {
            self.coin_count = count as u32;
        }
        if let Some(interval) = float("game", "score_interval") {
            self.score_interval = interval;
        }
        if let Some(points) = uint("game", "score_points") {
            self.score_points = points as u32;
        }
        if let Some(points) = uint("game", "coin_points") {
            self.coin_points = points as u32;
        }
        if let Some(seconds) = float("game", "enemy_respawn") {
            self.enemy_respawn = seconds;
        }
        if let Some(speed) = float("game", "bullet_speed") {
            self.bullet_speed = speed;
        }
        if let Some(seconds) = float("game", "bullet_lifespan") {
            self.bullet_lifespan = seconds;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<()> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("sheet", "rows", Some(self.sheet_rows.to_string()));
        config.set("sheet", "columns", Some(self.sheet_columns.to_string()));
        config.set("sheet", "frame_duration", Some(self.frame_duration.to_string()));
        config.set("sheet", "scale", Some(self.scale.to_string()));

        config.set("game", "player_speed", Some(self.player_speed.to_string()));
        config.set("game", "enemy_speed", Some(self.enemy_speed.to_string()));
        config.set("game", "coin_count", Some(self.coin_count.to_string()));
        config.set("game", "score_interval", Some(self.score_interval.to_string()));
        config.set("game", "score_points", Some(self.score_points.to_string()));
        config.set("game", "coin_points", Some(self.coin_points.to_string()));
        config.set("game", "enemy_respawn", Some(self.enemy_respawn.to_string()));
        config.set("game", "bullet_speed", Some(self.bullet_speed.to_string()));
        config.set("game", "bullet_lifespan", Some(self.bullet_lifespan.to_string()));

        config.write(&self.config_path).map_err(|e| {
            SpriteError::ConfigFile(format!("{}: {}", self.config_path.display(), e))
        })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.sheet_rows, 4);
        assert_eq!(config.sheet_columns, 3);
        assert_eq!(config.scale, 2.0);
    }

    #[test]
    fn test_partial_override() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[sheet]\nframe_duration = 0.25\n\n[game]\ncoin_count = 2\n")
            .unwrap();
        assert_eq!(config.frame_duration, 0.25);
        assert_eq!(config.coin_count, 2);
        assert_eq!(config.player_speed, DEFAULT_PLAYER_SPEED);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/nonexistent/dir/config.ini");
        assert!(matches!(
            config.load_from_file(),
            Err(SpriteError::ConfigFile(_))
        ));
        assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("coinchase-config-{}.ini", std::process::id()));
        let mut original = GameConfig::with_path(&path);
        original.coin_count = 9;
        original.frame_duration = 0.125;
        original.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, original);
    }
}
