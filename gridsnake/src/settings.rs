use std::fs;
use std::path::Path;
use serde::Deserialize;
use crate::error::{GameError, Result};
use crate::playing::PlayOptions;
use crate::snake::{TickPolicy, DEFAULT_MOVE_INTERVAL};

/// Everything the game reads from its settings file. Missing fields fall back to defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub title: String,
    pub window_width: i32,
    pub window_height: i32,
    pub grid_cell_count: u32,
    pub move_interval: f32,
    pub tick_policy: TickPolicy,
    pub start_x: f32,
    pub start_y: f32,
    pub food_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            title: "Snake Game".to_string(),
            window_width: 600,
            window_height: 600,
            grid_cell_count: 30,
            move_interval: DEFAULT_MOVE_INTERVAL,
            tick_policy: TickPolicy::Reset,
            start_x: 0.0,
            start_y: 0.0,
            food_seed: None,
        }
    }
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Settings::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result {
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(GameError::InvalidSettings(format!(
                "window must be at least 1x1, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.grid_cell_count == 0 {
            return Err(GameError::InvalidSettings("grid_cell_count must be positive".into()));
        }
        if !self.move_interval.is_finite() || self.move_interval <= 0.0 {
            return Err(GameError::InvalidSettings(format!(
                "move_interval must be a positive number of seconds, got {}",
                self.move_interval
            )));
        }
        Ok(())
    }

    pub fn play_options(&self) -> PlayOptions {
        PlayOptions {
            start_x: self.start_x,
            start_y: self.start_y,
            move_interval: self.move_interval,
            tick_policy: self.tick_policy,
        }
    }
}
