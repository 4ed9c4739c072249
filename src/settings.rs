//! Game settings
//!
//! Loaded from an optional JSON file; anything missing falls back to the
//! built-in defaults.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Environment variable naming a settings file
pub const SETTINGS_ENV: &str = "SOLO_PONG_SETTINGS";
/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "solo_pong_settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window size in pixels
    pub window_width: u32,
    pub window_height: u32,
    pub window_title: String,
    /// Ball velocity at launch (pixels/s)
    pub ball_velocity: Vec2,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            ball_velocity: Vec2::from_array(DEFAULT_BALL_VELOCITY),
        }
    }
}

impl Settings {
    /// Smallest window height that still fits the paddle's travel band
    pub const MIN_HEIGHT: u32 = (2.0 * (PADDLE_HALF_HEIGHT + THICKNESS)) as u32;
    /// Smallest window width that fits the right wall and the paddle
    pub const MIN_WIDTH: u32 = (3.0 * THICKNESS) as u32;

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Where to look for a settings file, if anywhere
    fn settings_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(SETTINGS_FILE);
        local.exists().then_some(local)
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.window_height < Self::MIN_HEIGHT {
            return Err(SettingsError::Invalid(format!(
                "window_height {} is below the minimum of {}",
                self.window_height,
                Self::MIN_HEIGHT
            )));
        }
        if self.window_width < Self::MIN_WIDTH {
            return Err(SettingsError::Invalid(format!(
                "window_width {} is below the minimum of {}",
                self.window_width,
                Self::MIN_WIDTH
            )));
        }
        if !self.ball_velocity.is_finite() {
            return Err(SettingsError::Invalid(
                "ball_velocity must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
