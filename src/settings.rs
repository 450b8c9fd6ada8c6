//! Physics tuning
//!
//! Defaults come from [`crate::consts`]. A JSON file can override any subset
//! of fields; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Simulation tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play area ===
    pub wall_left: f32,
    pub wall_right: f32,
    pub ceiling: f32,
    /// Ball center below this costs a life
    pub bottom_boundary: f32,

    // === Paddle ===
    /// Top horizontal speed (units/s)
    pub paddle_max_speed: f32,
    /// How fast velocity approaches the target (units/s²)
    pub paddle_acceleration: f32,
    /// Fraction of velocity kept per 60 Hz frame when coasting
    pub paddle_friction: f32,
    /// Coasting speed below which the paddle stops
    pub paddle_stop_threshold: f32,
    /// Ball speed-up per paddle hit
    pub paddle_speed_multiplier: f32,

    // === Ball serve ===
    /// Upward speed of a served ball
    pub serve_speed: f32,
    /// Width of the horizontal speed range, centered on zero
    pub serve_spread: f32,

    // === Rules ===
    pub starting_lives: u32,

    // === Timing ===
    /// Longest frame (seconds) that is still simulated
    pub max_frame_dt: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wall_left: WALL_LEFT,
            wall_right: WALL_RIGHT,
            ceiling: CEILING,
            bottom_boundary: BOTTOM_BOUNDARY,

            paddle_max_speed: PADDLE_MAX_SPEED,
            paddle_acceleration: PADDLE_ACCELERATION,
            paddle_friction: PADDLE_FRICTION,
            paddle_stop_threshold: PADDLE_STOP_THRESHOLD,
            paddle_speed_multiplier: PADDLE_SPEED_MULTIPLIER,

            serve_speed: BALL_SERVE_SPEED,
            serve_spread: BALL_SERVE_SPREAD,

            starting_lives: STARTING_LIVES,

            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Using default settings ({}): {}",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.wall_left >= self.wall_right {
            return Err(SettingsError::Invalid(format!(
                "wall_left ({}) must be left of wall_right ({})",
                self.wall_left, self.wall_right
            )));
        }
        if self.bottom_boundary >= self.ceiling {
            return Err(SettingsError::Invalid(format!(
                "bottom_boundary ({}) must be below ceiling ({})",
                self.bottom_boundary, self.ceiling
            )));
        }

        let positive = [
            ("paddle_max_speed", self.paddle_max_speed),
            ("paddle_acceleration", self.paddle_acceleration),
            ("paddle_speed_multiplier", self.paddle_speed_multiplier),
            ("serve_speed", self.serve_speed),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.paddle_friction) {
            return Err(SettingsError::Invalid(format!(
                "paddle_friction must be within [0, 1], got {}",
                self.paddle_friction
            )));
        }
        if self.paddle_stop_threshold < 0.0 || self.serve_spread < 0.0 {
            return Err(SettingsError::Invalid(
                "paddle_stop_threshold and serve_spread must not be negative".to_string(),
            ));
        }
        if self.starting_lives == 0 {
            return Err(SettingsError::Invalid(
                "starting_lives must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
