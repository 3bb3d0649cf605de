// SPDX-License-Identifier: MPL-2.0
//! This module handles the player configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use adaptive_player::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.volume = Some(0.5);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.volume, Some(0.5));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::ui::ControlsHideDelay;
use crate::domain::video::{KeyboardSeekStep, PlaybackRate, Volume, VolumeStep};
use crate::error::Result;
use crate::video_player::SessionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "AdaptivePlayer";

/// Persisted player preferences.
///
/// Every field is optional so that partial or older files still load;
/// the typed accessors fall back to [`defaults`](self) and clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub volume: Option<f32>,
    #[serde(default)]
    pub muted: Option<bool>,
    #[serde(default)]
    pub playback_rate: Option<f64>,
    #[serde(default)]
    pub keyboard_seek_step_secs: Option<f64>,
    #[serde(default)]
    pub volume_step: Option<f32>,
    #[serde(default)]
    pub controls_hide_delay_ms: Option<u64>,
    /// `"auto"` or a resolution label such as `"720p"`.
    #[serde(default)]
    pub preferred_quality: Option<String>,
    #[serde(default)]
    pub enable_worker: Option<bool>,
    #[serde(default)]
    pub low_latency_mode: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            volume: Some(DEFAULT_VOLUME),
            muted: Some(false),
            playback_rate: Some(DEFAULT_PLAYBACK_RATE),
            keyboard_seek_step_secs: Some(DEFAULT_KEYBOARD_SEEK_STEP_SECS),
            volume_step: Some(DEFAULT_VOLUME_STEP),
            controls_hide_delay_ms: Some(DEFAULT_CONTROLS_HIDE_DELAY_MS),
            preferred_quality: None,
            enable_worker: Some(DEFAULT_ENABLE_WORKER),
            low_latency_mode: Some(DEFAULT_LOW_LATENCY_MODE),
        }
    }
}

impl Config {
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume.map_or_else(Volume::default, Volume::new)
    }

    #[must_use]
    pub fn muted(&self) -> bool {
        self.muted.unwrap_or(false)
    }

    #[must_use]
    pub fn playback_rate(&self) -> PlaybackRate {
        self.playback_rate
            .map_or_else(PlaybackRate::default, PlaybackRate::new)
    }

    #[must_use]
    pub fn keyboard_seek_step(&self) -> KeyboardSeekStep {
        self.keyboard_seek_step_secs
            .map_or_else(KeyboardSeekStep::default, KeyboardSeekStep::new)
    }

    #[must_use]
    pub fn volume_step(&self) -> VolumeStep {
        self.volume_step
            .map_or_else(VolumeStep::default, VolumeStep::new)
    }

    #[must_use]
    pub fn controls_hide_delay(&self) -> ControlsHideDelay {
        self.controls_hide_delay_ms
            .map_or_else(ControlsHideDelay::default, ControlsHideDelay::new)
    }

    /// Options handed to the streaming engine when a session is created.
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            enable_worker: self.enable_worker.unwrap_or(DEFAULT_ENABLE_WORKER),
            low_latency_mode: self.low_latency_mode.unwrap_or(DEFAULT_LOW_LATENCY_MODE),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
