// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[slider]` - Initial batch size, move throttling, touch input, compact breakpoint
//! - `[window]` - Window geometry, also used to pick the device class at startup
//!
//! # Examples
//!
//! ```no_run
//! use iced_pager::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let _throttle = config.slider.move_throttle();
//!
//! // First run: drop an editable settings.toml next to where it is read.
//! config::write_defaults_if_missing().expect("Failed to write config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Slider behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliderConfig {
    /// Pages requested when the slider mounts.
    #[serde(default = "default_initial_batch", skip_serializing_if = "Option::is_none")]
    pub initial_batch: Option<usize>,

    /// Minimum interval between two dispatched pointer moves (milliseconds).
    #[serde(
        default = "default_move_throttle_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub move_throttle_ms: Option<u64>,

    /// Whether touch press/move/release is handled.
    #[serde(default = "default_touch_enabled", skip_serializing_if = "Option::is_none")]
    pub touch_enabled: Option<bool>,

    /// Viewport width at or below which the compact surface is used.
    #[serde(
        default = "default_compact_breakpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub compact_breakpoint: Option<u32>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            initial_batch: default_initial_batch(),
            move_throttle_ms: default_move_throttle_ms(),
            touch_enabled: default_touch_enabled(),
            compact_breakpoint: default_compact_breakpoint(),
        }
    }
}

impl SliderConfig {
    /// Initial batch size, never below [`MIN_INITIAL_BATCH`].
    #[must_use]
    pub fn initial_batch(&self) -> usize {
        self.initial_batch
            .unwrap_or(DEFAULT_INITIAL_BATCH)
            .max(MIN_INITIAL_BATCH)
    }

    /// Move throttle interval, clamped to the supported range.
    #[must_use]
    pub fn move_throttle(&self) -> Duration {
        let ms = self
            .move_throttle_ms
            .unwrap_or(DEFAULT_MOVE_THROTTLE_MS)
            .clamp(MIN_MOVE_THROTTLE_MS, MAX_MOVE_THROTTLE_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn touch_enabled(&self) -> bool {
        self.touch_enabled.unwrap_or(DEFAULT_TOUCH_ENABLED)
    }

    #[must_use]
    pub fn compact_breakpoint(&self) -> u32 {
        self.compact_breakpoint.unwrap_or(DEFAULT_COMPACT_BREAKPOINT)
    }
}

/// Window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default = "default_window_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl WindowConfig {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width.unwrap_or(DEFAULT_WINDOW_WIDTH)
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height.unwrap_or(DEFAULT_WINDOW_HEIGHT)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub slider: SliderConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_initial_batch() -> Option<usize> {
    Some(DEFAULT_INITIAL_BATCH)
}

fn default_move_throttle_ms() -> Option<u64> {
    Some(DEFAULT_MOVE_THROTTLE_MS)
}

fn default_touch_enabled() -> Option<bool> {
    Some(DEFAULT_TOUCH_ENABLED)
}

fn default_compact_breakpoint() -> Option<u32> {
    Some(DEFAULT_COMPACT_BREAKPOINT)
}

fn default_window_width() -> Option<u32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_window_height() -> Option<u32> {
    Some(DEFAULT_WINDOW_HEIGHT)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Writes a default `settings.toml` at the default path unless one exists.
pub fn write_defaults_if_missing() -> Result<Option<PathBuf>> {
    write_defaults_if_missing_with_override(None)
}

/// Writes a default `settings.toml` into a custom directory unless one
/// exists. Returns the path written, if any.
pub fn write_defaults_if_missing_with_override(
    base_dir: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
    match config_path_with_override(base_dir) {
        Some(path) if !path.exists() => {
            save_to_path(&Config::default(), &path)?;
            Ok(Some(path))
        }
        _ => Ok(None),
    }
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            slider: SliderConfig {
                initial_batch: Some(3),
                move_throttle_ms: Some(32),
                touch_enabled: Some(false),
                compact_breakpoint: Some(600),
            },
            window: WindowConfig {
                width: Some(1024),
                height: Some(768),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn defaults_are_written_only_when_missing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().to_path_buf());

        let written = write_defaults_if_missing_with_override(base.clone())
            .expect("write defaults")
            .expect("file was missing");
        assert_eq!(load_from_path(&written).expect("load defaults"), Config::default());

        fs::write(&written, "[slider]\ninitial_batch = 4\n").expect("edit config");
        assert!(write_defaults_if_missing_with_override(base.clone())
            .expect("second call")
            .is_none());
        let (config, _) = load_with_override(base);
        assert_eq!(config.slider.initial_batch, Some(4));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[slider]\nmove_throttle_ms = 40\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("load config");
        assert_eq!(loaded.slider.move_throttle_ms, Some(40));
        assert_eq!(loaded.slider.initial_batch, Some(DEFAULT_INITIAL_BATCH));
        assert_eq!(loaded.window, WindowConfig::default());
    }

    #[test]
    fn invalid_toml_yields_defaults_and_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_from_path_reports_parse_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[slider]\ninitial_batch = \"two\"\n").expect("write config");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let slider = SliderConfig {
            initial_batch: Some(0),
            move_throttle_ms: Some(10_000),
            touch_enabled: None,
            compact_breakpoint: None,
        };
        assert_eq!(slider.initial_batch(), MIN_INITIAL_BATCH);
        assert_eq!(slider.move_throttle(), Duration::from_millis(MAX_MOVE_THROTTLE_MS));
        assert_eq!(slider.touch_enabled(), DEFAULT_TOUCH_ENABLED);
        assert_eq!(slider.compact_breakpoint(), DEFAULT_COMPACT_BREAKPOINT);
    }
}
