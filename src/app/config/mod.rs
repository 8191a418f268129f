// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Content root, swipe threshold, photo cache, management panel
//! - `[music]` - Track locator, volume, mute and autoplay
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `KEEPSAKE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! The application only reads this file. Changes made while it runs
//! (volume, added photos) live in memory and are gone on exit.
//!
//! # Examples
//!
//! ```no_run
//! use keepsake::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("falling back to defaults: {key}");
//! }
//! println!("swipe threshold: {}", config.gallery.swipe_threshold());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "ru", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Directory that root-relative photo and music locators resolve against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<PathBuf>,

    /// Horizontal distance that turns a drag into a swipe.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,

    /// Number of decoded photos kept in memory.
    #[serde(
        default = "default_cache_max_images",
        skip_serializing_if = "Option::is_none"
    )]
    pub cache_max_images: Option<usize>,

    /// Show the content management panel.
    #[serde(default)]
    pub management_panel: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            content_dir: None,
            swipe_threshold_px: default_swipe_threshold(),
            cache_max_images: default_cache_max_images(),
            management_panel: false,
        }
    }
}

impl GalleryConfig {
    /// Swipe threshold clamped to the accepted range.
    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold_px
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX)
            .clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX)
    }

    /// Photo cache capacity clamped to the accepted range.
    #[must_use]
    pub fn cache_capacity(&self) -> usize {
        self.cache_max_images
            .unwrap_or(DEFAULT_CACHE_MAX_IMAGES)
            .clamp(MIN_CACHE_MAX_IMAGES, MAX_CACHE_MAX_IMAGES)
    }
}

/// Background music settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MusicConfig {
    /// Track locator; root-relative locators resolve against the content root.
    #[serde(default = "default_track", skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,

    /// Initial volume (0.0 to 1.0).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,

    /// Whether audio starts muted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,

    /// Attempt to start playback automatically.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Delay before the autoplay attempt, in milliseconds.
    #[serde(
        default = "default_autoplay_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_delay_ms: Option<u64>,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            track: default_track(),
            volume: default_volume(),
            muted: Some(false),
            autoplay: default_autoplay(),
            autoplay_delay_ms: default_autoplay_delay_ms(),
        }
    }
}

impl MusicConfig {
    /// Delay before the autoplay attempt, clamped to the accepted range.
    #[must_use]
    pub fn autoplay_delay(&self) -> Duration {
        let ms = self
            .autoplay_delay_ms
            .unwrap_or(DEFAULT_AUTOPLAY_DELAY_MS)
            .min(MAX_AUTOPLAY_DELAY_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Background music settings.
    #[serde(default)]
    pub music: MusicConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_cache_max_images() -> Option<usize> {
    Some(DEFAULT_CACHE_MAX_IMAGES)
}

fn default_track() -> Option<String> {
    Some(DEFAULT_MUSIC_TRACK.to_string())
}

fn default_volume() -> Option<f32> {
    Some(DEFAULT_VOLUME)
}

fn default_autoplay() -> Option<bool> {
    Some(true)
}

fn default_autoplay_delay_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_DELAY_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
// Tests
// =============================================================================
