// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, loading and saving
//! overlay preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[hud]` - Banner cooldown and transition duration
//! - `[toast]` - Toast display time, removal delay and pulse period
//! - `[layout]` - Edge margin and safe-area insets
//!
//! Every field is optional. Missing fields fall back to the values in
//! [`defaults`], and out-of-range values are clamped when converted into
//! timing types (see [`crate::ui::notifications::HudTiming`]).
//!
//! # Examples
//!
//! ```no_run
//! use iced_hud::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.hud.cooldown_ms = Some(800);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedHud";

// =============================================================================
// Section Structs
// =============================================================================

/// HUD banner settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HudConfig {
    /// Idle gap between two banners, in milliseconds.
    #[serde(default = "default_cooldown_ms", skip_serializing_if = "Option::is_none")]
    pub cooldown_ms: Option<u64>,

    /// Slide transition duration, in milliseconds.
    #[serde(default = "default_transition_ms", skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: default_cooldown_ms(),
            transition_ms: default_transition_ms(),
        }
    }
}

/// Toast settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Time a toast stays visible, in milliseconds.
    #[serde(default = "default_toast_display_ms", skip_serializing_if = "Option::is_none")]
    pub display_ms: Option<u64>,

    /// Delay between hiding and discarding a toast, in milliseconds.
    #[serde(
        default = "default_toast_removal_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub removal_delay_ms: Option<u64>,

    /// Icon pulse loop period, in milliseconds.
    #[serde(default = "default_pulse_period_ms", skip_serializing_if = "Option::is_none")]
    pub pulse_period_ms: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            display_ms: default_toast_display_ms(),
            removal_delay_ms: default_toast_removal_delay_ms(),
            pulse_period_ms: default_pulse_period_ms(),
        }
    }
}

/// Safe-area insets reported by the host, in logical pixels.
///
/// Desktop windows usually have none; hosts drawing under a title bar or a
/// notch can declare the reserved area here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SafeAreaConfig {
    #[serde(default)]
    pub top: f32,
    #[serde(default)]
    pub bottom: f32,
    #[serde(default)]
    pub left: f32,
    #[serde(default)]
    pub right: f32,
}

/// Overlay layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Gap between an overlay and its display edge.
    #[serde(default = "default_edge_margin", skip_serializing_if = "Option::is_none")]
    pub edge_margin: Option<f32>,

    #[serde(default)]
    pub safe_area: SafeAreaConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            edge_margin: default_edge_margin(),
            safe_area: SafeAreaConfig::default(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Complete overlay configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub hud: HudConfig,

    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

fn default_cooldown_ms() -> Option<u64> {
    Some(DEFAULT_HUD_COOLDOWN_MS)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_toast_display_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DISPLAY_MS)
}

fn default_toast_removal_delay_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_REMOVAL_DELAY_MS)
}

fn default_pulse_period_ms() -> Option<u64> {
    Some(DEFAULT_PULSE_PERIOD_MS)
}

fn default_edge_margin() -> Option<f32> {
    Some(DEFAULT_EDGE_MARGIN)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory.
///
/// Never fails: a missing file yields the defaults, and an unreadable or
/// malformed file yields the defaults plus a warning message for the user.
pub fn load() -> (Config, Option<String>) {
    match get_default_config_path() {
        Some(path) if path.exists() => load_or_default(&path),
        _ => (Config::default(), None),
    }
}

/// Loads configuration from `path`, falling back to defaults with a warning.
pub fn load_or_default(path: &Path) -> (Config, Option<String>) {
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
            (
                Config::default(),
                Some(format!("Settings could not be read, using defaults ({err})")),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the platform config directory.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
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
