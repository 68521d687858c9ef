//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest gap accepted between pad keys, in terminal cells.
const MAX_GAP: u16 = 8;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Pad geometry preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PadConfig {
    /// Horizontal gap between keys in terminal cells
    #[serde(default = "default_gap")]
    pub horizontal_gap: u16,
    /// Vertical gap between keys in terminal lines
    #[serde(default = "default_gap")]
    pub vertical_gap: u16,
}

/// Default gap between keys (1 cell)
const fn default_gap() -> u16 {
    1
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            horizontal_gap: default_gap(),
            vertical_gap: default_gap(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/NumberPad/config.toml`
/// - macOS: `~/Library/Application Support/NumberPad/config.toml`
/// - Windows: `%APPDATA%\NumberPad\config.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    pub ui: UiConfig,
    /// Pad geometry preferences
    pub pad: PadConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("NumberPad");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to_path(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using atomic write.
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Gaps beyond `MAX_GAP` would leave no room for the keys themselves
    /// on common terminal sizes.
    pub fn validate(&self) -> Result<()> {
        if self.pad.horizontal_gap > MAX_GAP {
            anyhow::bail!(
                "Horizontal gap too large: {} (maximum {})",
                self.pad.horizontal_gap,
                MAX_GAP
            );
        }
        if self.pad.vertical_gap > MAX_GAP {
            anyhow::bail!(
                "Vertical gap too large: {} (maximum {})",
                self.pad.vertical_gap,
                MAX_GAP
            );
        }

        Ok(())
    }
}
