//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/sketchpad/config.toml`. Settings
//! include drawing defaults, the sticker palette, export behavior, and
//! sketch persistence.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, SketchCompression, SketchStorageMode};
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, SessionConfig, StickerConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// thin_thickness = 1.0
/// thick_thickness = 5.0
///
/// [canvas]
/// width = 256
/// height = 256
///
/// [stickers]
/// palette = ["⭐", "❤", "🙂"]
///
/// [export]
/// scale = 4.0
/// background = "white"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Marker defaults (color, thickness presets)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Logical canvas dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Sticker palette settings
    #[serde(default)]
    pub stickers: StickerConfig,

    /// PNG export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Sketch persistence settings
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause
    /// rendering issues. Invalid values are clamped to the nearest valid
    /// value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `thin_thickness` / `thick_thickness`: 1.0 - 20.0
    /// - `canvas.width` / `canvas.height`: 16 - 4096
    /// - `stickers.rotation_degrees`: -360.0 - 360.0
    /// - `export.scale`: 1.0 - 16.0
    fn validate_and_clamp(&mut self) {
        if !(1.0..=20.0).contains(&self.drawing.thin_thickness) {
            log::warn!(
                "Invalid thin_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.thin_thickness
            );
            self.drawing.thin_thickness = self.drawing.thin_thickness.clamp(1.0, 20.0);
        }

        if !(1.0..=20.0).contains(&self.drawing.thick_thickness) {
            log::warn!(
                "Invalid thick_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.thick_thickness
            );
            self.drawing.thick_thickness = self.drawing.thick_thickness.clamp(1.0, 20.0);
        }

        if !(16..=4096).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 16-4096 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(16, 4096);
        }

        if !(16..=4096).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 16-4096 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(16, 4096);
        }

        if !(-360.0..=360.0).contains(&self.stickers.rotation_degrees) {
            log::warn!(
                "Invalid sticker rotation {:.1}°, clamping to -360.0-360.0° range",
                self.stickers.rotation_degrees
            );
            self.stickers.rotation_degrees = self.stickers.rotation_degrees.clamp(-360.0, 360.0);
        }

        if !(1.0..=16.0).contains(&self.export.scale) {
            log::warn!(
                "Invalid export scale {:.1}, clamping to 1.0-16.0 range",
                self.export.scale
            );
            self.export.scale = self.export.scale.clamp(1.0, 16.0);
        }

        // Empty palette entries render nothing; drop them up front.
        let before = self.stickers.palette.len();
        self.stickers
            .palette
            .retain(|glyph| !glyph.trim().is_empty());
        if self.stickers.palette.len() != before {
            log::warn!("Removed empty sticker palette entries");
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g.,
    /// HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }

    /// Returns the directory holding the configuration file.
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir)
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/sketchpad/config.toml`. If the file doesn't exist, returns
    /// a Config with default values. All loaded values are validated and
    /// clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses a configuration from TOML text, validating and clamping values.
    pub fn from_toml(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text)?;
        config.validate_and_clamp();
        Ok(config)
    }
}
