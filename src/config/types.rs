//! Configuration type definitions.

use super::enums::{ColorSpec, SketchCompression, SketchStorageMode};
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the default appearance of the marker when the pad first opens.
/// Users change these values at runtime with the width and color buttons.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default marker color - either a named color (red, green, blue, yellow,
    /// orange, pink, white, black) or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Marker thickness in pixels for the thin preset (valid range: 1.0 - 20.0)
    #[serde(default = "default_thin_thickness")]
    pub thin_thickness: f64,

    /// Marker thickness in pixels for the thick preset (valid range: 1.0 - 20.0)
    #[serde(default = "default_thick_thickness")]
    pub thick_thickness: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            thin_thickness: default_thin_thickness(),
            thick_thickness: default_thick_thickness(),
        }
    }
}

/// Logical drawing-surface size.
///
/// Export multiplies these dimensions by the export scale factor.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_size")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 16 - 4096)
    #[serde(default = "default_canvas_size")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
        }
    }
}

/// Sticker palette settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct StickerConfig {
    /// Glyphs offered by the sticker buttons; custom stickers added at
    /// runtime extend this list for the session
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Rotation in degrees applied to placed stickers (valid range: -360 - 360)
    #[serde(default = "default_sticker_rotation")]
    pub rotation_degrees: f64,
}

impl Default for StickerConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            rotation_degrees: default_sticker_rotation(),
        }
    }
}

/// PNG export settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Uniform scale factor applied to the whole sketch (valid range: 1.0 - 16.0)
    #[serde(default = "default_export_scale")]
    pub scale: f64,

    /// Background fill behind the marks
    #[serde(default = "default_export_background")]
    pub background: ColorSpec,

    /// Directory exported images are saved to; defaults to the platform
    /// pictures directory under `Sketchpad`
    #[serde(default)]
    pub directory: Option<String>,

    /// Filename template (supports chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: default_export_scale(),
            background: default_export_background(),
            directory: None,
            filename_template: default_filename_template(),
        }
    }
}

/// Saved-sketch persistence settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Whether the sketch is saved on exit and restored on start
    #[serde(default = "default_session_enabled")]
    pub enabled: bool,

    /// Where sketch files live (auto, config, or custom)
    #[serde(default = "default_storage_mode")]
    pub storage: SketchStorageMode,

    /// Directory used when `storage = "custom"`
    #[serde(default)]
    pub custom_directory: Option<String>,

    /// Compression preference for sketch files
    #[serde(default = "default_compression")]
    pub compress: SketchCompression,

    /// Payload size in KiB above which auto compression kicks in
    #[serde(default = "default_auto_compress_threshold_kb")]
    pub auto_compress_threshold_kb: u64,

    /// Maximum marks restored from a sketch file (0 = unlimited)
    #[serde(default = "default_max_marks")]
    pub max_marks: usize,

    /// Maximum sketch file size in MiB accepted on load
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,

    /// How many rotated backups of the previous sketch to keep (0 or 1)
    #[serde(default = "default_backup_retention")]
    pub backup_retention: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            enabled: default_session_enabled(),
            storage: default_storage_mode(),
            custom_directory: None,
            compress: default_compression(),
            auto_compress_threshold_kb: default_auto_compress_threshold_kb(),
            max_marks: default_max_marks(),
            max_file_size_mb: default_max_file_size_mb(),
            backup_retention: default_backup_retention(),
        }
    }
}

// ============================================================================
// Default value functions for serde
// ============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_thin_thickness() -> f64 {
    1.0
}

fn default_thick_thickness() -> f64 {
    5.0
}

fn default_canvas_size() -> u32 {
    256
}

fn default_palette() -> Vec<String> {
    vec!["⭐".to_string(), "❤".to_string(), "🙂".to_string()]
}

fn default_sticker_rotation() -> f64 {
    0.0
}

fn default_export_scale() -> f64 {
    4.0
}

fn default_export_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}

fn default_session_enabled() -> bool {
    true
}

fn default_storage_mode() -> SketchStorageMode {
    SketchStorageMode::Auto
}

fn default_compression() -> SketchCompression {
    SketchCompression::Auto
}

fn default_auto_compress_threshold_kb() -> u64 {
    100
}

fn default_max_marks() -> usize {
    10_000
}

fn default_max_file_size_mb() -> u64 {
    10
}

fn default_backup_retention() -> usize {
    1
}
