//! Configuration enum types.

use crate::draw::{color::*, Color};
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "black"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are mapped to predefined RGBA values using
    /// `util::name_to_color()`. Unknown color names default to black with a
    /// warning. RGB arrays are converted from 0-255 range to 0.0-1.0 range
    /// with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

/// Where saved sketches are stored.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SketchStorageMode {
    /// Platform data directory (`~/.local/share/sketchpad` on Linux)
    Auto,
    /// Next to the configuration file
    Config,
    /// The directory named by `session.custom_directory`
    Custom,
}

/// Compression preference for saved sketch files.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SketchCompression {
    /// Gzip when the payload exceeds the configured threshold
    Auto,
    /// Always gzip
    On,
    /// Always plain JSON
    Off,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, PINK, RED, WHITE};

    #[test]
    fn named_colors_resolve() {
        assert_eq!(ColorSpec::Name("red".to_string()).to_color(), RED);
        assert_eq!(ColorSpec::Name("White".to_string()).to_color(), WHITE);
    }

    #[test]
    fn unknown_name_falls_back_to_black() {
        assert_eq!(ColorSpec::Name("chartreuse".to_string()).to_color(), BLACK);
    }

    #[test]
    fn rgb_components_scale_to_unit_range() {
        let color = ColorSpec::Rgb([255, 0, 255]).to_color();
        assert_eq!(color, PINK);
    }
}
