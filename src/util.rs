//! Utility functions shared across modules.

use crate::draw::{color::*, Color};

/// Maps a color name from the config file to a predefined [`Color`].
///
/// Accepted names: red, green, blue, yellow, orange, pink, white, black
/// (case-insensitive). Returns `None` for unknown names so callers can pick
/// their own fallback.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}
