//! Discrete UI actions delivered by the host's buttons.

use crate::draw::Color;

/// A button-click event from the host UI.
///
/// The host maps its widgets (clear/undo/redo buttons, width and color
/// pickers, the sticker palette, the export button) to these actions and
/// feeds them to [`InputState::handle_action`](super::InputState::handle_action).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Discard every mark and the redo history
    Clear,
    /// Move the most recent mark into the redo buffer
    Undo,
    /// Replay the most recently undone mark
    Redo,
    /// Switch to marker mode with the given stroke thickness
    SelectThickness(f64),
    /// Change the current marker color
    SelectColor(Color),
    /// Switch to sticker-placement mode with the given glyph
    SelectSticker(String),
    /// Add a user-provided glyph to the palette and select it
    AddCustomSticker(String),
    /// Request a PNG export of the current sketch
    Export,
}
