//! Drawing tool selection.

/// Active tool, derived from the current tool state.
///
/// Marker mode draws freehand strokes on drag; sticker mode places the
/// selected glyph on pointer-down. The two are mutually exclusive: selecting
/// a sticker leaves marker mode and selecting a thickness returns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand marker - follows the pointer path
    Marker,
    /// One-shot sticker placement with the selected glyph
    Sticker,
}
