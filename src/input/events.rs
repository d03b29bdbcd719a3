//! Generic input event types for cross-host compatibility.

/// Mouse button identification.
///
/// Host shells map their native pointer events to these generic values for
/// unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button (finalizes an in-progress stroke early)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}
