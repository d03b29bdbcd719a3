//! Input state container and drawing-mode state machine.

use crate::config::Config;
use crate::draw::{Color, Frame, MarkHandle};
use crate::input::tool::Tool;

/// Current drawing mode state machine.
///
/// Tracks whether the user is idle or dragging out a stroke. Transitions
/// happen on pointer events; sticker placement is one-shot and never leaves
/// the `Idle` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// A stroke is being dragged out (pointer button held down)
    Stroking {
        /// Handle of the in-progress stroke in the frame
        handle: MarkHandle,
    },
}

/// Main input state containing all drawing session state.
///
/// Holds the frame (display list + history), the tool state (thickness,
/// color, selected sticker), the drawing state machine, and the UI flags.
/// All pointer and button events flow through this struct; after each
/// mutation the host checks [`needs_redraw`](Self::needs_redraw) and redraws
/// synchronously. Tool state lives for the session and is never persisted.
pub struct InputState {
    /// The sketch being edited
    pub frame: Frame,
    /// Current marker color
    pub current_color: Color,
    /// Current marker thickness in pixels
    pub current_thickness: f64,
    /// Selected sticker glyph; `Some` switches pointer-down to placement
    pub selected_sticker: Option<String>,
    /// Rotation in degrees applied to newly placed stickers
    pub sticker_rotation: f64,
    /// Sticker glyphs offered by the host UI (config palette + custom additions)
    pub palette: Vec<String>,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Last known hover position, for tool previews
    pub(super) hover: Option<(i32, i32)>,
    /// Pending export request, drained by the host
    pending_export: bool,
}

impl InputState {
    /// Creates a new `InputState` with the specified tool defaults.
    ///
    /// # Arguments
    /// * `color` - Initial marker color
    /// * `thickness` - Initial marker thickness in pixels
    /// * `palette` - Initial sticker palette offered by the UI
    /// * `sticker_rotation` - Rotation applied to placed stickers, in degrees
    pub fn with_defaults(
        color: Color,
        thickness: f64,
        palette: Vec<String>,
        sticker_rotation: f64,
    ) -> Self {
        Self {
            frame: Frame::new(),
            current_color: color,
            current_thickness: thickness,
            selected_sticker: None,
            sticker_rotation,
            palette,
            state: DrawingState::Idle,
            needs_redraw: true,
            hover: None,
            pending_export: false,
        }
    }

    /// Creates an `InputState` from the loaded configuration.
    ///
    /// The marker starts with the thin preset, matching a freshly opened pad.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.drawing.default_color.to_color(),
            config.drawing.thin_thickness,
            config.stickers.palette.clone(),
            config.stickers.rotation_degrees,
        )
    }

    /// Returns the active tool derived from the tool state.
    pub fn active_tool(&self) -> Tool {
        if self.selected_sticker.is_some() {
            Tool::Sticker
        } else {
            Tool::Marker
        }
    }

    /// Takes and clears any pending export request.
    ///
    /// The host calls this after each action batch; exports need access to
    /// the configured output pipeline, so they are handled outside the input
    /// layer.
    pub fn take_pending_export(&mut self) -> bool {
        std::mem::take(&mut self.pending_export)
    }

    /// Stores an export request for retrieval by the host.
    pub(super) fn set_pending_export(&mut self) {
        self.pending_export = true;
    }

    /// Drops back to `Idle`, finalizing any in-progress stroke.
    pub(super) fn finish_stroke(&mut self) {
        if let DrawingState::Stroking { handle } = self.state {
            self.frame.end_stroke(handle);
            self.state = DrawingState::Idle;
            self.needs_redraw = true;
        }
    }
}
