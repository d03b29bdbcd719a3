use crate::draw::Mark;

use super::{DrawingState, InputState};

impl InputState {
    /// Returns the ephemeral hover mark for
    /// [`render_preview`](crate::draw::render_preview).
    ///
    /// `None` while a drag is in progress (the live stroke is already in the
    /// display list) or when the pointer has left the surface. The returned
    /// mark is never appended to the display list.
    pub fn preview_mark(&self) -> Option<Mark> {
        if !matches!(self.state, DrawingState::Idle) {
            return None;
        }
        let (x, y) = self.hover?;

        match &self.selected_sticker {
            Some(glyph) => Some(Mark::Sticker {
                glyph: glyph.clone(),
                x,
                y,
                rotation: self.sticker_rotation,
            }),
            // A one-point stroke renders as the marker radius hint.
            None => Some(Mark::Stroke {
                points: vec![(x, y)],
                thick: self.current_thickness,
                color: self.current_color,
            }),
        }
    }
}
