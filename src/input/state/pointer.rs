use crate::input::events::MouseButton;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a pointer button press event.
    ///
    /// # Behavior
    /// - Left press while idle in marker mode: begins a stroke at the
    ///   pointer position and enters the `Stroking` state.
    /// - Left press while idle with a sticker selected: places the sticker
    ///   immediately (no drag-to-create phase).
    /// - Right press: finalizes an in-progress stroke early. Marks only
    ///   leave the display list through undo or clear, so there is no
    ///   discard path here.
    pub fn on_pointer_press(&mut self, button: MouseButton, x: i32, y: i32) {
        match button {
            MouseButton::Left => {
                if !matches!(self.state, DrawingState::Idle) {
                    return;
                }
                self.hover = Some((x, y));
                match &self.selected_sticker {
                    Some(glyph) => {
                        self.frame
                            .place_sticker(glyph.clone(), x, y, self.sticker_rotation);
                        self.needs_redraw = true;
                    }
                    None => {
                        let handle =
                            self.frame
                                .begin_stroke(x, y, self.current_thickness, self.current_color);
                        self.state = DrawingState::Stroking { handle };
                        self.needs_redraw = true;
                    }
                }
            }
            MouseButton::Right => {
                self.finish_stroke();
            }
            MouseButton::Middle => {}
        }
    }

    /// Processes pointer motion events.
    ///
    /// While dragging, extends the in-progress stroke; otherwise just moves
    /// the hover position so the tool preview follows the cursor.
    pub fn on_pointer_motion(&mut self, x: i32, y: i32) {
        self.hover = Some((x, y));
        if let DrawingState::Stroking { handle } = self.state {
            if self.frame.extend_stroke(handle, x, y) {
                self.needs_redraw = true;
            }
        } else {
            self.needs_redraw = true;
        }
    }

    /// Processes a pointer button release event.
    ///
    /// Releasing the left button finalizes the in-progress stroke; the mark
    /// is immutable from this point on.
    pub fn on_pointer_release(&mut self, button: MouseButton, _x: i32, _y: i32) {
        if button != MouseButton::Left {
            return;
        }
        self.finish_stroke();
    }

    /// Processes the pointer leaving the drawing surface.
    ///
    /// Hides the tool preview until the pointer returns.
    pub fn on_pointer_leave(&mut self) {
        self.hover = None;
        self.needs_redraw = true;
    }
}
