use crate::input::action::Action;

use super::{DrawingState, InputState};

impl InputState {
    /// Handles a discrete button action from the host UI.
    ///
    /// History actions fired during an in-progress drag finalize the stroke
    /// first, so undo mid-drag removes the stroke being drawn as one
    /// coherent operation. Redo mid-drag is automatically a no-op because
    /// beginning the stroke already cleared the redo buffer.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Clear => {
                self.state = DrawingState::Idle;
                self.frame.clear();
                self.needs_redraw = true;
            }
            Action::Undo => {
                self.state = DrawingState::Idle;
                if self.frame.undo() {
                    self.needs_redraw = true;
                }
            }
            Action::Redo => {
                self.finish_stroke();
                if self.frame.redo() {
                    self.needs_redraw = true;
                }
            }
            Action::SelectThickness(thick) => {
                // Picking a width always returns to marker mode.
                self.selected_sticker = None;
                self.current_thickness = thick.clamp(1.0, 20.0);
                self.needs_redraw = true;
            }
            Action::SelectColor(color) => {
                self.current_color = color;
                self.needs_redraw = true;
            }
            Action::SelectSticker(glyph) => {
                self.selected_sticker = Some(glyph);
                self.needs_redraw = true;
            }
            Action::AddCustomSticker(glyph) => {
                let glyph = glyph.trim().to_string();
                if glyph.is_empty() {
                    log::debug!("Ignoring empty custom sticker input");
                    return;
                }
                if !self.palette.contains(&glyph) {
                    self.palette.push(glyph.clone());
                    log::info!("Added custom sticker '{}' to palette", glyph);
                }
                self.selected_sticker = Some(glyph);
                self.needs_redraw = true;
            }
            Action::Export => {
                log::debug!("Export requested, pending for host");
                self.set_pending_export();
            }
        }
    }
}
