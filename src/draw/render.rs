//! Rendering of marks onto a drawing surface.

use super::color::BLACK;
use super::frame::Frame;
use super::mark::Mark;
use super::surface::Surface;

/// Font size in pixels for placed stickers at scale 1.0.
pub const STICKER_FONT_SIZE: f64 = 24.0;

/// Line width of the marker cursor preview circle.
const PREVIEW_OUTLINE_WIDTH: f64 = 1.0;

/// Renders the committed display list onto a surface.
///
/// Marks are drawn oldest-first so later marks visually overlay earlier
/// ones. The uniform `scale` factor multiplies coordinates, stroke widths,
/// and glyph sizes. Pure read: the frame is never modified and repeated
/// calls produce identical output.
pub fn render_frame(surface: &mut dyn Surface, frame: &Frame, scale: f64) {
    for mark in frame.marks() {
        render_mark(surface, mark, scale);
    }
}

/// Renders a single mark, dispatching on the variant.
///
/// A stroke with fewer than two points draws nothing: there is no degenerate
/// single-point line.
pub fn render_mark(surface: &mut dyn Surface, mark: &Mark, scale: f64) {
    match mark {
        Mark::Stroke {
            points,
            thick,
            color,
        } => {
            if points.len() < 2 {
                return;
            }
            let scaled: Vec<(f64, f64)> = points
                .iter()
                .map(|&(x, y)| (x as f64 * scale, y as f64 * scale))
                .collect();
            surface.stroke_polyline(&scaled, thick * scale, *color);
        }
        Mark::Sticker {
            glyph,
            x,
            y,
            rotation,
        } => {
            surface.draw_glyph(
                glyph,
                *x as f64 * scale,
                *y as f64 * scale,
                STICKER_FONT_SIZE * scale,
                *rotation,
                BLACK,
            );
        }
    }
}

/// Renders the committed display list plus one ephemeral mark that is never
/// appended to it.
///
/// The preview is the tool hint shown under the hovering cursor: a one-point
/// stroke renders as a circle of half the stroke width (the radius of the
/// line the next drag would draw), and a sticker renders as a placement
/// ghost at the hover position.
pub fn render_preview(surface: &mut dyn Surface, frame: &Frame, preview: &Mark, scale: f64) {
    render_frame(surface, frame, scale);

    match preview {
        Mark::Stroke {
            points,
            thick,
            color,
        } if points.len() == 1 => {
            let (x, y) = points[0];
            surface.stroke_circle(
                x as f64 * scale,
                y as f64 * scale,
                (thick / 2.0).max(0.5) * scale,
                PREVIEW_OUTLINE_WIDTH,
                *color,
            );
        }
        other => render_mark(surface, other, scale),
    }
}
