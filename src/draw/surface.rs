//! Drawing-surface abstraction consumed by the renderer.

use super::color::Color;

/// A 2D drawing surface exposing the primitive operations the renderer
/// needs.
///
/// Implemented by [`CairoSurface`](super::cairo_surface::CairoSurface) for
/// raster output and by [`RecordingSurface`] for headless inspection.
/// Coordinates arriving here are in device units; the renderer applies the
/// uniform scale factor before calling in.
pub trait Surface {
    /// Fills the entire surface with a solid color.
    fn clear(&mut self, color: Color);

    /// Strokes an open polyline through the given points.
    ///
    /// Implementations may ignore calls with fewer than two points.
    fn stroke_polyline(&mut self, points: &[(f64, f64)], width: f64, color: Color);

    /// Strokes a circle outline. Used for the marker cursor preview.
    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, width: f64, color: Color);

    /// Draws a text glyph whose layout is centered on (x, y) and rotated
    /// around that point.
    fn draw_glyph(&mut self, glyph: &str, x: f64, y: f64, size: f64, rotation: f64, color: Color);
}

/// A recorded primitive call (see [`RecordingSurface`]).
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear {
        color: Color,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        width: f64,
        color: Color,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        width: f64,
        color: Color,
    },
    Glyph {
        glyph: String,
        x: f64,
        y: f64,
        size: f64,
        rotation: f64,
        color: Color,
    },
}

/// Surface that records primitive calls instead of rasterizing them.
///
/// Hosts that translate the display list into their own drawing API can
/// replay the recorded operations; the renderer tests assert against them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Recorded operations in call order.
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of line segments across all recorded polylines.
    pub fn segment_count(&self) -> usize {
        self.ops
            .iter()
            .map(|op| match op {
                SurfaceOp::Polyline { points, .. } => points.len().saturating_sub(1),
                _ => 0,
            })
            .sum()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.ops.push(SurfaceOp::Clear { color });
    }

    fn stroke_polyline(&mut self, points: &[(f64, f64)], width: f64, color: Color) {
        self.ops.push(SurfaceOp::Polyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, width: f64, color: Color) {
        self.ops.push(SurfaceOp::Circle {
            cx,
            cy,
            radius,
            width,
            color,
        });
    }

    fn draw_glyph(&mut self, glyph: &str, x: f64, y: f64, size: f64, rotation: f64, color: Color) {
        self.ops.push(SurfaceOp::Glyph {
            glyph: glyph.to_string(),
            x,
            y,
            size,
            rotation,
            color,
        });
    }
}
