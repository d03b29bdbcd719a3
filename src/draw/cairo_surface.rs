//! Cairo-backed implementation of the drawing surface.

use super::color::Color;
use super::surface::Surface;

/// [`Surface`] implementation over a Cairo context.
///
/// Strokes use round caps and joins so freehand polylines look continuous.
/// Glyphs render through Pango, so emoji and other multi-byte glyphs shape
/// correctly with whatever fonts the system provides.
pub struct CairoSurface<'a> {
    ctx: &'a cairo::Context,
}

impl<'a> CairoSurface<'a> {
    /// Wraps an existing Cairo context.
    pub fn new(ctx: &'a cairo::Context) -> Self {
        Self { ctx }
    }
}

impl Surface for CairoSurface<'_> {
    fn clear(&mut self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        let _ = self.ctx.paint();
    }

    fn stroke_polyline(&mut self, points: &[(f64, f64)], width: f64, color: Color) {
        if points.len() < 2 {
            return;
        }

        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        self.ctx.set_line_width(width);
        self.ctx.set_line_cap(cairo::LineCap::Round);
        self.ctx.set_line_join(cairo::LineJoin::Round);

        let (x0, y0) = points[0];
        self.ctx.move_to(x0, y0);
        for &(x, y) in &points[1..] {
            self.ctx.line_to(x, y);
        }
        let _ = self.ctx.stroke();
    }

    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, width: f64, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        self.ctx.set_line_width(width);
        self.ctx
            .arc(cx, cy, radius.max(0.5), 0.0, std::f64::consts::PI * 2.0);
        let _ = self.ctx.stroke();
    }

    fn draw_glyph(&mut self, glyph: &str, x: f64, y: f64, size: f64, rotation: f64, color: Color) {
        self.ctx.save().ok();

        // Best (gray) antialiasing; subpixel rendering fringes on
        // transparent surfaces.
        self.ctx.set_antialias(cairo::Antialias::Best);

        self.ctx.translate(x, y);
        self.ctx.rotate(rotation.to_radians());

        let layout = pangocairo::functions::create_layout(self.ctx);
        let font_desc =
            pango::FontDescription::from_string(&format!("Sans {}", size.round() as i32));
        layout.set_font_description(Some(&font_desc));
        layout.set_text(glyph);

        // Center the layout on the placement point so rotation pivots there.
        let (_, logical_rect) = layout.extents();
        let pango_scale = pango::SCALE as f64;
        let glyph_width = logical_rect.width() as f64 / pango_scale;
        let glyph_height = logical_rect.height() as f64 / pango_scale;
        self.ctx.move_to(-glyph_width / 2.0, -glyph_height / 2.0);

        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        pangocairo::functions::show_layout(self.ctx, &layout);

        self.ctx.restore().ok();
    }
}
