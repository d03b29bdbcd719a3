//! Drawing model and rendering primitives.
//!
//! This module defines the core drawing types for the sketchpad:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Mark`]: the drawable units (freehand strokes and glyph stickers)
//! - [`Frame`]: display list with linear undo/redo history
//! - [`Surface`]: the output boundary the renderers draw through
//! - Rendering functions plus the Cairo surface backend

pub mod cairo_surface;
pub mod color;
pub mod frame;
pub mod mark;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use cairo_surface::CairoSurface;
pub use color::Color;
pub use frame::{Frame, MarkHandle};
pub use mark::Mark;
pub use render::{render_frame, render_mark, render_preview};
pub use surface::{RecordingSurface, Surface, SurfaceOp};

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
