//! Mark definitions for the sketch display list.

use super::color::Color;
use serde::{Deserialize, Serialize};

/// A single drawable unit in the display list.
///
/// Each variant carries everything needed to render it independently, so
/// marks stay valid when tool state changes afterwards. Rendering dispatches
/// on the variant (see [`crate::draw::render::render_mark`]); there is no
/// trait-object hierarchy behind this type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Mark {
    /// Freehand stroke - polyline connecting pointer drag points
    Stroke {
        /// Sequence of (x, y) coordinates traced by the pointer
        points: Vec<(i32, i32)>,
        /// Line thickness in pixels
        thick: f64,
        /// Stroke color
        color: Color,
    },
    /// Placed glyph sticker
    Sticker {
        /// Glyph or short text token to draw
        glyph: String,
        /// Placement X coordinate
        x: i32,
        /// Placement Y coordinate
        y: i32,
        /// Rotation around the placement point, in degrees
        rotation: f64,
    },
}

impl Mark {
    /// Returns true for stroke marks.
    pub fn is_stroke(&self) -> bool {
        matches!(self, Mark::Stroke { .. })
    }

    /// Returns true for sticker marks.
    pub fn is_sticker(&self) -> bool {
        matches!(self, Mark::Sticker { .. })
    }
}
