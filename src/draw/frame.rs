//! Display list and undo/redo history for the sketch.

use super::color::Color;
use super::mark::Mark;
use serde::{Deserialize, Serialize};

/// Handle for the mark created by [`Frame::begin_stroke`] or
/// [`Frame::place_sticker`].
///
/// Only the most recently begun stroke may be extended; a handle goes stale
/// once its stroke is finalized. Stale handles are harmless: operations on
/// them are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkHandle(pub(crate) usize);

/// Container for all marks in the current sketch.
///
/// Manages the ordered display list plus the redo buffer that linear
/// undo/redo moves marks through. Marks are drawn in the order they appear
/// (first mark = bottom layer, last mark = top layer).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Marks in draw order (first = bottom layer, last = top layer)
    marks: Vec<Mark>,
    /// Marks removed by undo; replayed by redo, invalidated by new input
    #[serde(skip)]
    redo: Vec<Mark>,
    /// Index of the stroke currently being drawn, if any
    #[serde(skip)]
    active_stroke: Option<usize>,
}

impl Frame {
    /// Creates a new empty frame with no marks and no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed marks in draw order (oldest first).
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of marks in the display list.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns true when the display list is empty.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Number of marks waiting in the redo buffer.
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Returns true while a stroke is being drawn.
    pub fn stroke_in_progress(&self) -> bool {
        self.active_stroke.is_some()
    }

    /// Starts a new freehand stroke with a single point.
    ///
    /// The stroke is appended to the display list immediately so it renders
    /// while the drag is still in progress. Any redo history is invalidated.
    pub fn begin_stroke(&mut self, x: i32, y: i32, thick: f64, color: Color) -> MarkHandle {
        self.redo.clear();
        self.marks.push(Mark::Stroke {
            points: vec![(x, y)],
            thick,
            color,
        });
        let index = self.marks.len() - 1;
        self.active_stroke = Some(index);
        MarkHandle(index)
    }

    /// Places a sticker mark in one shot (no drag phase).
    ///
    /// Any redo history is invalidated. The sticker never becomes the active
    /// stroke, so it is immutable from the moment it is placed.
    pub fn place_sticker(
        &mut self,
        glyph: impl Into<String>,
        x: i32,
        y: i32,
        rotation: f64,
    ) -> MarkHandle {
        self.redo.clear();
        self.marks.push(Mark::Sticker {
            glyph: glyph.into(),
            x,
            y,
            rotation,
        });
        MarkHandle(self.marks.len() - 1)
    }

    /// Appends a point to the stroke referenced by `handle`.
    ///
    /// Returns false without modifying anything unless `handle` refers to
    /// the active (last-begun, not yet finalized) stroke.
    pub fn extend_stroke(&mut self, handle: MarkHandle, x: i32, y: i32) -> bool {
        if self.active_stroke != Some(handle.0) {
            return false;
        }
        match self.marks.get_mut(handle.0) {
            Some(Mark::Stroke { points, .. }) => {
                points.push((x, y));
                true
            }
            _ => false,
        }
    }

    /// Finalizes the stroke referenced by `handle`. Idempotent.
    ///
    /// After finalization no further points can be appended.
    pub fn end_stroke(&mut self, handle: MarkHandle) {
        if self.active_stroke == Some(handle.0) {
            self.active_stroke = None;
        }
    }

    /// Moves the most recent mark into the redo buffer.
    ///
    /// An in-progress stroke is finalized first, so undo during a drag
    /// removes the stroke being drawn. Returns false when the display list
    /// is empty (a no-op, not an error).
    pub fn undo(&mut self) -> bool {
        self.active_stroke = None;
        match self.marks.pop() {
            Some(mark) => {
                self.redo.push(mark);
                true
            }
            None => false,
        }
    }

    /// Replays the most recently undone mark back onto the display list.
    ///
    /// Returns false when the redo buffer is empty.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(mark) => {
                self.marks.push(mark);
                true
            }
            None => false,
        }
    }

    /// Removes all marks and all redo history, regardless of prior state.
    pub fn clear(&mut self) {
        self.marks.clear();
        self.redo.clear();
        self.active_stroke = None;
    }

    /// Caps the display list at `max` marks (used when loading saved
    /// sketches). A `max` of 0 means unlimited.
    pub(crate) fn truncate_marks(&mut self, max: usize) {
        if max > 0 && self.marks.len() > max {
            self.marks.truncate(max);
        }
    }
}
