//! Saved-sketch persistence.
//!
//! Sketches are stored as versioned JSON (optionally gzip-compressed) and
//! restored on the next start. Only the display list is persisted: tool
//! state is session-scoped by design, and the redo buffer is invalidated by
//! new input anyway, so a restored sketch starts with clean history.

pub mod options;
pub mod snapshot;

pub use options::{options_from_config, CompressionMode, SketchOptions};
pub use snapshot::{load_sketch, load_sketch_from, save_sketch};
