//! Library exports for reusing sketchpad subsystems.
//!
//! Exposes the drawing model and the supporting modules it relies on so that
//! host shells (interactive canvases, export tooling) can share the display
//! list, input handling, and serialization code with the main binary.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod session;
pub mod util;

pub use config::Config;
