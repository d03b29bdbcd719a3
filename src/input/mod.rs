//! Input state management and event types.

pub mod action;
pub mod events;
pub mod state;
pub mod tool;

pub use action::Action;
pub use events::MouseButton;
pub use state::{DrawingState, InputState};
pub use tool::Tool;
