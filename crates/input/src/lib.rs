//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Key`]. Quit keys are
//! reported separately and never reach the engine.

pub mod map;

pub use tui_snake_types as types;

pub use map::{map_key_event, should_quit};
