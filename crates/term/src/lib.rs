//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. The core's
//! world-pixel draw calls are rasterized into a framebuffer of styled
//! characters which is then flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Allow precise control over aspect ratio (2 chars wide per grid cell)
//! - Only emit changed cells after the first frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardSurface, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
