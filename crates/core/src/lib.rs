//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Every rule is exercised by unit and integration tests
//! - **Portable**: Any frontend that can fill rectangles and draw text can host it
//! - **Fast**: `tick` and `handle_input` never allocate
//!
//! # Module Structure
//!
//! - [`engine`]: the `Intro -> Running <-> Paused -> GameOver` state machine
//! - [`difficulty`]: tick interval as a function of score
//! - [`rng`]: seeded LCG used for food placement
//! - [`render`]: draw calls for each phase against a [`RenderSurface`]
//! - [`snapshot`]: read-only frame data
//! - [`events`]: single-consumer queue of ticks and key presses
//! - [`timer`]: tick deadline with a mutable interval
//!
//! # Game Rules
//!
//! - The snake starts as one segment at (100, 100) heading right and grows into
//!   its baseline length of 3.
//! - Each tick the head advances one cell; the tail is dropped while the snake
//!   is longer than its target length.
//! - Leaving the grid, hitting the body or hitting an obstacle ends the run.
//! - Food is worth 10 points and one extra segment. It respawns on a random
//!   cell, which may be occupied.
//! - Every 50 points the tick interval shrinks by 10ms, down to 50ms.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameEngine;
//! use tui_snake_types::{GamePhase, Key};
//!
//! let mut game = GameEngine::new(12345);
//! assert_eq!(game.phase(), GamePhase::Intro);
//!
//! // Any key starts a run.
//! game.handle_input(Key::Other);
//! assert_eq!(game.phase(), GamePhase::Running);
//!
//! game.handle_input(Key::Down);
//! game.tick();
//! assert_eq!(game.head().y, 110);
//! ```

pub mod difficulty;
pub mod engine;
pub mod events;
pub mod render;
pub mod rng;
pub mod snapshot;
pub mod timer;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use difficulty::{interval_after_score, interval_for_score};
pub use engine::{GameEngine, TickOutcome};
pub use events::{dispatch, Dispatched, EventQueue, EventSender, GameEvent};
pub use render::{render, RenderSurface};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use timer::Ticker;
