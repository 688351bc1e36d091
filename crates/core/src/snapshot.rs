//! Read-only per-frame copy of the engine state.

use serde::Serialize;

use crate::types::{
    CollisionKind, Direction, GamePhase, Point, BASELINE_LENGTH, GRID_CELLS, OBSTACLES,
    START_INTERVAL_MS,
};

/// Read-only copy of everything a frontend needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    /// Head first.
    pub snake: Vec<Point>,
    pub target_len: usize,
    pub direction: Direction,
    pub food: Point,
    pub obstacles: Vec<Point>,
    pub score: u32,
    pub tick_interval_ms: u32,
    pub run_id: u32,
    pub ticks: u64,
    pub last_collision: Option<CollisionKind>,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            phase: GamePhase::Intro,
            snake: Vec::with_capacity(GRID_CELLS + 1),
            target_len: BASELINE_LENGTH,
            direction: Direction::Right,
            food: Point::default(),
            obstacles: Vec::with_capacity(OBSTACLES.len()),
            score: 0,
            tick_interval_ms: START_INTERVAL_MS,
            run_id: 0,
            ticks: 0,
            last_collision: None,
        }
    }
}
