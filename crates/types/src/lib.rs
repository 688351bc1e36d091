//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, benchmarks).
//!
//! # World Dimensions
//!
//! The playfield is measured in world pixels and divided into square cells:
//!
//! - **Width**: 600 (60 cells)
//! - **Height**: 400 (40 cells)
//! - **Cell size**: 10
//!
//! Every snake segment, food item and obstacle sits on a multiple of
//! [`CELL_SIZE`] inside `[0, WIDTH) x [0, HEIGHT)`.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `START_INTERVAL_MS` | 140 | Tick interval at the start of a run |
//! | `INTERVAL_STEP_MS` | 10 | Speed-up per score threshold crossed |
//! | `MIN_INTERVAL_MS` | 50 | Fastest allowed tick interval |
//! | `SPEEDUP_EVERY` | 50 | Score threshold spacing |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Point, CELL_SIZE};
//!
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//!
//! let p = Point::new(100, 100).step(Direction::Up);
//! assert_eq!(p, Point::new(100, 100 - CELL_SIZE));
//! ```

/// World width (60 cells of 10)
pub const WIDTH: i32 = 600;

/// World height (40 cells of 10)
pub const HEIGHT: i32 = 400;

/// Size of one grid cell in world units
pub const CELL_SIZE: i32 = 10;

/// Number of columns in the grid
pub const GRID_COLS: i32 = WIDTH / CELL_SIZE;

/// Number of rows in the grid
pub const GRID_ROWS: i32 = HEIGHT / CELL_SIZE;

/// Total number of cells; upper bound for the snake length
pub const GRID_CELLS: usize = (GRID_COLS * GRID_ROWS) as usize;

/// Tick interval when a run starts
pub const START_INTERVAL_MS: u32 = 140;

/// Interval decrease applied per score threshold crossed
pub const INTERVAL_STEP_MS: u32 = 10;

/// Interval floor
pub const MIN_INTERVAL_MS: u32 = 50;

/// Every multiple of this score speeds the game up
pub const SPEEDUP_EVERY: u32 = 50;

/// Points awarded per food eaten
pub const FOOD_REWARD: u32 = 10;

/// Length the snake grows into before any food is eaten
pub const BASELINE_LENGTH: usize = 3;

/// Head position of a freshly started run
pub const SPAWN: Point = Point::new(100, 100);

/// Fixed obstacle layout, identical for every run
pub const OBSTACLES: [Point; 2] = [Point::new(200, 200), Point::new(300, 300)];

/// A position in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point one cell away in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.unit();
        Self {
            x: self.x + dx * CELL_SIZE,
            y: self.y + dy * CELL_SIZE,
        }
    }

    /// True when the point lies inside `[0, WIDTH) x [0, HEIGHT)`.
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < WIDTH && self.y >= 0 && self.y < HEIGHT
    }

    /// True when in bounds and aligned to the cell grid.
    pub fn is_on_grid(self) -> bool {
        self.in_bounds() && self.x % CELL_SIZE == 0 && self.y % CELL_SIZE == 0
    }

    /// Top-left corner of grid cell `(col, row)`.
    pub const fn from_cell(col: i32, row: i32) -> Self {
        Self {
            x: col * CELL_SIZE,
            y: row * CELL_SIZE,
        }
    }
}

/// Direction of travel.
///
/// Screen coordinates: `Up` decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction that would reverse straight into the neck.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit vector in cells.
    pub fn unit(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Abstract key press delivered to the engine.
///
/// Frontends map their native key codes into this set. Anything without a
/// game meaning becomes [`Key::Other`], which still counts as "any key" on the
/// intro screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Pause,
    Restart,
    Other,
}

impl Key {
    /// Direction carried by an arrow-equivalent key.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

impl From<Direction> for Key {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Up => Key::Up,
            Direction::Down => Key::Down,
            Direction::Left => Key::Left,
            Direction::Right => Key::Right,
        }
    }
}

/// Top-level game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GamePhase {
    /// Instruction screen shown before the first run
    #[default]
    Intro,
    Running,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Intro => "intro",
            GamePhase::Running => "running",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game_over",
        }
    }
}

/// Which rule ended a run. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CollisionKind {
    Wall,
    SelfBody,
    Obstacle,
}

impl CollisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionKind::Wall => "wall",
            CollisionKind::SelfBody => "self",
            CollisionKind::Obstacle => "obstacle",
        }
    }
}

/// 24-bit RGB color for draw calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const FOOD: Color = Color::new(220, 60, 60);
    pub const SNAKE: Color = Color::new(80, 220, 100);
    pub const OBSTACLE: Color = Color::new(70, 110, 230);
    pub const TEXT: Color = Color::new(255, 255, 255);
}

/// Text styles used by the game screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Intro heading (bold, large)
    Title,
    /// Intro instructions
    Body,
    /// Pause / game over banners (bold)
    Status,
}

impl TextStyle {
    pub fn is_bold(&self) -> bool {
        matches!(self, TextStyle::Title | TextStyle::Status)
    }
}
