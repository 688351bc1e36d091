//! Game engine - owns the complete game state
//!
//! The engine is a four-phase state machine (`Intro`, `Running`, `Paused`,
//! `GameOver`). It is advanced by [`GameEngine::tick`] and steered by
//! [`GameEngine::handle_input`]; frontends read it through
//! [`GameEngine::snapshot_into`] and [`crate::render`].

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::difficulty::interval_after_score;
use crate::render::{render, RenderSurface};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// What a single call to [`GameEngine::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// False when the engine was not running and nothing moved.
    pub advanced: bool,
    pub ate: bool,
    pub collision: Option<CollisionKind>,
    /// New interval when a score threshold was crossed this tick.
    pub interval_changed: Option<u32>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    phase: GamePhase,
    /// Head first. Capacity covers every grid cell plus the transient head.
    snake: VecDeque<Point>,
    target_len: usize,
    direction: Direction,
    /// Committed as `direction` at the start of the next tick.
    pending: Direction,
    food: Point,
    obstacles: Vec<Point>,
    score: u32,
    interval_ms: u32,
    rng: SimpleRng,
    seed: u32,
    /// Increments on every transition into a fresh run.
    run_id: u32,
    /// Ticks advanced in the current run.
    ticks: u64,
    last_collision: Option<CollisionKind>,
}

impl GameEngine {
    /// Create a new engine on the intro screen with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut engine = Self {
            phase: GamePhase::Intro,
            snake: VecDeque::with_capacity(GRID_CELLS + 1),
            target_len: BASELINE_LENGTH,
            direction: Direction::Right,
            pending: Direction::Right,
            food: Point::default(),
            obstacles: Vec::with_capacity(OBSTACLES.len()),
            score: 0,
            interval_ms: START_INTERVAL_MS,
            rng: SimpleRng::new(seed),
            seed,
            run_id: 0,
            ticks: 0,
            last_collision: None,
        };
        engine.reset_board();
        engine.spawn_food();
        engine
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    /// Snake cells, head first.
    pub fn snake(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.snake.iter().copied()
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub fn head(&self) -> Point {
        self.snake.front().copied().unwrap_or(SPAWN)
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn obstacles(&self) -> &[Point] {
        &self.obstacles
    }

    /// Interval the external timer should use for the next tick.
    pub fn tick_interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn run_id(&self) -> u32 {
        self.run_id
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_collision(&self) -> Option<CollisionKind> {
        self.last_collision
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.snake.clear();
        out.snake.extend(self.snake.iter().copied());
        out.target_len = self.target_len;
        out.direction = self.direction;
        out.food = self.food;
        out.obstacles.clear();
        out.obstacles.extend_from_slice(&self.obstacles);
        out.score = self.score;
        out.tick_interval_ms = self.interval_ms;
        out.run_id = self.run_id;
        out.ticks = self.ticks;
        out.last_collision = self.last_collision;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Issue the draw calls for the current phase.
    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        render(&self.snapshot(), surface);
    }

    /// Apply one key press. Returns true if any state changed.
    ///
    /// Keys without a meaning in the current phase are ignored.
    pub fn handle_input(&mut self, key: Key) -> bool {
        match self.phase {
            GamePhase::Intro => {
                self.start_run();
                true
            }
            GamePhase::Running => match key {
                Key::Pause => {
                    self.phase = GamePhase::Paused;
                    debug!(
                        run_id = self.run_id,
                        score = self.score,
                        phase = self.phase.as_str(),
                        "paused"
                    );
                    true
                }
                other => match other.direction() {
                    Some(dir) => self.steer(dir),
                    None => false,
                },
            },
            GamePhase::Paused => {
                if key == Key::Pause {
                    self.phase = GamePhase::Running;
                    debug!(run_id = self.run_id, "resumed");
                    true
                } else {
                    false
                }
            }
            GamePhase::GameOver => {
                if key == Key::Restart {
                    self.start_run();
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Advance one step. No-op outside `Running`.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != GamePhase::Running {
            return TickOutcome::default();
        }

        let mut outcome = TickOutcome {
            advanced: true,
            ..TickOutcome::default()
        };
        self.ticks += 1;

        // Move.
        self.direction = self.pending;
        let head = self.head().step(self.direction);
        self.snake.push_front(head);
        if self.snake.len() > self.target_len {
            self.snake.pop_back();
        }

        // Collide against the post-move body.
        if let Some(kind) = self.collision() {
            self.phase = GamePhase::GameOver;
            self.last_collision = Some(kind);
            outcome.collision = Some(kind);
            info!(
                run_id = self.run_id,
                score = self.score,
                length = self.snake.len(),
                ticks = self.ticks,
                heading = self.direction.as_str(),
                cause = kind.as_str(),
                "game over"
            );
            return outcome;
        }

        // Eat.
        if head == self.food {
            let prev_score = self.score;
            self.score += FOOD_REWARD;
            self.target_len += 1;
            self.spawn_food();
            outcome.ate = true;
            debug!(
                score = self.score,
                target_len = self.target_len,
                food_x = self.food.x,
                food_y = self.food.y,
                "food eaten"
            );

            let next = interval_after_score(self.interval_ms, prev_score, self.score);
            if next != self.interval_ms {
                self.interval_ms = next;
                outcome.interval_changed = Some(next);
                info!(score = self.score, interval_ms = next, "speed up");
            }
        }

        outcome
    }

    /// Set the pending direction unless it reverses the current one.
    fn steer(&mut self, dir: Direction) -> bool {
        if dir == self.direction.opposite() || dir == self.pending {
            return false;
        }
        self.pending = dir;
        true
    }

    fn collision(&self) -> Option<CollisionKind> {
        let head = self.head();
        if !head.in_bounds() {
            return Some(CollisionKind::Wall);
        }
        if self.snake.iter().skip(1).any(|&p| p == head) {
            return Some(CollisionKind::SelfBody);
        }
        if self.obstacles.contains(&head) {
            return Some(CollisionKind::Obstacle);
        }
        None
    }

    fn start_run(&mut self) {
        self.reset_board();
        self.spawn_food();
        self.phase = GamePhase::Running;
        self.run_id = self.run_id.wrapping_add(1);
        info!(run_id = self.run_id, seed = self.seed, "run started");
    }

    /// Baseline snake, score, speed and obstacle layout.
    fn reset_board(&mut self) {
        self.snake.clear();
        self.snake.push_back(SPAWN);
        self.target_len = BASELINE_LENGTH;
        self.direction = Direction::Right;
        self.pending = Direction::Right;
        self.score = 0;
        self.interval_ms = START_INTERVAL_MS;
        self.ticks = 0;
        self.last_collision = None;
        self.obstacles.clear();
        self.obstacles.extend_from_slice(&OBSTACLES);
    }

    fn spawn_food(&mut self) {
        self.food = self.rng.next_cell();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(seed: u32) -> GameEngine {
        let mut e = GameEngine::new(seed);
        e.handle_input(Key::Other);
        // Park the food out of the way so plain movement never eats it.
        e.food = Point::new(WIDTH - CELL_SIZE, HEIGHT - CELL_SIZE);
        e
    }

    fn body(e: &GameEngine) -> Vec<Point> {
        e.snake().collect()
    }

    #[test]
    fn starts_on_intro_with_food_spawned() {
        let e = GameEngine::new(1);
        assert_eq!(e.phase(), GamePhase::Intro);
        assert!(e.food().is_on_grid());
        assert_eq!(e.run_id(), 0);
    }

    #[test]
    fn tick_is_noop_outside_running() {
        let mut e = GameEngine::new(1);
        let before = body(&e);
        assert!(!e.tick().advanced);
        assert_eq!(body(&e), before);
        assert_eq!(e.ticks(), 0);
    }

    #[test]
    fn snake_grows_to_baseline_then_slides() {
        let mut e = running(1);
        assert_eq!(e.snake_len(), 1);
        e.tick();
        assert_eq!(e.snake_len(), 2);
        e.tick();
        assert_eq!(e.snake_len(), 3);
        e.tick();
        e.tick();
        assert_eq!(e.snake_len(), 3);
        assert_eq!(
            body(&e),
            vec![Point::new(140, 100), Point::new(130, 100), Point::new(120, 100)]
        );
    }

    #[test]
    fn pending_direction_commits_on_tick() {
        let mut e = running(1);
        assert!(e.handle_input(Key::Down));
        assert_eq!(e.direction(), Direction::Right);
        assert_eq!(e.pending_direction(), Direction::Down);
        e.tick();
        assert_eq!(e.direction(), Direction::Down);
        assert_eq!(e.head(), Point::new(100, 110));
    }

    #[test]
    fn reversal_is_checked_against_committed_direction() {
        let mut e = running(1);
        // Up then Left within one tick: Left reverses the committed Right.
        assert!(e.handle_input(Key::Up));
        assert!(!e.handle_input(Key::Left));
        assert_eq!(e.pending_direction(), Direction::Up);
    }

    #[test]
    fn eating_scores_grows_and_respawns() {
        let mut e = running(3);
        e.food = Point::new(110, 100);
        let out = e.tick();
        assert!(out.ate);
        assert_eq!(e.score(), FOOD_REWARD);
        assert_eq!(e.target_len(), BASELINE_LENGTH + 1);
        assert!(e.food().is_on_grid());

        for _ in 0..10 {
            e.food = Point::new(WIDTH - CELL_SIZE, HEIGHT - CELL_SIZE);
            e.tick();
        }
        assert_eq!(e.snake_len(), BASELINE_LENGTH + 1);
    }

    #[test]
    fn fifth_food_speeds_up() {
        let mut e = running(3);
        for i in 1..=5 {
            e.food = e.head().step(Direction::Right);
            let out = e.tick();
            assert!(out.ate);
            if i < 5 {
                assert_eq!(out.interval_changed, None);
            } else {
                assert_eq!(out.interval_changed, Some(130));
            }
        }
        assert_eq!(e.tick_interval_ms(), 130);
    }

    #[test]
    fn speed_up_stops_at_minimum_interval() {
        let mut e = running(3);
        e.score = 440;
        e.interval_ms = 60;
        e.food = e.head().step(Direction::Right);
        assert_eq!(e.tick().interval_changed, Some(MIN_INTERVAL_MS));

        e.score = 490;
        e.food = e.head().step(Direction::Right);
        let out = e.tick();
        assert!(out.ate);
        assert_eq!(out.interval_changed, None);
        assert_eq!(e.tick_interval_ms(), MIN_INTERVAL_MS);
    }

    #[test]
    fn wall_collision_at_right_edge() {
        let mut e = running(1);
        e.snake.clear();
        e.snake.push_back(Point::new(590, 100));
        let out = e.tick();
        assert_eq!(out.collision, Some(CollisionKind::Wall));
        assert_eq!(e.head(), Point::new(600, 100));
        assert_eq!(e.phase(), GamePhase::GameOver);
    }

    #[test]
    fn wall_takes_precedence_over_other_collisions() {
        let mut e = running(1);
        e.snake.clear();
        e.snake.push_back(Point::new(0, 0));
        e.pending = Direction::Up;
        e.direction = Direction::Up;
        e.food = Point::new(0, -10);
        let out = e.tick();
        assert_eq!(out.collision, Some(CollisionKind::Wall));
        assert!(!out.ate);
        assert_eq!(e.score(), 0);
    }

    #[test]
    fn obstacle_collision() {
        let mut e = running(1);
        e.snake.clear();
        e.snake.push_back(Point::new(190, 200));
        let out = e.tick();
        assert_eq!(out.collision, Some(CollisionKind::Obstacle));
        assert_eq!(e.last_collision(), Some(CollisionKind::Obstacle));
    }

    #[test]
    fn u_turn_into_own_body_ends_run() {
        let mut e = running(1);
        e.target_len = 5;
        for _ in 0..6 {
            e.tick();
        }
        assert_eq!(e.snake_len(), 5);

        e.handle_input(Key::Down);
        e.tick();
        e.handle_input(Key::Left);
        e.tick();
        e.handle_input(Key::Up);
        let out = e.tick();
        assert_eq!(out.collision, Some(CollisionKind::SelfBody));
        assert_eq!(e.phase(), GamePhase::GameOver);
    }

    #[test]
    fn chasing_the_tail_is_safe_because_tail_moves_first() {
        let mut e = running(1);
        e.target_len = 4;
        for _ in 0..5 {
            e.tick();
        }
        e.handle_input(Key::Down);
        e.tick();
        e.handle_input(Key::Left);
        e.tick();
        e.handle_input(Key::Up);
        let out = e.tick();
        assert_eq!(out.collision, None);
        assert_eq!(e.phase(), GamePhase::Running);
    }

    #[test]
    fn no_state_changes_after_game_over_tick() {
        let mut e = running(1);
        e.snake.clear();
        e.snake.push_back(Point::new(590, 100));
        e.tick();
        let snap = e.snapshot();
        assert!(!e.tick().advanced);
        assert_eq!(e.snapshot(), snap);
    }

    #[test]
    fn restart_resets_interval() {
        let mut e = running(3);
        for _ in 0..5 {
            e.food = e.head().step(Direction::Right);
            e.tick();
        }
        assert_eq!(e.tick_interval_ms(), 130);
        e.snake.clear();
        e.snake.push_back(Point::new(590, 100));
        e.tick();
        assert_eq!(e.phase(), GamePhase::GameOver);

        assert!(e.handle_input(Key::Restart));
        assert_eq!(e.tick_interval_ms(), START_INTERVAL_MS);
        assert_eq!(e.score(), 0);
        assert_eq!(e.run_id(), 2);
    }
}
