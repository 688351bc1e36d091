//! Draw-call issuing for a frame.
//!
//! The core owns no rendering resources. Frontends implement [`RenderSurface`]
//! and receive primitive calls in world coordinates (see [`crate::types::WIDTH`]
//! and [`crate::types::HEIGHT`]).

use crate::snapshot::GameSnapshot;
use crate::types::{Color, GamePhase, TextStyle, CELL_SIZE, HEIGHT, WIDTH};

/// Target for primitive draw calls.
pub trait RenderSurface {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, style: TextStyle);
}

pub const INTRO_LINES: [(&str, TextStyle, i32); 6] = [
    ("Welcome to Snake Game!", TextStyle::Title, 0),
    ("Use Arrow Keys to Move", TextStyle::Body, 40),
    ("Eat the red dots (Food)", TextStyle::Body, 70),
    ("Avoid the blue dots (Obstacles)", TextStyle::Body, 100),
    ("Press any key to Start", TextStyle::Body, 130),
    ("Press P to Pause", TextStyle::Body, 160),
];

const TEXT_X: i32 = WIDTH / 4;

/// Issue all draw calls for `snap`.
pub fn render<S: RenderSurface + ?Sized>(snap: &GameSnapshot, surface: &mut S) {
    match snap.phase {
        GamePhase::Intro => {
            for (text, style, dy) in INTRO_LINES {
                surface.draw_text(TEXT_X, HEIGHT / 4 + dy, text, style);
            }
        }
        GamePhase::Running => {
            let food = snap.food;
            surface.fill_rect(food.x, food.y, CELL_SIZE, CELL_SIZE, Color::FOOD);
            for p in &snap.snake {
                surface.fill_rect(p.x, p.y, CELL_SIZE, CELL_SIZE, Color::SNAKE);
            }
            for p in &snap.obstacles {
                surface.fill_rect(p.x, p.y, CELL_SIZE, CELL_SIZE, Color::OBSTACLE);
            }
        }
        GamePhase::Paused => {
            let text = format!("Paused! Score: {}  Press P to Resume", snap.score);
            surface.draw_text(TEXT_X, HEIGHT / 2 - 20, &text, TextStyle::Status);
        }
        GamePhase::GameOver => {
            let text = format!("Game Over! Score: {} Press R to Restart", snap.score);
            surface.draw_text(TEXT_X, HEIGHT / 2, &text, TextStyle::Status);
            surface.draw_text(
                TEXT_X,
                HEIGHT / 2 + 20,
                "Avoid the blue obstacles! Eat the red food!",
                TextStyle::Status,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[derive(Default)]
    struct Count {
        rects: usize,
        texts: Vec<String>,
    }

    impl RenderSurface for Count {
        fn fill_rect(&mut self, _x: i32, _y: i32, _w: i32, _h: i32, _color: Color) {
            self.rects += 1;
        }

        fn draw_text(&mut self, _x: i32, _y: i32, text: &str, _style: TextStyle) {
            self.texts.push(text.to_string());
        }
    }

    #[test]
    fn intro_draws_text_only() {
        let snap = GameSnapshot::default();
        let mut c = Count::default();
        render(&snap, &mut c);
        assert_eq!(c.rects, 0);
        assert_eq!(c.texts.len(), INTRO_LINES.len());
    }

    #[test]
    fn running_draws_one_rect_per_entity() {
        let mut snap = GameSnapshot::default();
        snap.phase = GamePhase::Running;
        snap.snake = vec![Point::new(20, 0), Point::new(10, 0)];
        snap.obstacles = vec![Point::new(200, 200)];
        let mut c = Count::default();
        render(&snap, &mut c);
        assert_eq!(c.rects, 4);
        assert!(c.texts.is_empty());
    }

    #[test]
    fn status_text_carries_score() {
        let mut snap = GameSnapshot::default();
        snap.score = 70;
        snap.phase = GamePhase::Paused;
        let mut c = Count::default();
        render(&snap, &mut c);
        assert!(c.texts[0].contains("Score: 70"));

        snap.phase = GamePhase::GameOver;
        let mut c = Count::default();
        render(&snap, &mut c);
        assert_eq!(c.texts.len(), 2);
        assert!(c.texts[0].contains("Score: 70"));
    }
}
