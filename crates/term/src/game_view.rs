//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The core issues draw calls in world pixels. [`BoardSurface`] converts them
//! into terminal cells: one grid cell becomes `cell_w x cell_h` characters, or
//! half a character row in half-block mode (`▀` with fg = upper, bg = lower).

use crate::core::{render, GameSnapshot, RenderSurface};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, GamePhase, TextStyle, CELL_SIZE, GRID_COLS, GRID_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Rgb = Rgb::new(20, 20, 28);

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    /// Pack two grid rows into each terminal row.
    half_rows: bool,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            half_rows: false,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            half_rows: false,
            anchor_y: AnchorY::Center,
        }
    }

    /// `cell_w` columns per grid cell, two grid rows per terminal row.
    pub fn half_block(cell_w: u16) -> Self {
        Self {
            half_rows: true,
            ..Self::new(cell_w, 1)
        }
    }

    /// Largest layout whose frame fits `viewport`: 2x1, then 1x1, then half-block.
    ///
    /// When nothing fits the half-block view is returned and renders a notice.
    pub fn fitting(viewport: Viewport) -> Self {
        [Self::default(), Self::new(1, 1), Self::half_block(1)]
            .into_iter()
            .find(|view| view.fits(viewport))
            .unwrap_or_else(|| Self::half_block(1))
    }

    pub fn fits(&self, viewport: Viewport) -> bool {
        let (w, h) = self.frame_size();
        w <= viewport.width && h <= viewport.height
    }

    pub fn is_half_block(&self) -> bool {
        self.half_rows
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board size including the border.
    pub fn frame_size(&self) -> (u16, u16) {
        let rows = if self.half_rows {
            (GRID_ROWS as u16).div_ceil(2)
        } else {
            GRID_ROWS as u16 * self.cell_h
        };
        (GRID_COLS as u16 * self.cell_w + 2, rows + 2)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        if !self.fits(viewport) {
            draw_too_small(fb, self.frame_size());
            return;
        }

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::plain(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let mut surface = BoardSurface {
            fb: &mut *fb,
            origin_x: start_x + 1,
            origin_y: start_y + 1,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            half_rows: self.half_rows,
        };
        render(snap, &mut surface);

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.snake.len() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.tick_interval_ms, value);
        fb.put_str(panel_x + digits(snap.tick_interval_ms), y, "ms", value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATE", label);
        y = y.saturating_add(1);
        let state = match snap.phase {
            GamePhase::Intro => "READY",
            GamePhase::Running => "RUNNING",
            GamePhase::Paused => "PAUSED",
            GamePhase::GameOver => "GAME OVER",
        };
        fb.put_str(panel_x, y, state, value);
        y = y.saturating_add(2);

        let dim = CellStyle { dim: true, ..value };
        fb.put_str(panel_x, y, "q quit", dim);
    }
}

/// Adapts world-pixel draw calls onto the board area of a framebuffer.
pub struct BoardSurface<'a> {
    pub fb: &'a mut FrameBuffer,
    /// Terminal position of world (0, 0).
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
    pub half_rows: bool,
}

impl BoardSurface<'_> {
    fn board_right(&self) -> u16 {
        self.origin_x + GRID_COLS as u16 * self.cell_w
    }

    /// Terminal position of the top-left character of grid cell `(col, row)`.
    fn cell_origin(&self, col: i32, row: i32) -> (u16, u16) {
        let px = self.origin_x + col as u16 * self.cell_w;
        let py = if self.half_rows {
            self.origin_y + row as u16 / 2
        } else {
            self.origin_y + row as u16 * self.cell_h
        };
        (px, py)
    }

    /// Recolor one half of a half-block character, keeping the other half.
    fn paint_half(&mut self, x: u16, y: u16, upper: bool, color: Rgb) {
        let Some(cell) = self.fb.get(x, y) else {
            return;
        };
        let (mut top, mut bottom) = if cell.ch == '▀' {
            (cell.style.fg, cell.style.bg)
        } else {
            (cell.style.bg, cell.style.bg)
        };
        if upper {
            top = color;
        } else {
            bottom = color;
        }
        self.fb.put_char(x, y, '▀', CellStyle::plain(top, bottom));
    }
}

impl RenderSurface for BoardSurface<'_> {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let col0 = x.div_euclid(CELL_SIZE);
        let row0 = y.div_euclid(CELL_SIZE);
        let cols = (w + CELL_SIZE - 1) / CELL_SIZE;
        let rows = (h + CELL_SIZE - 1) / CELL_SIZE;
        let style = CellStyle::plain(color.into(), BOARD_BG);

        for row in row0..row0 + rows {
            for col in col0..col0 + cols {
                if col < 0 || row < 0 || col >= GRID_COLS || row >= GRID_ROWS {
                    continue;
                }
                let (px, py) = self.cell_origin(col, row);
                if self.half_rows {
                    for dx in 0..self.cell_w {
                        self.paint_half(px + dx, py, row % 2 == 0, color.into());
                    }
                } else {
                    self.fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
                }
            }
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, style: TextStyle) {
        let col = x.div_euclid(CELL_SIZE);
        let row = y.div_euclid(CELL_SIZE);
        if col < 0 || row < 0 || col >= GRID_COLS || row >= GRID_ROWS {
            return;
        }
        let (px, py) = self.cell_origin(col, row);
        let style = CellStyle {
            fg: Color::TEXT.into(),
            bg: BOARD_BG,
            bold: style.is_bold(),
            dim: false,
        };
        let right = self.board_right();
        self.fb.put_str_clipped(px, py, right, text, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Shown instead of a clipped board.
fn draw_too_small(fb: &mut FrameBuffer, (need_w, need_h): (u16, u16)) {
    let style = CellStyle {
        bold: true,
        ..CellStyle::default()
    };
    fb.put_str(0, 0, "Terminal too small", style);

    let plain = CellStyle::default();
    let mut x = 0;
    fb.put_str(x, 1, "need ", plain);
    x += 5;
    fb.put_u32(x, 1, need_w as u32, plain);
    x += digits(need_w as u32);
    fb.put_char(x, 1, 'x', plain);
    fb.put_u32(x + 1, 1, need_h as u32, plain);
}

fn digits(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_counts_decimal_width() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(140), 3);
    }

    #[test]
    fn fitting_checks_both_dimensions() {
        let wide = GameView::fitting(Viewport::new(200, 50));
        assert_eq!((wide.cell_w, wide.half_rows), (2, false));

        let narrow = GameView::fitting(Viewport::new(80, 42));
        assert_eq!((narrow.cell_w, narrow.half_rows), (1, false));

        let short = GameView::fitting(Viewport::new(80, 24));
        assert!(short.half_rows);
        assert_eq!(short.frame_size(), (62, 22));
        assert!(short.fits(Viewport::new(80, 24)));
    }

    #[test]
    fn half_block_keeps_both_halves_of_a_character() {
        let mut fb = FrameBuffer::new(70, 25);
        fb.clear(CellStyle::plain(Rgb::new(1, 1, 1), BOARD_BG).into_cell(' '));
        let mut s = BoardSurface {
            fb: &mut fb,
            origin_x: 1,
            origin_y: 1,
            cell_w: 1,
            cell_h: 1,
            half_rows: true,
        };
        // Rows 4 and 5 share terminal row 1 + 2.
        s.fill_rect(30, 40, CELL_SIZE, CELL_SIZE, Color::SNAKE);
        s.fill_rect(30, 50, CELL_SIZE, CELL_SIZE, Color::FOOD);
        let cell = fb.get(4, 3).unwrap();
        assert_eq!(cell.ch, '▀');
        assert_eq!(cell.style.fg, Rgb::from(Color::SNAKE));
        assert_eq!(cell.style.bg, Rgb::from(Color::FOOD));
    }

    #[test]
    fn board_surface_maps_world_cells_to_terminal_cells() {
        let mut fb = FrameBuffer::new(130, 45);
        let mut s = BoardSurface {
            fb: &mut fb,
            origin_x: 1,
            origin_y: 1,
            cell_w: 2,
            cell_h: 1,
            half_rows: false,
        };
        s.fill_rect(30, 20, CELL_SIZE, CELL_SIZE, Color::SNAKE);
        // col 3 -> x = 1 + 6, row 2 -> y = 3
        assert_eq!(fb.get(7, 3).unwrap().ch, '█');
        assert_eq!(fb.get(8, 3).unwrap().ch, '█');
        assert_eq!(fb.get(9, 3).unwrap().ch, ' ');
        assert_eq!(fb.get(7, 3).unwrap().style.fg, Rgb::from(Color::SNAKE));
    }

    #[test]
    fn board_surface_skips_off_grid_rects() {
        let mut fb = FrameBuffer::new(130, 45);
        let mut s = BoardSurface {
            fb: &mut fb,
            origin_x: 1,
            origin_y: 1,
            cell_w: 2,
            cell_h: 1,
            half_rows: false,
        };
        s.fill_rect(600, 0, CELL_SIZE, CELL_SIZE, Color::SNAKE);
        s.fill_rect(-10, 0, CELL_SIZE, CELL_SIZE, Color::SNAKE);
        for y in 0..fb.height() {
            assert!(!fb.row_text(y).contains('█'));
        }
    }
}
