//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, Pos, BACKGROUND_COLOR};

const PANEL_W: u16 = 20;

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

/// Figures that live outside the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud<'a> {
    pub high_score: u32,
    pub skin_name: &'a str,
}

impl Default for Hud<'_> {
    fn default() -> Self {
        Self {
            high_score: 0,
            skin_name: "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Scaled-up view when `fullscreen` is set and the grid still fits.
    pub fn fitted(fullscreen: bool, grid: (u16, u16), viewport: Viewport) -> Self {
        let large = Self::new(4, 2);
        if fullscreen && large.fits(grid, viewport) {
            large
        } else {
            Self::default()
        }
    }

    pub fn cell_size(&self) -> (u16, u16) {
        (self.cell_w, self.cell_h)
    }

    /// Frame size (border included) for a grid.
    pub fn frame_size(&self, grid: (u16, u16)) -> (u16, u16) {
        (
            grid.0.saturating_mul(self.cell_w).saturating_add(2),
            grid.1.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    fn fits(&self, grid: (u16, u16), viewport: Viewport) -> bool {
        let (w, h) = self.frame_size(grid);
        w.saturating_add(PANEL_W) <= viewport.width && h <= viewport.height
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &SessionSnapshot, hud: &Hud<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let grid = (snap.grid_width, snap.grid_height);
        let (frame_w, frame_h) = self.frame_size(grid);
        if frame_w > viewport.width || frame_h > viewport.height {
            let style = CellStyle::default().bold();
            fb.put_str_centered(0, viewport.width, viewport.height / 2, "Terminal too small", style);
            return;
        }

        let total_w = if frame_w.saturating_add(PANEL_W) <= viewport.width {
            frame_w + PANEL_W
        } else {
            frame_w
        };
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle::new(Rgb::new(60, 90, 130), BACKGROUND_COLOR).dim();
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg);
        draw_border(fb, start_x, start_y, frame_w, frame_h, CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)));

        for y in 0..snap.grid_height {
            for x in 0..snap.grid_width {
                self.fill_cell(fb, start_x, start_y, Pos::new(x as i32, y as i32), '·', bg);
            }
        }

        for &food in &snap.food {
            self.draw_food(fb, start_x, start_y, food, snap.food_color);
        }

        let body = CellStyle::new(snap.snake_colors.body, BACKGROUND_COLOR);
        for &seg in snap.snake.iter().skip(1) {
            self.fill_cell(fb, start_x, start_y, seg, '▓', body);
        }
        if let Some(&head) = snap.snake.first() {
            let head_style = CellStyle::new(snap.snake_colors.head, BACKGROUND_COLOR).bold();
            self.fill_cell(fb, start_x, start_y, head, '█', head_style);
        }

        if start_x + frame_w + PANEL_W <= viewport.width {
            draw_side_panel(fb, snap, hud, start_x + frame_w + 2, start_y);
        }

        match snap.status {
            GameStatus::Playing => {}
            GameStatus::Paused => {
                draw_overlay(fb, start_x, start_y, frame_w, frame_h, &[
                    Line::Title("PAUSED"),
                    Line::Blank,
                    Line::Hint("P/Enter resume  M menu"),
                ]);
            }
            GameStatus::GameOver => {
                draw_overlay(fb, start_x, start_y, frame_w, frame_h, &[
                    Line::Title("GAME OVER"),
                    Line::Blank,
                    Line::Value("Score ", snap.score),
                    if snap.new_record { Line::Record("NEW RECORD!") } else { Line::Blank },
                    Line::Hint("Enter restart  M menu"),
                ]);
            }
            GameStatus::Victory => {
                draw_overlay(fb, start_x, start_y, frame_w, frame_h, &[
                    Line::Title("VICTORY!"),
                    Line::Blank,
                    Line::Value("Score ", snap.score),
                    Line::Clock("Time ", snap.elapsed_ms),
                    if snap.new_record { Line::Record("NEW RECORD!") } else { Line::Blank },
                    Line::Hint("Enter restart  M menu"),
                ]);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Top-left terminal coordinate of a grid cell.
    pub fn cell_origin(&self, start_x: u16, start_y: u16, cell: Pos) -> (u16, u16) {
        (
            start_x + 1 + (cell.x as u16) * self.cell_w,
            start_y + 1 + (cell.y as u16) * self.cell_h,
        )
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, cell: Pos, ch: char, style: CellStyle) {
        if cell.x < 0 || cell.y < 0 {
            return;
        }
        let (px, py) = self.cell_origin(start_x, start_y, cell);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_food(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, cell: Pos, color: Rgb) {
        let bg = CellStyle::new(color, BACKGROUND_COLOR);
        self.fill_cell(fb, start_x, start_y, cell, ' ', bg);
        let (px, py) = self.cell_origin(start_x, start_y, cell);
        let cx = px + (self.cell_w - 1) / 2;
        let cy = py + (self.cell_h - 1) / 2;
        fb.put_char(cx, cy, '●', bg.bold());
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

fn draw_side_panel(fb: &mut FrameBuffer, snap: &SessionSnapshot, hud: &Hud<'_>, x: u16, start_y: u16) {
    let label = CellStyle::default().bold();
    let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
    let dim = value.dim();

    let mut y = start_y;
    fb.put_str(x, y, "SCORE", label);
    fb.put_u32(x, y + 1, snap.score, value);
    y += 3;

    fb.put_str(x, y, "HIGH SCORE", label);
    fb.put_u32(x, y + 1, hud.high_score.max(snap.score), value);
    y += 3;

    fb.put_str(x, y, "LENGTH", label);
    let end = fb.put_u32(x, y + 1, snap.length() as u32, value);
    fb.put_char(end, y + 1, '/', dim);
    fb.put_u32(end + 1, y + 1, snap.victory_length as u32, dim);
    y += 3;

    fb.put_str(x, y, "FOOD", label);
    fb.put_u32(x, y + 1, snap.food.len() as u32, value);
    y += 3;

    fb.put_str(x, y, "SPEED", label);
    if snap.accelerating {
        fb.put_str(x, y + 1, ">> FAST", CellStyle::new(Rgb::new(255, 200, 0), Rgb::new(0, 0, 0)).bold());
    } else {
        fb.put_str(x, y + 1, "> NORMAL", value);
    }
    y += 3;

    fb.put_str(x, y, "TIME", label);
    put_clock(fb, x, y + 1, snap.elapsed_ms, value);
    y += 3;

    if !hud.skin_name.is_empty() {
        fb.put_str(x, y, "SKIN", label);
        fb.put_str(x, y + 1, hud.skin_name, value);
    }
}

/// `m:ss` without allocating; returns the column after the text.
pub fn put_clock(fb: &mut FrameBuffer, x: u16, y: u16, ms: u64, style: CellStyle) -> u16 {
    let secs = ms / 1000;
    let minutes = (secs / 60).min(u32::MAX as u64) as u32;
    let seconds = (secs % 60) as u32;
    let end = fb.put_u32(x, y, minutes, style);
    fb.put_char(end, y, ':', style);
    if seconds < 10 {
        fb.put_char(end + 1, y, '0', style);
        fb.put_u32(end + 2, y, seconds, style)
    } else {
        fb.put_u32(end + 1, y, seconds, style)
    }
}

enum Line<'a> {
    Title(&'a str),
    Value(&'a str, u32),
    Clock(&'a str, u64),
    Record(&'a str),
    Hint(&'a str),
    Blank,
}

fn draw_overlay(fb: &mut FrameBuffer, start_x: u16, start_y: u16, frame_w: u16, frame_h: u16, lines: &[Line<'_>]) {
    let box_w = frame_w.saturating_sub(4).max(1);
    let box_h = lines.len() as u16 + 2;
    let box_x = start_x + 2;
    let box_y = start_y + frame_h.saturating_sub(box_h) / 2;
    let panel = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
    fb.fill_rect(box_x, box_y, box_w, box_h, ' ', panel);

    for (i, line) in lines.iter().enumerate() {
        let y = box_y + 1 + i as u16;
        match *line {
            Line::Title(text) => fb.put_str_centered(box_x, box_w, y, text, panel.bold()),
            Line::Record(text) => {
                let gold = CellStyle::new(Rgb::new(255, 215, 0), Rgb::new(0, 0, 0)).bold();
                fb.put_str_centered(box_x, box_w, y, text, gold);
            }
            Line::Hint(text) => fb.put_str_centered(box_x, box_w, y, text, panel.dim()),
            Line::Value(label, value) => {
                let w = label.chars().count() as u16 + digits(value as u64);
                let x = box_x + box_w.saturating_sub(w) / 2;
                let end = fb.put_str(x, y, label, panel);
                fb.put_u32(end, y, value, panel.bold());
            }
            Line::Clock(label, ms) => {
                let secs = ms / 1000;
                let w = label.chars().count() as u16 + digits(secs / 60) + 3;
                let x = box_x + box_w.saturating_sub(w) / 2;
                let end = fb.put_str(x, y, label, panel);
                put_clock(fb, end, y, ms, panel.bold());
            }
            Line::Blank => {}
        }
    }
}

fn digits(mut n: u64) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
