//! GameView: maps a `core::SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{SessionSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::{self, BOARD_BG};
use crate::types::{ColorIndex, EMPTY};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen position of the board frame, computed per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border
    pub x: u16,
    pub y: u16,
    /// Border size including the frame itself
    pub frame_w: u16,
    pub frame_h: u16,
}

/// A lightweight terminal renderer for a game session.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the board frame lands for a grid of `width x height` cells.
    pub fn layout(&self, width: u16, height: u16, viewport: Viewport) -> BoardLayout {
        let frame_w = width.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = height.saturating_mul(self.cell_h).saturating_add(2);
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        BoardLayout {
            x,
            y,
            frame_w,
            frame_h,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(snap.width, snap.height, viewport);

        // Background for play area.
        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            CellStyle::fg(Rgb::new(80, 80, 90)).on(BOARD_BG),
        );
        fb.draw_border(layout.x, layout.y, layout.frame_w, layout.frame_h, palette::BORDER);

        // Locked cells.
        for y in 0..snap.height {
            for x in 0..snap.width {
                match snap.cell(x as i32, y as i32) {
                    EMPTY => self.draw_empty_cell(fb, &layout, x, y),
                    color => self.draw_board_cell(fb, &layout, x, y, color),
                }
            }
        }

        // Active piece; rows above the grid are hidden.
        for (x, y) in snap.current.cells() {
            if x >= 0 && y >= 0 && x < snap.width as i32 && y < snap.height as i32 {
                self.draw_board_cell(fb, &layout, x as u16, y as u16, snap.current.color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        // Overlays.
        if snap.paused() {
            self.draw_overlay(fb, &layout, &["PAUSED", "SPACE to resume"]);
        } else if snap.game_over() {
            let score = format!("Final Score: {}", snap.score);
            self.draw_overlay(
                fb,
                &layout,
                &["GAME OVER", score.as_str(), "", "R restart", "M menu", "Q quit"],
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, layout: &BoardLayout, x: u16, y: u16) {
        let style = CellStyle::fg(Rgb::new(90, 90, 100)).on(BOARD_BG).dim();
        self.fill_cell_rect(fb, layout, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        x: u16,
        y: u16,
        color: ColorIndex,
    ) {
        let style = CellStyle::fg(palette::color_rgb(color)).on(BOARD_BG).bold();
        self.fill_cell_rect(fb, layout, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.x + 1 + cell_x * self.cell_w;
        let py = layout.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let mut y = layout.y;
        for (label, value) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, label, palette::LABEL);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, value, palette::VALUE);
            y = y.saturating_add(2);
        }

        fb.put_str(panel_x, y, "NEXT", palette::LABEL);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, &snap.next.shape, snap.next.color);
    }

    /// Draw a shape at terminal position (x, y) using board cell sizing.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape, color: ColorIndex) {
        let style = CellStyle::fg(palette::color_rgb(color)).bold();
        for (r, c) in shape.occupied() {
            fb.fill_rect(
                x + c as u16 * self.cell_w,
                y + r as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                '█',
                style,
            );
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &BoardLayout, lines: &[&str]) {
        let top = layout
            .y
            .saturating_add(layout.frame_h / 2)
            .saturating_sub(lines.len() as u16 / 2);
        let title = palette::TITLE.on(palette::BLACK);
        let hint = palette::VALUE.on(palette::BLACK);
        for (i, line) in lines.iter().enumerate() {
            let style = if i == 0 { title } else { hint };
            fb.put_str_centered(layout.x, layout.frame_w, top + i as u16, line, style);
        }
    }
}
