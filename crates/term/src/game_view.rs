//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{spawn_shape, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(18, 18, 26);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const CONTROLS: [&str; 6] = [
    "Controls:",
    "←/→ Move",
    "↑ Rotate",
    "↓ Soft drop",
    "Space Hard drop",
    "Esc Quit",
];

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

/// A lightweight terminal renderer for the game.
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
        Self::new(2, 1)
    }
}

/// Board frame placement inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
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

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame = self.frame(viewport);
        let well = CellStyle::new(Rgb::new(45, 45, 60), WELL_BG);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            well,
        );
        self.draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG));

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                match PieceKind::from_u8(snap.board[y as usize][x as usize]) {
                    Some(kind) => self.draw_board_cell(fb, frame, x as u16, y as u16, kind),
                    None => self.fill_cell_rect(fb, frame, x as u16, y as u16, '·', well.dim()),
                }
            }
        }

        // The piece that failed to spawn is not shown once the game is over.
        if let (Some(active), false) = (snap.active, snap.game_over()) {
            for (x, y) in active.cells {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    self.draw_board_cell(fb, frame, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over() {
            self.draw_game_over(fb, frame, snap.score);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y,
            w,
            h,
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame, style: CellStyle) {
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, f: Frame, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), WELL_BG).bold();
        self.fill_cell_rect(fb, f, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        f: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = f.x + 1 + cell_x * self.cell_w;
        let py = f.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = f.y;
        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let preview = CellStyle::new(piece_color(snap.next), PANEL_BG).bold();
        for (dx, dy) in spawn_shape(snap.next) {
            let px = panel_x + (dx as u16) * self.cell_w;
            let py = y + (dy as u16) * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', preview);
        }
        y = y.saturating_add(4 * self.cell_h + 1);

        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        for line in CONTROLS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, value.dim());
            y = y.saturating_add(1);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, f: Frame, score: u32) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mid_y = f.y.saturating_add(f.h / 2);
        let centered = |w: u16| f.x.saturating_add(f.w.saturating_sub(w) / 2);

        fb.put_str(centered(9), mid_y.saturating_sub(2), "GAME OVER", style);

        let digits = digit_count(score);
        let x = centered(6 + digits);
        fb.put_str(x, mid_y, "Score ", style);
        fb.put_u32(x + 6, mid_y, score, style);

        fb.put_str(centered(13), mid_y.saturating_add(2), "Press any key", style.dim());
    }
}

fn digit_count(v: u32) -> u16 {
    v.checked_ilog10().map_or(1, |d| d as u16 + 1)
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 240, 240),
        PieceKind::J => Rgb::new(0, 0, 240),
        PieceKind::L => Rgb::new(240, 160, 0),
        PieceKind::O => Rgb::new(240, 240, 0),
        PieceKind::S => Rgb::new(0, 240, 0),
        PieceKind::T => Rgb::new(160, 0, 240),
        PieceKind::Z => Rgb::new(240, 0, 0),
    }
}
