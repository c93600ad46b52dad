//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! frame.  No game logic is performed; this module only scales the shape
//! list from world units onto the terminal grid and emits commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::assets::Background;
use crate::constants::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::entities::{FillColor, GameState, Shape, ShapeKind};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_TITLE: Color = Color::Cyan;
const C_HUD: Color = Color::Yellow;
const C_STAR: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

fn fill(color: FillColor) -> Color {
    match color {
        FillColor::Blue => Color::Blue,
        FillColor::Red => Color::Red,
        FillColor::Green => Color::Green,
        FillColor::Magenta => Color::Magenta,
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Terminal layout: row 0 HUD, row 1 top border, rows 2..h-2 play area,
/// row h-2 bottom border, row h-1 controls hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Viewport { width, height }
    }

    fn inner_cols(&self) -> u16 {
        self.width.saturating_sub(2)
    }

    fn inner_rows(&self) -> u16 {
        self.height.saturating_sub(4)
    }

    /// Map a world span `[start, start + len)` along one axis onto inner
    /// cells, clipped to `[0, cells)`.  `None` if nothing is visible.
    fn span(start: f32, len: f32, world: f32, cells: u16) -> Option<(u16, u16)> {
        if cells == 0 {
            return None;
        }
        let to_cell = |v: f32| v * cells as f32 / world;
        let first = to_cell(start).floor();
        let last = to_cell(start + len).ceil() - 1.0;
        let last = last.max(first);
        if last < 0.0 || first >= cells as f32 {
            return None;
        }
        let first = first.max(0.0) as u16;
        let last = (last as u16).min(cells - 1);
        Some((first, last))
    }

    /// Terminal columns covered by the world x-span, inclusive.
    pub fn columns(&self, x: f32, w: f32) -> Option<(u16, u16)> {
        Self::span(x, w, WINDOW_WIDTH, self.inner_cols()).map(|(a, b)| (a + 1, b + 1))
    }

    /// Terminal rows covered by the world y-span, inclusive.
    pub fn rows(&self, y: f32, h: f32) -> Option<(u16, u16)> {
        Self::span(y, h, WINDOW_HEIGHT, self.inner_rows()).map(|(a, b)| (a + 2, b + 2))
    }

    /// Terminal cell of a world point, if inside the play area.
    pub fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let (col, _) = self.columns(x, 0.0)?;
        let (row, _) = self.rows(y, 0.0)?;
        Some((col, row))
    }
}

// ── Backdrop ──────────────────────────────────────────────────────────────────

/// Star cells sampled from the background image bytes, fixed per viewport.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Backdrop {
    stars: Vec<(u16, u16)>,
}

impl Backdrop {
    pub fn from_background(background: &Background, viewport: Viewport) -> Self {
        let bytes = &background.bytes;
        if bytes.is_empty() {
            return Backdrop::default();
        }
        let mut stars = Vec::new();
        for row in 0..viewport.inner_rows() {
            for col in 0..viewport.inner_cols() {
                let i = row as usize * viewport.inner_cols() as usize + col as usize;
                if bytes[i.wrapping_mul(7919) % bytes.len()] % 29 == 0 {
                    stars.push((col + 1, row + 2));
                }
            }
        }
        Backdrop { stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    viewport: Viewport,
    backdrop: &Backdrop,
    shapes: &[Shape],
    state: &GameState,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_backdrop(out, backdrop)?;
    draw_border(out, viewport)?;
    draw_hud(out, viewport, state)?;

    for shape in shapes {
        draw_shape(out, viewport, shape)?;
    }

    draw_controls_hint(out, viewport)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Backdrop & border ─────────────────────────────────────────────────────────

fn draw_backdrop<W: Write>(out: &mut W, backdrop: &Backdrop) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_STAR))?;
    for &(col, row) in &backdrop.stars {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("·"))?;
    }
    Ok(())
}

fn draw_border<W: Write>(out: &mut W, viewport: Viewport) -> std::io::Result<()> {
    let w = viewport.width as usize;
    let h = viewport.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(viewport.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, viewport: Viewport, state: &GameState) -> std::io::Result<()> {
    // Live counts — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Shots:{:>4}  Enemies:{:>3}",
        state.projectiles.len(),
        state.enemies.len()
    )))?;

    // Title — centre
    let tx = (viewport.width / 2).saturating_sub(WINDOW_TITLE.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(tx, 0))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(WINDOW_TITLE))?;

    // Boss health — right
    let boss_text = format!("Boss HP:{:>3}", state.boss.health);
    let rx = viewport
        .width
        .saturating_sub(boss_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(fill(FillColor::Magenta)))?;
    out.queue(Print(&boss_text))?;

    Ok(())
}

// ── Shapes ────────────────────────────────────────────────────────────────────

fn draw_shape<W: Write>(out: &mut W, viewport: Viewport, shape: &Shape) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(fill(shape.color)))?;
    match shape.kind {
        ShapeKind::Circle => {
            // Small enough to be one cell: plot the centre.
            let cx = shape.x + shape.width / 2.0;
            let cy = shape.y + shape.height / 2.0;
            if let Some((col, row)) = viewport.cell(cx, cy) {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(Print("●"))?;
            }
        }
        ShapeKind::Rectangle => {
            let (Some((c0, c1)), Some((r0, r1))) = (
                viewport.columns(shape.x, shape.width),
                viewport.rows(shape.y, shape.height),
            ) else {
                return Ok(());
            };
            let line = "█".repeat((c1 - c0 + 1) as usize);
            for row in r0..=r1 {
                out.queue(cursor::MoveTo(c0, row))?;
                out.queue(Print(&line))?;
            }
        }
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, viewport: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, viewport.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}
