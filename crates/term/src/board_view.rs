//! BoardView: maps a gem board plus cursor state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Board, Swap};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Gem, Position};

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

/// Frontend state drawn on top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayState<'a> {
    pub cursor: Position,
    /// First cell of a pending swap.
    pub selected: Option<Position>,
    pub hint: Option<Swap>,
    pub moves: u32,
    /// Refill cycles caused by the last move.
    pub last_chain: usize,
    pub status: &'a str,
}

impl Default for PlayState<'_> {
    fn default() -> Self {
        Self {
            cursor: Position::new(0, 0),
            selected: None,
            hint: None,
            moves: 0,
            last_chain: 0,
            status: "",
        }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const HINT_BG: Rgb = Rgb::new(60, 60, 85);

/// A lightweight terminal renderer for a gem board.
pub struct BoardView {
    /// Terminal columns per board cell: a marker on each side of the gem.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        Self { cell_w: 3 }
    }
}

impl BoardView {
    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self, board: &Board<Gem>) -> (u16, u16) {
        (
            board.width() as u16 * self.cell_w + 2,
            board.height() as u16 + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        board: &Board<Gem>,
        play: &PlayState<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (frame_w, frame_h) = self.frame_size(board);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        draw_border(fb, start_x, start_y, frame_w, frame_h);

        for pos in board.positions() {
            self.draw_cell(fb, board, play, start_x, start_y, pos);
        }

        self.draw_side_panel(fb, play, viewport, start_x + frame_w + 2, start_y);

        let status_y = start_y + frame_h;
        let text_w = play.status.chars().count() as u16;
        let status_x = start_x + frame_w.saturating_sub(text_w) / 2;
        fb.put_str(status_x, status_y, play.status, Style::default().bold());
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        board: &Board<Gem>,
        play: &PlayState<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, play, viewport, &mut fb);
        fb
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        board: &Board<Gem>,
        play: &PlayState<'_>,
        start_x: u16,
        start_y: u16,
        pos: Position,
    ) {
        let x = start_x + 1 + pos.col as u16 * self.cell_w;
        let y = start_y + 1 + pos.row as u16;

        let hinted = play.hint.is_some_and(|s| s.a == pos || s.b == pos);
        let bg = if hinted { HINT_BG } else { WELL_BG };
        fb.fill_rect(x, y, self.cell_w, 1, ' ', Style::default().on(bg));

        let (ch, style) = match board.at(pos) {
            Some(gem) => ('◆', Style::fg(gem_color(*gem)).on(bg).bold()),
            None => ('·', Style::fg(Rgb::new(90, 90, 100)).on(bg).dim()),
        };
        fb.put_char(x + self.cell_w / 2, y, ch, style);

        let marker = Style::fg(Rgb::new(255, 255, 255)).on(bg).bold();
        if play.selected == Some(pos) {
            fb.put_char(x, y, '<', marker);
            fb.put_char(x + self.cell_w - 1, y, '>', marker);
        } else if play.cursor == pos {
            fb.put_char(x, y, '[', marker);
            fb.put_char(x + self.cell_w - 1, y, ']', marker);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        play: &PlayState<'_>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = Style::default().bold();
        let value = Style::fg(Rgb::new(200, 200, 200));
        let help = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_u32(panel_x, y + 1, play.moves, value);
        y += 3;

        fb.put_str(panel_x, y, "CHAIN", label);
        fb.put_u32(panel_x, y + 1, play.last_chain as u32, value);
        y += 3;

        for line in [
            "arrows  move",
            "space   pick",
            "esc     drop",
            "?       hint",
            "r       new",
            "q       quit",
        ] {
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = Style::fg(Rgb::new(200, 200, 200));

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

pub fn gem_color(gem: Gem) -> Rgb {
    match gem {
        Gem::Ruby => Rgb::new(220, 60, 60),
        Gem::Emerald => Rgb::new(60, 200, 100),
        Gem::Sapphire => Rgb::new(70, 120, 230),
        Gem::Topaz => Rgb::new(240, 200, 60),
        Gem::Amethyst => Rgb::new(180, 90, 220),
        Gem::Pearl => Rgb::new(230, 230, 230),
    }
}
