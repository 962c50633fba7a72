//! BoardView: paints the game onto the terminal through the renderer
//! contract.
//!
//! The view derives its geometry from the viewport at construction time: the
//! per-cell budget is the largest whole number of terminal cells that fits
//! both axes, and the [`Grid`] is built from that surface width. A terminal
//! too small to give every cell at least one character fails construction.
//!
//! Frames are queued into an in-memory buffer; writes to it cannot fail, so
//! the contract methods stay infallible.

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use tui_snake_core::render::BoardRenderer;
use tui_snake_core::{ConfigError, Grid};
use tui_snake_types::{Cell, Direction, CELL_GAP, GRID_COLS, GRID_ROWS};

/// Rows reserved around the board: border above and below, score line, and
/// the key hints line.
const HUD_ROWS: u16 = 4;

const SNAKE_COLOR: Color = Color::Rgb {
    r: 0x4e,
    g: 0x9f,
    b: 0x3d,
};
const FRUIT_COLOR: Color = Color::Rgb {
    r: 0xf5,
    g: 0xa1,
    b: 0x42,
};
const BORDER_COLOR: Color = Color::Rgb {
    r: 200,
    g: 200,
    b: 200,
};

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

/// Board renderer for a character terminal.
pub struct BoardView {
    grid: Grid,
    /// Terminal cells per grid cell, both axes
    cell_px: u16,
    origin_x: u16,
    origin_y: u16,
    span_w: u16,
    span_h: u16,
    buf: Vec<u8>,
}

impl BoardView {
    /// Fit the fixed 30x20 grid into the given viewport.
    ///
    /// Fails with [`ConfigError`] when the viewport cannot give every grid
    /// cell at least one terminal cell.
    pub fn new(viewport: Viewport) -> Result<Self, ConfigError> {
        let cols = GRID_COLS as u16;
        let rows = GRID_ROWS as u16;

        let budget_x = viewport.width.saturating_sub(2) / cols;
        let budget_y = viewport.height.saturating_sub(HUD_ROWS) / rows;
        let budget = budget_x.min(budget_y);

        let surface_width = f32::from(budget) * f32::from(cols);
        let grid = Grid::new(surface_width, GRID_ROWS, GRID_COLS, CELL_GAP)?;

        let (extent_w, extent_h) = grid.surface_extent();
        let span_w = extent_w as u16;
        let span_h = extent_h as u16;

        let origin_x = 1 + viewport.width.saturating_sub(span_w + 2) / 2;
        let origin_y = 1 + viewport
            .height
            .saturating_sub(span_h + HUD_ROWS)
            .saturating_sub(1)
            / 2;

        Ok(Self {
            grid,
            cell_px: grid.cell_size() as u16,
            origin_x,
            origin_y,
            span_w,
            span_h,
            buf: Vec::with_capacity(16 * 1024),
        })
    }

    /// The finished frame for the current draw pass.
    pub fn frame(&self) -> &[u8] {
        &self.buf
    }

    /// Draw the score line, key hints, and the pause / game-over banners.
    pub fn draw_hud(&mut self, score_display: u32, paused: bool, game_over: bool) {
        let below = self.origin_y + self.span_h + 1;
        self.put_styled(
            self.origin_x.saturating_sub(1),
            below,
            &format!("SCORE {score_display}"),
            BORDER_COLOR,
            Some(Attribute::Bold),
        );
        self.put_styled(
            self.origin_x.saturating_sub(1),
            below + 1,
            "arrows/wasd steer  p pause  r restart  q quit",
            BORDER_COLOR,
            Some(Attribute::Dim),
        );

        if game_over {
            self.banner(0, "GAME OVER");
            self.banner(1, "press r to restart");
        } else if paused {
            self.banner(0, "PAUSED");
        }
    }

    fn banner(&mut self, line: u16, text: &str) {
        let width = text.chars().count() as u16;
        let x = self.origin_x + self.span_w.saturating_sub(width) / 2;
        let y = self.origin_y + self.span_h / 2 + line;
        self.put_styled(x, y, text, Color::White, Some(Attribute::Bold));
    }

    fn cell_anchor(&self, cell: Cell) -> (u16, u16) {
        let (ox, oy) = self.grid.cell_origin(cell.col, cell.row);
        (
            self.origin_x + ox.round() as u16,
            self.origin_y + oy.round() as u16,
        )
    }

    /// Fill one grid cell with a glyph.
    fn put_cell(&mut self, cell: Cell, glyph: char, color: Color) {
        let (x, y) = self.cell_anchor(cell);
        let run: String = std::iter::repeat(glyph).take(self.cell_px as usize).collect();
        for dy in 0..self.cell_px {
            self.put_styled(x, y + dy, &run, color, None);
        }
    }

    // Queued writes land in an in-memory Vec, which cannot fail.
    fn put_styled(&mut self, x: u16, y: u16, text: &str, color: Color, attr: Option<Attribute>) {
        let _ = self.buf.queue(cursor::MoveTo(x, y));
        let _ = self.buf.queue(SetForegroundColor(color));
        if let Some(attr) = attr {
            let _ = self.buf.queue(SetAttribute(attr));
        }
        let _ = self.buf.queue(Print(text));
        let _ = self.buf.queue(SetAttribute(Attribute::Reset));
        let _ = self.buf.queue(ResetColor);
    }

    fn draw_border(&mut self) {
        let x0 = self.origin_x - 1;
        let y0 = self.origin_y - 1;
        let inner = self.span_w as usize;

        let top = format!("┌{}┐", "─".repeat(inner));
        let bottom = format!("└{}┘", "─".repeat(inner));
        self.put_styled(x0, y0, &top, BORDER_COLOR, None);
        self.put_styled(x0, y0 + self.span_h + 1, &bottom, BORDER_COLOR, None);

        for dy in 0..self.span_h {
            self.put_styled(x0, self.origin_y + dy, "│", BORDER_COLOR, None);
            self.put_styled(x0 + self.span_w + 1, self.origin_y + dy, "│", BORDER_COLOR, None);
        }
    }
}

impl BoardRenderer for BoardView {
    fn clear(&mut self) {
        self.buf.clear();
        let _ = self.buf.queue(terminal::Clear(terminal::ClearType::All));
        self.draw_border();
    }

    fn draw_head(&mut self, cell: Cell, dir: Direction) {
        let glyph = match dir {
            Direction::Up => '▲',
            Direction::Down => '▼',
            Direction::Left => '◀',
            Direction::Right => '▶',
        };
        self.put_cell(cell, glyph, SNAKE_COLOR);
    }

    fn draw_fruit(&mut self, cell: Cell) {
        self.put_cell(cell, '●', FRUIT_COLOR);
    }

    fn draw_body(&mut self, cell: Cell) {
        self.put_cell(cell, '█', SNAKE_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_terminal_fits_one_char_per_cell() {
        let view = BoardView::new(Viewport::new(80, 24)).unwrap();
        assert_eq!(view.cell_px, 1);
        assert_eq!(view.span_w, 30);
        assert_eq!(view.span_h, 20);
    }

    #[test]
    fn test_large_terminal_scales_up() {
        let view = BoardView::new(Viewport::new(160, 50)).unwrap();
        assert_eq!(view.cell_px, 2);
        assert_eq!(view.span_w, 60);
        assert_eq!(view.span_h, 40);
    }

    #[test]
    fn test_tiny_terminal_is_a_config_error() {
        assert!(matches!(
            BoardView::new(Viewport::new(20, 10)),
            Err(ConfigError::CellTooSmall { .. })
        ));
    }

    #[test]
    fn test_draw_pass_produces_a_frame() {
        let mut view = BoardView::new(Viewport::new(80, 24)).unwrap();

        view.clear();
        view.draw_head(Cell::new(5, 10), Direction::Right);
        view.draw_fruit(Cell::new(3, 10));
        view.draw_body(Cell::new(4, 10));
        view.draw_hud(150, false, false);

        let frame = String::from_utf8_lossy(view.frame()).to_string();
        assert!(frame.contains('▶'));
        assert!(frame.contains('●'));
        assert!(frame.contains('█'));
        assert!(frame.contains("SCORE 150"));
    }

    #[test]
    fn test_banners_follow_lifecycle_flags() {
        let mut view = BoardView::new(Viewport::new(80, 24)).unwrap();
        view.clear();
        view.draw_hud(0, true, false);
        let frame = String::from_utf8_lossy(view.frame()).to_string();
        assert!(frame.contains("PAUSED"));
        assert!(!frame.contains("GAME OVER"));

        view.clear();
        view.draw_hud(0, false, true);
        let frame = String::from_utf8_lossy(view.frame()).to_string();
        assert!(frame.contains("GAME OVER"));
    }
}
