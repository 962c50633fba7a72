//! Renderer contract - the narrow interface the engine draws through
//!
//! Implementations are assumed infallible; drawing happens into buffers or
//! surfaces whose writes cannot meaningfully fail. The engine invokes the
//! methods once per completed step, always in the same order: clear, head,
//! fruit, then each body segment.

use tui_snake_types::{Cell, Direction};

/// Painting surface for one frame of the board
pub trait BoardRenderer {
    /// Wipe the previous frame
    fn clear(&mut self);

    /// Paint the head cell, shaped to point in its travel direction
    fn draw_head(&mut self, cell: Cell, dir: Direction);

    /// Paint the fruit cell (a circle inscribed in the cell)
    fn draw_fruit(&mut self, cell: Cell);

    /// Paint one non-head body cell
    fn draw_body(&mut self, cell: Cell);
}
