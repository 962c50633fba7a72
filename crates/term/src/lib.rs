//! Terminal frontend: raw-mode shell and the board view.

pub mod board_view;
pub mod renderer;

pub use board_view::{BoardView, Viewport};
pub use renderer::TerminalRenderer;
