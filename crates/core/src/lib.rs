//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical fruit sequences
//! - **Testable**: Unit tests cover every rule and terminal transition
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: coordinate math mapping grid cells onto a drawing surface
//! - [`game`]: the snake engine - movement, growth, collisions, fruit
//! - [`render`]: the renderer contract the engine draws through
//! - [`rng`]: seeded LCG used for fruit placement
//!
//! # Game Rules
//!
//! - The snake advances one cell per step in its heading
//! - A direction request is buffered and applied at the next step; a request
//!   that would reverse the heading outright is dropped
//! - Eating the fruit grows the tail by one cell and re-places the fruit on
//!   a random unoccupied cell
//! - Leaving the grid or biting any body segment ends the game; only a
//!   reset leaves the dead state
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, GRID_COLS, GRID_ROWS};
//!
//! let mut game = GameState::new(GRID_ROWS, GRID_COLS, 12345);
//! game.request_direction(Direction::Up);
//! let outcome = game.advance();
//! assert!(outcome.stepped);
//! assert!(game.alive());
//! ```

pub mod game;
pub mod grid;
pub mod render;
pub mod rng;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use game::{GameState, StepOutcome};
pub use grid::{ConfigError, Grid};
pub use render::BoardRenderer;
pub use rng::SimpleRng;
