//! Input crate: terminal key events to game commands.

pub mod map;

pub use map::{handle_key_event, should_quit};
pub use tui_snake_types as types;
