//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::PlayerAction`]. Cursor
//! movement repeats via the terminal's own key repeat; there is no timing
//! state here.

pub mod map;

pub use match3_types as types;

pub use map::{handle_key_event, should_quit};
