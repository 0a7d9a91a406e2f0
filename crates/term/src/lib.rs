//! Terminal rendering for the gem board.
//!
//! Renders into a plain framebuffer that is then flushed to the terminal,
//! instead of going through a widget/layout library. Each board cell is three
//! terminal columns wide so the cursor and pick markers can sit beside the gem.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use match3_core as core;
pub use match3_types as types;

pub use board_view::{gem_color, BoardView, PlayState, Viewport};
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
