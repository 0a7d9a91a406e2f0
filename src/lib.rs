//! Match-3 rules engine (workspace facade crate).
//!
//! The rules live in dedicated crates under `crates/`; this package
//! re-exports them as `match3::{core,input,term,types}` and adds the pieces
//! shared by the binary: configuration, effect listeners and headless play.

pub use match3_core as core;
pub use match3_input as input;
pub use match3_term as term;
pub use match3_types as types;

pub mod autoplay;
pub mod config;
pub mod observe;
pub mod session;
