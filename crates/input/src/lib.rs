//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::LogicalKey`]s and tracks
//! held keys so the core sees matching key-down/key-up pairs, including on
//! terminals without key-release events.

pub mod handler;
pub mod map;

pub use tui_snake_types as types;

pub use handler::KeyTracker;
pub use map::{map_key, should_quit};
