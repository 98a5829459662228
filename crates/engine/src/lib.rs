//! Application engine: menus, skin selection and session lifecycle.
//!
//! Sits between the deterministic core and a frontend. It owns the profile
//! store and hands it to the running session as its score recorder and color
//! provider; a frontend only feeds logical input events and a clock.

pub mod app;

pub use tui_snake_core as core;
pub use tui_snake_store as store;
pub use tui_snake_types as types;

pub use app::{App, AppCommand, MenuItem, Screen};
