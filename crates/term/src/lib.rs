//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is diffed and flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Views are pure functions of a snapshot and a viewport
//! - Allow precise control over aspect ratio (2 columns per grid cell)

pub mod app_view;
pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_types as types;

pub use app_view::AppView;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Hud, Viewport};
pub use menu_view::{render_menu, render_skin_select};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
