//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the simulation rules, state management, and pacing.
//! It has **zero dependencies** on UI, terminal or file I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical sessions
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`session`]: The state machine and tick-advance algorithm
//! - [`snake`]: Ordered body with an occupancy grid for O(1) collision checks
//! - [`food`]: Food set maintenance and the dynamic target count
//! - [`color`]: Per-session food color selection
//! - [`pacing`]: Held-key tracking and the variable tick cadence
//! - [`rng`]: Seedable random source
//! - [`config`]: Session configuration and validation
//! - [`ports`]: Score recorder and color provider capabilities
//! - [`snapshot`]: Read-only session view for presentation
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick; 300ms per tick, 100ms while a
//!   direction key is held
//! - A direction change is queued and committed at the start of the next tick;
//!   reversing the current direction is ignored
//! - Leaving the grid or entering any body cell (the tail included) ends the
//!   session
//! - Each food is worth 10 points and grows the snake by one; eaten food is
//!   replenished to `min(20, max(5, len / 10 + 3))` items
//! - Reaching length 300 wins
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, MemoryRecorder, Session, SnakeColors};
//! use tui_snake_types::{Direction, GameStatus, InputEvent, LogicalKey, Pos};
//!
//! let mut recorder = MemoryRecorder::default();
//! let mut session = Session::with_layout(
//!     GameConfig::default(),
//!     &SnakeColors::default(),
//!     42,
//!     &[Pos::new(10, 7)],
//!     Direction::Right,
//!     &[Pos::new(11, 7)],
//! )
//! .unwrap();
//!
//! session.handle_event(InputEvent::KeyDown(LogicalKey::Down));
//! session.step(&mut recorder);
//!
//! assert_eq!(session.status(), GameStatus::Playing);
//! assert_eq!(session.snake_cells()[0], Pos::new(10, 8));
//! ```
//!
//! # Timing
//!
//! The host calls [`Session::update`](session::Session::update) once per frame
//! with a monotonic millisecond clock; the session decides whether a tick is
//! due.

pub mod color;
pub mod config;
pub mod food;
pub mod pacing;
pub mod ports;
pub mod rng;
pub mod session;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use color::{color_similarity, select_food_color, SnakeColors};
pub use config::{ConfigError, GameConfig};
pub use food::{target_food_count, FoodSet};
pub use pacing::{HeldKeys, PaceController};
pub use ports::{ColorProvider, MemoryRecorder, ScoreRecorder};
pub use rng::SimpleRng;
pub use session::{Collision, Session, SessionCommand, TickOutcome};
pub use snake::Snake;
pub use snapshot::SessionSnapshot;
