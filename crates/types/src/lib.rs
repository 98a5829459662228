//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, persistence).
//!
//! # Grid Dimensions
//!
//! The reference playfield is fixed per session:
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 15 rows (indexed 0-14)
//! - **Spawn position**: (10, 7), heading right
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DELAY_MS` | 300 | Move interval with no direction key held |
//! | `FAST_DELAY_MS` | 100 | Move interval while a direction key is held |
//! | `FRAME_MS` | 16 | Host frame interval (~60 FPS) |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Synthesized release for terminals without key-up events |
//!
//! # Scoring and Growth
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FOOD_SCORE` | 10 | Points per food eaten |
//! | `VICTORY_LENGTH` | 300 | Snake length that wins the session |
//! | `MAX_FOODS` | 20 | Upper bound on simultaneous food items |
//! | `MIN_TARGET_FOODS` | 5 | Lower bound on the replenishment target |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, LogicalKey, Pos, GRID_WIDTH, GRID_HEIGHT};
//!
//! // Step a position
//! let head = Pos::new(10, 7);
//! assert_eq!(head.step(Direction::Right), Pos::new(11, 7));
//!
//! // Reversals are detected
//! assert!(Direction::Left.is_opposite(Direction::Right));
//!
//! // Parse a logical key (case-insensitive)
//! let key = LogicalKey::from_str("returnToMenu").unwrap();
//! assert_eq!(key, LogicalKey::ReturnToMenu);
//! assert_eq!(LogicalKey::Up.direction(), Some(Direction::Up));
//!
//! // Grid dimensions
//! assert_eq!(GRID_WIDTH, 20);
//! assert_eq!(GRID_HEIGHT, 15);
//! ```

/// Grid width in cells (20 columns)
pub const GRID_WIDTH: u16 = 20;

/// Grid height in cells (15 rows)
pub const GRID_HEIGHT: u16 = 15;

/// Move interval when no direction key is held
pub const BASE_DELAY_MS: u32 = 300;

/// Move interval while any direction key is held
pub const FAST_DELAY_MS: u32 = 100;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Held direction keys are released after this long without a press or repeat.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Points awarded per food item
pub const FOOD_SCORE: u32 = 10;

/// Snake length that ends the session in victory
pub const VICTORY_LENGTH: usize = 300;

/// Maximum number of simultaneous food items
pub const MAX_FOODS: usize = 20;

/// Floor of the dynamic food target
pub const MIN_TARGET_FOODS: usize = 5;

/// Initial food count is drawn uniformly from this inclusive range.
pub const INITIAL_FOODS_MIN: usize = 3;

/// See [`INITIAL_FOODS_MIN`].
pub const INITIAL_FOODS_MAX: usize = 5;

/// Playfield background (dark blue); food colors are chosen to stand out from it.
pub const BACKGROUND_COLOR: Rgb = Rgb::new(15, 52, 96);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_build_constants() {
        assert_eq!(GRID_WIDTH, 20);
        assert_eq!(GRID_HEIGHT, 15);
        assert_eq!(BASE_DELAY_MS, 300);
        assert_eq!(FAST_DELAY_MS, 100);
        assert_eq!(FOOD_SCORE, 10);
        assert_eq!(VICTORY_LENGTH, 300);
        assert_eq!(MAX_FOODS, 20);
        assert_eq!(MIN_TARGET_FOODS, 5);
        assert_eq!((INITIAL_FOODS_MIN, INITIAL_FOODS_MAX), (3, 5));
    }

    #[test]
    fn direction_opposites_are_symmetric() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert!(d.is_opposite(d.opposite()));
            assert!(!d.is_opposite(d));
        }
    }

    #[test]
    fn step_applies_unit_delta() {
        let p = Pos::new(0, 0);
        assert_eq!(p.step(Direction::Left), Pos::new(-1, 0));
        assert_eq!(p.step(Direction::Up), Pos::new(0, -1));
        assert_eq!(p.step(Direction::Down), Pos::new(0, 1));
    }

    #[test]
    fn only_direction_keys_map_to_directions() {
        assert_eq!(LogicalKey::Left.direction(), Some(Direction::Left));
        assert_eq!(LogicalKey::Pause.direction(), None);
        assert_eq!(LogicalKey::Confirm.direction(), None);
        assert!(LogicalKey::Down.is_direction());
        assert!(!LogicalKey::ToggleFullscreen.is_direction());
    }

    #[test]
    fn logical_key_round_trips_through_str() {
        for key in LogicalKey::ALL {
            assert_eq!(LogicalKey::from_str(key.as_str()), Some(key));
        }
        assert_eq!(LogicalKey::from_str("jump"), None);
    }

    #[test]
    fn terminal_statuses() {
        assert!(!GameStatus::Playing.is_terminal());
        assert!(!GameStatus::Paused.is_terminal());
        assert!(GameStatus::GameOver.is_terminal());
        assert!(GameStatus::Victory.is_terminal());
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A grid coordinate.
///
/// Signed so that a head stepped past the left or top edge is representable
/// (and detected as out of bounds) rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one cell away in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Check whether this position lies inside a `width` x `height` grid.
    pub fn in_bounds(self, width: u16, height: u16) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < width as i32 && self.y < height as i32
    }
}

/// Movement direction on the grid
///
/// Screen coordinates: `y` grows downward, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit delta `(dx, dy)`
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Logical keys consumed by the game
///
/// Mapping raw hardware keys onto this set is the input layer's job; the
/// simulation only ever sees these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Up,
    Down,
    Left,
    Right,
    /// Toggle Playing/Paused
    Pause,
    /// Resume from pause, restart after a finished session, activate menu items
    Confirm,
    /// Leave the session for the menu
    ReturnToMenu,
    ToggleFullscreen,
}

impl LogicalKey {
    pub const ALL: [LogicalKey; 8] = [
        LogicalKey::Up,
        LogicalKey::Down,
        LogicalKey::Left,
        LogicalKey::Right,
        LogicalKey::Pause,
        LogicalKey::Confirm,
        LogicalKey::ReturnToMenu,
        LogicalKey::ToggleFullscreen,
    ];

    /// The direction this key steers toward, if it is a direction key.
    pub fn direction(self) -> Option<Direction> {
        match self {
            LogicalKey::Up => Some(Direction::Up),
            LogicalKey::Down => Some(Direction::Down),
            LogicalKey::Left => Some(Direction::Left),
            LogicalKey::Right => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn is_direction(self) -> bool {
        self.direction().is_some()
    }

    /// Parse key from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::LogicalKey;
    ///
    /// assert_eq!(LogicalKey::from_str("up"), Some(LogicalKey::Up));
    /// assert_eq!(LogicalKey::from_str("TOGGLEFULLSCREEN"), Some(LogicalKey::ToggleFullscreen));
    /// assert_eq!(LogicalKey::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(LogicalKey::Up),
            "down" => Some(LogicalKey::Down),
            "left" => Some(LogicalKey::Left),
            "right" => Some(LogicalKey::Right),
            "pause" => Some(LogicalKey::Pause),
            "confirm" => Some(LogicalKey::Confirm),
            "returntomenu" => Some(LogicalKey::ReturnToMenu),
            "togglefullscreen" => Some(LogicalKey::ToggleFullscreen),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalKey::Up => "up",
            LogicalKey::Down => "down",
            LogicalKey::Left => "left",
            LogicalKey::Right => "right",
            LogicalKey::Pause => "pause",
            LogicalKey::Confirm => "confirm",
            LogicalKey::ReturnToMenu => "returnToMenu",
            LogicalKey::ToggleFullscreen => "toggleFullscreen",
        }
    }
}

/// A decoded input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    KeyDown(LogicalKey),
    KeyUp(LogicalKey),
}

impl InputEvent {
    pub fn key(&self) -> LogicalKey {
        match *self {
            InputEvent::KeyDown(k) | InputEvent::KeyUp(k) => k,
        }
    }
}

/// Session state
///
/// - **Playing**: the snake advances on every pacing tick
/// - **Paused**: no advancement, direction input ignored
/// - **GameOver**: collision ended the session
/// - **Victory**: the snake reached [`VICTORY_LENGTH`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
    Victory,
}

impl GameStatus {
    /// GameOver and Victory end the session; only a restart leaves them.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Victory)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "game_over",
            GameStatus::Victory => "victory",
        }
    }
}
