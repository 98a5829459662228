use crate::color::SnakeColors;
use crate::types::{Direction, GameStatus, Pos, Rgb, GRID_HEIGHT, GRID_WIDTH, VICTORY_LENGTH};

/// Read-only view of a session as of its last tick.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    /// Head first.
    pub snake: Vec<Pos>,
    pub food: Vec<Pos>,
    pub food_color: Rgb,
    pub snake_colors: SnakeColors,
    pub score: u32,
    pub status: GameStatus,
    pub grid_width: u16,
    pub grid_height: u16,
    pub victory_length: usize,
    pub direction: Direction,
    pub accelerating: bool,
    pub new_record: bool,
    pub elapsed_ms: u64,
    pub episode_id: u32,
}

impl SessionSnapshot {
    pub fn length(&self) -> usize {
        self.snake.len()
    }

    /// Progress toward victory in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.victory_length == 0 {
            return 0.0;
        }
        (self.snake.len() as f32 / self.victory_length as f32).min(1.0)
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            snake: Vec::with_capacity(VICTORY_LENGTH),
            food: Vec::with_capacity(32),
            food_color: Rgb::default(),
            snake_colors: SnakeColors::default(),
            score: 0,
            status: GameStatus::Playing,
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            victory_length: VICTORY_LENGTH,
            direction: Direction::Right,
            accelerating: false,
            new_record: false,
            elapsed_ms: 0,
            episode_id: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        let mut s = SessionSnapshot::default();
        s.snake = vec![Pos::new(0, 0); 150];
        assert!((s.progress() - 0.5).abs() < f32::EPSILON);
        s.victory_length = 100;
        assert_eq!(s.progress(), 1.0);
    }
}
