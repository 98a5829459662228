//! Narrow capabilities a session needs from the rest of the application.

use crate::color::SnakeColors;

/// Receives the final score of every finished session.
pub trait ScoreRecorder {
    /// Record `score`; returns true when it is a new high score.
    fn record_final_score(&mut self, score: u32) -> bool;

    fn current_high_score(&self) -> u32;
}

/// Supplies the active skin's snake colors.
pub trait ColorProvider {
    fn current_snake_colors(&self) -> SnakeColors;
}

impl ColorProvider for SnakeColors {
    fn current_snake_colors(&self) -> SnakeColors {
        *self
    }
}

/// In-memory recorder; keeps every recorded score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRecorder {
    pub high_score: u32,
    pub recorded: Vec<u32>,
}

impl ScoreRecorder for MemoryRecorder {
    fn record_final_score(&mut self, score: u32) -> bool {
        self.recorded.push(score);
        if score > self.high_score {
            self.high_score = score;
            return true;
        }
        false
    }

    fn current_high_score(&self) -> u32 {
        self.high_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_recorder_flags_strictly_higher_scores() {
        let mut r = MemoryRecorder::default();
        assert!(r.record_final_score(10));
        assert!(!r.record_final_score(10));
        assert!(!r.record_final_score(5));
        assert!(r.record_final_score(20));
        assert_eq!(r.current_high_score(), 20);
        assert_eq!(r.recorded, vec![10, 10, 5, 20]);
    }
}
