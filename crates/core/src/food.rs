//! Food set maintenance.
//!
//! Food cells are disjoint from the snake and from each other. After every
//! consumption the set is topped up to a target that grows with the snake.

use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{Pos, MIN_TARGET_FOODS};

/// Desired number of simultaneous food items for a snake of `snake_len`.
///
/// `min(max_foods, max(5, snake_len / 10 + 3))`
pub fn target_food_count(snake_len: usize, max_foods: usize) -> usize {
    max_foods.min(MIN_TARGET_FOODS.max(snake_len / 10 + 3))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodSet {
    cells: Vec<Pos>,
}

impl FoodSet {
    pub fn new() -> Self {
        Self {
            cells: Vec::with_capacity(32),
        }
    }

    /// Build from explicit cells, rejecting duplicates.
    pub fn from_cells(cells: &[Pos]) -> Option<Self> {
        let mut set = Self::new();
        for &c in cells {
            if set.contains(c) {
                return None;
            }
            set.cells.push(c);
        }
        Some(set)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, p: Pos) -> bool {
        self.cells.contains(&p)
    }

    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    /// Remove the food at `p`; returns whether one was there.
    pub fn take(&mut self, p: Pos) -> bool {
        match self.cells.iter().position(|&c| c == p) {
            Some(i) => {
                self.cells.remove(i);
                true
            }
            None => false,
        }
    }

    /// Add one food on a uniformly chosen free cell.
    ///
    /// Returns `None` when every cell is taken by the snake or existing food.
    pub fn spawn(&mut self, snake: &Snake, width: u16, height: u16, rng: &mut SimpleRng) -> Option<Pos> {
        let total = width as usize * height as usize;
        let free = total.saturating_sub(snake.len() + self.cells.len());
        if free == 0 {
            return None;
        }

        // Walk to the n-th free cell instead of rejection sampling so a nearly
        // full grid still terminates promptly.
        let mut n = rng.next_range(free as u32) as usize;
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let p = Pos::new(x, y);
                if snake.contains(p) || self.contains(p) {
                    continue;
                }
                if n == 0 {
                    self.cells.push(p);
                    return Some(p);
                }
                n -= 1;
            }
        }
        None
    }

    /// Spawn until the set holds `target` items or the grid runs out of room.
    pub fn fill_to(
        &mut self,
        target: usize,
        snake: &Snake,
        width: u16,
        height: u16,
        rng: &mut SimpleRng,
    ) -> usize {
        let mut added = 0;
        while self.cells.len() < target {
            if self.spawn(snake, width, height, rng).is_none() {
                break;
            }
            added += 1;
        }
        added
    }
}
