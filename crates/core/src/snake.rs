//! Snake body with an occupancy grid for constant-time collision checks.

use std::collections::VecDeque;

use crate::types::Pos;

/// Ordered body segments, head first.
///
/// `occupied` mirrors `body` cell for cell and is updated on every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Pos>,
    occupied: Vec<bool>,
    width: u16,
    height: u16,
}

impl Snake {
    /// Create a single-segment snake.
    ///
    /// `head` must be in bounds; callers validate positions first.
    pub fn new(head: Pos, width: u16, height: u16) -> Self {
        let mut snake = Self {
            body: VecDeque::with_capacity(64),
            occupied: vec![false; width as usize * height as usize],
            width,
            height,
        };
        snake.push_back(head);
        snake
    }

    /// Build from explicit segments (head first).
    ///
    /// Returns `None` if the list is empty, contains duplicates or leaves the grid.
    pub fn from_segments(segments: &[Pos], width: u16, height: u16) -> Option<Self> {
        let (&head, rest) = segments.split_first()?;
        if !head.in_bounds(width, height) {
            return None;
        }
        let mut snake = Self::new(head, width, height);
        for &seg in rest {
            if !seg.in_bounds(width, height) || snake.contains(seg) {
                return None;
            }
            snake.push_back(seg);
        }
        Some(snake)
    }

    fn idx(&self, p: Pos) -> Option<usize> {
        if !p.in_bounds(self.width, self.height) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    fn push_back(&mut self, p: Pos) {
        if let Some(i) = self.idx(p) {
            self.occupied[i] = true;
        }
        self.body.push_back(p);
    }

    pub fn head(&self) -> Pos {
        // Never empty: constructors push a head and pop_tail is only called
        // right after push_head.
        self.body[0]
    }

    pub fn tail(&self) -> Pos {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Whether any segment (head and tail included) occupies `p`.
    pub fn contains(&self, p: Pos) -> bool {
        self.idx(p).map(|i| self.occupied[i]).unwrap_or(false)
    }

    pub fn push_head(&mut self, p: Pos) {
        if let Some(i) = self.idx(p) {
            self.occupied[i] = true;
        }
        self.body.push_front(p);
    }

    pub fn pop_tail(&mut self) -> Option<Pos> {
        if self.body.len() <= 1 {
            return None;
        }
        let tail = self.body.pop_back()?;
        if let Some(i) = self.idx(tail) {
            self.occupied[i] = false;
        }
        Some(tail)
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = Pos> + '_ {
        self.body.iter().copied()
    }
}
