//! Food color selection.
//!
//! Picked once per session: a bright color that is visually distinct from the
//! snake's head and body colors and from the playfield background.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{Rgb, BACKGROUND_COLOR};

/// Candidates rejected above this similarity to either snake color.
pub const SNAKE_SIMILARITY_LIMIT: f64 = 0.7;

/// Candidates rejected above this similarity to the background.
pub const BACKGROUND_SIMILARITY_LIMIT: f64 = 0.6;

/// High-contrast food colors, in selection order.
pub const FOOD_CANDIDATES: [Rgb; 12] = [
    Rgb::new(255, 69, 0),    // orange red
    Rgb::new(255, 20, 147),  // deep pink
    Rgb::new(255, 215, 0),   // gold
    Rgb::new(50, 205, 50),   // lime green
    Rgb::new(0, 191, 255),   // deep sky blue
    Rgb::new(138, 43, 226),  // blue violet
    Rgb::new(255, 105, 180), // hot pink
    Rgb::new(255, 140, 0),   // dark orange
    Rgb::new(124, 252, 0),   // lawn green
    Rgb::new(255, 0, 255),   // magenta
    Rgb::new(0, 255, 127),   // spring green
    Rgb::new(255, 99, 71),   // tomato
];

/// Used when every candidate is too close to the reference colors.
pub const FOOD_FALLBACK: [Rgb; 3] = [
    Rgb::new(255, 69, 0),
    Rgb::new(255, 215, 0),
    Rgb::new(50, 205, 50),
];

/// Head and body colors of the active skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnakeColors {
    pub head: Rgb,
    pub body: Rgb,
}

impl SnakeColors {
    pub const fn new(head: Rgb, body: Rgb) -> Self {
        Self { head, body }
    }
}

impl Default for SnakeColors {
    fn default() -> Self {
        Self::new(Rgb::new(0, 255, 0), Rgb::new(0, 200, 0))
    }
}

/// Similarity in [0, 1]; 1 means identical.
///
/// `1 - euclidean_distance / sqrt(3 * 255^2)`
pub fn color_similarity(a: Rgb, b: Rgb) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    let distance = (dr * dr + dg * dg + db * db).sqrt();
    let max_distance = (3.0 * 255.0 * 255.0f64).sqrt();
    1.0 - distance / max_distance
}

/// Check a candidate against the rejection thresholds.
pub fn is_distinct(candidate: Rgb, snake: SnakeColors, background: Rgb) -> bool {
    color_similarity(candidate, snake.head) <= SNAKE_SIMILARITY_LIMIT
        && color_similarity(candidate, snake.body) <= SNAKE_SIMILARITY_LIMIT
        && color_similarity(candidate, background) <= BACKGROUND_SIMILARITY_LIMIT
}

/// Candidates that survive filtering, in their original order.
pub fn surviving_candidates(
    candidates: &[Rgb],
    snake: SnakeColors,
    background: Rgb,
) -> ArrayVec<Rgb, 16> {
    candidates
        .iter()
        .copied()
        .filter(|&c| is_distinct(c, snake, background))
        .take(16)
        .collect()
}

/// Pick the session's food color from the built-in palette.
pub fn select_food_color(snake: SnakeColors, rng: &mut SimpleRng) -> Rgb {
    select_food_color_from(&FOOD_CANDIDATES, snake, BACKGROUND_COLOR, rng)
}

/// Pick uniformly among surviving `candidates`, or among [`FOOD_FALLBACK`]
/// when none survive.
pub fn select_food_color_from(
    candidates: &[Rgb],
    snake: SnakeColors,
    background: Rgb,
    rng: &mut SimpleRng,
) -> Rgb {
    let valid = surviving_candidates(candidates, snake, background);
    let pool: &[Rgb] = if valid.is_empty() {
        &FOOD_FALLBACK
    } else {
        &valid
    };
    rng.choose(pool).copied().unwrap_or(FOOD_FALLBACK[0])
}
