//! Persistent player profile: high score, score history and skin choice.
//!
//! The store implements the core's [`ScoreRecorder`](tui_snake_core::ScoreRecorder)
//! and [`ColorProvider`](tui_snake_core::ColorProvider) capabilities so a
//! session can report scores and pick up skin colors without knowing about
//! files.

pub mod error;
pub mod profile;
pub mod skins;
pub mod stats;
pub mod store;

pub use error::{Result, StoreError};
pub use profile::{Profile, ScoreEntry, ScoreExport, HISTORY_LIMIT};
pub use skins::{resolve_skin, skin_by_name, skin_index, Skin, DEFAULT_SKIN, SKINS};
pub use stats::{Improvement, Statistics, Trend};
pub use store::ProfileStore;
