//! On-disk profile format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::skins::DEFAULT_SKIN;

/// Only the most recent entries are kept.
pub const HISTORY_LIMIT: usize = 100;

pub const PROFILE_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_record: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub high_score: u32,
    #[serde(default)]
    pub score_history: Vec<ScoreEntry>,
    #[serde(default = "default_skin")]
    pub current_skin: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

fn default_skin() -> String {
    DEFAULT_SKIN.to_string()
}

fn default_version() -> String {
    PROFILE_VERSION.to_string()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            high_score: 0,
            score_history: Vec::new(),
            current_skin: default_skin(),
            version: default_version(),
            last_updated: None,
        }
    }
}

impl Profile {
    /// Drop the oldest entries beyond [`HISTORY_LIMIT`].
    pub fn trim_history(&mut self) {
        let len = self.score_history.len();
        if len > HISTORY_LIMIT {
            self.score_history.drain(..len - HISTORY_LIMIT);
        }
    }
}

/// Standalone export written by `ProfileStore::export_to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreExport {
    pub high_score: u32,
    pub score_history: Vec<ScoreEntry>,
    #[serde(default)]
    pub export_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_games: usize,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub records_count: usize,
}
