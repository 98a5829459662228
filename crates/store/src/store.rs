//! JSON-backed profile store.
//!
//! Owns the persisted profile (high score, history, active skin) and writes
//! it back after every mutation. Saves go through a temporary file and a
//! rename so a crash mid-write never leaves a truncated profile behind.
//!
//! Loading never fails: a missing file is created with defaults and an
//! unreadable one is replaced with defaults after a warning.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use tui_snake_core::{ColorProvider, ScoreRecorder, SnakeColors};

use crate::error::{Result, StoreError};
use crate::profile::{Profile, ScoreEntry, ScoreExport};
use crate::skins::{resolve_skin, skin_by_name, Skin};
use crate::stats::{self, Improvement, Statistics};

#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    profile: Profile,
}

impl ProfileStore {
    /// Load the profile at `path`, falling back to defaults.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (profile, needs_write) = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Profile>(&text) {
                Ok(profile) => (profile, false),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "corrupt profile, using defaults");
                    (Profile::default(), true)
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no profile found, creating one");
                (Profile::default(), true)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "unreadable profile, using defaults");
                (Profile::default(), true)
            }
        };

        let mut store = Self { path, profile };
        store.profile.trim_history();
        if needs_write {
            store.save_or_warn();
        }
        store
    }

    /// Store that starts from `profile` without touching disk until the next
    /// mutation.
    pub fn with_profile(path: impl Into<PathBuf>, profile: Profile) -> Self {
        Self {
            path: path.into(),
            profile,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn save(&mut self) -> Result<()> {
        self.profile.last_updated = Some(Utc::now());
        write_json_atomic(&self.path, &self.profile)
    }

    fn save_or_warn(&mut self) {
        if let Err(err) = self.save() {
            warn!(error = %err, "failed to save profile");
        }
    }

    pub fn high_score(&self) -> u32 {
        self.profile.high_score
    }

    /// Oldest first.
    pub fn history(&self) -> &[ScoreEntry] {
        &self.profile.score_history
    }

    pub fn recent_history(&self, limit: usize) -> Vec<ScoreEntry> {
        stats::recent_history(&self.profile.score_history, limit)
    }

    /// Append a finished game; returns true when it beat the high score.
    ///
    /// The profile is saved afterwards; save failures are logged and the
    /// in-memory state is kept.
    pub fn record_final_score_at(&mut self, score: u32, at: DateTime<Utc>) -> bool {
        let is_record = score > self.profile.high_score;
        if is_record {
            self.profile.high_score = score;
        }
        self.profile.score_history.push(ScoreEntry {
            score,
            timestamp: at,
            is_record,
        });
        self.profile.trim_history();
        debug!(score, is_record, "score recorded");
        self.save_or_warn();
        is_record
    }

    pub fn statistics(&self) -> Statistics {
        stats::statistics(&self.profile.score_history, self.profile.high_score)
    }

    pub fn recent_improvement(&self, limit: usize) -> Option<Improvement> {
        stats::recent_improvement(&self.profile.score_history, limit)
    }

    pub fn score_rank(&self, score: u32) -> usize {
        stats::score_rank(&self.profile.score_history, score)
    }

    /// Clear the high score and history; the skin is kept.
    pub fn reset_scores(&mut self) -> Result<()> {
        self.profile.high_score = 0;
        self.profile.score_history.clear();
        info!("scores reset");
        self.save()
    }

    pub fn export_to(&self, path: &Path) -> Result<()> {
        let history = &self.profile.score_history;
        let export = ScoreExport {
            high_score: self.profile.high_score,
            score_history: history.clone(),
            export_date: Some(Utc::now()),
            total_games: history.len(),
            average_score: stats::average_score(history),
            records_count: stats::records_count(history),
        };
        write_json_atomic(path, &export)?;
        info!(path = %path.display(), games = history.len(), "scores exported");
        Ok(())
    }

    /// Merge an export into this profile.
    ///
    /// Entries already present (same score and timestamp) are skipped, the
    /// merged history is ordered by time and trimmed, and the high score
    /// becomes the larger of the two. Returns the number of entries added.
    pub fn import_from(&mut self, path: &Path) -> Result<usize> {
        let text = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let export: ScoreExport = serde_json::from_str(&text).map_err(|e| StoreError::json(path, e))?;

        let before = self.profile.score_history.len();
        let mut merged = std::mem::take(&mut self.profile.score_history);
        for entry in export.score_history {
            if !merged
                .iter()
                .any(|e| e.score == entry.score && e.timestamp == entry.timestamp)
            {
                merged.push(entry);
            }
        }
        let added = merged.len() - before;
        merged.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

        self.profile.score_history = merged;
        self.profile.trim_history();
        self.profile.high_score = self.profile.high_score.max(export.high_score);
        info!(path = %path.display(), added, "scores imported");
        self.save()?;
        Ok(added)
    }

    pub fn current_skin(&self) -> &'static Skin {
        resolve_skin(&self.profile.current_skin)
    }

    pub fn set_current_skin(&mut self, name: &str) -> Result<()> {
        let skin = skin_by_name(name).ok_or_else(|| StoreError::UnknownSkin(name.to_string()))?;
        self.profile.current_skin = skin.name.to_string();
        info!(skin = skin.name, "skin changed");
        self.save()
    }
}

impl ScoreRecorder for ProfileStore {
    fn record_final_score(&mut self, score: u32) -> bool {
        self.record_final_score_at(score, Utc::now())
    }

    fn current_high_score(&self) -> u32 {
        self.high_score()
    }
}

impl ColorProvider for ProfileStore {
    fn current_snake_colors(&self) -> SnakeColors {
        self.current_skin().colors()
    }
}

fn write_json_atomic<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| StoreError::json(path, e))?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, json).map_err(|e| StoreError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn open_creates_default_profile() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");
        let store = ProfileStore::open(&path);
        assert_eq!(store.high_score(), 0);
        assert_eq!(store.current_skin().name, "classic");
        assert!(path.exists());
    }

    #[test]
    fn corrupt_profile_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{not json").unwrap();
        let store = ProfileStore::open(&path);
        assert_eq!(store.high_score(), 0);
        assert!(store.history().is_empty());
        assert_eq!(store.profile().current_skin, "classic");
        let text = fs::read_to_string(&path).unwrap();
        assert!(serde_json::from_str::<Profile>(&text).is_ok());
    }

    #[test]
    fn high_score_needs_strictly_greater() {
        let dir = TempDir::new().unwrap();
        let mut store = ProfileStore::open(dir.path().join("p.json"));
        assert!(store.record_final_score_at(30, at(0)));
        assert!(!store.record_final_score_at(30, at(1)));
        assert!(!store.record_final_score_at(10, at(2)));
        assert_eq!(store.high_score(), 30);
        let flags: Vec<bool> = store.history().iter().map(|e| e.is_record).collect();
        assert_eq!(flags, vec![true, false, false]);
    }

    #[test]
    fn zero_score_is_recorded_but_not_a_record() {
        let dir = TempDir::new().unwrap();
        let mut store = ProfileStore::open(dir.path().join("p.json"));
        assert!(!store.record_final_score_at(0, at(0)));
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn scores_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("p.json");
        {
            let mut store = ProfileStore::open(&path);
            store.record_final_score_at(50, at(0));
            store.set_current_skin("neko").unwrap();
        }
        let store = ProfileStore::open(&path);
        assert_eq!(store.high_score(), 50);
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.current_skin().name, "neko");
    }

    #[test]
    fn unknown_skin_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = ProfileStore::open(dir.path().join("p.json"));
        let err = store.set_current_skin("robot").unwrap_err();
        assert!(matches!(err, StoreError::UnknownSkin(ref n) if n == "robot"));
        assert_eq!(store.current_skin().name, "classic");
    }

    #[test]
    fn history_is_capped() {
        let dir = TempDir::new().unwrap();
        let mut store = ProfileStore::open(dir.path().join("p.json"));
        for i in 0..120 {
            store.record_final_score_at(i, at(i as i64));
        }
        assert_eq!(store.history().len(), crate::profile::HISTORY_LIMIT);
        assert_eq!(store.history()[0].score, 20);
        assert_eq!(store.high_score(), 119);
    }

    #[test]
    fn export_then_import_merges_without_duplicates() {
        let dir = TempDir::new().unwrap();
        let mut a = ProfileStore::open(dir.path().join("a.json"));
        a.record_final_score_at(10, at(0));
        a.record_final_score_at(90, at(2));
        let export = dir.path().join("export.json");
        a.export_to(&export).unwrap();

        let mut b = ProfileStore::open(dir.path().join("b.json"));
        b.record_final_score_at(40, at(1));
        b.record_final_score_at(10, at(0));

        assert_eq!(b.import_from(&export).unwrap(), 1);
        let scores: Vec<u32> = b.history().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![10, 40, 90]);
        assert_eq!(b.high_score(), 90);

        assert_eq!(b.import_from(&export).unwrap(), 0);
    }

    #[test]
    fn import_of_malformed_file_fails() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.json");
        fs::write(&bad, "[]").unwrap();
        let mut store = ProfileStore::open(dir.path().join("p.json"));
        assert!(matches!(store.import_from(&bad), Err(StoreError::Json { .. })));
        assert!(matches!(
            store.import_from(&dir.path().join("missing.json")),
            Err(StoreError::Io { .. })
        ));
    }

    #[test]
    fn reset_keeps_skin() {
        let dir = TempDir::new().unwrap();
        let mut store = ProfileStore::open(dir.path().join("p.json"));
        store.set_current_skin("dragon").unwrap();
        store.record_final_score_at(70, at(0));
        store.reset_scores().unwrap();
        assert_eq!(store.high_score(), 0);
        assert!(store.history().is_empty());
        assert_eq!(store.current_skin().name, "dragon");
    }

    #[test]
    fn provides_skin_colors() {
        let dir = TempDir::new().unwrap();
        let mut store = ProfileStore::open(dir.path().join("p.json"));
        store.set_current_skin("neko").unwrap();
        assert_eq!(store.current_snake_colors(), crate::skins::SKINS[1].colors());
    }
}
