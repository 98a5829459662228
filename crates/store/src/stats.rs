//! Aggregates over the score history.

use chrono::{DateTime, Utc};

use crate::profile::ScoreEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_games: usize,
    pub high_score: u32,
    /// Rounded to one decimal place.
    pub average_score: f64,
    pub lowest_score: Option<u32>,
    pub records_count: usize,
    pub last_played: Option<DateTime<Utc>>,
    pub score_range: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Improvement {
    /// Last score minus first score of the window.
    pub improvement: i64,
    pub average_recent: f64,
    pub trend: Trend,
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub fn average_score(history: &[ScoreEntry]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let total: u64 = history.iter().map(|e| e.score as u64).sum();
    total as f64 / history.len() as f64
}

pub fn records_count(history: &[ScoreEntry]) -> usize {
    history.iter().filter(|e| e.is_record).count()
}

pub fn statistics(history: &[ScoreEntry], high_score: u32) -> Statistics {
    let lowest = history.iter().map(|e| e.score).min();
    let highest = history.iter().map(|e| e.score).max();
    Statistics {
        total_games: history.len(),
        high_score: if history.is_empty() { 0 } else { high_score },
        average_score: round1(average_score(history)),
        lowest_score: lowest,
        records_count: records_count(history),
        last_played: history.iter().map(|e| e.timestamp).max(),
        score_range: match (lowest, highest) {
            (Some(lo), Some(hi)) => hi - lo,
            _ => 0,
        },
    }
}

/// 1-based rank `score` would take among the history (ties rank highest).
pub fn score_rank(history: &[ScoreEntry], score: u32) -> usize {
    history.iter().filter(|e| e.score > score).count() + 1
}

/// Trend over the last `limit` games; `None` with fewer than two games.
pub fn recent_improvement(history: &[ScoreEntry], limit: usize) -> Option<Improvement> {
    let start = history.len().saturating_sub(limit);
    let recent = &history[start..];
    if recent.len() < 2 {
        return None;
    }
    let first = recent[0].score as i64;
    let last = recent[recent.len() - 1].score as i64;
    let improvement = last - first;
    let trend = match improvement {
        i if i > 0 => Trend::Improving,
        i if i < 0 => Trend::Declining,
        _ => Trend::Stable,
    };
    Some(Improvement {
        improvement,
        average_recent: round1(average_score(recent)),
        trend,
    })
}

/// Most recent entries first, at most `limit`.
pub fn recent_history(history: &[ScoreEntry], limit: usize) -> Vec<ScoreEntry> {
    let mut sorted = history.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entries(scores: &[u32]) -> Vec<ScoreEntry> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| ScoreEntry {
                score,
                timestamp: Utc.timestamp_opt(1_700_000_000 + i as i64, 0).unwrap(),
                is_record: false,
            })
            .collect()
    }

    #[test]
    fn empty_history_statistics() {
        let s = statistics(&[], 50);
        assert_eq!(s.total_games, 0);
        assert_eq!(s.high_score, 0);
        assert_eq!(s.average_score, 0.0);
        assert_eq!(s.lowest_score, None);
        assert_eq!(s.last_played, None);
    }

    #[test]
    fn statistics_over_history() {
        let mut h = entries(&[10, 40, 20]);
        h[1].is_record = true;
        let s = statistics(&h, 40);
        assert_eq!(s.total_games, 3);
        assert_eq!(s.high_score, 40);
        assert_eq!(s.average_score, 23.3);
        assert_eq!(s.lowest_score, Some(10));
        assert_eq!(s.records_count, 1);
        assert_eq!(s.score_range, 30);
        assert_eq!(s.last_played, Some(h[2].timestamp));
    }

    #[test]
    fn rank_counts_strictly_better_scores() {
        let h = entries(&[10, 40, 20]);
        assert_eq!(score_rank(&h, 50), 1);
        assert_eq!(score_rank(&h, 40), 1);
        assert_eq!(score_rank(&h, 15), 3);
        assert_eq!(score_rank(&[], 0), 1);
    }

    #[test]
    fn improvement_window() {
        assert_eq!(recent_improvement(&entries(&[10]), 5), None);

        let up = recent_improvement(&entries(&[90, 10, 20, 30]), 3).unwrap();
        assert_eq!(up.improvement, 20);
        assert_eq!(up.average_recent, 20.0);
        assert_eq!(up.trend, Trend::Improving);

        let down = recent_improvement(&entries(&[30, 10]), 5).unwrap();
        assert_eq!(down.trend, Trend::Declining);

        let flat = recent_improvement(&entries(&[10, 10]), 5).unwrap();
        assert_eq!(flat.trend, Trend::Stable);
    }

    #[test]
    fn recent_history_is_newest_first() {
        let h = entries(&[1, 2, 3, 4]);
        let recent = recent_history(&h, 2);
        assert_eq!(recent.iter().map(|e| e.score).collect::<Vec<_>>(), vec![4, 3]);
    }
}
