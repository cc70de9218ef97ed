//! Running session statistics and the bounded match history.
//!
//! The session owns these values in memory; persisting them is the web
//! layer's job.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color_space::Rgb;

/// History keeps only the most recent matches.
const HISTORY_LIMIT: usize = 10;

/// Aggregate over every scored mix in a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub attempts: u32,
    pub total_score: u32,
    /// Rounded integer mean of all scores.
    pub average_score: u32,
    pub best_score: u8,
    pub games_played: u32,
}

impl SessionStats {
    /// Fold one scored mix into the aggregate.
    pub fn record(&mut self, score: u8) {
        self.attempts += 1;
        self.total_score += score as u32;
        self.average_score = (self.total_score as f64 / self.attempts as f64).round() as u32;
        self.best_score = self.best_score.max(score);
        self.games_played += 1;
    }
}

/// One scored round, kept for the history panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: u64,
    pub target_color: Rgb,
    pub target_name: String,
    pub mixed_color: Rgb,
    pub score: u8,
    pub delta_e: f64,
    /// Milliseconds since the Unix epoch, as reported by the caller.
    pub timestamp_ms: f64,
    /// Pigment id -> volume (mL) snapshot at mix time.
    pub pigments_used: BTreeMap<String, f64>,
}

/// Newest-first list of recent matches, capped at ten.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchHistory {
    matches: Vec<MatchRecord>,
    next_id: u64,
}

impl MatchHistory {
    /// Prepend a match, assigning it the next id and dropping the oldest
    /// entry past the cap.
    #[allow(clippy::too_many_arguments)]
    pub fn push(
        &mut self,
        target_color: Rgb,
        target_name: String,
        mixed_color: Rgb,
        score: u8,
        delta_e: f64,
        timestamp_ms: f64,
        pigments_used: BTreeMap<String, f64>,
    ) -> &MatchRecord {
        let record = MatchRecord {
            id: self.next_id,
            target_color,
            target_name,
            mixed_color,
            score,
            delta_e,
            timestamp_ms,
            pigments_used,
        };
        self.next_id += 1;
        self.matches.insert(0, record);
        self.matches.truncate(HISTORY_LIMIT);
        &self.matches[0]
    }

    /// Matches, newest first.
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
