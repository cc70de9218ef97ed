//! Game session orchestration: stroke accumulation, mixing, scoring, stats.
//!
//! A session owns exactly one player's state; nothing here is shared across
//! threads. The pigment catalog is passed in at mix time rather than stored,
//! so callers can swap palettes without touching session state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color_space::{oklab_to_rgb, Rgb};
use crate::error::GameError;
use crate::mixing::{mix_pigments, WeightedColor};
use crate::pigment::PigmentCatalog;
use crate::scoring::calculate_color_score;
use crate::stats::{MatchHistory, SessionStats};
use crate::target::TargetColor;

/// Where the round currently stands. Mixing shows a result but does not lock
/// the canvas; strokes may still be added and rescoring waits for the next
/// explicit mix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Painting,
    Mixed,
}

/// The outcome of one mix request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MixResult {
    pub mixed: Rgb,
    pub score: u8,
    pub delta_e: f64,
}

/// One accumulated stroke: which pigment, how much paint (mL).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeRecord {
    pub pigment_id: String,
    pub amount: f64,
}

/// Session policy knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Clear the canvas when a new target is chosen.
    pub reset_on_new_target: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reset_on_new_target: true,
        }
    }
}

/// One player's round state plus running statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    target: TargetColor,
    strokes: Vec<StrokeRecord>,
    amounts: BTreeMap<String, f64>,
    total_amount: f64,
    mixed: Option<MixResult>,
    phase: GamePhase,
    config: SessionConfig,
    stats: SessionStats,
    history: MatchHistory,
}

impl GameSession {
    pub fn new(target: TargetColor, config: SessionConfig) -> Self {
        Self {
            target,
            strokes: Vec::new(),
            amounts: BTreeMap::new(),
            total_amount: 0.0,
            mixed: None,
            phase: GamePhase::Painting,
            config,
            stats: SessionStats::default(),
            history: MatchHistory::default(),
        }
    }

    /// Rebuild a session around previously persisted statistics, e.g. when
    /// the web layer restores a returning player. The canvas starts empty.
    pub fn restore(
        target: TargetColor,
        config: SessionConfig,
        stats: SessionStats,
        history: MatchHistory,
    ) -> Self {
        Self {
            stats,
            history,
            ..Self::new(target, config)
        }
    }

    pub fn target(&self) -> &TargetColor {
        &self.target
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Pigment id -> accumulated volume. Every entry is > 0; the map is
    /// empty exactly when the total is zero.
    pub fn amounts(&self) -> &BTreeMap<String, f64> {
        &self.amounts
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// The most recent mix result. Stale once further strokes land; callers
    /// re-mix to refresh it.
    pub fn mix_result(&self) -> Option<&MixResult> {
        self.mixed.as_ref()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn history(&self) -> &MatchHistory {
        &self.history
    }

    /// Add one stroke's paint to the canvas.
    ///
    /// The boundary validates pigment ids against the catalog; the core only
    /// requires a non-negative amount.
    pub fn add_stroke(&mut self, pigment_id: &str, amount: f64) {
        assert!(amount >= 0.0, "stroke amount must be non-negative");
        self.strokes.push(StrokeRecord {
            pigment_id: pigment_id.to_string(),
            amount,
        });
        self.rebuild_amounts();
    }

    /// Remove the most recent stroke's contribution; no-op with no strokes.
    pub fn undo(&mut self) {
        if self.strokes.pop().is_some() {
            self.rebuild_amounts();
        }
    }

    /// Wipe the canvas and any previous result; statistics survive.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.amounts.clear();
        self.total_amount = 0.0;
        self.mixed = None;
        self.phase = GamePhase::Painting;
    }

    /// Mix the accumulated paint and score it against the target.
    ///
    /// `now_ms` stamps the match record; the web layer passes `Date.now()`.
    /// Fails with [`GameError::NothingToMix`] on an empty canvas and with
    /// [`GameError::UnknownPigment`] if the stroke input desynchronized from
    /// the catalog (a caller bug).
    pub fn mix(&mut self, catalog: &PigmentCatalog, now_ms: f64) -> Result<MixResult, GameError> {
        if self.total_amount <= 0.0 {
            return Err(GameError::NothingToMix);
        }

        let mut colors = Vec::with_capacity(self.amounts.len());
        for (pigment_id, amount) in &self.amounts {
            let pigment = catalog
                .get(pigment_id)
                .ok_or_else(|| GameError::UnknownPigment(pigment_id.clone()))?;
            colors.push(WeightedColor::new(pigment.colorant, *amount));
        }

        let mixed_rgb = oklab_to_rgb(mix_pigments(&colors));
        let scored = calculate_color_score(self.target.rgb, mixed_rgb);

        let result = MixResult {
            mixed: mixed_rgb,
            score: scored.score,
            delta_e: scored.delta_e,
        };

        self.stats.record(scored.score);
        self.history.push(
            self.target.rgb,
            self.target.name.clone(),
            mixed_rgb,
            scored.score,
            scored.delta_e,
            now_ms,
            self.amounts.clone(),
        );

        self.mixed = Some(result.clone());
        self.phase = GamePhase::Mixed;
        Ok(result)
    }

    /// Choose a new target from a uniform sample in [0,1).
    /// Whether the canvas resets is a [`SessionConfig`] policy.
    pub fn new_target(&mut self, unit: f64) {
        self.target = TargetColor::pick(unit);
        if self.config.reset_on_new_target {
            self.clear();
        }
    }

    /// Recompute the accumulator from the stroke log.
    ///
    /// Folding the surviving strokes in order (rather than subtracting on
    /// undo) keeps totals bit-exact with what the same strokes produced
    /// before; zero-amount entries are pruned immediately.
    fn rebuild_amounts(&mut self) {
        self.amounts.clear();
        for stroke in &self.strokes {
            *self.amounts.entry(stroke.pigment_id.clone()).or_insert(0.0) += stroke.amount;
        }
        self.amounts.retain(|_, amount| *amount > 0.0);
        self.total_amount = self.amounts.values().sum();
    }
}
