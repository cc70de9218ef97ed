//! The wasm-bindgen game handle consumed by the JavaScript UI.
//!
//! All payloads cross the boundary as JSON strings; the UI parses them with
//! `JSON.parse`. Stroke input is validated here, at the boundary, so the
//! core never sees a pigment id the catalog does not contain.

use paintmatch_core::{
    pile_radius, score_category, GameSession, PigmentCatalog, SessionConfig, TargetColor,
};
use wasm_bindgen::prelude::*;

use crate::persistence::{self, PersistedSession};

/// Uniform sample in [0,1) for target selection.
fn random_unit() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Milliseconds since the Unix epoch.
fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::warn!("Failed to serialize payload for JS: {e}");
        "null".to_string()
    })
}

/// One player's game, owned by the page.
#[wasm_bindgen]
pub struct PaintMatchGame {
    session: GameSession,
    catalog: PigmentCatalog,
}

#[wasm_bindgen]
impl PaintMatchGame {
    /// Start a game, restoring any persisted statistics from localStorage.
    #[wasm_bindgen(constructor)]
    pub fn new(expanded_palette: bool) -> PaintMatchGame {
        let catalog = if expanded_palette {
            PigmentCatalog::expanded()
        } else {
            PigmentCatalog::classic()
        };
        let target = TargetColor::pick(random_unit());
        let session = match persistence::load_session() {
            Some(saved) => GameSession::restore(
                target,
                SessionConfig::default(),
                saved.stats,
                saved.history,
            ),
            None => GameSession::new(target, SessionConfig::default()),
        };
        PaintMatchGame { session, catalog }
    }

    /// The pigment palette as a JSON array, in catalog order.
    pub fn pigments(&self) -> String {
        let pigments: Vec<_> = self.catalog.iter().collect();
        to_json(&pigments)
    }

    /// The current target as JSON `{rgb, name}`.
    pub fn target(&self) -> String {
        to_json(self.session.target())
    }

    /// Add a stroke's paint. Rejects unknown pigment ids and negative
    /// amounts here at the boundary.
    pub fn add_stroke(&mut self, pigment_id: &str, amount: f64) -> Result<(), JsValue> {
        if !self.catalog.contains(pigment_id) {
            return Err(JsValue::from_str(&format!(
                "unknown pigment id: {pigment_id}"
            )));
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(JsValue::from_str("stroke amount must be non-negative"));
        }
        self.session.add_stroke(pigment_id, amount);
        Ok(())
    }

    /// Undo the most recent stroke; no-op on an empty canvas.
    pub fn undo(&mut self) {
        self.session.undo();
    }

    /// Wipe the canvas; statistics survive.
    pub fn clear(&mut self) {
        self.session.clear();
    }

    /// Mix the accumulated paint, score it, persist the updated statistics,
    /// and return the result as JSON `{mixed, score, delta_e}`.
    pub fn mix(&mut self) -> Result<String, JsValue> {
        let result = self
            .session
            .mix(&self.catalog, now_ms())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        persistence::save_session(&PersistedSession::new(
            self.session.stats().clone(),
            self.session.history().clone(),
        ));
        Ok(to_json(&result))
    }

    /// Pick a fresh target and return it as JSON.
    pub fn new_target(&mut self) -> String {
        self.session.new_target(random_unit());
        self.target()
    }

    pub fn total_amount(&self) -> f64 {
        self.session.total_amount()
    }

    /// Display radius for the paint pile at the current volume.
    pub fn pile_radius(&self) -> f64 {
        pile_radius(self.session.total_amount())
    }

    /// Player-facing label for a score ("Perfect!", "Close", ...).
    pub fn score_label(score: u8) -> String {
        score_category(score).to_string()
    }

    /// Running statistics as JSON.
    pub fn stats(&self) -> String {
        to_json(self.session.stats())
    }

    /// Recent match history as JSON, newest first.
    pub fn history(&self) -> String {
        to_json(self.session.history())
    }

    /// Forget persisted statistics, both stored and in-memory.
    pub fn reset_stats(&mut self) {
        persistence::clear_session();
        let target = self.session.target().clone();
        self.session = GameSession::new(target, SessionConfig::default());
    }
}
