//! Browser persistence for session statistics and match history.
//!
//! Stored in localStorage under a versioned envelope. Saving is
//! fire-and-forget: a failed or unavailable store logs a warning and never
//! fails the game operation that triggered it. Everything browser-specific
//! is `wasm32`-gated so the crate still builds and unit-tests natively.

use paintmatch_core::{MatchHistory, SessionStats};
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "paintmatch_session";

/// Stats and history persisted between visits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub stats: SessionStats,
    pub history: MatchHistory,
    /// Schema version for future migrations.
    version: u32,
}

impl PersistedSession {
    const CURRENT_VERSION: u32 = 1;

    pub fn new(stats: SessionStats, history: MatchHistory) -> Self {
        Self {
            stats,
            history,
            version: Self::CURRENT_VERSION,
        }
    }

    /// Parse a stored envelope, rejecting unknown versions.
    fn decode(json: &str) -> Option<Self> {
        match serde_json::from_str::<PersistedSession>(json) {
            Ok(state) if state.version == Self::CURRENT_VERSION => Some(state),
            Ok(state) => {
                log::warn!(
                    "Ignoring stored session with version {} (current: {})",
                    state.version,
                    Self::CURRENT_VERSION
                );
                None
            }
            Err(e) => {
                log::warn!("Failed to parse stored session: {e}");
                None
            }
        }
    }
}

/// Load persisted stats from localStorage.
/// Returns None if nothing is stored, parsing fails, or storage is
/// unavailable.
pub fn load_session() -> Option<PersistedSession> {
    let json = storage_get(STORAGE_KEY)?;
    let state = PersistedSession::decode(&json)?;
    log::info!(
        "Loaded persisted session: {} attempts, best {}",
        state.stats.attempts,
        state.stats.best_score
    );
    Some(state)
}

/// Save stats to localStorage. Logs a warning if saving fails (storage
/// unavailable or quota exceeded).
pub fn save_session(state: &PersistedSession) {
    match serde_json::to_string(state) {
        Ok(json) => storage_set(STORAGE_KEY, &json),
        Err(e) => log::warn!("Failed to serialize session for storage: {e}"),
    }
}

/// Clear persisted stats from localStorage.
pub fn clear_session() {
    storage_remove(STORAGE_KEY);
    log::info!("Cleared persisted session");
}

fn storage_get(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(key).ok()?
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

fn storage_set(key: &str, value: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(storage)) = window.local_storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("Failed to save session to localStorage: {e:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (key, value);
    }
}

fn storage_remove(key: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
    }
}
