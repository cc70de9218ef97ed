//! Game error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Mix was requested with no paint on the canvas.
    #[error("nothing to mix: total accumulated volume is zero")]
    NothingToMix,

    /// A stroke referenced a pigment id the active catalog does not contain.
    /// This indicates catalog/session desynchronization in the caller, not a
    /// recoverable user-facing condition.
    #[error("pigment not found in catalog: {0}")]
    UnknownPigment(String),
}
