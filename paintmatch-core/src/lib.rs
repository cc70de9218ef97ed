//! Color science and game logic for the paint-matching game.
//!
//! Everything here is pure, synchronous and browser-free; the companion
//! `paintmatch-web` crate owns the JS boundary and persistence.

pub mod brush;
pub mod color_space;
pub mod error;
pub mod mixing;
pub mod pigment;
pub mod scoring;
pub mod session;
pub mod stats;
pub mod target;

pub use brush::{pile_radius, BrushStroke, StrokePoint};
pub use color_space::{
    linear_rgb_to_oklab, linear_to_rgb, linear_to_srgb, oklab_to_linear_rgb, oklab_to_rgb,
    rgb_to_lab, rgb_to_linear, rgb_to_oklab, srgb_to_linear, Lab, OkLab, Rgb,
};
pub use error::GameError;
pub use mixing::{mix_pigments, WeightedColor};
pub use pigment::{Pigment, PigmentCatalog};
pub use scoring::{calculate_color_score, color_distance, score_category, ColorScore};
pub use session::{GamePhase, GameSession, MixResult, SessionConfig, StrokeRecord};
pub use stats::{MatchHistory, MatchRecord, SessionStats};
pub use target::TargetColor;
