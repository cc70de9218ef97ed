//! The fixed table of named target colors.

use serde::{Deserialize, Serialize};

use crate::color_space::Rgb;

/// The color the player is asked to mix this round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetColor {
    pub rgb: Rgb,
    pub name: String,
}

/// Name/color pairs the game draws targets from.
const TARGET_TABLE: [(&str, Rgb); 10] = [
    ("Burnt Sienna Tint", Rgb::new(139, 90, 60)),
    ("Sage Green", Rgb::new(155, 173, 157)),
    ("Dusty Rose", Rgb::new(188, 143, 143)),
    ("Warm Gray", Rgb::new(128, 118, 105)),
    ("Muted Purple", Rgb::new(108, 91, 123)),
    ("Olive Drab", Rgb::new(107, 142, 35)),
    ("Coral Pink", Rgb::new(255, 127, 80)),
    ("Steel Blue", Rgb::new(70, 130, 180)),
    ("Terracotta", Rgb::new(204, 78, 92)),
    ("Forest Shadow", Rgb::new(85, 107, 47)),
];

impl TargetColor {
    /// Select a target from a uniform sample in [0,1).
    ///
    /// Randomness is injected so the core stays deterministic; the web layer
    /// passes `Math.random()`. Samples outside [0,1) clamp to the table ends.
    pub fn pick(unit: f64) -> Self {
        let len = TARGET_TABLE.len();
        // `as usize` saturates, so negative and NaN samples land on entry 0.
        let index = ((unit * len as f64) as usize).min(len - 1);
        let (name, rgb) = TARGET_TABLE[index];
        Self {
            rgb,
            name: name.to_string(),
        }
    }

    /// Every target in table order, for palette previews and tests.
    pub fn roster() -> Vec<Self> {
        TARGET_TABLE
            .iter()
            .map(|(name, rgb)| Self {
                rgb: *rgb,
                name: (*name).to_string(),
            })
            .collect()
    }
}
