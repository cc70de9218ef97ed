//! Brush stroke geometry: pointer samples to deposited paint volume.
//!
//! The UI owns all drawing; this module only answers "how much paint did
//! that gesture lay down" and "how big is the mixed pile". Volume deposited
//! by a stroke is proportional to the swept cylinder of bristle contact:
//! density * pi * radius^2 * path length * mean pressure, scaled from canvas
//! pixels to mL.

use serde::{Deserialize, Serialize};

/// Fraction of the swept volume that actually sticks to the canvas.
const DENSITY_FACTOR: f64 = 0.1;

/// Canvas-pixel to mL conversion.
const PX_TO_ML: f64 = 0.01;

/// Paint pile thickness (mm) and packing density for the display radius.
const PILE_THICKNESS: f64 = 2.0;
const PILE_DENSITY: f64 = 0.8;

/// Smallest visible pile radius.
const PILE_MIN_RADIUS: f64 = 8.0;

/// One pointer sample inside a stroke.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    pub x: f64,
    pub y: f64,
    /// Milliseconds since the Unix epoch.
    pub t: f64,
    /// Stylus pressure in [0,1]; mouse input reports 1.
    pub pressure: f64,
}

/// An in-progress or finished brush stroke for one pigment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrushStroke {
    pub pigment_id: String,
    pub brush_radius: f64,
    points: Vec<StrokePoint>,
    length: f64,
}

impl BrushStroke {
    /// Start a stroke at the first contact point.
    pub fn begin(pigment_id: &str, brush_radius: f64, x: f64, y: f64, t: f64, pressure: f64) -> Self {
        Self {
            pigment_id: pigment_id.to_string(),
            brush_radius,
            points: vec![StrokePoint { x, y, t, pressure }],
            length: 0.0,
        }
    }

    /// Append a sample, extending the polyline length.
    pub fn add_point(&mut self, x: f64, y: f64, t: f64, pressure: f64) {
        let last = self.points[self.points.len() - 1];
        self.length += ((x - last.x).powi(2) + (y - last.y).powi(2)).sqrt();
        self.points.push(StrokePoint { x, y, t, pressure });
    }

    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    /// Polyline length in canvas pixels.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Deposited paint volume in mL.
    ///
    /// A dab with no movement deposits nothing; volume grows linearly with
    /// path length and mean pressure and quadratically with brush radius.
    pub fn paint_amount(&self) -> f64 {
        let mean_pressure: f64 =
            self.points.iter().map(|p| p.pressure).sum::<f64>() / self.points.len() as f64;
        DENSITY_FACTOR
            * std::f64::consts::PI
            * self.brush_radius.powi(2)
            * self.length
            * mean_pressure
            * PX_TO_ML
    }
}

/// Display radius of the mixed-paint pile for a total volume in mL.
/// Returns 0 for an empty canvas, otherwise at least the minimum visible
/// radius.
pub fn pile_radius(total_ml: f64) -> f64 {
    if total_ml <= 0.0 {
        return 0.0;
    }
    let radius = (total_ml * 1000.0 / (std::f64::consts::PI * PILE_THICKNESS * PILE_DENSITY)).sqrt();
    radius.max(PILE_MIN_RADIUS)
}
