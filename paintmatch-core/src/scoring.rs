//! Perceptual color difference and the player-facing score.

use serde::{Deserialize, Serialize};

use crate::color_space::{rgb_to_lab, Lab, Rgb};

/// Each unit of perceptual distance costs this many score points.
const SCORE_SLOPE: f64 = 2.3;

/// A scored comparison between the target and a mixed color.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorScore {
    /// 0-100; 100 is a perfect match.
    pub score: u8,
    /// Perceptual distance, >= 0.
    pub delta_e: f64,
}

/// ΔE2000-style distance between two Lab colors.
///
/// Lightness, chroma and hue differences are each divided by the standard
/// compensation terms (SL a weighted quadratic over sqrt of mean lightness,
/// SC/SH linear in mean chroma) and combined as a Euclidean sum. The result
/// is deterministic for any input pair; exact metric symmetry is not a
/// contract.
pub fn color_distance(lab1: Lab, lab2: Lab) -> f64 {
    const K_L: f64 = 1.0;
    const K_C: f64 = 1.0;
    const K_H: f64 = 1.0;

    let delta_l = lab2.l - lab1.l;
    let c1 = (lab1.a * lab1.a + lab1.b * lab1.b).sqrt();
    let c2 = (lab2.a * lab2.a + lab2.b * lab2.b).sqrt();
    let delta_c = c2 - c1;
    let delta_cab = ((lab2.a - lab1.a).powi(2) + (lab2.b - lab1.b).powi(2)).sqrt();
    // The hue term is whatever chromatic difference the chroma term missed.
    let delta_h = (delta_cab.powi(2) - delta_c.powi(2)).max(0.0).sqrt();

    let l_bar = (lab1.l + lab2.l) / 2.0;
    let c_bar = (c1 + c2) / 2.0;

    let sl = 1.0 + (0.015 * (l_bar - 50.0).powi(2)) / (20.0 + (l_bar - 50.0).powi(2)).sqrt();
    let sc = 1.0 + 0.045 * c_bar;
    let sh = 1.0 + 0.015 * c_bar;

    ((delta_l / (K_L * sl)).powi(2)
        + (delta_c / (K_C * sc)).powi(2)
        + (delta_h / (K_H * sh)).powi(2))
    .sqrt()
}

/// Score a mixed color against the target.
///
/// Both colors are converted to Lab, and the distance maps linearly to a
/// score: distance 0 scores 100, and the score floors at 0 instead of going
/// negative.
pub fn calculate_color_score(target: Rgb, mixed: Rgb) -> ColorScore {
    let delta_e = color_distance(rgb_to_lab(target), rgb_to_lab(mixed));
    let score = (100.0 - delta_e * SCORE_SLOPE).clamp(0.0, 100.0).round() as u8;
    ColorScore { score, delta_e }
}

/// Player-facing label for a score.
pub fn score_category(score: u8) -> &'static str {
    match score {
        95..=u8::MAX => "Perfect!",
        85..=94 => "Excellent",
        75..=84 => "Good",
        60..=74 => "Fair",
        40..=59 => "Close",
        _ => "Try Again",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_colors_score_one_hundred() {
        let targets = [
            Rgb::new(139, 90, 60),
            Rgb::new(255, 255, 255),
            Rgb::new(0, 0, 0),
            Rgb::new(70, 130, 180),
        ];
        for target in targets {
            let result = calculate_color_score(target, target);
            assert_eq!(result.score, 100, "self-comparison must be perfect");
            assert!(result.delta_e.abs() < 1e-12);
        }
    }

    #[test]
    fn distance_is_zero_only_for_identical_lab() {
        let lab = rgb_to_lab(Rgb::new(155, 173, 157));
        assert_eq!(color_distance(lab, lab), 0.0);
        let other = rgb_to_lab(Rgb::new(155, 173, 158));
        assert!(color_distance(lab, other) > 0.0);
    }

    #[test]
    fn red_vs_green_scores_low() {
        let red = Rgb::new(255, 0, 0);
        let green = Rgb::new(0, 255, 0);
        let near_red = Rgb::new(250, 10, 5);

        let far = calculate_color_score(red, green);
        let near = calculate_color_score(red, near_red);

        assert!(far.score < 40, "opposing primaries must score low, got {}", far.score);
        assert!(near.score > far.score);
        assert!(
            far.delta_e > near.delta_e * 5.0,
            "red vs green ({}) should dwarf red vs near-red ({})",
            far.delta_e,
            near.delta_e
        );
    }

    #[test]
    fn score_never_goes_negative() {
        // Distance far beyond 100/2.3 still floors at zero.
        let result = calculate_color_score(Rgb::new(255, 255, 255), Rgb::new(0, 0, 255));
        assert!(result.delta_e * SCORE_SLOPE > 100.0);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn score_is_non_increasing_in_distance() {
        // Walk a ramp away from the target; the score must never rise as the
        // perceptual distance grows.
        let target = Rgb::new(128, 118, 105);
        let mut last: Option<(f64, u8)> = None;
        for step in 0..=25 {
            let mixed = Rgb::new(
                (128 + step * 5).min(255) as u8,
                118,
                (105u32.saturating_sub(step as u32 * 4)) as u8,
            );
            let result = calculate_color_score(target, mixed);
            if let Some((prev_d, prev_s)) = last {
                if result.delta_e >= prev_d {
                    assert!(
                        result.score <= prev_s,
                        "score rose from {prev_s} to {} while distance grew",
                        result.score
                    );
                }
            }
            last = Some((result.delta_e, result.score));
        }
    }

    #[test]
    fn distance_is_stable_under_argument_swap_for_game_purposes() {
        let a = rgb_to_lab(Rgb::new(204, 78, 92));
        let b = rgb_to_lab(Rgb::new(85, 107, 47));
        let d1 = color_distance(a, b);
        let d2 = color_distance(b, a);
        // Not exactly symmetric in general, but close enough that scores agree.
        assert!((d1 - d2).abs() / d1.max(d2) < 0.05);
    }

    #[test]
    fn score_categories_cover_the_range() {
        assert_eq!(score_category(100), "Perfect!");
        assert_eq!(score_category(95), "Perfect!");
        assert_eq!(score_category(90), "Excellent");
        assert_eq!(score_category(80), "Good");
        assert_eq!(score_category(65), "Fair");
        assert_eq!(score_category(45), "Close");
        assert_eq!(score_category(0), "Try Again");
    }
}
