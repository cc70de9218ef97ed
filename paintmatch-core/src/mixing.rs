//! Subtractive paint mixing in OKLab space.
//!
//! Real pigments mix subtractively: the result is darker and duller than a
//! naive average of the components. A full Kubelka-Munk simulation is out of
//! scope; instead the model blends colorants linearly in OKLab (which already
//! tracks perceived hue well) and then applies a calibrated darkening that
//! grows with the number of distinct pigments in the mix.

use crate::color_space::OkLab;

/// One pigment's contribution to a mix: its colorant and its volume in mL.
#[derive(Clone, Copy, Debug)]
pub struct WeightedColor {
    pub color: OkLab,
    pub weight: f64,
}

impl WeightedColor {
    pub const fn new(color: OkLab, weight: f64) -> Self {
        Self { color, weight }
    }
}

/// Returned when there is nothing to mix (empty input or all-zero weights).
const FALLBACK_WHITE: OkLab = OkLab::new(1.0, 0.0, 0.0);

/// Mixed lightness never reaches pure black or pure white.
const MIN_LIGHTNESS: f64 = 0.05;

/// Chroma clamp; extreme weighted combinations stay inside this box.
const CHROMA_LIMIT: f64 = 0.5;

/// Combine weighted colorants into one perceived color.
///
/// The weighted OKLab mean is darkened by `0.15 + min(n/3, 1) * 0.15`, where
/// `n` counts pigments with strictly positive weight, so a three-pigment mix
/// loses twice the luminance of a single pigment. The final lightness is
/// clamped to [0.05, 1] and a/b to [-0.5, 0.5].
pub fn mix_pigments(colors: &[WeightedColor]) -> OkLab {
    let total_weight: f64 = colors.iter().map(|c| c.weight).sum();
    if total_weight == 0.0 {
        return FALLBACK_WHITE;
    }

    let mean_l: f64 = colors.iter().map(|c| c.color.l * c.weight).sum::<f64>() / total_weight;
    let mean_a: f64 = colors.iter().map(|c| c.color.a * c.weight).sum::<f64>() / total_weight;
    let mean_b: f64 = colors.iter().map(|c| c.color.b * c.weight).sum::<f64>() / total_weight;

    let num_colors = colors.iter().filter(|c| c.weight > 0.0).count();
    let complexity = (num_colors as f64 / 3.0).min(1.0);
    let darkening = 0.15 + complexity * 0.15;

    OkLab {
        l: (mean_l * (1.0 - darkening)).clamp(MIN_LIGHTNESS, 1.0),
        a: mean_a.clamp(-CHROMA_LIMIT, CHROMA_LIMIT),
        b: mean_b.clamp(-CHROMA_LIMIT, CHROMA_LIMIT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_falls_back_to_white() {
        let mixed = mix_pigments(&[]);
        assert_eq!(mixed, OkLab::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn all_zero_weights_fall_back_to_white() {
        let colors = [
            WeightedColor::new(OkLab::new(0.5, 0.1, 0.1), 0.0),
            WeightedColor::new(OkLab::new(0.3, -0.2, 0.0), 0.0),
        ];
        let mixed = mix_pigments(&colors);
        assert_eq!(mixed, OkLab::new(1.0, 0.0, 0.0));
        assert!(mixed.l.is_finite());
    }

    #[test]
    fn single_pigment_keeps_hue_and_darkens() {
        let colorant = OkLab::new(0.88, 0.02, 0.18);
        let mixed = mix_pigments(&[WeightedColor::new(colorant, 5.0)]);
        // One pigment: complexity 1/3, darkening 0.20.
        assert!((mixed.l - 0.88 * 0.80).abs() < 1e-9);
        assert!((mixed.a - 0.02).abs() < 1e-9);
        assert!((mixed.b - 0.18).abs() < 1e-9);
    }

    #[test]
    fn darkening_grows_with_pigment_count() {
        let c = OkLab::new(0.8, 0.0, 0.0);
        let one = mix_pigments(&[WeightedColor::new(c, 1.0)]);
        let two = mix_pigments(&[WeightedColor::new(c, 1.0); 2]);
        let three = mix_pigments(&[WeightedColor::new(c, 1.0); 3]);
        let four = mix_pigments(&[WeightedColor::new(c, 1.0); 4]);
        assert!(one.l > two.l, "two pigments must darken more than one");
        assert!(two.l > three.l, "three pigments must darken more than two");
        // Complexity saturates at three pigments.
        assert!((three.l - four.l).abs() < 1e-12);
    }

    #[test]
    fn zero_weight_entries_do_not_count_toward_complexity() {
        let c = OkLab::new(0.8, 0.0, 0.0);
        let with_ghost = mix_pigments(&[
            WeightedColor::new(c, 1.0),
            WeightedColor::new(OkLab::new(0.1, 0.3, 0.3), 0.0),
        ]);
        let alone = mix_pigments(&[WeightedColor::new(c, 1.0)]);
        assert_eq!(with_ghost, alone);
    }

    #[test]
    fn weights_bias_the_blend() {
        let yellow = OkLab::new(0.88, 0.02, 0.18);
        let blue = OkLab::new(0.42, -0.05, -0.25);
        let mostly_yellow = mix_pigments(&[
            WeightedColor::new(yellow, 9.0),
            WeightedColor::new(blue, 1.0),
        ]);
        let mostly_blue = mix_pigments(&[
            WeightedColor::new(yellow, 1.0),
            WeightedColor::new(blue, 9.0),
        ]);
        assert!(mostly_yellow.b > mostly_blue.b);
        assert!(mostly_yellow.l > mostly_blue.l);
    }

    #[test]
    fn yellow_and_blue_make_muted_green_not_gray() {
        // Cadmium Yellow + Ultramarine Blue, equal volumes. The chroma
        // components partially cancel but the result keeps a green lean
        // rather than collapsing to neutral gray.
        let yellow = OkLab::new(0.88, 0.02, 0.18);
        let blue = OkLab::new(0.42, 0.08, -0.25);
        let mixed = mix_pigments(&[
            WeightedColor::new(yellow, 10.0),
            WeightedColor::new(blue, 10.0),
        ]);

        // Two pigments: darkening 0.25 applied to the mean lightness 0.65.
        assert!((mixed.l - 0.65 * 0.75).abs() < 1e-9);
        assert!(mixed.l > 0.3 && mixed.l < 0.6, "mid lightness, got {}", mixed.l);
        assert!(mixed.a.abs() < 0.1, "low |a|, got {}", mixed.a);
        assert!(mixed.b.abs() < 0.05, "near-zero b, got {}", mixed.b);
    }

    #[test]
    fn output_stays_inside_documented_bounds() {
        let extremes = [
            vec![WeightedColor::new(OkLab::new(0.0, 0.0, 0.0), 1.0)],
            vec![WeightedColor::new(OkLab::new(1.0, 0.0, 0.0), 1.0)],
            vec![
                WeightedColor::new(OkLab::new(1.0, 2.0, -2.0), 100.0),
                WeightedColor::new(OkLab::new(0.0, -3.0, 3.0), 0.001),
            ],
        ];
        for colors in &extremes {
            let mixed = mix_pigments(colors);
            assert!((0.05..=1.0).contains(&mixed.l), "L out of bounds: {}", mixed.l);
            assert!((-0.5..=0.5).contains(&mixed.a), "a out of bounds: {}", mixed.a);
            assert!((-0.5..=0.5).contains(&mixed.b), "b out of bounds: {}", mixed.b);
        }
    }
}
