//! Conversion round-trip properties over a dense sample of the RGB cube.

use paintmatch_core::{
    linear_to_rgb, oklab_to_rgb, rgb_to_lab, rgb_to_linear, rgb_to_oklab, Rgb,
};

fn sample_cube(step: usize) -> impl Iterator<Item = Rgb> {
    (0..=255usize).step_by(step).flat_map(move |r| {
        (0..=255usize).step_by(step).flat_map(move |g| {
            (0..=255usize)
                .step_by(step)
                .map(move |b| Rgb::new(r as u8, g as u8, b as u8))
        })
    })
}

#[test]
fn linear_roundtrip_within_one_count() {
    for rgb in sample_cube(5) {
        let (r, g, b) = rgb_to_linear(rgb);
        let back = linear_to_rgb(r, g, b);
        assert!(
            (back.r as i32 - rgb.r as i32).abs() <= 1
                && (back.g as i32 - rgb.g as i32).abs() <= 1
                && (back.b as i32 - rgb.b as i32).abs() <= 1,
            "linear roundtrip drifted: {rgb:?} -> {back:?}"
        );
    }
}

#[test]
fn oklab_roundtrip_within_two_counts() {
    // OKLab is not perfectly invertible at the gamut clamps, so allow a
    // slightly wider tolerance than the pure gamma roundtrip.
    for rgb in sample_cube(5) {
        let back = oklab_to_rgb(rgb_to_oklab(rgb));
        assert!(
            (back.r as i32 - rgb.r as i32).abs() <= 2
                && (back.g as i32 - rgb.g as i32).abs() <= 2
                && (back.b as i32 - rgb.b as i32).abs() <= 2,
            "oklab roundtrip drifted: {rgb:?} -> {back:?}"
        );
    }
}

#[test]
fn oklab_lightness_orders_grays() {
    let mut last = -1.0;
    for v in (0..=255).step_by(15) {
        let l = rgb_to_oklab(Rgb::new(v as u8, v as u8, v as u8)).l;
        assert!(l > last, "gray ramp must be monotone in L");
        last = l;
    }
}

#[test]
fn lab_lightness_orders_grays() {
    let mut last = -1.0;
    for v in (0..=255).step_by(15) {
        let l = rgb_to_lab(Rgb::new(v as u8, v as u8, v as u8)).l;
        assert!(l > last, "gray ramp must be monotone in L*");
        last = l;
    }
}

#[test]
fn corners_of_the_cube_roundtrip_exactly() {
    for rgb in [
        Rgb::new(0, 0, 0),
        Rgb::new(255, 255, 255),
        Rgb::new(255, 0, 0),
        Rgb::new(0, 255, 0),
        Rgb::new(0, 0, 255),
        Rgb::new(255, 255, 0),
        Rgb::new(0, 255, 255),
        Rgb::new(255, 0, 255),
    ] {
        let (r, g, b) = rgb_to_linear(rgb);
        assert_eq!(linear_to_rgb(r, g, b), rgb);
    }
}
