//! sRGB, linear RGB, OKLab and CIE Lab conversions.
//!
//! OKLab is the mixing space: linear blends there track how humans perceive
//! mixed hues far better than blends in raw RGB. CIE Lab is used only for
//! the difference metric in `scoring`. Linear RGB is an intermediate stage
//! and is passed around as bare `(f64, f64, f64)` tuples.

use serde::{Deserialize, Serialize};

/// An 8-bit sRGB color, the display and interchange format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `rrggbb` hex string, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        Some(Self {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A color in the perceptually uniform OKLab space.
/// `l` is lightness in [0,1]; `a` (green-red) and `b` (blue-yellow) sit
/// roughly in [-0.4, 0.4] for colors inside the sRGB gamut.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl OkLab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

/// A color in CIE L*a*b* (D65). `l` in [0,100], `a`/`b` roughly [-128,127].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Convert an sRGB component in [0,1] to linear RGB (remove gamma).
pub fn srgb_to_linear(u: f64) -> f64 {
    if u <= 0.04045 {
        u / 12.92
    } else {
        ((u + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear RGB component to sRGB in [0,1] (apply gamma).
pub fn linear_to_srgb(u: f64) -> f64 {
    if u <= 0.0031308 {
        12.92 * u
    } else {
        1.055 * u.powf(1.0 / 2.4) - 0.055
    }
}

/// Gamma-decode an 8-bit sRGB color to linear channels in [0,1].
pub fn rgb_to_linear(rgb: Rgb) -> (f64, f64, f64) {
    (
        srgb_to_linear(rgb.r as f64 / 255.0),
        srgb_to_linear(rgb.g as f64 / 255.0),
        srgb_to_linear(rgb.b as f64 / 255.0),
    )
}

/// Gamma-encode linear channels back to 8-bit sRGB.
/// Each channel saturates to [0,255]; this rounding is the only lossy step
/// in the sRGB pipeline.
pub fn linear_to_rgb(r: f64, g: f64, b: f64) -> Rgb {
    Rgb {
        r: (255.0 * linear_to_srgb(r)).round().clamp(0.0, 255.0) as u8,
        g: (255.0 * linear_to_srgb(g)).round().clamp(0.0, 255.0) as u8,
        b: (255.0 * linear_to_srgb(b)).round().clamp(0.0, 255.0) as u8,
    }
}

/// Convert linear RGB to OKLab.
pub fn linear_rgb_to_oklab(r: f64, g: f64, b: f64) -> OkLab {
    // Linear RGB to LMS cone responses
    let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
    let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
    let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

    // Cube root (perceptual non-linearity)
    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    // LMS' to OKLab
    OkLab {
        l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    }
}

/// Convert OKLab to linear RGB, each channel clamped to [0,1].
pub fn oklab_to_linear_rgb(c: OkLab) -> (f64, f64, f64) {
    // OKLab to LMS'
    let l_ = c.l + 0.3963377774 * c.a + 0.2158037573 * c.b;
    let m_ = c.l - 0.1055613458 * c.a - 0.0638541728 * c.b;
    let s_ = c.l - 0.0894841775 * c.a - 1.2914855480 * c.b;

    // Cube to undo the non-linearity. Out-of-gamut OKLab values can push
    // LMS' negative; clamp before cubing so the result stays real-valued.
    let l = l_.max(0.0).powi(3);
    let m = m_.max(0.0).powi(3);
    let s = s_.max(0.0).powi(3);

    // LMS to linear RGB
    let r = 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s;
    let g = -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s;
    let b = -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s;

    (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
}

/// Convert an 8-bit sRGB color to OKLab.
pub fn rgb_to_oklab(rgb: Rgb) -> OkLab {
    let (r, g, b) = rgb_to_linear(rgb);
    linear_rgb_to_oklab(r, g, b)
}

/// Convert an OKLab color to 8-bit sRGB.
pub fn oklab_to_rgb(c: OkLab) -> Rgb {
    let (r, g, b) = oklab_to_linear_rgb(c);
    linear_to_rgb(r, g, b)
}

/// Convert an 8-bit sRGB color to CIE Lab via XYZ with the D65 white point.
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    let (r, g, b) = rgb_to_linear(rgb);

    // Linear RGB to XYZ
    let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
    let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
    let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

    // Normalize by the D65 illuminant
    let xn = x / 0.95047;
    let yn = y / 1.00000;
    let zn = z / 1.08883;

    let f = |t: f64| {
        if t > 0.008856 {
            t.cbrt()
        } else {
            7.787 * t + 16.0 / 116.0
        }
    };
    let fx = f(xn);
    let fy = f(yn);
    let fz = f(zn);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}
