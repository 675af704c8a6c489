// SPDX-License-Identifier: MIT
//
// HSL ↔ sRGB conversion.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) follow the
// usual color-science notation so the code reads against the textbook
// formulas line by line.
#![allow(clippy::many_single_char_names)]
//
// HSL is the only space the tonal palette generator works in: it keeps the
// seed's hue fixed and walks saturation and lightness. It is not
// perceptually uniform, and the palette math does not pretend otherwise.
//
// The arithmetic below is written operation for operation (no fused
// multiply-add) so the same seed always lands on the same 8-bit channels.
#![allow(clippy::suboptimal_flops)]

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in the HSL cylinder.
///
/// - `h`: hue angle in degrees, `[0, 360)`
/// - `s`: saturation, `[0, 1]`
/// - `l`: lightness, `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create an HSL color. Hue is normalized into `[0, 360)`, saturation
    /// and lightness are clamped into `[0, 1]`.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_unit(s),
            l: clamp_unit(l),
        }
    }

    /// Convert sRGB components (each `0.0..=1.0`) to HSL.
    ///
    /// Hue is taken from whichever channel is maximal, checked in the order
    /// red, green, blue. Achromatic input yields hue 0 and saturation 0.
    #[must_use]
    pub fn from_srgb(r: f64, g: f64, b: f64) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };

        Self::new(h * 360.0, s, l)
    }

    /// Convert to sRGB components in `0.0..=1.0`.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        if self.s == 0.0 {
            return (self.l, self.l, self.l);
        }

        let h = self.h / 360.0;
        let (s, l) = (self.s, self.l);
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        (
            clamp_unit(hue_to_channel(p, q, h + 1.0 / 3.0)),
            clamp_unit(hue_to_channel(p, q, h)),
            clamp_unit(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Same hue, different saturation and lightness.
    #[must_use]
    pub fn with_sl(self, s: f64, l: f64) -> Self {
        Self::new(self.h, s, l)
    }

    /// Whether the color carries any saturation at all.
    #[inline]
    #[must_use]
    pub fn is_chromatic(self) -> bool {
        self.s > 0.0
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Piecewise hue-to-channel ramp. `t` is a hue fraction, wrapped once into
/// `[0, 1]`.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Normalize a hue angle to `[0, 360)`.
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Shortest angular distance between two hues, in `[0, 180]`.
#[inline]
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

#[inline]
fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
