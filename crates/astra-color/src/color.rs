// SPDX-License-Identifier: MIT
//
// astra-color color system — opaque 8-bit sRGB.
//
// A `Color` is exactly what a stylesheet receives: three channels, no
// alpha, written as lowercase `#rrggbb`. Seeds come in as strings and are
// validated here once; everything downstream works on the typed value.
//
// Conversion pipeline:
//
//   "#RRGGBB" ↔ Color (u8 channels) ↔ sRGB (0.0–1.0) ↔ Hsl
//                                        │
//                                        └──► linear sRGB → WCAG luminance

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ColorError;
use crate::hsl::Hsl;

/// `#RRGGBB`, case-insensitive, `#` optional. No short or alpha forms.
static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
        .expect("hex color pattern compiles")
});

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque sRGB color with 8-bit channels.
///
/// # Examples
///
/// ```
/// use astra_color::Color;
///
/// let blue = Color::hex("#00529D").unwrap();
/// assert_eq!(blue, Color::rgb(0x00, 0x52, 0x9d));
/// assert_eq!(blue.to_hex(), "#00529d");
///
/// // The leading `#` is optional.
/// assert_eq!(Color::hex("00529d").unwrap(), blue);
///
/// // Short forms are rejected.
/// assert!(Color::hex("#fff").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string (case-insensitive, `#` optional).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] when the input is not
    /// exactly six hex digits with an optional leading `#`.
    pub fn hex(s: &str) -> Result<Self, ColorError> {
        let caps = HEX_PATTERN
            .captures(s)
            .ok_or_else(|| ColorError::invalid(s))?;
        let channel = |i: usize| {
            u8::from_str_radix(&caps[i], 16).map_err(|_| ColorError::invalid(s))
        };
        Ok(Self::rgb(channel(1)?, channel(2)?, channel(3)?))
    }

    /// Create a color from sRGB components in `0.0..=1.0`.
    ///
    /// Each channel is scaled to 255, rounded half-up, and clamped.
    #[must_use]
    pub fn from_srgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgb(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Create a color from HSL.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl.to_srgb();
        Self::from_srgb(r, g, b)
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// sRGB components in `0.0..=1.0`.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Convert to HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_srgb();
        Hsl::from_srgb(r, g, b)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Difference between the largest and smallest channel.
    ///
    /// Zero means the color is a pure gray and carries no hue.
    #[must_use]
    pub fn channel_spread(self) -> u8 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        max - min
    }

    // ─── Luminance ───────────────────────────────────────────────────────

    /// Relative luminance per WCAG 2.1.
    ///
    ///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
    ///
    /// Returns a value in `[0.0, 1.0]`, 0 for black and 1 for white.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let (r, g, b) = self.to_srgb();
        0.2126f64.mul_add(
            srgb_to_linear(r),
            0.7152f64.mul_add(srgb_to_linear(g), 0.0722 * srgb_to_linear(b)),
        )
    }
}

/// WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in `[1.0, 21.0]`:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Argument order does not matter.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Remove the sRGB transfer curve from one component.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding half-up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Trait impls ─────────────────────────────────────────────────────────────

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a #RRGGBB hex color string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Color, E> {
                Color::hex(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
