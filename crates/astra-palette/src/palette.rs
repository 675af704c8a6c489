// SPDX-License-Identifier: MIT

//! Tonal palette generation — one seed color in, 13 tones out.
//!
//! The seed is converted to HSL once; every tone keeps that hue and takes
//! its saturation and lightness from [`Tone::shade`]. Tone 0 is always pure
//! black and tone 100 pure white, whatever the seed.

use std::ops::Index;

use astra_color::Color;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::error::Result;
use crate::tone::Tone;

// ---------------------------------------------------------------------------
// TonalPalette
// ---------------------------------------------------------------------------

/// The 13 tone colors derived from a single seed.
///
/// Immutable once built. Index it with a [`Tone`], or look up a numeric key
/// with [`TonalPalette::tone`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TonalPalette {
    seed: Color,
    tones: [Color; Tone::COUNT],
}

impl TonalPalette {
    /// Generate the palette for an already-parsed seed.
    #[must_use]
    pub fn from_seed(seed: Color) -> Self {
        let hsl = seed.to_hsl();
        debug!(seed = %seed, h = hsl.h, s = hsl.s, l = hsl.l, "generating tonal palette");

        let tones = Tone::ALL.map(|tone| Color::from_hsl(tone.shade(hsl)));
        Self { seed, tones }
    }

    /// The seed this palette was generated from.
    #[must_use]
    pub const fn seed(&self) -> Color {
        self.seed
    }

    /// The color at `tone`.
    #[inline]
    #[must_use]
    pub const fn get(&self, tone: Tone) -> Color {
        self.tones[tone.index()]
    }

    /// The color at a numeric tone key, or `None` if `value` is not one of
    /// the 13 stops.
    #[must_use]
    pub fn tone(&self, value: u8) -> Option<Color> {
        Tone::from_value(value).map(|tone| self.get(tone))
    }

    /// All tones with their colors, darkest first.
    pub fn iter(&self) -> impl Iterator<Item = (Tone, Color)> + '_ {
        Tone::ALL.into_iter().zip(self.tones.iter().copied())
    }
}

impl Index<Tone> for TonalPalette {
    type Output = Color;

    fn index(&self, tone: Tone) -> &Color {
        &self.tones[tone.index()]
    }
}

impl Serialize for TonalPalette {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Tone::COUNT))?;
        for (tone, color) in self.iter() {
            map.serialize_entry(&tone, &color)?;
        }
        map.end()
    }
}

/// Generate the tonal palette for a `#RRGGBB` seed (`#` optional).
///
/// # Errors
///
/// Returns [`ThemeError::InvalidColorFormat`](crate::ThemeError::InvalidColorFormat)
/// if `seed` is not a six-digit hex color. Nothing is computed in that case.
pub fn generate_tonal_palette(seed: &str) -> Result<TonalPalette> {
    let seed = Color::hex(seed)?;
    Ok(TonalPalette::from_seed(seed))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use astra_color::ColorError;
    use astra_color::hsl::hue_distance;
    use pretty_assertions::assert_eq;

    const SEEDS: [&str; 12] = [
        "#00529D", "#93018F", "#B48B00", "#67676A", "#72727D", "#BA1A1A",
        "#808080", "#ff0000", "#123456", "#fedcba", "#00ff00", "#010203",
    ];

    fn hexes(palette: &TonalPalette) -> Vec<(u8, String)> {
        palette.iter().map(|(t, c)| (t.value(), c.to_hex())).collect()
    }

    #[test]
    fn extremes_are_black_and_white() {
        for seed in SEEDS {
            let p = generate_tonal_palette(seed).unwrap();
            assert_eq!(p.get(Tone::T0).to_hex(), "#000000", "T0 for {seed}");
            assert_eq!(p.get(Tone::T100).to_hex(), "#ffffff", "T100 for {seed}");
        }
    }

    #[test]
    fn celestial_core_blue_known_values() {
        let p = generate_tonal_palette("#00529D").unwrap();
        let expected: Vec<(u8, String)> = [
            (0, "#000000"),
            (10, "#000810"),
            (20, "#00101f"),
            (30, "#00192f"),
            (40, "#00213f"),
            (50, "#00294f"),
            (60, "#1776cd"),
            (70, "#5698d5"),
            (80, "#9cbad5"),
            (90, "#d5dce3"),
            (95, "#ecedef"),
            (99, "#fbfbfc"),
            (100, "#ffffff"),
        ]
        .into_iter()
        .map(|(t, h)| (t, h.to_owned()))
        .collect();
        assert_eq!(hexes(&p), expected);
    }

    #[test]
    fn error_red_known_values() {
        let p = generate_tonal_palette("#BA1A1A").unwrap();
        assert_eq!(p[Tone::T10].to_hex(), "#130202");
        assert_eq!(p[Tone::T40].to_hex(), "#4f0606");
        assert_eq!(p[Tone::T80].to_hex(), "#d5b1b1");
        assert_eq!(p[Tone::T90].to_hex(), "#e6dddd");
    }

    #[test]
    fn neutral_dark_tones_gain_saturation() {
        // The dark half pushes saturation toward full even for a near-gray
        // seed, so mid tones pick up the seed's blue cast.
        let p = generate_tonal_palette("#67676A").unwrap();
        assert_eq!(p[Tone::T50].to_hex(), "#1a1a4f");
        assert_eq!(p[Tone::T60].to_hex(), "#858588");
    }

    #[test]
    fn gray_seed_light_half_stays_gray() {
        let p = generate_tonal_palette("#808080").unwrap();
        for tone in [Tone::T60, Tone::T70, Tone::T80, Tone::T90, Tone::T95, Tone::T99] {
            assert_eq!(p[tone].channel_spread(), 0, "{tone} should be gray");
        }
        assert_eq!(p[Tone::T80].to_hex(), "#cccccc");
    }

    #[test]
    fn hue_is_preserved() {
        for seed in SEEDS {
            let p = generate_tonal_palette(seed).unwrap();
            let seed_hsl = p.seed().to_hsl();
            if !seed_hsl.is_chromatic() {
                continue;
            }
            for (tone, color) in p.iter() {
                let spread = color.channel_spread();
                if spread == 0 {
                    continue;
                }
                // One 8-bit quantization step can move the recovered hue by
                // at most 120° / spread.
                let tolerance = (120.0 / f64::from(spread)).max(1.0);
                let drift = hue_distance(color.to_hsl().h, seed_hsl.h);
                assert!(
                    drift <= tolerance,
                    "{seed} tone {tone} ({color}) drifted {drift:.3}° (tolerance {tolerance:.3}°)"
                );
            }
        }
    }

    #[test]
    fn deterministic() {
        for seed in SEEDS {
            assert_eq!(
                generate_tonal_palette(seed).unwrap(),
                generate_tonal_palette(seed).unwrap()
            );
        }
    }

    #[test]
    fn hash_is_optional() {
        assert_eq!(
            generate_tonal_palette("00529D").unwrap(),
            generate_tonal_palette("#00529D").unwrap()
        );
        assert_eq!(
            generate_tonal_palette("#00529d").unwrap(),
            generate_tonal_palette("#00529D").unwrap()
        );
    }

    #[test]
    fn invalid_formats_rejected() {
        for bad in ["notacolor", "#12", "#abc", "#00529D80", ""] {
            let err = generate_tonal_palette(bad).unwrap_err();
            assert!(
                matches!(
                    &err,
                    ThemeError::InvalidColorFormat(ColorError::InvalidColorFormat { input }) if input == bad
                ),
                "unexpected error for {bad:?}: {err}"
            );
        }
    }

    #[test]
    fn numeric_tone_lookup() {
        let p = generate_tonal_palette("#B48B00").unwrap();
        assert_eq!(p.tone(40), Some(p[Tone::T40]));
        assert_eq!(p.tone(99), Some(p[Tone::T99]));
        assert_eq!(p.tone(45), None);
    }

    #[test]
    fn serializes_with_numeric_keys() {
        let p = generate_tonal_palette("#00529D").unwrap();
        let value = serde_json::to_value(&p).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 13);
        assert_eq!(map["40"], "#00213f");
        assert_eq!(map["100"], "#ffffff");
    }
}
