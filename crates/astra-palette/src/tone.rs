// SPDX-License-Identifier: MIT

//! Tone keys and the HSL tone curve.
//!
//! A tone is an addressable step from 0 (black) to 100 (white) along a
//! seed's hue. The set is closed: exactly the 13 Material tone stops.

// The curve is written operation for operation, without fused multiply-add,
// so a seed always rounds to the same 8-bit channels.
#![allow(clippy::suboptimal_flops)]

use std::fmt;

use astra_color::Hsl;
use serde::{Serialize, Serializer};

/// One of the 13 tone stops of a tonal palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tone {
    T0,
    T10,
    T20,
    T30,
    T40,
    T50,
    T60,
    T70,
    T80,
    T90,
    T95,
    T99,
    T100,
}

impl Tone {
    pub const COUNT: usize = 13;

    /// All tones, darkest first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::T0,
        Self::T10,
        Self::T20,
        Self::T30,
        Self::T40,
        Self::T50,
        Self::T60,
        Self::T70,
        Self::T80,
        Self::T90,
        Self::T95,
        Self::T99,
        Self::T100,
    ];

    /// The numeric tone key.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::T0 => 0,
            Self::T10 => 10,
            Self::T20 => 20,
            Self::T30 => 30,
            Self::T40 => 40,
            Self::T50 => 50,
            Self::T60 => 60,
            Self::T70 => 70,
            Self::T80 => 80,
            Self::T90 => 90,
            Self::T95 => 95,
            Self::T99 => 99,
            Self::T100 => 100,
        }
    }

    /// Look up a tone by its numeric key. Returns `None` for anything
    /// outside the 13 stops.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::T0,
            10 => Self::T10,
            20 => Self::T20,
            30 => Self::T30,
            40 => Self::T40,
            50 => Self::T50,
            60 => Self::T60,
            70 => Self::T70,
            80 => Self::T80,
            90 => Self::T90,
            95 => Self::T95,
            99 => Self::T99,
            100 => Self::T100,
            _ => return None,
        })
    }

    /// Position in [`Tone::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Apply the tone curve to a seed: same hue, new saturation and
    /// lightness.
    ///
    /// - 0 and 100 are achromatic black and white.
    /// - Up to 50, lightness climbs linearly from black to half the seed's
    ///   lightness while saturation blends halfway from the seed's toward
    ///   full.
    /// - Above 50, lightness climbs from the seed's toward white while
    ///   saturation fades from the seed's toward zero.
    #[must_use]
    pub fn shade(self, seed: Hsl) -> Hsl {
        let t = f64::from(self.value());
        let (s, l) = match self {
            Self::T0 => (0.0, 0.0),
            Self::T100 => (0.0, 1.0),
            _ if t <= 50.0 => {
                let k = t / 50.0;
                (seed.s + k * (1.0 - seed.s) * 0.5, k * seed.l * 0.5)
            }
            _ => {
                let k = (t - 50.0) / 50.0;
                (seed.s * (1.0 - k), seed.l + (1.0 - seed.l) * k)
            }
        };
        seed.with_sl(s, l)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for Tone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
