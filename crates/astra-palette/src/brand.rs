// SPDX-License-Identifier: MIT

//! Brand palettes — `main / light / dark / contrastText` quads.
//!
//! Component toolkits that predate color roles want four colors per accent.
//! Each is a fixed tone of the accent's palette:
//!
//! | mode  | main | light | dark | contrastText |
//! |-------|------|-------|------|--------------|
//! | light | 40   | 70    | 20   | 100          |
//! | dark  | 80   | 90    | 30   | 20           |

use astra_color::Color;
use serde::Serialize;

use crate::palette::TonalPalette;
use crate::role::Mode;
use crate::scheme::{SchemePalettes, SchemeSeeds};
use crate::tone::Tone;

struct BrandTones {
    main: Tone,
    light: Tone,
    dark: Tone,
    contrast_text: Tone,
}

const LIGHT_TONES: BrandTones = BrandTones {
    main: Tone::T40,
    light: Tone::T70,
    dark: Tone::T20,
    contrast_text: Tone::T100,
};

const DARK_TONES: BrandTones = BrandTones {
    main: Tone::T80,
    light: Tone::T90,
    dark: Tone::T30,
    contrast_text: Tone::T20,
};

/// Four colors for one accent in one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPalette {
    pub main: Color,
    pub light: Color,
    pub dark: Color,
    pub contrast_text: Color,
}

impl BrandPalette {
    #[must_use]
    pub const fn from_palette(palette: &TonalPalette, mode: Mode) -> Self {
        let tones = match mode {
            Mode::Light => &LIGHT_TONES,
            Mode::Dark => &DARK_TONES,
        };
        Self {
            main: palette.get(tones.main),
            light: palette.get(tones.light),
            dark: palette.get(tones.dark),
            contrast_text: palette.get(tones.contrast_text),
        }
    }
}

/// Brand palettes for every accent of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandColors {
    pub mode: Mode,
    pub primary: BrandPalette,
    pub secondary: BrandPalette,
    pub tertiary: BrandPalette,
    pub error: BrandPalette,
}

impl BrandColors {
    #[must_use]
    pub const fn from_palettes(palettes: &SchemePalettes, mode: Mode) -> Self {
        Self {
            mode,
            primary: BrandPalette::from_palette(&palettes.primary, mode),
            secondary: BrandPalette::from_palette(&palettes.secondary, mode),
            tertiary: BrandPalette::from_palette(&palettes.tertiary, mode),
            error: BrandPalette::from_palette(&palettes.error, mode),
        }
    }

    #[must_use]
    pub fn from_seeds(seeds: &SchemeSeeds, mode: Mode) -> Self {
        Self::from_palettes(&SchemePalettes::generate(seeds), mode)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
