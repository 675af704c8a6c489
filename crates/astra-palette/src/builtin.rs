// SPDX-License-Identifier: MIT

//! Named seed presets — the AstraCore brand colors and their variants.
//!
//! Each preset is a [`SchemeSeeds`] that produces a coherent theme. The
//! default preset is the product's own brand set.

use astra_color::Color;

use crate::error::Result;
use crate::scheme::{DEFAULT_NEUTRAL_SEED, DEFAULT_NEUTRAL_VARIANT_SEED, SchemeSeeds, ThemeColors};

/// Celestial Core Blue.
pub const CELESTIAL_CORE_BLUE: Color = Color::rgb(0x00, 0x52, 0x9d);

/// Cosmic Magenta.
pub const COSMIC_MAGENTA: Color = Color::rgb(0x93, 0x01, 0x8f);

/// Solar Amber.
pub const SOLAR_AMBER: Color = Color::rgb(0xb4, 0x8b, 0x00);

/// Nebula Gray.
pub const NEBULA_GRAY: Color = DEFAULT_NEUTRAL_SEED;

/// Orion Steel.
pub const ORION_STEEL: Color = DEFAULT_NEUTRAL_VARIANT_SEED;

/// The default brand seeds.
pub const ASTRA_CORE: SchemeSeeds = SchemeSeeds::new(CELESTIAL_CORE_BLUE, COSMIC_MAGENTA, SOLAR_AMBER)
    .with_neutrals(NEBULA_GRAY, ORION_STEEL);

/// Look up a preset by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_seeds(name: &str) -> Option<SchemeSeeds> {
    Some(match name {
        "default" | "astracore" => ASTRA_CORE,
        "cosmic" => SchemeSeeds {
            primary: COSMIC_MAGENTA,
            secondary: CELESTIAL_CORE_BLUE,
            ..ASTRA_CORE
        },
        "solar" => SchemeSeeds {
            primary: SOLAR_AMBER,
            tertiary: CELESTIAL_CORE_BLUE,
            ..ASTRA_CORE
        },
        _ => return None,
    })
}

/// List all preset names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["default", "astracore", "cosmic", "solar"]
}

/// AstraCore role tables, optionally re-seeded with a custom primary.
///
/// Secondary, tertiary, and both neutrals always come from the brand set.
/// With no seed the primary is Celestial Core Blue (`#00529D`).
///
/// Only `None` selects the default. `Some("")` is not read as "no seed":
/// an empty string is a malformed color and is rejected like any other.
///
/// # Errors
///
/// Returns [`ThemeError::InvalidColorFormat`](crate::ThemeError::InvalidColorFormat)
/// if `seed` is given and is not a `#RRGGBB` color, including `""`.
pub fn generate_astra_core_colors(seed: Option<&str>) -> Result<ThemeColors> {
    let primary = seed.map_or(Ok(CELESTIAL_CORE_BLUE), Color::hex)?;
    Ok(ThemeColors::from_seeds(&SchemeSeeds { primary, ..ASTRA_CORE }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
