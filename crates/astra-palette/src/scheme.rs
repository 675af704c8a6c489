// SPDX-License-Identifier: MIT

//! Scheme assembly — seeds to light and dark color-role tables.
//!
//! Six palettes are generated per call (five seeds plus the fixed error
//! red), then every role of both modes is filled by looking its tone up in
//! [`ROLE_TABLE`](crate::role::ROLE_TABLE). Nothing is cached.

use std::fmt;
use std::ops::Index;

use astra_color::Color;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, trace};

use crate::error::Result;
use crate::palette::TonalPalette;
use crate::role::{ColorRole, Mode, PaletteKind, RoleSource};

/// Neutral seed used when the caller gives none (Nebula Gray).
pub const DEFAULT_NEUTRAL_SEED: Color = Color::rgb(0x67, 0x67, 0x6a);

/// Neutral-variant seed used when the caller gives none (Orion Steel).
pub const DEFAULT_NEUTRAL_VARIANT_SEED: Color = Color::rgb(0x72, 0x72, 0x7d);

/// Seed of the error palette. Not configurable.
pub const ERROR_SEED: Color = Color::rgb(0xba, 0x1a, 0x1a);

// ---------------------------------------------------------------------------
// SchemeSeeds
// ---------------------------------------------------------------------------

/// The caller-supplied seeds of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemeSeeds {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub neutral: Color,
    pub neutral_variant: Color,
}

impl SchemeSeeds {
    /// Accent seeds with the default neutrals.
    #[must_use]
    pub const fn new(primary: Color, secondary: Color, tertiary: Color) -> Self {
        Self {
            primary,
            secondary,
            tertiary,
            neutral: DEFAULT_NEUTRAL_SEED,
            neutral_variant: DEFAULT_NEUTRAL_VARIANT_SEED,
        }
    }

    /// Replace both neutral seeds.
    #[must_use]
    pub const fn with_neutrals(self, neutral: Color, neutral_variant: Color) -> Self {
        Self {
            neutral,
            neutral_variant,
            ..self
        }
    }

    /// Parse seeds from hex strings. Omitted neutrals fall back to
    /// [`DEFAULT_NEUTRAL_SEED`] and [`DEFAULT_NEUTRAL_VARIANT_SEED`].
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidColorFormat`](crate::ThemeError::InvalidColorFormat)
    /// for the first seed that is not a `#RRGGBB` color.
    pub fn parse(
        primary: &str,
        secondary: &str,
        tertiary: &str,
        neutral: Option<&str>,
        neutral_variant: Option<&str>,
    ) -> Result<Self> {
        let optional = |s: Option<&str>, default: Color| s.map_or(Ok(default), Color::hex);
        Ok(Self {
            primary: Color::hex(primary)?,
            secondary: Color::hex(secondary)?,
            tertiary: Color::hex(tertiary)?,
            neutral: optional(neutral, DEFAULT_NEUTRAL_SEED)?,
            neutral_variant: optional(neutral_variant, DEFAULT_NEUTRAL_VARIANT_SEED)?,
        })
    }
}

// ---------------------------------------------------------------------------
// SchemePalettes
// ---------------------------------------------------------------------------

/// The six tonal palettes a scheme is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemePalettes {
    pub primary: TonalPalette,
    pub secondary: TonalPalette,
    pub tertiary: TonalPalette,
    pub error: TonalPalette,
    pub neutral: TonalPalette,
    pub neutral_variant: TonalPalette,
}

impl SchemePalettes {
    #[must_use]
    pub fn generate(seeds: &SchemeSeeds) -> Self {
        Self {
            primary: TonalPalette::from_seed(seeds.primary),
            secondary: TonalPalette::from_seed(seeds.secondary),
            tertiary: TonalPalette::from_seed(seeds.tertiary),
            error: TonalPalette::from_seed(ERROR_SEED),
            neutral: TonalPalette::from_seed(seeds.neutral),
            neutral_variant: TonalPalette::from_seed(seeds.neutral_variant),
        }
    }

    #[must_use]
    pub const fn get(&self, kind: PaletteKind) -> &TonalPalette {
        match kind {
            PaletteKind::Primary => &self.primary,
            PaletteKind::Secondary => &self.secondary,
            PaletteKind::Tertiary => &self.tertiary,
            PaletteKind::Error => &self.error,
            PaletteKind::Neutral => &self.neutral,
            PaletteKind::NeutralVariant => &self.neutral_variant,
        }
    }
}

// ---------------------------------------------------------------------------
// RoleColor
// ---------------------------------------------------------------------------

/// The value of one role: an opaque tone, or translucent black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoleColor {
    Opaque(Color),
    Overlay { alpha: f64 },
}

impl RoleColor {
    /// The opaque color, or `None` for overlays.
    #[must_use]
    pub const fn opaque(self) -> Option<Color> {
        match self {
            Self::Opaque(color) => Some(color),
            Self::Overlay { .. } => None,
        }
    }
}

impl fmt::Display for RoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opaque(color) => fmt::Display::fmt(color, f),
            Self::Overlay { alpha } => write!(f, "rgba(0,0,0,{alpha})"),
        }
    }
}

impl Serialize for RoleColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// MaterialYouColorSet
// ---------------------------------------------------------------------------

/// One complete role table for a single mode.
///
/// Backed by an array indexed by [`ColorRole`], so every role is always
/// present.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialYouColorSet {
    mode: Mode,
    colors: [RoleColor; ColorRole::COUNT],
}

impl MaterialYouColorSet {
    /// Fill every role for `mode` from the scheme palettes.
    #[must_use]
    pub fn from_palettes(palettes: &SchemePalettes, mode: Mode) -> Self {
        let colors = ColorRole::ALL.map(|role| match role.source() {
            RoleSource::Overlay { alpha } => RoleColor::Overlay { alpha },
            RoleSource::Tones { palette, light, dark } => {
                let tone = if mode.is_dark() { dark } else { light };
                let color = palettes.get(palette).get(tone);
                trace!(%mode, %role, palette = palette.name(), %tone, %color, "role resolved");
                RoleColor::Opaque(color)
            }
        });
        Self { mode, colors }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, role: ColorRole) -> RoleColor {
        self.colors[role.index()]
    }

    /// All roles with their values, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, RoleColor)> + '_ {
        ColorRole::ALL.into_iter().zip(self.colors.iter().copied())
    }
}

impl Index<ColorRole> for MaterialYouColorSet {
    type Output = RoleColor;

    fn index(&self, role: ColorRole) -> &RoleColor {
        &self.colors[role.index()]
    }
}

impl Serialize for MaterialYouColorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ColorRole::COUNT))?;
        for (role, color) in self.iter() {
            map.serialize_entry(&role, &color)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// ThemeColors
// ---------------------------------------------------------------------------

/// Light and dark role tables derived from the same seeds.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ThemeColors {
    pub light: MaterialYouColorSet,
    pub dark: MaterialYouColorSet,
}

impl ThemeColors {
    /// Generate both role tables from typed seeds.
    #[must_use]
    pub fn from_seeds(seeds: &SchemeSeeds) -> Self {
        debug!(
            primary = %seeds.primary,
            secondary = %seeds.secondary,
            tertiary = %seeds.tertiary,
            neutral = %seeds.neutral,
            neutral_variant = %seeds.neutral_variant,
            "generating color roles"
        );
        let palettes = SchemePalettes::generate(seeds);
        Self {
            light: MaterialYouColorSet::from_palettes(&palettes, Mode::Light),
            dark: MaterialYouColorSet::from_palettes(&palettes, Mode::Dark),
        }
    }

    /// The table for `mode`.
    #[must_use]
    pub const fn get(&self, mode: Mode) -> &MaterialYouColorSet {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// Generate light and dark role tables from hex seeds.
///
/// `neutral` and `neutral_variant` default to `#67676A` and `#72727D`. The
/// error palette always comes from `#BA1A1A`.
///
/// # Errors
///
/// Returns [`ThemeError::InvalidColorFormat`](crate::ThemeError::InvalidColorFormat)
/// if any seed is malformed. All seeds are validated before any palette is
/// generated.
pub fn generate_color_roles(
    primary: &str,
    secondary: &str,
    tertiary: &str,
    neutral: Option<&str>,
    neutral_variant: Option<&str>,
) -> Result<ThemeColors> {
    let seeds = SchemeSeeds::parse(primary, secondary, tertiary, neutral, neutral_variant)?;
    Ok(ThemeColors::from_seeds(&seeds))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
