// SPDX-License-Identifier: MIT

//! Color roles and the static role → tone table.
//!
//! Every role of a Material-You color set reads one fixed tone from one
//! palette, with a different tone for light and dark mode. The assignments
//! live in [`ROLE_TABLE`] so the light/dark symmetry can be read (and
//! tested) without running any palette math.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::tone::Tone;

use self::ColorRole as R;
use self::PaletteKind as P;
use crate::tone::Tone as T;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Light or dark color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("unknown mode {s:?} (expected \"light\" or \"dark\")")),
        }
    }
}

// ---------------------------------------------------------------------------
// PaletteKind
// ---------------------------------------------------------------------------

/// Which of the six scheme palettes a role reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    Primary,
    Secondary,
    Tertiary,
    Error,
    Neutral,
    NeutralVariant,
}

impl PaletteKind {
    pub const ALL: [Self; 6] = [
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::Error,
        Self::Neutral,
        Self::NeutralVariant,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Error => "error",
            Self::Neutral => "neutral",
            Self::NeutralVariant => "neutralVariant",
        }
    }
}

// ---------------------------------------------------------------------------
// ColorRole
// ---------------------------------------------------------------------------

/// A semantic color slot of a Material-You theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorRole {
    // ── Accents ───────────────────────────────────────────────
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    InversePrimary,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,

    // ── Surfaces ──────────────────────────────────────────────
    Background,
    OnBackground,
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    SurfaceTint,
    SurfaceContainerLowest,
    SurfaceContainerLow,
    SurfaceContainer,
    SurfaceContainerHigh,
    SurfaceContainerHighest,
    Outline,
    OutlineVariant,
    InverseSurface,
    InverseOnSurface,

    // ── Overlays ──────────────────────────────────────────────
    Shadow,
    Scrim,
}

impl ColorRole {
    pub const COUNT: usize = 35;

    /// All roles, in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Primary,
        Self::OnPrimary,
        Self::PrimaryContainer,
        Self::OnPrimaryContainer,
        Self::InversePrimary,
        Self::Secondary,
        Self::OnSecondary,
        Self::SecondaryContainer,
        Self::OnSecondaryContainer,
        Self::Tertiary,
        Self::OnTertiary,
        Self::TertiaryContainer,
        Self::OnTertiaryContainer,
        Self::Error,
        Self::OnError,
        Self::ErrorContainer,
        Self::OnErrorContainer,
        Self::Background,
        Self::OnBackground,
        Self::Surface,
        Self::OnSurface,
        Self::SurfaceVariant,
        Self::OnSurfaceVariant,
        Self::SurfaceTint,
        Self::SurfaceContainerLowest,
        Self::SurfaceContainerLow,
        Self::SurfaceContainer,
        Self::SurfaceContainerHigh,
        Self::SurfaceContainerHighest,
        Self::Outline,
        Self::OutlineVariant,
        Self::InverseSurface,
        Self::InverseOnSurface,
        Self::Shadow,
        Self::Scrim,
    ];

    /// Position in [`ColorRole::ALL`] and [`ROLE_TABLE`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The camelCase key used in JSON output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::OnPrimary => "onPrimary",
            Self::PrimaryContainer => "primaryContainer",
            Self::OnPrimaryContainer => "onPrimaryContainer",
            Self::InversePrimary => "inversePrimary",
            Self::Secondary => "secondary",
            Self::OnSecondary => "onSecondary",
            Self::SecondaryContainer => "secondaryContainer",
            Self::OnSecondaryContainer => "onSecondaryContainer",
            Self::Tertiary => "tertiary",
            Self::OnTertiary => "onTertiary",
            Self::TertiaryContainer => "tertiaryContainer",
            Self::OnTertiaryContainer => "onTertiaryContainer",
            Self::Error => "error",
            Self::OnError => "onError",
            Self::ErrorContainer => "errorContainer",
            Self::OnErrorContainer => "onErrorContainer",
            Self::Background => "background",
            Self::OnBackground => "onBackground",
            Self::Surface => "surface",
            Self::OnSurface => "onSurface",
            Self::SurfaceVariant => "surfaceVariant",
            Self::OnSurfaceVariant => "onSurfaceVariant",
            Self::SurfaceTint => "surfaceTint",
            Self::SurfaceContainerLowest => "surfaceContainerLowest",
            Self::SurfaceContainerLow => "surfaceContainerLow",
            Self::SurfaceContainer => "surfaceContainer",
            Self::SurfaceContainerHigh => "surfaceContainerHigh",
            Self::SurfaceContainerHighest => "surfaceContainerHighest",
            Self::Outline => "outline",
            Self::OutlineVariant => "outlineVariant",
            Self::InverseSurface => "inverseSurface",
            Self::InverseOnSurface => "inverseOnSurface",
            Self::Shadow => "shadow",
            Self::Scrim => "scrim",
        }
    }

    /// The kebab-case form used for CSS custom properties
    /// (`onPrimaryContainer` → `on-primary-container`).
    #[must_use]
    pub fn css_name(self) -> String {
        let name = self.name();
        let mut out = String::with_capacity(name.len() + 4);
        for ch in name.chars() {
            if ch.is_ascii_uppercase() {
                out.push('-');
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// Where this role's color comes from.
    #[inline]
    #[must_use]
    pub const fn source(self) -> RoleSource {
        ROLE_TABLE[self.index()].1
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ColorRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// RoleSource / ROLE_TABLE
// ---------------------------------------------------------------------------

/// How a role is filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoleSource {
    /// A tone of one palette, chosen per mode.
    Tones {
        palette: PaletteKind,
        light: Tone,
        dark: Tone,
    },
    /// Translucent black at a fixed alpha, the same in both modes.
    Overlay { alpha: f64 },
}

impl RoleSource {
    /// The palette and tone this source reads in `mode`, or `None` for
    /// overlays.
    #[must_use]
    pub const fn tone(self, mode: Mode) -> Option<(PaletteKind, Tone)> {
        match self {
            Self::Tones { palette, light, dark } => Some((
                palette,
                match mode {
                    Mode::Light => light,
                    Mode::Dark => dark,
                },
            )),
            Self::Overlay { .. } => None,
        }
    }
}

/// Alpha of the `shadow` overlay.
pub const SHADOW_ALPHA: f64 = 0.2;

/// Alpha of the `scrim` overlay.
pub const SCRIM_ALPHA: f64 = 0.32;

const fn tones(palette: PaletteKind, light: Tone, dark: Tone) -> RoleSource {
    RoleSource::Tones { palette, light, dark }
}

/// Role → (palette, light tone, dark tone), in [`ColorRole::ALL`] order.
///
/// Accent families share one shape: 40/80 for the color itself, 100/20 for
/// content on it, 90/30 for its container, 10/90 for content on the
/// container. Dark mode promotes a palette's light tones to foreground
/// roles and its dark tones to containers.
pub const ROLE_TABLE: [(ColorRole, RoleSource); ColorRole::COUNT] = [
    (R::Primary, tones(P::Primary, T::T40, T::T80)),
    (R::OnPrimary, tones(P::Primary, T::T100, T::T20)),
    (R::PrimaryContainer, tones(P::Primary, T::T90, T::T30)),
    (R::OnPrimaryContainer, tones(P::Primary, T::T10, T::T90)),
    (R::InversePrimary, tones(P::Primary, T::T80, T::T40)),
    (R::Secondary, tones(P::Secondary, T::T40, T::T80)),
    (R::OnSecondary, tones(P::Secondary, T::T100, T::T20)),
    (R::SecondaryContainer, tones(P::Secondary, T::T90, T::T30)),
    (R::OnSecondaryContainer, tones(P::Secondary, T::T10, T::T90)),
    (R::Tertiary, tones(P::Tertiary, T::T40, T::T80)),
    (R::OnTertiary, tones(P::Tertiary, T::T100, T::T20)),
    (R::TertiaryContainer, tones(P::Tertiary, T::T90, T::T30)),
    (R::OnTertiaryContainer, tones(P::Tertiary, T::T10, T::T90)),
    (R::Error, tones(P::Error, T::T40, T::T80)),
    (R::OnError, tones(P::Error, T::T100, T::T20)),
    (R::ErrorContainer, tones(P::Error, T::T90, T::T30)),
    (R::OnErrorContainer, tones(P::Error, T::T10, T::T90)),
    (R::Background, tones(P::Neutral, T::T99, T::T10)),
    (R::OnBackground, tones(P::Neutral, T::T10, T::T90)),
    (R::Surface, tones(P::Neutral, T::T99, T::T10)),
    (R::OnSurface, tones(P::Neutral, T::T10, T::T90)),
    (R::SurfaceVariant, tones(P::NeutralVariant, T::T90, T::T30)),
    (R::OnSurfaceVariant, tones(P::NeutralVariant, T::T30, T::T80)),
    (R::SurfaceTint, tones(P::Primary, T::T40, T::T80)),
    (R::SurfaceContainerLowest, tones(P::Neutral, T::T100, T::T0)),
    (R::SurfaceContainerLow, tones(P::Neutral, T::T95, T::T10)),
    (R::SurfaceContainer, tones(P::Neutral, T::T90, T::T20)),
    (R::SurfaceContainerHigh, tones(P::Neutral, T::T80, T::T30)),
    (R::SurfaceContainerHighest, tones(P::Neutral, T::T70, T::T40)),
    (R::Outline, tones(P::NeutralVariant, T::T50, T::T60)),
    (R::OutlineVariant, tones(P::NeutralVariant, T::T80, T::T30)),
    (R::InverseSurface, tones(P::Neutral, T::T20, T::T90)),
    (R::InverseOnSurface, tones(P::Neutral, T::T95, T::T20)),
    (R::Shadow, RoleSource::Overlay { alpha: SHADOW_ALPHA }),
    (R::Scrim, RoleSource::Overlay { alpha: SCRIM_ALPHA }),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn tone_of(role: ColorRole, mode: Mode) -> (PaletteKind, Tone) {
        role.source().tone(mode).unwrap()
    }

    #[test]
    fn table_follows_role_order() {
        for (i, (role, _)) in ROLE_TABLE.iter().enumerate() {
            assert_eq!(*role, ColorRole::ALL[i], "table row {i} out of order");
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = ColorRole::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(names.len(), ColorRole::COUNT);
    }

    #[test]
    fn palette_names() {
        let names: HashSet<_> = PaletteKind::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), PaletteKind::ALL.len());
        assert_eq!(P::NeutralVariant.name(), "neutralVariant");
        for (kind, role) in [
            (P::Primary, R::Primary),
            (P::Secondary, R::Secondary),
            (P::Tertiary, R::Tertiary),
            (P::Error, R::Error),
        ] {
            assert_eq!(kind.name(), role.name());
            assert_eq!(tone_of(role, Mode::Light).0, kind);
        }
    }

    #[test]
    fn css_names() {
        assert_eq!(ColorRole::Primary.css_name(), "primary");
        assert_eq!(ColorRole::OnPrimaryContainer.css_name(), "on-primary-container");
        assert_eq!(ColorRole::SurfaceContainerHighest.css_name(), "surface-container-highest");
        assert_eq!(ColorRole::InverseOnSurface.css_name(), "inverse-on-surface");
    }

    #[test]
    fn primary_inversion() {
        assert_eq!(tone_of(ColorRole::Primary, Mode::Light), (PaletteKind::Primary, Tone::T40));
        assert_eq!(tone_of(ColorRole::Primary, Mode::Dark), (PaletteKind::Primary, Tone::T80));
        assert_eq!(tone_of(ColorRole::OnPrimary, Mode::Light), (PaletteKind::Primary, Tone::T100));
        assert_eq!(tone_of(ColorRole::OnPrimary, Mode::Dark), (PaletteKind::Primary, Tone::T20));
    }

    #[test]
    fn accent_families_share_shape() {
        let families = [
            (PaletteKind::Primary, [R::Primary, R::OnPrimary, R::PrimaryContainer, R::OnPrimaryContainer]),
            (PaletteKind::Secondary, [R::Secondary, R::OnSecondary, R::SecondaryContainer, R::OnSecondaryContainer]),
            (PaletteKind::Tertiary, [R::Tertiary, R::OnTertiary, R::TertiaryContainer, R::OnTertiaryContainer]),
            (PaletteKind::Error, [R::Error, R::OnError, R::ErrorContainer, R::OnErrorContainer]),
        ];
        let light = [T::T40, T::T100, T::T90, T::T10];
        let dark = [T::T80, T::T20, T::T30, T::T90];

        for (palette, roles) in families {
            for (i, role) in roles.into_iter().enumerate() {
                assert_eq!(tone_of(role, Mode::Light), (palette, light[i]), "{role} light");
                assert_eq!(tone_of(role, Mode::Dark), (palette, dark[i]), "{role} dark");
            }
        }
    }

    #[test]
    fn inverse_primary_swaps_primary_tones() {
        let (_, light) = tone_of(R::InversePrimary, Mode::Light);
        let (_, dark) = tone_of(R::InversePrimary, Mode::Dark);
        assert_eq!(light, tone_of(R::Primary, Mode::Dark).1);
        assert_eq!(dark, tone_of(R::Primary, Mode::Light).1);
    }

    #[test]
    fn surface_tint_tracks_primary() {
        for mode in Mode::ALL {
            assert_eq!(tone_of(R::SurfaceTint, mode), tone_of(R::Primary, mode));
        }
    }

    #[test]
    fn background_matches_surface() {
        for mode in Mode::ALL {
            assert_eq!(tone_of(R::Background, mode), tone_of(R::Surface, mode));
            assert_eq!(tone_of(R::OnBackground, mode), tone_of(R::OnSurface, mode));
        }
    }

    #[test]
    fn surface_containers_step_away_from_surface() {
        let ladder = [
            R::SurfaceContainerLowest,
            R::SurfaceContainerLow,
            R::SurfaceContainer,
            R::SurfaceContainerHigh,
            R::SurfaceContainerHighest,
        ];
        let light: Vec<_> = ladder.iter().map(|r| tone_of(*r, Mode::Light).1).collect();
        let dark: Vec<_> = ladder.iter().map(|r| tone_of(*r, Mode::Dark).1).collect();
        assert!(light.windows(2).all(|w| w[0] > w[1]), "light ladder: {light:?}");
        assert!(dark.windows(2).all(|w| w[0] < w[1]), "dark ladder: {dark:?}");
    }

    #[test]
    fn only_shadow_and_scrim_are_overlays() {
        for (role, source) in ROLE_TABLE {
            let is_overlay = matches!(source, RoleSource::Overlay { .. });
            assert_eq!(is_overlay, matches!(role, R::Shadow | R::Scrim), "{role}");
        }
        assert_eq!(R::Shadow.source(), RoleSource::Overlay { alpha: 0.2 });
        assert_eq!(R::Scrim.source(), RoleSource::Overlay { alpha: 0.32 });
    }

    #[test]
    fn every_palette_is_used() {
        let used: HashSet<_> = ROLE_TABLE
            .iter()
            .filter_map(|(_, s)| s.tone(Mode::Light).map(|(p, _)| p))
            .collect();
        assert_eq!(used.len(), PaletteKind::ALL.len());
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("light".parse::<Mode>(), Ok(Mode::Light));
        assert_eq!("DARK".parse::<Mode>(), Ok(Mode::Dark));
        assert!("dim".parse::<Mode>().is_err());
        assert_eq!(Mode::Dark.to_string(), "dark");
    }
}
