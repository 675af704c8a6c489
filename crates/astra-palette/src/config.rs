// SPDX-License-Identifier: MIT

//! Theme configuration — seeds and output options given explicitly.
//!
//! ```toml
//! preset = "astracore"
//!
//! [seeds]
//! primary = "#00529D"
//! neutral_variant = "#72727D"
//!
//! [css]
//! prefix = "--md-sys-color"
//! ```
//!
//! Resolution order: the preset (default `astracore`) supplies every seed,
//! then each seed present under `[seeds]` replaces the preset's.

use std::fs;
use std::path::Path;

use astra_color::Color;
use serde::Deserialize;
use tracing::debug;

use crate::builtin::builtin_seeds;
use crate::css::{DEFAULT_CSS_PREFIX, validate_prefix};
use crate::error::{Result, ThemeError};
use crate::scheme::SchemeSeeds;

const DEFAULT_PRESET: &str = "astracore";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Base preset name. `None` means `astracore`.
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub seeds: SeedOverrides,
    #[serde(default)]
    pub css: CssConfig,
}

/// Optional per-seed overrides, kept as the raw strings from the file so
/// errors can quote what the user wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub tertiary: Option<String>,
    pub neutral: Option<String>,
    pub neutral_variant: Option<String>,
}

impl SeedOverrides {
    /// Replace each seed of `base` that has an override.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidColorFormat`] for a malformed override.
    pub fn apply(&self, base: SchemeSeeds) -> Result<SchemeSeeds> {
        let pick = |value: Option<&String>, fallback: Color| -> Result<Color> {
            Ok(value.map(|s| Color::hex(s)).transpose()?.unwrap_or(fallback))
        };
        Ok(SchemeSeeds {
            primary: pick(self.primary.as_ref(), base.primary)?,
            secondary: pick(self.secondary.as_ref(), base.secondary)?,
            tertiary: pick(self.tertiary.as_ref(), base.tertiary)?,
            neutral: pick(self.neutral.as_ref(), base.neutral)?,
            neutral_variant: pick(self.neutral_variant.as_ref(), base.neutral_variant)?,
        })
    }

    /// Overlay `other` on top of `self`: fields set in `other` win.
    #[must_use]
    pub fn merged_with(&self, other: &Self) -> Self {
        let choose = |a: &Option<String>, b: &Option<String>| b.clone().or_else(|| a.clone());
        Self {
            primary: choose(&self.primary, &other.primary),
            secondary: choose(&self.secondary, &other.secondary),
            tertiary: choose(&self.tertiary, &other.tertiary),
            neutral: choose(&self.neutral, &other.neutral),
            neutral_variant: choose(&self.neutral_variant, &other.neutral_variant),
        }
    }
}

/// CSS export options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CssConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

fn default_prefix() -> String {
    DEFAULT_CSS_PREFIX.to_owned()
}

impl ThemeConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] for malformed TOML or unknown keys,
    /// and [`ThemeError::InvalidCssPrefix`] for a bad `css.prefix`.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        validate_prefix(&config.css.prefix)?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Io`] if the file cannot be read, otherwise the
    /// errors of [`ThemeConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading theme config");
        let text = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The preset name in effect.
    #[must_use]
    pub fn preset_name(&self) -> &str {
        self.preset.as_deref().unwrap_or(DEFAULT_PRESET)
    }

    /// Resolve the preset and overrides into validated seeds.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownPreset`] for an unrecognized preset and
    /// [`ThemeError::InvalidColorFormat`] for a malformed seed.
    pub fn seeds(&self) -> Result<SchemeSeeds> {
        let name = self.preset_name();
        let base = builtin_seeds(name).ok_or_else(|| ThemeError::UnknownPreset(name.to_owned()))?;
        self.seeds.apply(base)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
