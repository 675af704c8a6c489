// SPDX-License-Identifier: MIT

//! Subcommand implementations.
//!
//! Each `run` returns the text to print so the output can be checked
//! without capturing stdout. `audit::run` wraps its text in an
//! [`audit::AuditReport`] that also carries the failure count.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use astra_palette::builtin::{builtin_names, builtin_seeds};
use astra_palette::config::SeedOverrides;
use astra_palette::{Mode, SchemeSeeds, ThemeConfig, ThemeError};
use clap::{Args, ValueEnum};
use tracing::info;

pub mod audit;
pub mod brand;
pub mod css;
pub mod palette;
pub mod roles;

/// Read `--config` if given, otherwise start from an empty configuration.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ThemeConfig> {
    let Some(path) = path else {
        return Ok(ThemeConfig::default());
    };
    let config = ThemeConfig::load(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    info!(path = %path.display(), preset = config.preset_name(), "config loaded");
    Ok(config)
}

/// Seed selection shared by every scheme-level subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct SchemeArgs {
    /// Built-in preset to start from (see `presets`)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Primary seed color (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub primary: Option<String>,

    /// Secondary seed color (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub secondary: Option<String>,

    /// Tertiary seed color (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub tertiary: Option<String>,

    /// Neutral seed color (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub neutral: Option<String>,

    /// Neutral-variant seed color (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub neutral_variant: Option<String>,
}

impl SchemeArgs {
    fn overrides(&self) -> SeedOverrides {
        SeedOverrides {
            primary: self.primary.clone(),
            secondary: self.secondary.clone(),
            tertiary: self.tertiary.clone(),
            neutral: self.neutral.clone(),
            neutral_variant: self.neutral_variant.clone(),
        }
    }

    /// Resolve seeds: preset, then the config's `[seeds]`, then flags.
    ///
    /// `--preset` replaces the config's `preset`; the config's seed
    /// overrides still apply on top of it.
    pub fn resolve(&self, config: &ThemeConfig) -> anyhow::Result<SchemeSeeds> {
        let preset = self.preset.as_deref().unwrap_or_else(|| config.preset_name());
        let base =
            builtin_seeds(preset).ok_or_else(|| ThemeError::UnknownPreset(preset.to_owned()))?;
        let seeds = config.seeds.merged_with(&self.overrides()).apply(base)?;
        info!(
            preset,
            primary = %seeds.primary,
            secondary = %seeds.secondary,
            tertiary = %seeds.tertiary,
            "seeds resolved"
        );
        Ok(seeds)
    }
}

/// `--mode` for subcommands that can print both tables.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModeChoice {
    Light,
    Dark,
    #[default]
    Both,
}

impl ModeChoice {
    pub const fn modes(self) -> &'static [Mode] {
        match self {
            Self::Light => &[Mode::Light],
            Self::Dark => &[Mode::Dark],
            Self::Both => &Mode::ALL,
        }
    }
}

/// Preset names with the seeds each one supplies.
pub fn presets() -> String {
    let mut out = String::new();
    for &name in builtin_names() {
        if let Some(seeds) = builtin_seeds(name) {
            let _ = writeln!(
                out,
                "{name:<10}  primary {}  secondary {}  tertiary {}",
                seeds.primary, seeds.secondary, seeds.tertiary
            );
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use astra_palette::Color;
    use astra_palette::builtin::{ASTRA_CORE, COSMIC_MAGENTA, SOLAR_AMBER};
    use pretty_assertions::assert_eq;

    fn config(text: &str) -> ThemeConfig {
        ThemeConfig::from_toml_str(text).unwrap()
    }

    #[test]
    fn no_config_no_flags_is_astracore() {
        let seeds = SchemeArgs::default().resolve(&ThemeConfig::default()).unwrap();
        assert_eq!(seeds, ASTRA_CORE);
    }

    #[test]
    fn flags_override_config_which_overrides_preset() {
        let config = config(
            "preset = \"cosmic\"\n[seeds]\nprimary = \"#111111\"\ntertiary = \"#222222\"\n",
        );
        let args = SchemeArgs {
            primary: Some("#333333".into()),
            ..SchemeArgs::default()
        };
        let seeds = args.resolve(&config).unwrap();
        assert_eq!(seeds.primary, Color::rgb(0x33, 0x33, 0x33));
        assert_eq!(seeds.tertiary, Color::rgb(0x22, 0x22, 0x22));
        // untouched by either layer, so cosmic's
        assert_eq!(seeds.secondary, ASTRA_CORE.primary);
    }

    #[test]
    fn preset_flag_replaces_config_preset() {
        let config = config("preset = \"cosmic\"\n");
        let args = SchemeArgs {
            preset: Some("solar".into()),
            ..SchemeArgs::default()
        };
        let seeds = args.resolve(&config).unwrap();
        assert_eq!(seeds.primary, SOLAR_AMBER);
        assert_ne!(seeds.primary, COSMIC_MAGENTA);
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let args = SchemeArgs {
            preset: Some("nebula".into()),
            ..SchemeArgs::default()
        };
        let err = args.resolve(&ThemeConfig::default()).unwrap_err();
        assert!(err.to_string().contains("nebula"), "{err}");
    }

    #[test]
    fn malformed_flag_is_an_error() {
        let args = SchemeArgs {
            neutral: Some("#12".into()),
            ..SchemeArgs::default()
        };
        assert!(args.resolve(&ThemeConfig::default()).is_err());
    }

    #[test]
    fn missing_config_file_names_path() {
        let err = load_config(Some(Path::new("/no/such/dir/theme.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("theme.toml"), "{err:#}");
    }

    #[test]
    fn mode_choice_expands() {
        assert_eq!(ModeChoice::Light.modes(), &[Mode::Light]);
        assert_eq!(ModeChoice::Both.modes(), &[Mode::Light, Mode::Dark]);
    }

    #[test]
    fn presets_lists_every_name() {
        let out = presets();
        assert_eq!(out.lines().count(), builtin_names().len());
        assert!(out.starts_with("default     primary #00529d"), "{out}");
        assert!(out.contains("solar       primary #b48b00"), "{out}");
    }
}
