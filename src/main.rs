// SPDX-License-Identifier: MIT
//
// astra-theme — Material-You palettes and color roles for the AstraCore
// dashboard.
//
// This is the command-line front end over the library crates:
//
//   astra-color   → sRGB values, hex codec, HSL bridge, WCAG luminance
//   astra-palette → tonal palettes, role tables, presets, CSS, audit, config
//
// Every subcommand resolves its seeds the same way and prints one artifact
// to stdout:
//
//   builtin preset ─► [seeds] in --config ─► --primary/--secondary/... flags
//                                                  │
//                                                  ▼
//                                 ThemeColors / BrandColors / TonalPalette
//                                                  │
//                                  text │ JSON │ CSS ──► stdout
//
// Diagnostics go through tracing to stderr, so stdout can be piped.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "astra-theme", version)]
#[command(about = "Generate Material-You tonal palettes and color roles", long_about = None)]
pub struct Cli {
    /// TOML file with a preset, seed overrides, and CSS options
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the 13 tones generated from one seed color
    Palette(cmd::palette::PaletteArgs),

    /// Print the light and/or dark color-role tables
    Roles(cmd::roles::RolesArgs),

    /// Print both role tables as CSS custom properties
    Css(cmd::css::CssArgs),

    /// Print main/light/dark/contrast-text quads per accent
    Brand(cmd::brand::BrandArgs),

    /// Check WCAG AA contrast of every on-color pair
    Audit(cmd::audit::AuditArgs),

    /// List the built-in seed presets
    Presets,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let config = cmd::load_config(cli.config.as_deref())?;

    let out = match cli.cmd {
        Commands::Palette(args) => cmd::palette::run(&args)?,
        Commands::Roles(args) => cmd::roles::run(&config, &args)?,
        Commands::Css(args) => cmd::css::run(&config, &args)?,
        Commands::Brand(args) => cmd::brand::run(&config, &args)?,
        Commands::Audit(args) => {
            let report = cmd::audit::run(&config, &args)?;
            print!("{}", report.text);
            return report.enforce(args.strict);
        }
        Commands::Presets => cmd::presets(),
    };
    print!("{out}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["astra-theme", "css", "-vv", "--config", "theme.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("theme.toml")));
        assert!(matches!(cli.cmd, Commands::Css(_)));
    }

    #[test]
    fn palette_requires_seed() {
        assert!(Cli::try_parse_from(["astra-theme", "palette"]).is_err());
        let cli = Cli::try_parse_from(["astra-theme", "palette", "#00529D", "--json"]).unwrap();
        match cli.cmd {
            Commands::Palette(args) => {
                assert_eq!(args.seed, "#00529D");
                assert!(args.json);
            }
            other => panic!("parsed as {other:?}"),
        }
    }

    #[test]
    fn unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["astra-theme", "hct"]).is_err());
    }
}
