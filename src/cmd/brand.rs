// SPDX-License-Identifier: MIT

use std::fmt::Write as _;

use astra_palette::{BrandColors, BrandPalette, Mode, ThemeConfig};
use clap::Args;

use super::SchemeArgs;

#[derive(Args, Debug)]
pub struct BrandArgs {
    #[command(flatten)]
    pub scheme: SchemeArgs,

    /// light or dark
    #[arg(long, default_value = "light")]
    pub mode: Mode,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(config: &ThemeConfig, args: &BrandArgs) -> anyhow::Result<String> {
    let seeds = args.scheme.resolve(config)?;
    let brand = BrandColors::from_seeds(&seeds, args.mode);

    if args.json {
        let mut out = serde_json::to_string_pretty(&brand)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    let _ = writeln!(out, "# {}", brand.mode);
    let _ = writeln!(out, "{:<10}{:<9}{:<9}{:<9}contrastText", "", "main", "light", "dark");
    let rows: [(&str, &BrandPalette); 4] = [
        ("primary", &brand.primary),
        ("secondary", &brand.secondary),
        ("tertiary", &brand.tertiary),
        ("error", &brand.error),
    ];
    for (name, p) in rows {
        let _ = writeln!(
            out,
            "{name:<10}{:<9}{:<9}{:<9}{}",
            p.main.to_hex(),
            p.light.to_hex(),
            p.dark.to_hex(),
            p.contrast_text.to_hex()
        );
    }
    Ok(out)
}
