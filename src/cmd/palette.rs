// SPDX-License-Identifier: MIT

use std::fmt::Write as _;

use anyhow::Context;
use astra_palette::generate_tonal_palette;
use clap::Args;

#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Seed color as #RRGGBB (the leading # is optional)
    pub seed: String,

    /// Emit a JSON object keyed by tone instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &PaletteArgs) -> anyhow::Result<String> {
    let palette = generate_tonal_palette(&args.seed)
        .with_context(|| format!("generating palette for {:?}", args.seed))?;

    if args.json {
        let mut out = serde_json::to_string_pretty(&palette)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for (tone, color) in palette.iter() {
        let _ = writeln!(out, "{:>3}  {color}", tone.value());
    }
    Ok(out)
}
