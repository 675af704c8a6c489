// SPDX-License-Identifier: MIT

use std::fmt::Write as _;

use astra_palette::{ThemeColors, ThemeConfig};
use clap::Args;
use serde_json::{Map, Value};

use super::{ModeChoice, SchemeArgs};

#[derive(Args, Debug)]
pub struct RolesArgs {
    #[command(flatten)]
    pub scheme: SchemeArgs,

    /// Which role tables to print
    #[arg(long, value_enum, default_value_t = ModeChoice::Both)]
    pub mode: ModeChoice,

    /// Emit JSON keyed by mode, then by camelCase role name
    #[arg(long)]
    pub json: bool,
}

pub fn run(config: &ThemeConfig, args: &RolesArgs) -> anyhow::Result<String> {
    let seeds = args.scheme.resolve(config)?;
    let theme = ThemeColors::from_seeds(&seeds);
    let modes = args.mode.modes();

    if args.json {
        let mut map = Map::new();
        for &mode in modes {
            map.insert(mode.to_string(), serde_json::to_value(theme.get(mode))?);
        }
        let mut out = serde_json::to_string_pretty(&Value::Object(map))?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for (i, &mode) in modes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "# {mode}");
        for (role, color) in theme.get(mode).iter() {
            let _ = writeln!(out, "{:<24}{color}", role.name());
        }
    }
    Ok(out)
}
