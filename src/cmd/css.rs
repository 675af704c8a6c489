// SPDX-License-Identifier: MIT

use astra_palette::{ThemeColors, ThemeConfig};
use clap::Args;

use super::SchemeArgs;

#[derive(Args, Debug)]
pub struct CssArgs {
    #[command(flatten)]
    pub scheme: SchemeArgs,

    /// Custom-property prefix (overrides `css.prefix` in the config)
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,
}

pub fn run(config: &ThemeConfig, args: &CssArgs) -> anyhow::Result<String> {
    let seeds = args.scheme.resolve(config)?;
    let prefix = args.prefix.as_deref().unwrap_or(&config.css.prefix);
    Ok(ThemeColors::from_seeds(&seeds).to_css(prefix)?)
}
