// SPDX-License-Identifier: MIT

use std::fmt::Write as _;

use anyhow::bail;
use astra_palette::contrast::{AA_NORMAL_TEXT, ContrastCheck, audit};
use astra_palette::{Mode, ThemeColors, ThemeConfig};
use clap::Args;
use tracing::warn;

use super::{ModeChoice, SchemeArgs};

#[derive(Args, Debug)]
pub struct AuditArgs {
    #[command(flatten)]
    pub scheme: SchemeArgs,

    /// Which role tables to audit
    #[arg(long, value_enum, default_value_t = ModeChoice::Both)]
    pub mode: ModeChoice,

    /// Exit with an error if any pair is below WCAG AA
    #[arg(long)]
    pub strict: bool,
}

/// The printed report and how many pairs fell below AA.
#[derive(Debug)]
pub struct AuditReport {
    pub text: String,
    pub failures: usize,
}

impl AuditReport {
    /// Fail when `strict` is set and any pair is below AA.
    pub fn enforce(&self, strict: bool) -> anyhow::Result<()> {
        if strict && self.failures > 0 {
            bail!("{} contrast pair(s) below WCAG AA", self.failures);
        }
        Ok(())
    }
}

pub fn run(config: &ThemeConfig, args: &AuditArgs) -> anyhow::Result<AuditReport> {
    let seeds = args.scheme.resolve(config)?;
    let theme = ThemeColors::from_seeds(&seeds);

    let checks: Vec<(Mode, ContrastCheck)> = args
        .mode
        .modes()
        .iter()
        .flat_map(|&mode| audit(theme.get(mode)).into_iter().map(move |c| (mode, c)))
        .collect();

    let mut out = String::new();
    let mut failures = 0usize;
    for (mode, check) in &checks {
        let verdict = if check.passes_aa { "pass" } else { "FAIL" };
        if !check.passes_aa {
            failures += 1;
            warn!(%mode, fg = %check.foreground, bg = %check.background, ratio = check.ratio, "below AA");
        }
        let _ = writeln!(
            out,
            "{:<6}{:<22}on {:<18}{:>6.2}:1  {verdict}",
            mode.as_str(),
            check.foreground.name(),
            check.background.name(),
            check.ratio
        );
    }
    let _ = writeln!(
        out,
        "{} of {} pairs meet AA ({AA_NORMAL_TEXT}:1)",
        checks.len() - failures,
        checks.len()
    );

    Ok(AuditReport {
        text: out,
        failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra_palette::contrast::AUDIT_PAIRS;

    fn args(mode: ModeChoice, strict: bool) -> AuditArgs {
        AuditArgs {
            scheme: SchemeArgs::default(),
            mode,
            strict,
        }
    }

    #[test]
    fn default_theme_passes_strict() {
        let report = run(&ThemeConfig::default(), &args(ModeChoice::Both, true)).unwrap();
        assert_eq!(report.failures, 0);
        assert!(report.enforce(true).is_ok());
        let out = report.text;
        assert_eq!(out.lines().count(), 2 * AUDIT_PAIRS.len() + 1);
        assert!(out.ends_with("24 of 24 pairs meet AA (4.5:1)\n"), "{out}");
        assert!(!out.contains("FAIL"));
    }

    #[test]
    fn single_mode() {
        let out = run(&ThemeConfig::default(), &args(ModeChoice::Light, false))
            .unwrap()
            .text;
        assert!(out.starts_with("light onPrimary"), "{out}");
        assert!(!out.contains("\ndark "));
    }

    #[test]
    fn pale_primary_fails_aa() {
        // Tone 40 of #dde6c4 is too light for white text.
        let mut a = args(ModeChoice::Light, true);
        a.scheme.primary = Some("#dde6c4".into());
        let report = run(&ThemeConfig::default(), &a).unwrap();

        assert_eq!(report.failures, 1);
        assert!(report.text.starts_with("light onPrimary"), "{}", report.text);
        assert!(report.text.lines().next().unwrap().ends_with("FAIL"), "{}", report.text);
        assert!(report.text.ends_with("11 of 12 pairs meet AA (4.5:1)\n"), "{}", report.text);

        let err = report.enforce(true).unwrap_err();
        assert_eq!(err.to_string(), "1 contrast pair(s) below WCAG AA");
        assert!(report.enforce(false).is_ok());
    }
}
