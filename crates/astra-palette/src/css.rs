// SPDX-License-Identifier: MIT

//! CSS custom-property export.
//!
//! The web front end reads theme tokens from custom properties. Instead of
//! the theme core pulling values out of the document, role tables are
//! pushed out as a stylesheet:
//!
//! ```css
//! :root {
//!   --md-sys-color-primary: #00213f;
//!   ...
//! }
//!
//! [data-theme="dark"] {
//!   --md-sys-color-primary: #9cbad5;
//!   ...
//! }
//! ```

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ThemeError};
use crate::scheme::{MaterialYouColorSet, ThemeColors};

/// Prefix used when none is configured.
pub const DEFAULT_CSS_PREFIX: &str = "--md-sys-color";

/// Selector for the light table.
pub const LIGHT_SELECTOR: &str = ":root";

/// Selector for the dark table.
pub const DARK_SELECTOR: &str = "[data-theme=\"dark\"]";

/// `--` followed by dash-separated word segments.
static PREFIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^--[A-Za-z0-9_]+(?:-[A-Za-z0-9_]+)*$").expect("CSS prefix pattern compiles")
});

/// Check that `prefix` can start a custom property name.
///
/// # Errors
///
/// Returns [`ThemeError::InvalidCssPrefix`] unless the prefix is `--`
/// followed by dash-separated segments of letters, digits, and underscores.
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if PREFIX_PATTERN.is_match(prefix) {
        Ok(())
    } else {
        Err(ThemeError::InvalidCssPrefix(prefix.to_owned()))
    }
}

impl MaterialYouColorSet {
    /// One `  {prefix}-{role}: {value};` line per role, in table order.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidCssPrefix`] for a malformed prefix.
    pub fn to_css_declarations(&self, prefix: &str) -> Result<String> {
        validate_prefix(prefix)?;
        let mut out = String::new();
        for (role, color) in self.iter() {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "  {prefix}-{}: {color};", role.css_name());
        }
        Ok(out)
    }
}

impl ThemeColors {
    /// A stylesheet with the light table on `:root` and the dark table on
    /// `[data-theme="dark"]`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidCssPrefix`] for a malformed prefix.
    pub fn to_css(&self, prefix: &str) -> Result<String> {
        let light = self.light.to_css_declarations(prefix)?;
        let dark = self.dark.to_css_declarations(prefix)?;
        Ok(format!(
            "{LIGHT_SELECTOR} {{\n{light}}}\n\n{DARK_SELECTOR} {{\n{dark}}}\n"
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::generate_astra_core_colors;
    use crate::role::ColorRole;

    #[test]
    fn prefixes() {
        for ok in ["--md-sys-color", "--astra", "--a_b-c1"] {
            assert!(validate_prefix(ok).is_ok(), "{ok} should be accepted");
        }
        for bad in ["md-sys-color", "--", "--md-", "--md--color", "--md sys", "", "-md"] {
            assert!(
                matches!(validate_prefix(bad), Err(ThemeError::InvalidCssPrefix(ref p)) if p == bad),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn declarations_cover_every_role() {
        let theme = generate_astra_core_colors(None).unwrap();
        let css = theme.light.to_css_declarations(DEFAULT_CSS_PREFIX).unwrap();
        assert_eq!(css.lines().count(), ColorRole::COUNT);
        assert!(css.starts_with("  --md-sys-color-primary: #00213f;\n"));
        assert!(css.contains("  --md-sys-color-on-primary-container: #000810;\n"), "{css}");
        assert!(css.ends_with("  --md-sys-color-scrim: rgba(0,0,0,0.32);\n"));
    }

    #[test]
    fn stylesheet_has_both_blocks() {
        let theme = generate_astra_core_colors(None).unwrap();
        let css = theme.to_css("--astra").unwrap();
        assert!(css.starts_with(":root {\n  --astra-primary: #00213f;\n"));
        assert!(css.contains("}\n\n[data-theme=\"dark\"] {\n  --astra-primary: #9cbad5;\n"));
        assert!(css.ends_with("  --astra-scrim: rgba(0,0,0,0.32);\n}\n"));
        assert_eq!(css.matches("--astra-surface-tint:").count(), 2);
    }

    #[test]
    fn bad_prefix_is_rejected_before_output() {
        let theme = generate_astra_core_colors(None).unwrap();
        assert!(theme.to_css("color").is_err());
    }
}
