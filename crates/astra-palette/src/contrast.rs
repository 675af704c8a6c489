// SPDX-License-Identifier: MIT

//! WCAG contrast audit of on-color role pairs.
//!
//! Every `onX` role is meant to be read on top of `X`. The audit measures
//! each such pair with the WCAG 2.1 contrast ratio and flags pairs below
//! the AA threshold for normal text (4.5:1).
//!
//! The audit only reports. Role tones are fixed by the role table and are
//! never nudged to pass.

use astra_color::{Color, contrast_ratio};
use serde::Serialize;

use crate::role::ColorRole;
use crate::scheme::MaterialYouColorSet;

/// WCAG AA minimum for normal-size text.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// (foreground, background) pairs checked by [`audit`].
pub const AUDIT_PAIRS: [(ColorRole, ColorRole); 12] = [
    (ColorRole::OnPrimary, ColorRole::Primary),
    (ColorRole::OnPrimaryContainer, ColorRole::PrimaryContainer),
    (ColorRole::OnSecondary, ColorRole::Secondary),
    (ColorRole::OnSecondaryContainer, ColorRole::SecondaryContainer),
    (ColorRole::OnTertiary, ColorRole::Tertiary),
    (ColorRole::OnTertiaryContainer, ColorRole::TertiaryContainer),
    (ColorRole::OnError, ColorRole::Error),
    (ColorRole::OnErrorContainer, ColorRole::ErrorContainer),
    (ColorRole::OnBackground, ColorRole::Background),
    (ColorRole::OnSurface, ColorRole::Surface),
    (ColorRole::OnSurfaceVariant, ColorRole::SurfaceVariant),
    (ColorRole::InverseOnSurface, ColorRole::InverseSurface),
];

/// The measured contrast of one role pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastCheck {
    pub foreground: ColorRole,
    pub background: ColorRole,
    pub ratio: f64,
    pub passes_aa: bool,
}

impl ContrastCheck {
    #[must_use]
    pub fn measure(foreground: (ColorRole, Color), background: (ColorRole, Color)) -> Self {
        let ratio = contrast_ratio(foreground.1, background.1);
        Self {
            foreground: foreground.0,
            background: background.0,
            ratio,
            passes_aa: ratio >= AA_NORMAL_TEXT,
        }
    }
}

/// Measure every pair in [`AUDIT_PAIRS`]. Pairs involving a translucent
/// role are skipped.
#[must_use]
pub fn audit(set: &MaterialYouColorSet) -> Vec<ContrastCheck> {
    AUDIT_PAIRS
        .iter()
        .filter_map(|&(fg, bg)| {
            let fg_color = set.get(fg).opaque()?;
            let bg_color = set.get(bg).opaque()?;
            Some(ContrastCheck::measure((fg, fg_color), (bg, bg_color)))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
