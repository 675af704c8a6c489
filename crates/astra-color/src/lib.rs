// SPDX-License-Identifier: MIT
//
// astra-color — color values for the astra-theme engine.
//
// Everything the theme layer hands to a UI is an opaque 8-bit sRGB color
// written as `#rrggbb`. This crate owns that value type, the strict hex
// codec that guards every seed entering the system, the HSL bridge the
// tonal palette generator interpolates in, and the WCAG luminance math used
// to audit role pairs.
//
//   "#00529D" ──parse──► Color { r, g, b } ──to_hsl──► Hsl { h, s, l }
//                           ▲                              │
//                           └────────from_hsl──────────────┘

pub mod color;
pub mod error;
pub mod hsl;

pub use color::{Color, contrast_ratio};
pub use error::ColorError;
pub use hsl::Hsl;
