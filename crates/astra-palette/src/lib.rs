// SPDX-License-Identifier: MIT

//! # astra-palette — tonal palettes and Material-You color roles
//!
//! Turns a handful of brand seed colors into the complete light and dark
//! color-role tables a UI theme consumes.
//!
//! # Architecture
//!
//! ```text
//! seed hex strings (or SchemeSeeds / ThemeConfig)
//!     │
//!     ▼
//! palette.rs:  one TonalPalette (13 tones) per seed, HSL tone curve
//!     │
//!     ▼
//! role.rs:     static ROLE_TABLE — role → (palette, light tone, dark tone)
//!     │
//!     ▼
//! scheme.rs:   ThemeColors { light, dark } of 35 roles each
//!     │
//!     ├──► brand.rs:    main / light / dark / contrast-text quads
//!     ├──► css.rs:      CSS custom properties
//!     └──► contrast.rs: WCAG audit of on-color pairs
//! ```
//!
//! # Tone curve
//!
//! The generator walks HSL saturation and lightness at a fixed hue. This is
//! a simplified stand-in for perceptual (CAM16/HCT) tonal palettes. The
//! darker half blends saturation up toward full while the lighter half
//! fades it out; that asymmetry is part of the product's look and is kept.

pub mod brand;
pub mod builtin;
pub mod config;
pub mod contrast;
pub mod css;
pub mod error;
pub mod palette;
pub mod role;
pub mod scheme;
pub mod tone;

pub use astra_color::Color;
pub use brand::{BrandColors, BrandPalette};
pub use builtin::generate_astra_core_colors;
pub use config::ThemeConfig;
pub use error::{Result, ThemeError};
pub use palette::{TonalPalette, generate_tonal_palette};
pub use role::{ColorRole, Mode, PaletteKind};
pub use scheme::{MaterialYouColorSet, RoleColor, SchemeSeeds, ThemeColors, generate_color_roles};
pub use tone::Tone;
