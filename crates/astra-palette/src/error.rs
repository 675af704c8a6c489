// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use astra_color::ColorError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    InvalidColorFormat(#[from] ColorError),

    #[error("unknown preset: {0:?}")]
    UnknownPreset(String),

    #[error("invalid CSS custom property prefix: {0:?} (expected e.g. \"--md-sys-color\")")]
    InvalidCssPrefix(String),

    #[error("invalid theme config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
