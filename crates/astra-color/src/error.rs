// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Failure to interpret a string as a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input did not match `#RRGGBB` (the `#` is optional).
    #[error("invalid color format: {input:?} (expected #RRGGBB)")]
    InvalidColorFormat { input: String },
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        Self::InvalidColorFormat {
            input: input.to_owned(),
        }
    }
}
