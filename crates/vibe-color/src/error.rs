// SPDX-License-Identifier: MIT
//
// Error type for color parsing. Luminance and contrast math is total over
// valid colors, so a malformed hex string is the only failure there is.

use thiserror::Error;

/// Errors produced while turning untrusted text into a [`Color`](crate::Color).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not `#RGB` or `#RRGGBB` (leading `#` optional).
    #[error("invalid color format: {0:?} (expected #RGB or #RRGGBB)")]
    InvalidColorFormat(String),
}

/// Result alias for color parsing.
pub type Result<T> = std::result::Result<T, ColorError>;
