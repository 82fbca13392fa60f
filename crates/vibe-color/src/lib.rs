// SPDX-License-Identifier: MIT
//
// vibe-color — color math for mood palettes.
//
// Everything in this crate is a pure function of its inputs: hex strings
// are validated at the boundary and turned into 8-bit `Color` values, and
// from there on luminance, contrast and WCAG classification are closed-form
// arithmetic that cannot fail. The only error this crate produces is
// `ColorError::InvalidColorFormat`.
//
// Conversion pipeline:
//
//   "#rrggbb" / "#rgb" → Color (u8 × 3) ↔ Hsl (deg, %, %)
//                           │
//                           ▼
//              sRGB → linear → relative luminance → contrast ratio → WcagLevel

// Single-character variable names (r, g, b, h, s, l) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]

pub mod ansi;
pub mod audit;
pub mod color;
pub mod contrast;
pub mod error;

pub use audit::PaletteReport;
pub use color::{Color, Hsl};
pub use contrast::{ColorPairAnalysis, WcagLevel};
pub use error::ColorError;
