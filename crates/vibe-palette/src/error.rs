//! Error types for palette construction, response parsing, and sources.
//!
//! Mood resolution and synthesis cannot fail; everything here comes from
//! data supplied by someone else (tables, JSON, a completion client).

use thiserror::Error;
use vibe_color::ColorError;

/// A palette that violates the five-color / role-parity invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette {name:?} has {count} colors, expected 5")]
    ColorCount { name: String, count: usize },

    #[error("palette {name:?} has {roles} roles for {colors} colors")]
    RoleCount { name: String, colors: usize, roles: usize },
}

/// Failure to turn a language-model reply into palettes.
#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("response is not valid palette JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response contains no palettes")]
    Empty,

    #[error("palette {index} ({name:?}): {source}")]
    Color {
        index: usize,
        name: String,
        #[source]
        source: ColorError,
    },

    #[error("palette {index} ({name:?}): unknown role {role:?}")]
    Role { index: usize, name: String, role: String },

    #[error(transparent)]
    Palette(#[from] PaletteError),
}

/// Failure of a [`PaletteSource`](crate::source::PaletteSource).
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("no curated palettes for {0:?}")]
    NoMockPalettes(String),

    #[error("completion request failed: {0}")]
    Completion(String),

    #[error(transparent)]
    Response(#[from] ResponseError),
}
