//! # vibe-palette — mood-driven five-color palettes
//!
//! Turns a free-text mood ("calm morning", "angry") into palettes, either
//! procedurally or from curated and language-model sources.
//!
//! # Architecture
//!
//! ```text
//! mood text
//!     │
//!     ▼
//! mood.rs:     fuzzy keyword lookup → MoodDescriptor (HSL seed)
//!     │
//!     ▼
//! jitter.rs:   optional seeded perturbation of the seed
//!     │
//!     ▼
//! harmony.rs:  Analogous / Monochromatic / Triadic → [Color; 5]
//!     │
//!     ▼
//! palette.rs:  Palette { name, colors, roles } + accessibility report
//! ```
//!
//! Alternative producers of the same `Palette` shape live in `builtin.rs`
//! (curated mock sets and the fallback trio) and `response.rs` (the
//! language-model JSON contract). `source.rs` puts all of them behind one
//! trait and falls back to the builtin trio on failure.
//!
//! Everything except [`source::LlmSource`]'s client is pure and
//! deterministic.

// Hue/saturation/lightness names are inherently similar.
#![allow(clippy::similar_names)]

pub mod builtin;
pub mod error;
pub mod harmony;
pub mod jitter;
pub mod mood;
pub mod palette;
pub mod response;
pub mod source;

pub use error::{PaletteError, ResponseError, SourceError};
pub use harmony::{Strategy, synthesize};
pub use mood::{MoodDescriptor, resolve_mood_descriptor};
pub use palette::{Palette, Role};
