//! Color-harmony strategies — five colors from one HSL seed.
//!
//! Each strategy is a fixed list of five slots. A slot shifts the seed hue
//! and scales its saturation and lightness (or pins lightness for the
//! near-white neutral). Scaled values are clamped to [0, 100] before
//! conversion, so a light seed in [`Strategy::Monochromatic`] saturates at
//! white instead of producing an invalid color.
//!
//! | slot | Analogous          | Monochromatic | Triadic            |
//! |------|--------------------|---------------|--------------------|
//! | 0    | h−30, s×0.9, l×1.0 | s×0.8, l×1.3  | seed               |
//! | 1    | seed               | s×0.9, l×1.15 | s×0.7, l×1.1       |
//! | 2    | h+30, s×0.8, l×0.9 | seed          | h+120, s×0.9, l×0.9|
//! | 3    | h+180, s×0.7, l×0.8| s×1.1, l×0.85 | h+240, s×0.8, l×1.0|
//! | 4    | s×0.15, l=90       | s×1.2, l×0.7  | s×0.2, l=90        |

use std::fmt;

use serde::{Deserialize, Serialize};
use vibe_color::{Color, Hsl};

use crate::mood::MoodDescriptor;

/// Which harmony to derive from a seed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Neighbors at ±30°, a complement, and a near-white neutral.
    Analogous,
    /// Five lightness/saturation steps of the seed hue.
    Monochromatic,
    /// Seed, a softened seed, the two 120° partners, and a neutral.
    Triadic,
}

impl Strategy {
    /// Lowercase name of this strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Monochromatic => "monochromatic",
            Self::Triadic => "triadic",
        }
    }

    /// Parse a strategy from its name string (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    /// All strategies, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Analogous, Self::Monochromatic, Self::Triadic]
    }

    /// Title-case label for palette names ("Analogous").
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Analogous => "Analogous",
            Self::Monochromatic => "Monochromatic",
            Self::Triadic => "Triadic",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lightness of the near-white neutral slot.
const NEUTRAL_LIGHTNESS: f64 = 90.0;

/// Seed hue shifted by `dh` degrees, saturation and lightness scaled.
fn shade(seed: Hsl, dh: f64, ds: f64, dl: f64) -> Color {
    Color::from_hsl(Hsl::new(seed.h + dh, seed.s * ds, seed.l * dl))
}

/// Seed hue at the fixed neutral lightness with scaled saturation.
fn neutral(seed: Hsl, ds: f64) -> Color {
    Color::from_hsl(Hsl::new(seed.h, seed.s * ds, NEUTRAL_LIGHTNESS))
}

/// Derive five colors from `descriptor` using `strategy`.
///
/// Pure and deterministic; slot order is part of the contract.
#[must_use]
pub fn synthesize(descriptor: MoodDescriptor, strategy: Strategy) -> [Color; 5] {
    let seed = descriptor.hsl();
    match strategy {
        Strategy::Analogous => [
            shade(seed, -30.0, 0.9, 1.0),
            shade(seed, 0.0, 1.0, 1.0),
            shade(seed, 30.0, 0.8, 0.9),
            shade(seed, 180.0, 0.7, 0.8),
            neutral(seed, 0.15),
        ],
        Strategy::Monochromatic => [
            shade(seed, 0.0, 0.8, 1.3),
            shade(seed, 0.0, 0.9, 1.15),
            shade(seed, 0.0, 1.0, 1.0),
            shade(seed, 0.0, 1.1, 0.85),
            shade(seed, 0.0, 1.2, 0.7),
        ],
        Strategy::Triadic => [
            shade(seed, 0.0, 1.0, 1.0),
            shade(seed, 0.0, 0.7, 1.1),
            shade(seed, 120.0, 0.9, 0.9),
            shade(seed, 240.0, 0.8, 1.0),
            neutral(seed, 0.2),
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
