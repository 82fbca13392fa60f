//! The palette data model shared by every palette producer.
//!
//! A [`Palette`] is exactly five colors with an optional parallel list of
//! [`Role`]s. Its JSON form matches what the web app stores and what the
//! language model is asked to return:
//!
//! ```json
//! {"name":"Corporate Calm","colors":["#f5f5f5","#085f73","#0e9396","#94e0d0","#081219"],
//!  "roles":["background","primary","secondary","accent","text"]}
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use vibe_color::audit::{self, PaletteReport};
use vibe_color::{Color, ColorPairAnalysis};

use crate::error::PaletteError;
use crate::harmony::{Strategy, synthesize};
use crate::mood::MoodDescriptor;

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 5;

/// What a palette color is meant to be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Background,
    Primary,
    Secondary,
    Accent,
    Text,
}

impl Role {
    /// The conventional role order for a five-color palette.
    pub const DEFAULT_ORDER: [Self; PALETTE_SIZE] =
        [Self::Background, Self::Primary, Self::Secondary, Self::Accent, Self::Text];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Text => "text",
        }
    }

    /// Parse a role name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::DEFAULT_ORDER.into_iter().find(|r| r.name() == lower)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named five-color palette.
///
/// Fields are private so the invariants hold for every value: exactly
/// [`PALETTE_SIZE`] colors, and as many roles as colors when roles are
/// present. Deserialization goes through [`Palette::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPalette")]
pub struct Palette {
    name: String,
    colors: Vec<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    roles: Option<Vec<Role>>,
}

#[derive(Deserialize)]
struct RawPalette {
    name: String,
    colors: Vec<Color>,
    #[serde(default)]
    roles: Option<Vec<Role>>,
}

impl TryFrom<RawPalette> for Palette {
    type Error = PaletteError;

    fn try_from(raw: RawPalette) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.colors, raw.roles)
    }
}

impl Palette {
    /// Build a palette, checking the color count and role parity.
    ///
    /// # Errors
    ///
    /// [`PaletteError::ColorCount`] unless there are exactly five colors;
    /// [`PaletteError::RoleCount`] if roles are given but their count differs.
    pub fn new(
        name: impl Into<String>,
        colors: Vec<Color>,
        roles: Option<Vec<Role>>,
    ) -> Result<Self, PaletteError> {
        let name = name.into();
        if colors.len() != PALETTE_SIZE {
            return Err(PaletteError::ColorCount { name, count: colors.len() });
        }
        if let Some(roles) = &roles {
            if roles.len() != colors.len() {
                return Err(PaletteError::RoleCount {
                    name,
                    colors: colors.len(),
                    roles: roles.len(),
                });
            }
        }
        Ok(Self { name, colors, roles })
    }

    /// A palette with the default role order.
    #[must_use]
    pub fn with_default_roles(name: impl Into<String>, colors: [Color; PALETTE_SIZE]) -> Self {
        Self {
            name: name.into(),
            colors: colors.to_vec(),
            roles: Some(Role::DEFAULT_ORDER.to_vec()),
        }
    }

    /// Synthesize a palette from a seed and name it.
    #[must_use]
    pub fn synthesized(name: impl Into<String>, descriptor: MoodDescriptor, strategy: Strategy) -> Self {
        Self::with_default_roles(name, synthesize(descriptor, strategy))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn roles(&self) -> Option<&[Role]> {
        self.roles.as_deref()
    }

    /// The color assigned to `role`, if this palette has roles.
    #[must_use]
    pub fn color_for(&self, role: Role) -> Option<Color> {
        let idx = self.roles.as_ref()?.iter().position(|&r| r == role)?;
        self.colors.get(idx).copied()
    }

    /// Best-text-color annotations and AA/AAA counts for this palette.
    #[must_use]
    pub fn report(&self, is_large_text: bool) -> PaletteReport {
        audit::text_pairings(&self.colors, is_large_text)
    }

    /// Contrast between each color and its neighbor (wrapping), one entry
    /// per color.
    #[must_use]
    pub fn boundary_contrast(&self, is_large_text: bool) -> Vec<ColorPairAnalysis> {
        audit::adjacent_pairs(&self.colors, is_large_text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
