//! The language-model contract: what we ask for and how the reply is read.
//!
//! The model is asked for minified JSON of the form
//!
//! ```json
//! {"palettes":[{"name":"…","colors":["#…",…],"roles":["background",…]}],"feeling":"…"}
//! ```
//!
//! Older replies use `"vibe"` instead of `"feeling"`; both are accepted.
//! Parsing is strict past the JSON layer: every color must be `#RGB` or
//! `#RRGGBB`, every role must be known, and every palette must hold five
//! colors. The first offending palette is reported by index and name.

use serde::Deserialize;
use vibe_color::Color;

use crate::error::ResponseError;
use crate::palette::{Palette, Role};

/// How many palettes the prompt asks for.
pub const REQUESTED_PALETTES: usize = 8;

/// System message sent ahead of [`palette_prompt`].
pub const SYSTEM_PROMPT: &str = "You are a color palette generator that creates harmonious \
color schemes based on feelings or moods. You only respond with valid JSON.";

/// The user prompt for `feeling`.
#[must_use]
pub fn palette_prompt(feeling: &str) -> String {
    format!(
        r##"Generate {REQUESTED_PALETTES} color palettes based on the feeling or mood: "{feeling}".
Each palette should have 5 colors that harmoniously work together.

ACCESSIBILITY REQUIREMENTS (WCAG 2.1):
1. Contrast Ratios:
- Text/Background combinations must meet minimum contrast ratios:
* Normal text (under 18pt): Minimum 4.5:1 (AA), Preferred 7:1 (AAA)
* Large text (18pt+): Minimum 3:1 (AA), Preferred 4.5:1 (AAA)
- UI elements and graphical objects: Minimum 3:1 against adjacent colors

2. Color Combinations:
- Each palette should include at least one light color (#f5f5f5 or lighter) and one dark color (#333333 or darker)
- Avoid problematic combinations for color blindness (e.g., red/green, blue/purple, green/brown)
- Ensure adjacent colors have sufficient contrast for boundaries

3. Color Purpose:
- Include colors suitable for:
* Primary actions (1 color)
* Secondary/tertiary actions (1-2 colors)
* Background/surface variations (1-2 colors)
* Accent/highlight (1 color)

4. Versatility:
- Colors should work in both light and dark modes
- Include colors that maintain their perceptual qualities across devices

Return ONLY a minified JSON object without whitespace or line breaks in this exact structure:
{{"palettes":[{{"name":"Meaningful palette name related to the feeling","colors":["#hexcode1","#hexcode2","#hexcode3","#hexcode4","#hexcode5"],"roles":["background","primary","secondary","accent","text"]}}],"feeling":"{feeling}"}}

For each palette:
- Ensure every hex code is valid (6 characters with proper syntax)
- Calculate and verify contrast ratios between text colors and background colors
- Assign appropriate roles to each color (background, primary, secondary, accent, text)
- Make each palette distinct while still reflecting the feeling/mood
- Consider cultural and psychological color meanings related to the feeling"##
    )
}

/// A validated model reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteResponse {
    pub palettes: Vec<Palette>,
    /// The mood echoed back by the model; empty if it sent none.
    pub feeling: String,
}

#[derive(Deserialize)]
struct RawResponse {
    #[serde(default)]
    palettes: Vec<RawEntry>,
    #[serde(default, alias = "vibe")]
    feeling: String,
}

#[derive(Deserialize)]
struct RawEntry {
    name: String,
    colors: Vec<String>,
    #[serde(default)]
    roles: Option<Vec<String>>,
}

impl RawEntry {
    fn validate(self, index: usize) -> Result<Palette, ResponseError> {
        let colors = self
            .colors
            .iter()
            .map(String::as_str)
            .map(Color::hex)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ResponseError::Color {
                index,
                name: self.name.clone(),
                source,
            })?;

        let roles = self
            .roles
            .map(|roles| {
                roles
                    .into_iter()
                    .map(|role| {
                        Role::from_name(&role).ok_or_else(|| ResponseError::Role {
                            index,
                            name: self.name.clone(),
                            role,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(Palette::new(self.name, colors, roles)?)
    }
}

/// Parse and validate a model reply.
///
/// # Errors
///
/// [`ResponseError::Json`] if the text is not JSON of the expected shape,
/// [`ResponseError::Empty`] if it holds no palettes, and the color, role or
/// palette variants for the first palette that fails validation.
pub fn parse_response(json: &str) -> Result<PaletteResponse, ResponseError> {
    let raw: RawResponse = serde_json::from_str(json.trim())?;
    if raw.palettes.is_empty() {
        return Err(ResponseError::Empty);
    }

    let palettes = raw
        .palettes
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.validate(index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PaletteResponse { palettes, feeling: raw.feeling })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
