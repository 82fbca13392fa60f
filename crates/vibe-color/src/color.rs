// SPDX-License-Identifier: MIT
//
// vibe color type — 24-bit sRGB with hex and HSL conversions.
//
// Colors arrive as text from three places: hand-authored tables, the HSL
// synthesizer, and language-model JSON. The last one is untrusted, so hex
// parsing is strict: an optional single `#`, then exactly 3 or 6 ASCII hex
// digits. No trimming, no alpha, no named colors.
//
// HSL uses the CSS convention: hue in degrees, saturation and lightness in
// percent. `Color::from_hsl` is the compact per-channel formula
//
//   k = (n + h/30) mod 12
//   a = s · min(l, 1 − l)
//   c = l − a · max(min(k − 3, 9 − k, 1), −1)     for n ∈ {0, 8, 4}
//
// with each channel rounded to the nearest 8-bit value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque 24-bit sRGB color.
///
/// Immutable and `Copy`. The textual form is always lowercase `#rrggbb`.
///
/// # Examples
///
/// ```
/// use vibe_color::Color;
///
/// let teal = Color::hex("#0E9396").unwrap();
/// assert_eq!(teal.to_string(), "#0e9396");
///
/// let short = Color::hex("f80").unwrap();
/// assert_eq!(short, Color::rgb(0xff, 0x88, 0x00));
///
/// assert!(Color::hex("#12345").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB` (the `#` is optional, digits are
    /// case-insensitive). Shorthand digits are expanded (`f` → `ff`).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for any other length or a
    /// non-hex character.
    pub fn hex(s: &str) -> Result<Self> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidColorFormat(s.to_owned()))
    }

    /// Convert an HSL triple to a color.
    ///
    /// Out-of-range input is normalized first (see [`Hsl::clamped`]), so
    /// this never produces an invalid channel.
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl.clamped();
        let l = l / 100.0;
        let a = s * l.min(1.0 - l) / 100.0;
        let channel = |n: f64| {
            let k = (n + h / 30.0) % 12.0;
            to_u8(l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0))
        };
        Self::rgb(channel(0.0), channel(8.0), channel(4.0))
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    // ─── Output ──────────────────────────────────────────────────────────

    /// Channels normalized to 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL (degrees, percent, percent).
    ///
    /// Achromatic colors report hue and saturation 0. Feeding the result
    /// back through [`Color::from_hsl`] reproduces each channel within ±1.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_srgb();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(h * 60.0, s * 100.0, l * 100.0)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self> {
        Self::hex(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A CSS-style HSL triple: hue in degrees, saturation and lightness in
/// percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Wrap hue into [0, 360) and clamp saturation and lightness to
    /// [0, 100].
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            h: self.h.rem_euclid(360.0),
            s: self.s.clamp(0.0, 100.0),
            l: self.l.clamp(0.0, 100.0),
        }
    }
}

/// Convert an HSL triple straight to its hex string.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Color::from_hsl(Hsl::new(h, s, l)).to_hex()
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();

    match digits.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(digits[0])?;
            let g = parse_hex_digit(digits[1])?;
            let b = parse_hex_digit(digits[2])?;
            Some(Color::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&digits[0..2])?;
            let g = parse_hex_byte(&digits[2..4])?;
            let b = parse_hex_byte(&digits[4..6])?;
            Some(Color::rgb(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding to nearest.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
