// SPDX-License-Identifier: MIT
//
// WCAG 2.x contrast math.
//
//   channel:   c ≤ 0.03928 ? c / 12.92 : ((c + 0.055) / 1.055)^2.4
//   luminance: L = 0.2126·R + 0.7152·G + 0.0722·B       (linear channels)
//   contrast:  (L_lighter + 0.05) / (L_darker + 0.05)    ∈ [1, 21]
//
// The 0.03928 threshold is the one printed in WCAG 2.0/2.1; it differs
// from the IEC sRGB value (0.04045) only for channel values that cannot
// occur with 8-bit input, so either gives identical results here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

// ─── Luminance & Ratio ───────────────────────────────────────────────────────

/// Convert a single sRGB component (0.0–1.0) to linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG 2.x, in [0.0, 1.0].
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_srgb();
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// WCAG contrast ratio between two colors, in [1.0, 21.0].
///
/// Symmetric: argument order does not matter.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether a color is light enough that black text reads better on it.
#[must_use]
pub fn is_light(color: Color) -> bool {
    relative_luminance(color) > 0.5
}

// ─── Compliance Levels ───────────────────────────────────────────────────────

/// WCAG compliance tier for a contrast ratio.
///
/// Ordered from worst to best, so `level >= WcagLevel::AA` reads naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    Fail,
    A,
    AA,
    AAA,
}

impl WcagLevel {
    /// Display label ("Fail", "A", "AA", "AAA").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::A => "A",
            Self::AA => "AA",
            Self::AAA => "AAA",
        }
    }

    /// AA or better.
    #[must_use]
    pub const fn passes_aa(self) -> bool {
        matches!(self, Self::AA | Self::AAA)
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a contrast ratio.
///
/// | ratio       | normal text | large text |
/// |-------------|-------------|------------|
/// | ≥ 7         | AAA         | AAA        |
/// | ≥ 4.5       | AA          | AA         |
/// | ≥ 3         | Fail        | A          |
/// | < 3         | Fail        | Fail       |
#[must_use]
pub fn wcag_level(ratio: f64, is_large_text: bool) -> WcagLevel {
    if ratio >= 7.0 {
        WcagLevel::AAA
    } else if ratio >= 4.5 {
        WcagLevel::AA
    } else if is_large_text && ratio >= 3.0 {
        WcagLevel::A
    } else {
        WcagLevel::Fail
    }
}

/// Pass/fail flags for the four WCAG text thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityFlags {
    /// Normal text, AA (≥ 4.5).
    pub aa: bool,
    /// Normal text, AAA (≥ 7).
    pub aaa: bool,
    /// Large text, AA (≥ 3).
    pub aa_large: bool,
    /// Large text, AAA (≥ 4.5).
    pub aaa_large: bool,
}

impl AccessibilityFlags {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            aa: ratio >= 4.5,
            aaa: ratio >= 7.0,
            aa_large: ratio >= 3.0,
            aaa_large: ratio >= 4.5,
        }
    }

    /// One-line human summary, best tier first.
    #[must_use]
    pub const fn description(self) -> &'static str {
        if self.aaa {
            "Excellent (AAA)"
        } else if self.aa {
            "Good (AA)"
        } else if self.aaa_large {
            "Good for large text (AAA)"
        } else if self.aa_large {
            "Acceptable for large text (AA)"
        } else {
            "Poor contrast"
        }
    }
}

// ─── Pair Analysis ───────────────────────────────────────────────────────────

/// Pick pure white or pure black, whichever contrasts more with
/// `background`. White wins ties.
#[must_use]
pub fn best_text_color(background: Color) -> Color {
    if contrast_ratio(background, Color::WHITE) >= contrast_ratio(background, Color::BLACK) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// A text color measured against a background color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPairAnalysis {
    pub background_color: Color,
    pub text_color: Color,
    pub contrast_ratio: f64,
    pub level: WcagLevel,
    pub is_large_text: bool,
    /// The ratio with two decimals, e.g. `"4.54:1"`.
    pub formatted_ratio: String,
}

/// Measure `foreground` text on `background`.
#[must_use]
pub fn analyze_contrast(foreground: Color, background: Color, is_large_text: bool) -> ColorPairAnalysis {
    let ratio = contrast_ratio(foreground, background);
    ColorPairAnalysis {
        background_color: background,
        text_color: foreground,
        contrast_ratio: ratio,
        level: wcag_level(ratio, is_large_text),
        is_large_text,
        formatted_ratio: format_ratio(ratio),
    }
}

/// Format a ratio as `"X.XX:1"`.
#[must_use]
pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio:.2}:1")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
