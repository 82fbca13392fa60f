// SPDX-License-Identifier: MIT
//
// Palette-level accessibility audits.
//
// Three views of the same palette:
//
//   text_pairings              one row per color: best of white/black text,
//                              plus AA/AAA pass counts (the swatch annotations)
//   adjacent_pairs             each color against its right-hand neighbor
//                              (wrapping), for swatch boundaries
//   analyze_palette_contrast   every ordered color pair as text-on-background
//   check_palette_accessibility every unordered pair with pass flags and an
//                              overall rating from the AA pass rate
//
// All of them are recomputed on demand; nothing here is cached.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::contrast::{
    AccessibilityFlags, ColorPairAnalysis, WcagLevel, analyze_contrast, best_text_color,
    contrast_ratio,
};

// ─── Text Pairings ───────────────────────────────────────────────────────────

/// Best-text-color annotations for a palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteReport {
    /// One entry per palette color, in palette order.
    pub pairings: Vec<ColorPairAnalysis>,
    /// Entries at AA or AAA.
    pub passed_aa: usize,
    /// Entries at AAA.
    pub passed_aaa: usize,
    /// Number of entries.
    pub total: usize,
}

/// Pair every color with white or black text (whichever contrasts more) and
/// count how many pairings pass AA and AAA.
#[must_use]
pub fn text_pairings(colors: &[Color], is_large_text: bool) -> PaletteReport {
    let pairings: Vec<ColorPairAnalysis> = colors
        .iter()
        .map(|&bg| analyze_contrast(best_text_color(bg), bg, is_large_text))
        .collect();

    let passed_aa = pairings.iter().filter(|p| p.level.passes_aa()).count();
    let passed_aaa = pairings.iter().filter(|p| p.level == WcagLevel::AAA).count();
    let total = pairings.len();

    PaletteReport { pairings, passed_aa, passed_aaa, total }
}

// ─── Color-on-Color ──────────────────────────────────────────────────────────

/// Every ordered pair `(text = colors[i], background = colors[j])`, `i ≠ j`,
/// measured as normal text.
#[must_use]
pub fn analyze_palette_contrast(colors: &[Color]) -> Vec<ColorPairAnalysis> {
    let mut results = Vec::with_capacity(colors.len() * colors.len().saturating_sub(1));
    for (i, &text) in colors.iter().enumerate() {
        for (j, &bg) in colors.iter().enumerate() {
            if i != j {
                results.push(analyze_contrast(text, bg, false));
            }
        }
    }
    results
}

/// Each color measured against the next one, wrapping around: `colors[i]`
/// as text on `colors[(i + 1) % n]`. One entry per color; a single color is
/// measured against itself.
#[must_use]
pub fn adjacent_pairs(colors: &[Color], is_large_text: bool) -> Vec<ColorPairAnalysis> {
    colors
        .iter()
        .zip(colors.iter().cycle().skip(1))
        .map(|(&text, &bg)| analyze_contrast(text, bg, is_large_text))
        .collect()
}

/// The ordered pairs from [`analyze_palette_contrast`] that reach AA,
/// highest ratio first. Equal ratios keep palette order.
#[must_use]
pub fn accessible_pairs(colors: &[Color]) -> Vec<ColorPairAnalysis> {
    let mut pairs: Vec<_> = analyze_palette_contrast(colors)
        .into_iter()
        .filter(|p| p.level.passes_aa())
        .collect();
    pairs.sort_by(|a, b| b.contrast_ratio.total_cmp(&a.contrast_ratio));
    pairs
}

// ─── Pairwise Check ──────────────────────────────────────────────────────────

/// Overall palette grade from the share of pairs passing AA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallRating {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl OverallRating {
    /// Grade a pass rate in [0, 1].
    #[must_use]
    pub fn from_pass_rate(rate: f64) -> Self {
        if rate >= 0.8 {
            Self::Excellent
        } else if rate >= 0.6 {
            Self::Good
        } else if rate >= 0.4 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl fmt::Display for OverallRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One unordered color pair with its threshold flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairCheck {
    pub color1: Color,
    pub color2: Color,
    pub contrast_ratio: f64,
    pub flags: AccessibilityFlags,
    pub description: String,
}

/// Result of [`check_palette_accessibility`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteAccessibility {
    pub pairs: Vec<PairCheck>,
    pub overall_rating: OverallRating,
}

/// Check every unordered pair `i < j` and grade the palette by the share of
/// pairs that pass normal-text AA. Palettes with fewer than two colors have
/// no pairs and grade as [`OverallRating::Poor`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn check_palette_accessibility(colors: &[Color]) -> PaletteAccessibility {
    let mut pairs = Vec::new();
    for (i, &color1) in colors.iter().enumerate() {
        for &color2 in &colors[i + 1..] {
            let ratio = contrast_ratio(color1, color2);
            let flags = AccessibilityFlags::from_ratio(ratio);
            pairs.push(PairCheck {
                color1,
                color2,
                contrast_ratio: ratio,
                flags,
                description: flags.description().to_owned(),
            });
        }
    }

    let overall_rating = if pairs.is_empty() {
        OverallRating::Poor
    } else {
        let passed = pairs.iter().filter(|p| p.flags.aa).count();
        OverallRating::from_pass_rate(passed as f64 / pairs.len() as f64)
    };

    PaletteAccessibility { pairs, overall_rating }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn palette(hexes: &[&str]) -> Vec<Color> {
        hexes.iter().map(|h| Color::hex(h).unwrap()).collect()
    }

    fn corporate_calm() -> Vec<Color> {
        palette(&["#f5f5f5", "#085f73", "#0e9396", "#94e0d0", "#081219"])
    }

    // ── text_pairings ───────────────────────────────────────────────

    #[test]
    fn pairings_one_per_color_in_order() {
        let colors = corporate_calm();
        let report = text_pairings(&colors, false);
        assert_eq!(report.total, 5);
        let backgrounds: Vec<Color> = report.pairings.iter().map(|p| p.background_color).collect();
        assert_eq!(backgrounds, colors);
    }

    #[test]
    fn pairings_use_only_black_or_white() {
        let report = text_pairings(&corporate_calm(), false);
        for p in &report.pairings {
            assert!(p.text_color == Color::WHITE || p.text_color == Color::BLACK);
        }
        assert_eq!(report.pairings[0].text_color, Color::BLACK);
        assert_eq!(report.pairings[4].text_color, Color::WHITE);
    }

    #[test]
    fn pairings_counts_match_levels() {
        let report = text_pairings(&corporate_calm(), false);
        let aa = report.pairings.iter().filter(|p| p.level >= WcagLevel::AA).count();
        let aaa = report.pairings.iter().filter(|p| p.level == WcagLevel::AAA).count();
        assert_eq!(report.passed_aa, aa);
        assert_eq!(report.passed_aaa, aaa);
        assert!(report.passed_aaa <= report.passed_aa);
    }

    #[test]
    fn pairings_extremes_are_aaa() {
        let report = text_pairings(&[Color::BLACK, Color::WHITE], false);
        assert_eq!(report.passed_aaa, 2);
        assert_eq!(report.pairings[0].formatted_ratio, "21.00:1");
    }

    #[test]
    fn pairings_empty_palette() {
        let report = text_pairings(&[], false);
        assert_eq!(report.total, 0);
        assert_eq!(report.passed_aa, 0);
        assert!(report.pairings.is_empty());
    }

    // ── Color-on-color ──────────────────────────────────────────────

    #[test]
    fn identical_colors_all_fail_at_ratio_one() {
        let colors = vec![Color::hex("#3a3a3a").unwrap(); 5];
        let all = analyze_palette_contrast(&colors);
        assert_eq!(all.len(), 20);
        for p in &all {
            assert_eq!(p.level, WcagLevel::Fail);
            assert!((p.contrast_ratio - 1.0).abs() < 1e-12);
            assert_eq!(p.formatted_ratio, "1.00:1");
        }
        assert!(accessible_pairs(&colors).is_empty());
    }

    #[test]
    fn identical_colors_adjacent_pairs() {
        let colors = vec![Color::hex("#0e9396").unwrap(); 5];
        let adjacent = adjacent_pairs(&colors, false);
        assert_eq!(adjacent.len(), 5);
        for p in &adjacent {
            assert_eq!(p.level, WcagLevel::Fail);
            assert!((p.contrast_ratio - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn adjacent_pairs_wrap_around() {
        let colors = palette(&["#000000", "#777777", "#ffffff"]);
        let adjacent = adjacent_pairs(&colors, false);
        assert_eq!(adjacent.len(), 3);
        assert_eq!(adjacent[0].text_color, colors[0]);
        assert_eq!(adjacent[0].background_color, colors[1]);
        assert_eq!(adjacent[2].text_color, colors[2]);
        assert_eq!(adjacent[2].background_color, colors[0]);
        assert_eq!(adjacent[2].formatted_ratio, "21.00:1");
    }

    #[test]
    fn adjacent_pairs_single_and_empty() {
        let one = adjacent_pairs(&[Color::WHITE], true);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].level, WcagLevel::Fail);
        assert!(adjacent_pairs(&[], false).is_empty());
    }

    #[test]
    fn ordered_pairs_cover_both_directions() {
        let all = analyze_palette_contrast(&[Color::BLACK, Color::WHITE]);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].text_color, Color::BLACK);
        assert_eq!(all[0].background_color, Color::WHITE);
        assert_eq!(all[1].text_color, Color::WHITE);
        assert_eq!(all[1].background_color, Color::BLACK);
    }

    #[test]
    fn accessible_pairs_sorted_descending() {
        let pairs = accessible_pairs(&corporate_calm());
        assert!(!pairs.is_empty());
        for w in pairs.windows(2) {
            assert!(w[0].contrast_ratio >= w[1].contrast_ratio);
        }
        assert!(pairs.iter().all(|p| p.level.passes_aa()));
    }

    // ── check_palette_accessibility ─────────────────────────────────

    #[test]
    fn check_counts_unordered_pairs() {
        let result = check_palette_accessibility(&corporate_calm());
        assert_eq!(result.pairs.len(), 10);
        assert_eq!(result.pairs[0].color1, Color::hex("#f5f5f5").unwrap());
        assert_eq!(result.pairs[0].color2, Color::hex("#085f73").unwrap());
    }

    #[test]
    fn check_black_white_is_excellent() {
        let result = check_palette_accessibility(&[Color::BLACK, Color::WHITE]);
        assert_eq!(result.overall_rating, OverallRating::Excellent);
        assert_eq!(result.pairs[0].description, "Excellent (AAA)");
    }

    #[test]
    fn check_monotone_is_poor() {
        let colors = vec![Color::hex("#777777").unwrap(); 3];
        let result = check_palette_accessibility(&colors);
        assert_eq!(result.overall_rating, OverallRating::Poor);
        assert_eq!(result.pairs.len(), 3);
    }

    #[test]
    fn check_too_few_colors_is_poor() {
        assert_eq!(check_palette_accessibility(&[]).overall_rating, OverallRating::Poor);
        let one = check_palette_accessibility(&[Color::WHITE]);
        assert!(one.pairs.is_empty());
        assert_eq!(one.overall_rating, OverallRating::Poor);
    }

    #[test]
    fn rating_thresholds() {
        assert_eq!(OverallRating::from_pass_rate(1.0), OverallRating::Excellent);
        assert_eq!(OverallRating::from_pass_rate(0.8), OverallRating::Excellent);
        assert_eq!(OverallRating::from_pass_rate(0.6), OverallRating::Good);
        assert_eq!(OverallRating::from_pass_rate(0.5), OverallRating::Fair);
        assert_eq!(OverallRating::from_pass_rate(0.39), OverallRating::Poor);
        assert_eq!(OverallRating::Good.to_string(), "good");
    }
}
