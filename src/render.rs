// SPDX-License-Identifier: MIT
//
// Output for every subcommand, as text or JSON.
//
// Text output for a palette, one row per color:
//
//    #f5f5f5   background  black text   19.26:1  AAA
//    #085f73   primary     white text    7.25:1  AAA
//   ...
//   AA: 5 of 5  AAA: 4 of 5  overall: fair  weakest boundary: 1.95:1
//
// The hex label is a truecolor swatch (label drawn in its best text color)
// when color is on, plain text otherwise. Everything else is identical
// between the two modes.

use std::io::{self, Write};

use serde::Serialize;
use vibe_color::audit::{OverallRating, PaletteReport, check_palette_accessibility};
use vibe_color::contrast::{AccessibilityFlags, best_text_color};
use vibe_color::{Color, ColorPairAnalysis, ansi};
use vibe_palette::Palette;
use vibe_palette::mood::MoodDescriptor;

/// Presentation switches shared by the text renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub large_text: bool,
    pub color: bool,
}

fn text_name(color: Color) -> &'static str {
    if color == Color::WHITE { "white" } else { "black" }
}

/// ` #rrggbb ` as a swatch or as plain text.
fn label(w: &mut impl Write, background: Color, text: Color, color: bool) -> io::Result<()> {
    let hex = format!(" {background} ");
    if color {
        ansi::swatch(w, background, text, &hex)
    } else {
        w.write_all(hex.as_bytes())
    }
}

// ─── Palettes ────────────────────────────────────────────────────────────────

fn weakest(pairs: &[ColorPairAnalysis]) -> Option<&ColorPairAnalysis> {
    pairs.iter().min_by(|a, b| a.contrast_ratio.total_cmp(&b.contrast_ratio))
}

pub fn palettes_text(w: &mut impl Write, palettes: &[Palette], opts: RenderOptions) -> io::Result<()> {
    for (i, palette) in palettes.iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        writeln!(w, "{}", palette.name())?;

        let report = palette.report(opts.large_text);
        for (idx, pairing) in report.pairings.iter().enumerate() {
            let role = palette.roles().and_then(|r| r.get(idx)).map_or("", |r| r.name());
            write!(w, "  ")?;
            label(w, pairing.background_color, pairing.text_color, opts.color)?;
            writeln!(
                w,
                "  {role:<10}  {} text  {:>8}  {}",
                text_name(pairing.text_color),
                pairing.formatted_ratio,
                pairing.level,
            )?;
        }

        let overall = check_palette_accessibility(palette.colors()).overall_rating;
        let boundaries = palette.boundary_contrast(opts.large_text);
        write!(
            w,
            "  AA: {} of {}  AAA: {} of {}  overall: {overall}",
            report.passed_aa, report.total, report.passed_aaa, report.total,
        )?;
        if let Some(b) = weakest(&boundaries) {
            write!(w, "  weakest boundary: {}", b.formatted_ratio)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteJson<'a> {
    #[serde(flatten)]
    palette: &'a Palette,
    report: PaletteReport,
    boundaries: Vec<ColorPairAnalysis>,
    overall_rating: OverallRating,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateJson<'a> {
    mood: &'a str,
    palettes: Vec<PaletteJson<'a>>,
}

pub fn palettes_json(
    w: &mut impl Write,
    mood: &str,
    palettes: &[Palette],
    large_text: bool,
) -> io::Result<()> {
    let doc = GenerateJson {
        mood,
        palettes: palettes
            .iter()
            .map(|palette| PaletteJson {
                palette,
                report: palette.report(large_text),
                boundaries: palette.boundary_contrast(large_text),
                overall_rating: check_palette_accessibility(palette.colors()).overall_rating,
            })
            .collect(),
    };
    write_json(w, &doc)
}

fn write_json(w: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)
}

// ─── Contrast ────────────────────────────────────────────────────────────────

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

pub fn contrast_text(w: &mut impl Write, analysis: &ColorPairAnalysis, color: bool) -> io::Result<()> {
    let flags = AccessibilityFlags::from_ratio(analysis.contrast_ratio);
    let kind = if analysis.is_large_text { "large text" } else { "normal text" };

    write!(w, "  ")?;
    label(w, analysis.background_color, analysis.text_color, color)?;
    writeln!(w, "  {} on {}", analysis.text_color, analysis.background_color)?;
    writeln!(w, "  ratio    {}", analysis.formatted_ratio)?;
    writeln!(w, "  level    {} ({kind})", analysis.level)?;
    writeln!(
        w,
        "  flags    AA {}  AAA {}  AA large {}  AAA large {}",
        yes_no(flags.aa),
        yes_no(flags.aaa),
        yes_no(flags.aa_large),
        yes_no(flags.aaa_large),
    )?;
    writeln!(w, "  summary  {}", flags.description())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContrastJson<'a> {
    #[serde(flatten)]
    analysis: &'a ColorPairAnalysis,
    flags: AccessibilityFlags,
    description: &'static str,
}

pub fn contrast_json(w: &mut impl Write, analysis: &ColorPairAnalysis) -> io::Result<()> {
    let flags = AccessibilityFlags::from_ratio(analysis.contrast_ratio);
    write_json(w, &ContrastJson { analysis, flags, description: flags.description() })
}

// ─── Mood ────────────────────────────────────────────────────────────────────

pub fn mood_text(
    w: &mut impl Write,
    keyword: &str,
    descriptor: MoodDescriptor,
    color: bool,
) -> io::Result<()> {
    let seed = Color::from_hsl(descriptor.hsl());
    write!(w, "  ")?;
    label(w, seed, best_text_color(seed), color)?;
    writeln!(
        w,
        "  {keyword}  hsl({}, {}%, {}%)",
        descriptor.hue, descriptor.saturation, descriptor.lightness,
    )
}

#[derive(Serialize)]
struct MoodJson<'a> {
    input: &'a str,
    keyword: &'a str,
    descriptor: MoodDescriptor,
    color: Color,
}

pub fn mood_json(
    w: &mut impl Write,
    input: &str,
    keyword: &str,
    descriptor: MoodDescriptor,
) -> io::Result<()> {
    let color = Color::from_hsl(descriptor.hsl());
    write_json(w, &MoodJson { input, keyword, descriptor, color })
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vibe_color::contrast::analyze_contrast;
    use vibe_palette::builtin::{fallback_palettes, mock_palettes};
    use vibe_palette::mood::descriptor;

    use super::*;

    const PLAIN: RenderOptions = RenderOptions { large_text: false, color: false };

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn corporate_calm() -> Palette {
        mock_palettes("professional").unwrap().remove(0)
    }

    // ── palettes ────────────────────────────────────────────────────

    #[test]
    fn palette_rows_plain() {
        let out = render(|w| palettes_text(w, &[corporate_calm()], PLAIN));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Corporate Calm");
        assert_eq!(lines[1], "   #f5f5f5   background  black text   19.26:1  AAA");
        assert_eq!(lines[2], "   #085f73   primary     white text    7.25:1  AAA");
        assert_eq!(lines[3], "   #0e9396   secondary   black text    5.63:1  AA");
        assert_eq!(
            lines[6],
            "  AA: 5 of 5  AAA: 4 of 5  overall: fair  weakest boundary: 1.95:1"
        );
        assert_eq!(lines.len(), 7);
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn palettes_are_separated_by_blank_lines() {
        let out = render(|w| palettes_text(w, &fallback_palettes(), PLAIN));
        assert_eq!(out.matches("\n\n").count(), 2);
        assert!(out.contains("Fallback Warm\n"));
        assert!(out.contains("overall: poor"));
    }

    #[test]
    fn palette_without_roles_leaves_role_blank() {
        let colors = corporate_calm().colors().to_vec();
        let bare = Palette::new("Bare", colors, None).unwrap();
        let out = render(|w| palettes_text(w, &[bare], PLAIN));
        assert!(out.contains("   #f5f5f5               black text"), "{out}");
    }

    #[test]
    fn color_mode_draws_swatches() {
        let opts = RenderOptions { color: true, ..PLAIN };
        let out = render(|w| palettes_text(w, &[corporate_calm()], opts));
        // #f5f5f5 background with black text.
        assert!(out.contains("\x1b[48;2;245;245;245m\x1b[38;2;0;0;0m #f5f5f5 \x1b[0m"));
    }

    #[test]
    fn palette_json_shape() {
        let out = render(|w| palettes_json(w, "professional", &[corporate_calm()], false));
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["mood"], "professional");
        let p = &v["palettes"][0];
        assert_eq!(p["name"], "Corporate Calm");
        assert_eq!(p["colors"][0], "#f5f5f5");
        assert_eq!(p["roles"][0], "background");
        assert_eq!(p["report"]["passedAa"], 5);
        assert_eq!(p["report"]["pairings"][0]["formattedRatio"], "19.26:1");
        assert_eq!(p["boundaries"].as_array().map(Vec::len), Some(5));
        assert_eq!(p["overallRating"], "fair");
    }

    // ── contrast ────────────────────────────────────────────────────

    #[test]
    fn contrast_text_black_on_white() {
        let analysis = analyze_contrast(Color::BLACK, Color::WHITE, false);
        let out = render(|w| contrast_text(w, &analysis, false));
        assert!(out.contains("#000000 on #ffffff"));
        assert!(out.contains("ratio    21.00:1"));
        assert!(out.contains("level    AAA (normal text)"));
        assert!(out.contains("AA yes  AAA yes  AA large yes  AAA large yes"));
        assert!(out.contains("summary  Excellent (AAA)"));
    }

    #[test]
    fn contrast_text_large_gray() {
        let gray = Color::hex("#949494").unwrap();
        let analysis = analyze_contrast(gray, Color::WHITE, true);
        let out = render(|w| contrast_text(w, &analysis, false));
        assert!(out.contains("level    A (large text)"), "{out}");
        assert!(out.contains("AA no  AAA no  AA large yes  AAA large no"), "{out}");
    }

    #[test]
    fn contrast_json_flattens_analysis() {
        let analysis = analyze_contrast(Color::WHITE, Color::BLACK, false);
        let out = render(|w| contrast_json(w, &analysis));
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["textColor"], "#ffffff");
        assert_eq!(v["level"], "AAA");
        assert_eq!(v["flags"]["aaLarge"], true);
        assert_eq!(v["description"], "Excellent (AAA)");
    }

    // ── mood ────────────────────────────────────────────────────────

    #[test]
    fn mood_text_plain() {
        let calm = descriptor("calm").unwrap();
        let out = render(|w| mood_text(w, "calm", calm, false));
        assert_eq!(out, "   #85c2e0   calm  hsl(200, 60%, 70%)\n");
    }

    #[test]
    fn mood_json_fields() {
        let calm = descriptor("calm").unwrap();
        let out = render(|w| mood_json(w, "calming waves", "calm", calm));
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["input"], "calming waves");
        assert_eq!(v["keyword"], "calm");
        assert_eq!(v["descriptor"]["hue"], 200);
        assert_eq!(v["color"], "#85c2e0");
    }
}
