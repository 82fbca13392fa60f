//! Curated palette tables.
//!
//! Two kinds of hand-picked palettes ship with the crate:
//!
//! - mock sets keyed by mood, used by [`MockSource`](crate::source::MockSource)
//!   so the app can be demoed without a language model;
//! - three fallback palettes returned whenever a source fails.
//!
//! Every palette carries the default role order.

use vibe_color::Color;

use crate::palette::{PALETTE_SIZE, Palette};

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::rgb(r, g, b)
}

/// Muted, high-contrast office palettes.
const PROFESSIONAL: &[(&str, [Color; PALETTE_SIZE])] = &[
    (
        "Corporate Calm",
        [
            rgb(0xf5, 0xf5, 0xf5),
            rgb(0x08, 0x5f, 0x73),
            rgb(0x0e, 0x93, 0x96),
            rgb(0x94, 0xe0, 0xd0),
            rgb(0x08, 0x12, 0x19),
        ],
    ),
    (
        "Executive Elegance",
        [
            rgb(0xe0, 0xe0, 0xe0),
            rgb(0x2b, 0x2d, 0x2d),
            rgb(0x41, 0x54, 0x75),
            rgb(0xdf, 0xd6, 0xc8),
            rgb(0x2d, 0x40, 0x57),
        ],
    ),
    (
        "Boardroom Blue",
        [
            rgb(0xf6, 0xf6, 0xf6),
            rgb(0x1b, 0x2b, 0x3b),
            rgb(0x41, 0x5a, 0x77),
            rgb(0x77, 0x8b, 0x99),
            rgb(0x09, 0x1b, 0x28),
        ],
    ),
    (
        "Professional Slate",
        [
            rgb(0xf5, 0xf5, 0xf5),
            rgb(0x33, 0x33, 0x33),
            rgb(0x62, 0x7a, 0x82),
            rgb(0xe0, 0xb6, 0xc1),
            rgb(0x1c, 0x3a, 0x3e),
        ],
    ),
    (
        "Business Beige",
        [
            rgb(0xf7, 0xf7, 0xf7),
            rgb(0x3a, 0x3a, 0x3a),
            rgb(0x5c, 0x5c, 0x5c),
            rgb(0xec, 0xec, 0xec),
            rgb(0x3c, 0x3c, 0x3c),
        ],
    ),
    (
        "Neutral Negotiation",
        [
            rgb(0xff, 0xff, 0xff),
            rgb(0x1a, 0x1a, 0x1a),
            rgb(0x3a, 0x3a, 0x3a),
            rgb(0x7a, 0x7a, 0x7a),
            rgb(0x26, 0x26, 0x26),
        ],
    ),
    (
        "Trustworthy Teal",
        [
            rgb(0xf5, 0xf5, 0xf5),
            rgb(0x2d, 0x66, 0x53),
            rgb(0x2a, 0x90, 0x8f),
            rgb(0xf0, 0xc4, 0x6a),
            rgb(0x14, 0x21, 0x36),
        ],
    ),
    (
        "Official Olive",
        [
            rgb(0xfe, 0xfe, 0xfe),
            rgb(0x3a, 0x3a, 0x3a),
            rgb(0x6b, 0x76, 0x5c),
            rgb(0xa3, 0xa3, 0x6d),
            rgb(0x1c, 0x1c, 0x1c),
        ],
    ),
    (
        "Strategic Stone",
        [
            rgb(0xf5, 0xf5, 0xf5),
            rgb(0x28, 0x28, 0x28),
            rgb(0x54, 0x5c, 0x61),
            rgb(0xc6, 0xc6, 0xc6),
            rgb(0x1b, 0x1b, 0x1e),
        ],
    ),
    (
        "Edgy Efficiency",
        [
            rgb(0xf2, 0xf2, 0xf2),
            rgb(0x0f, 0x0f, 0x0f),
            rgb(0x3d, 0x3d, 0x3d),
            rgb(0x76, 0x76, 0x76),
            rgb(0x1a, 0x1a, 0x1a),
        ],
    ),
];

/// Returned when a source cannot produce palettes.
const FALLBACK: &[(&str, [Color; PALETTE_SIZE])] = &[
    (
        "Fallback Warm",
        [
            rgb(0xf8, 0xb1, 0x95),
            rgb(0xf6, 0x72, 0x80),
            rgb(0xc0, 0x6c, 0x84),
            rgb(0x6c, 0x5b, 0x7b),
            rgb(0x35, 0x5c, 0x7d),
        ],
    ),
    (
        "Fallback Natural",
        [
            rgb(0x99, 0xb8, 0x98),
            rgb(0xfe, 0xce, 0xab),
            rgb(0xff, 0x84, 0x7c),
            rgb(0xe8, 0x4a, 0x5f),
            rgb(0x2a, 0x36, 0x3b),
        ],
    ),
    (
        "Fallback Soft",
        [
            rgb(0xa8, 0xe6, 0xce),
            rgb(0xdc, 0xed, 0xc2),
            rgb(0xff, 0xd3, 0xb5),
            rgb(0xff, 0xaa, 0xa6),
            rgb(0xff, 0x8c, 0x94),
        ],
    ),
];

/// Mood keys with a curated mock set, in lookup order.
const MOCK_SETS: &[(&str, &[(&str, [Color; PALETTE_SIZE])])] = &[("professional", PROFESSIONAL)];

fn build(rows: &[(&str, [Color; PALETTE_SIZE])]) -> Vec<Palette> {
    rows.iter()
        .map(|&(name, colors)| Palette::with_default_roles(name, colors))
        .collect()
}

/// Curated palettes for `feeling`.
///
/// The feeling is trimmed and lowercased, then matched against the mock keys:
/// an exact key first, then any key that contains the feeling or is
/// contained in it ("very professional" and "prof" both match
/// `professional`). Blank input matches nothing.
#[must_use]
pub fn mock_palettes(feeling: &str) -> Option<Vec<Palette>> {
    let feeling = feeling.trim().to_lowercase();
    if feeling.is_empty() {
        return None;
    }

    MOCK_SETS
        .iter()
        .find(|(key, _)| *key == feeling)
        .or_else(|| {
            MOCK_SETS
                .iter()
                .find(|(key, _)| feeling.contains(key) || key.contains(feeling.as_str()))
        })
        .map(|(_, rows)| build(rows))
}

/// The palettes served when generation fails.
#[must_use]
pub fn fallback_palettes() -> Vec<Palette> {
    build(FALLBACK)
}

/// List the mood keys that have a curated mock set.
#[must_use]
pub fn mock_names() -> Vec<&'static str> {
    MOCK_SETS.iter().map(|(key, _)| *key).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
