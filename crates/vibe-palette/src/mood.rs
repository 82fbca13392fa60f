//! Mood keywords → HSL seed colors.
//!
//! Lookup is deliberately loose. Two passes over [`MOODS`], in table order:
//!
//! 1. the first keyword that appears anywhere in the input wins
//!    ("unhappy monday" → `happy`);
//! 2. otherwise, for each whitespace-separated word, the first keyword that
//!    contains the word or is contained by it wins ("calming" → `calm`,
//!    "pea" → `peaceful`).
//!
//! Nothing matching falls back to [`NEUTRAL`]. Table order decides ties, so
//! reordering [`MOODS`] changes results.

use log::debug;
use serde::{Deserialize, Serialize};
use vibe_color::Hsl;

/// An HSL seed color: hue in degrees [0, 360), saturation and lightness in
/// percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoodDescriptor {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl MoodDescriptor {
    #[must_use]
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self { hue, saturation, lightness }
    }

    /// The descriptor as a floating-point HSL triple.
    #[must_use]
    pub fn hsl(self) -> Hsl {
        Hsl::new(f64::from(self.hue), f64::from(self.saturation), f64::from(self.lightness))
    }
}

/// Keyword used when nothing in the input matches.
pub const NEUTRAL_KEYWORD: &str = "neutral";

/// Gray-blue fallback seed.
pub const NEUTRAL: MoodDescriptor = MoodDescriptor::new(210, 10, 50);

/// Canonical mood keywords, in match-priority order.
pub const MOODS: &[(&str, MoodDescriptor)] = &[
    // Happy, joyful
    ("happy", MoodDescriptor::new(50, 90, 55)),
    ("joy", MoodDescriptor::new(40, 100, 50)),
    ("excited", MoodDescriptor::new(30, 100, 50)),
    ("energetic", MoodDescriptor::new(15, 100, 50)),
    // Calm, peaceful
    ("calm", MoodDescriptor::new(200, 60, 70)),
    ("peaceful", MoodDescriptor::new(180, 50, 75)),
    ("relaxed", MoodDescriptor::new(150, 40, 70)),
    ("tranquil", MoodDescriptor::new(170, 30, 80)),
    // Sad, melancholy
    ("sad", MoodDescriptor::new(240, 30, 60)),
    ("melancholy", MoodDescriptor::new(260, 20, 50)),
    ("gloomy", MoodDescriptor::new(230, 15, 40)),
    ("depressed", MoodDescriptor::new(250, 10, 30)),
    // Angry, intense
    ("angry", MoodDescriptor::new(0, 100, 50)),
    ("intense", MoodDescriptor::new(350, 90, 45)),
    ("passionate", MoodDescriptor::new(355, 95, 50)),
    ("frustrated", MoodDescriptor::new(5, 90, 45)),
    // Love, romantic
    ("love", MoodDescriptor::new(330, 100, 65)),
    ("romantic", MoodDescriptor::new(340, 80, 70)),
    ("affectionate", MoodDescriptor::new(320, 70, 75)),
    // Creative, inspired
    ("creative", MoodDescriptor::new(280, 70, 60)),
    ("inspired", MoodDescriptor::new(260, 60, 65)),
    ("imaginative", MoodDescriptor::new(290, 50, 70)),
    // Focused, determined
    ("focused", MoodDescriptor::new(210, 80, 40)),
    ("determined", MoodDescriptor::new(220, 70, 45)),
    ("confident", MoodDescriptor::new(200, 90, 35)),
    // Natural, earthy
    ("natural", MoodDescriptor::new(120, 40, 50)),
    ("earthy", MoodDescriptor::new(30, 60, 40)),
    ("grounded", MoodDescriptor::new(45, 50, 45)),
    // Fallback
    (NEUTRAL_KEYWORD, NEUTRAL),
];

/// The keyword that `text` resolves to (`"neutral"` when nothing matches).
#[must_use]
pub fn closest_mood(text: &str) -> &'static str {
    let input = text.trim().to_lowercase();

    if input.is_empty() {
        return NEUTRAL_KEYWORD;
    }

    if let Some(&(keyword, _)) = MOODS.iter().find(|(k, _)| input.contains(k)) {
        return keyword;
    }

    for word in input.split_whitespace() {
        if let Some(&(keyword, _)) = MOODS
            .iter()
            .find(|(k, _)| word.contains(k) || k.contains(word))
        {
            return keyword;
        }
    }

    NEUTRAL_KEYWORD
}

/// Look up the table entry for a canonical keyword.
#[must_use]
pub fn descriptor(keyword: &str) -> Option<MoodDescriptor> {
    MOODS.iter().find(|(k, _)| *k == keyword).map(|&(_, d)| d)
}

/// Resolve free text to a seed color. Never fails: unmatched input yields
/// [`NEUTRAL`].
#[must_use]
pub fn resolve_mood_descriptor(text: &str) -> MoodDescriptor {
    let keyword = closest_mood(text);
    let resolved = descriptor(keyword).unwrap_or(NEUTRAL);
    debug!("mood {text:?} resolved to {keyword:?} {resolved:?}");
    resolved
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
