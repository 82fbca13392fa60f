//! Palette producers behind one trait, plus the never-fails entry point.
//!
//! ```text
//! MockSource        curated sets from builtin.rs
//! SynthSource       mood → seed (→ jitter) → one palette per strategy
//! LlmSource<C>      prompt → CompletionClient → parse_response
//!        │
//!        ▼
//! generate_palettes: Ok(palettes) or warn! + fallback trio
//! ```

use log::{debug, warn};

use crate::builtin::{fallback_palettes, mock_palettes};
use crate::error::SourceError;
use crate::harmony::Strategy;
use crate::jitter::Jitter;
use crate::mood::{NEUTRAL, closest_mood, descriptor};
use crate::palette::Palette;
use crate::response::{SYSTEM_PROMPT, palette_prompt, parse_response};

/// Anything that can turn a mood into palettes.
pub trait PaletteSource {
    /// Short identifier for logs ("synth", "mock", "llm").
    fn name(&self) -> &'static str;

    /// Produce palettes for `mood`.
    ///
    /// # Errors
    ///
    /// Whatever the producer cannot recover from; see [`SourceError`].
    fn palettes(&mut self, mood: &str) -> Result<Vec<Palette>, SourceError>;
}

// ---------------------------------------------------------------------------
// Mock
// ---------------------------------------------------------------------------

/// Curated palettes only. Fails for moods without a mock set.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

impl PaletteSource for MockSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn palettes(&mut self, mood: &str) -> Result<Vec<Palette>, SourceError> {
        mock_palettes(mood).ok_or_else(|| SourceError::NoMockPalettes(mood.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Synth
// ---------------------------------------------------------------------------

/// Procedural palettes: one per strategy, in the order given.
#[derive(Debug, Clone)]
pub struct SynthSource {
    strategies: Vec<Strategy>,
    jitter: Option<Jitter>,
}

impl SynthSource {
    /// An empty `strategies` list means every strategy.
    #[must_use]
    pub fn new(strategies: Vec<Strategy>) -> Self {
        let strategies = if strategies.is_empty() { Strategy::all().to_vec() } else { strategies };
        Self { strategies, jitter: None }
    }

    /// Perturb the seed before each strategy, reproducibly for `seed`.
    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.jitter = Some(Jitter::new(seed));
        self
    }

    #[must_use]
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }
}

impl Default for SynthSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// "peaceful" → "Peaceful".
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

impl PaletteSource for SynthSource {
    fn name(&self) -> &'static str {
        "synth"
    }

    fn palettes(&mut self, mood: &str) -> Result<Vec<Palette>, SourceError> {
        let keyword = closest_mood(mood);
        let base = descriptor(keyword).unwrap_or(NEUTRAL);
        let label = title_case(keyword);
        debug!("synth: {mood:?} → {keyword} {base:?}");

        let palettes = self
            .strategies
            .iter()
            .map(|&strategy| {
                let seed = match &mut self.jitter {
                    Some(jitter) => jitter.perturb(base),
                    None => base,
                };
                Palette::synthesized(format!("{label} {}", strategy.title()), seed, strategy)
            })
            .collect();
        Ok(palettes)
    }
}

// ---------------------------------------------------------------------------
// Language model
// ---------------------------------------------------------------------------

/// Sends a system prompt and a user prompt, returns the raw reply text.
///
/// The HTTP client lives outside this crate; tests and the CLI plug in
/// their own implementations.
pub trait CompletionClient {
    /// # Errors
    ///
    /// [`SourceError::Completion`] when no reply could be obtained.
    fn complete(&mut self, system: &str, prompt: &str) -> Result<String, SourceError>;
}

/// Palettes from a language model, validated by [`parse_response`].
#[derive(Debug, Clone)]
pub struct LlmSource<C> {
    client: C,
}

impl<C: CompletionClient> LlmSource<C> {
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn into_inner(self) -> C {
        self.client
    }
}

impl<C: CompletionClient> PaletteSource for LlmSource<C> {
    fn name(&self) -> &'static str {
        "llm"
    }

    fn palettes(&mut self, mood: &str) -> Result<Vec<Palette>, SourceError> {
        let reply = self.client.complete(SYSTEM_PROMPT, &palette_prompt(mood))?;
        let response = parse_response(&reply)?;
        if !response.feeling.is_empty() && response.feeling != mood {
            debug!("llm: asked for {mood:?}, reply echoes {:?}", response.feeling);
        }
        Ok(response.palettes)
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Palettes for `mood` from `source`, or the builtin fallback trio if the
/// source fails. Never returns an empty list.
pub fn generate_palettes(source: &mut dyn PaletteSource, mood: &str) -> Vec<Palette> {
    match source.palettes(mood) {
        Ok(palettes) if !palettes.is_empty() => {
            debug!("{}: {} palettes for {mood:?}", source.name(), palettes.len());
            palettes
        }
        Ok(_) => {
            warn!("{}: no palettes for {mood:?}, using fallback", source.name());
            fallback_palettes()
        }
        Err(e) => {
            warn!("{}: {e}, using fallback", source.name());
            fallback_palettes()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
