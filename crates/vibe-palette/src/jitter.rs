//! Seeded perturbation of mood seeds, so repeated requests for the same mood
//! can produce slightly different palettes without giving up
//! reproducibility.
//!
//! Each call to [`Jitter::perturb`] shifts hue, saturation and lightness by
//! an integer in [-10, 9]. Hue wraps around the wheel; saturation and
//! lightness clamp to [0, 100].

use crate::mood::MoodDescriptor;

// ---------------------------------------------------------------------------
// Xorshift32 — a minimal deterministic PRNG
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG. No external `rand` crate needed.
#[derive(Debug, Clone)]
struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    const fn next(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Random integer in [lo, lo + span).
    #[allow(clippy::cast_possible_wrap)]
    fn offset(&mut self, lo: i32, span: u32) -> i32 {
        // span is tiny, so the remainder always fits in i32.
        lo + (self.next() % span) as i32
    }
}

// ---------------------------------------------------------------------------
// Jitter
// ---------------------------------------------------------------------------

/// A seeded source of small HSL perturbations.
#[derive(Debug, Clone)]
pub struct Jitter {
    rng: Xorshift32,
}

impl Jitter {
    /// Same seed, same sequence of perturbations. Seed 0 behaves like 1.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { rng: Xorshift32::new(seed) }
    }

    /// Nudge a descriptor by up to ±10 on each axis.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn perturb(&mut self, base: MoodDescriptor) -> MoodDescriptor {
        let hue = (i32::from(base.hue) + self.rng.offset(-10, 20)).rem_euclid(360);
        let saturation = (i32::from(base.saturation) + self.rng.offset(-10, 20)).clamp(0, 100);
        let lightness = (i32::from(base.lightness) + self.rng.offset(-10, 20)).clamp(0, 100);
        // All three are within their target ranges after wrap/clamp.
        MoodDescriptor::new(hue as u16, saturation as u8, lightness as u8)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
