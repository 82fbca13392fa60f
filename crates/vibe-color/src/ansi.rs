// SPDX-License-Identifier: MIT
//
// ANSI truecolor escape sequences for palette swatches.
//
// Pure functions that write escape sequences to any `impl Write`. No state;
// callers decide whether the terminal gets color at all.
use std::io::{self, Write};

use crate::color::Color;

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Set the foreground (text) color (SGR 38;2).
#[inline]
pub fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Set the background color (SGR 48;2).
#[inline]
pub fn bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

/// Write `label` in `text` color on a `background` block, then reset.
pub fn swatch(w: &mut impl Write, background: Color, text: Color, label: &str) -> io::Result<()> {
    bg(w, background)?;
    fg(w, text)?;
    w.write_all(label.as_bytes())?;
    reset(w)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
