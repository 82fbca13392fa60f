// SPDX-License-Identifier: MIT
//
// Command-line definitions.
//
// Every flag that also exists in vibe.toml is an Option here so "not given"
// can be told apart from "given as the default"; main.rs layers the flags
// over the loaded config.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use vibe_palette::Strategy;

/// Mood-driven color palettes with WCAG contrast annotations.
#[derive(Parser, Debug)]
#[command(name = "vibe", version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a configuration file (default: ./vibe.toml, then the user config dir)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (overrides config)
    #[arg(short, long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable truecolor swatches
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate palettes for a mood
    Generate(GenerateArgs),

    /// Measure the contrast of a text color on a background color
    Contrast {
        /// Text color (#RGB or #RRGGBB)
        foreground: String,
        /// Background color (#RGB or #RRGGBB)
        background: String,
        /// Judge as large text (18pt+, or 14pt+ bold)
        #[arg(long)]
        large_text: bool,
    },

    /// Show which mood keyword and seed color a phrase resolves to
    Mood {
        /// Free-text mood; several words are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Print the language-model prompt for a mood
    Prompt {
        mood: String,
    },
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Free-text mood, e.g. "calm morning"
    pub mood: String,

    /// Where palettes come from (overrides config)
    #[arg(short, long, value_enum)]
    pub source: Option<SourceKind>,

    /// Captured language-model reply to replay (implies --source response)
    #[arg(short, long, value_name = "FILE")]
    pub response: Option<PathBuf>,

    /// Harmony strategy; repeat for several (overrides config)
    #[arg(long = "strategy", value_name = "NAME", value_parser = parse_strategy)]
    pub strategies: Vec<Strategy>,

    /// Jitter seed; same seed, same palettes (overrides config)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Judge contrast as large text
    #[arg(long)]
    pub large_text: bool,
}

/// Palette producer selected on the command line or in vibe.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Procedural harmonies from the mood's seed color
    #[default]
    Synth,
    /// Curated mock palettes
    Mock,
    /// A captured language-model reply (see --response)
    Response,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    Strategy::from_name(s).ok_or_else(|| {
        let known: Vec<&str> = Strategy::all().iter().map(|k| k.name()).collect();
        format!("unknown strategy {s:?} (expected one of: {})", known.join(", "))
    })
}
