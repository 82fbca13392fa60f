// SPDX-License-Identifier: MIT
//
// vibe — mood-driven color palettes with WCAG contrast annotations.
//
// This is the binary that wires the two library crates to a terminal:
//
//   vibe-palette → mood lookup, harmony synthesis, curated and LLM sources
//   vibe-color   → hex/HSL conversion, contrast math, audits, ANSI swatches
//
// Each invocation flows through:
//
//   argv → clap Args ─┐
//   vibe.toml → Config ┴→ overrides → env_logger → subcommand → render → stdout
//
// Errors from any layer surface as `vibe: <message>` on stderr with exit
// status 1.

mod cli;
mod config;
mod render;

use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use vibe_color::Color;
use vibe_color::contrast::analyze_contrast;
use vibe_palette::SourceError;
use vibe_palette::mood::{NEUTRAL, closest_mood, descriptor};
use vibe_palette::response::{SYSTEM_PROMPT, palette_prompt};
use vibe_palette::source::{
    CompletionClient, LlmSource, MockSource, PaletteSource, SynthSource, generate_palettes,
};

use crate::cli::{Args, Command, GenerateArgs, OutputFormat, SourceKind};
use crate::config::Config;
use crate::render::RenderOptions;

// ─── Replayed completions ───────────────────────────────────────────────────

/// A completion client that answers every request with the contents of a
/// previously captured reply file.
struct ReplayClient {
    path: PathBuf,
}

impl CompletionClient for ReplayClient {
    fn complete(&mut self, _system: &str, _prompt: &str) -> Result<String, SourceError> {
        debug!("replaying completion from {}", self.path.display());
        fs::read_to_string(&self.path)
            .map_err(|e| SourceError::Completion(format!("{}: {e}", self.path.display())))
    }
}

// ─── Config layering ────────────────────────────────────────────────────────

/// The config to run with and the file it came from, if any.
fn load_config(args: &Args) -> Result<(Config, Option<PathBuf>)> {
    let path = args.config.clone().or_else(Config::default_path);
    let config = match &path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    Ok((config, path))
}

/// Apply command-line flags over the loaded config.
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.no_color || env::var_os("NO_COLOR").is_some() {
        config.output.color = false;
    }

    if let Command::Generate(g) = &args.command {
        if let Some(path) = &g.response {
            config.generation.response_file = Some(path.clone());
            config.generation.source = SourceKind::Response;
        }
        if let Some(source) = g.source {
            config.generation.source = source;
        }
        if !g.strategies.is_empty() {
            config.generation.strategies.clone_from(&g.strategies);
        }
        if g.seed.is_some() {
            config.generation.seed = g.seed;
        }
        if g.large_text {
            config.accessibility.large_text = true;
        }
    }
}

fn init_logger(level: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

// ─── Subcommands ────────────────────────────────────────────────────────────

fn build_source(config: &Config) -> Result<Box<dyn PaletteSource>> {
    let generation = &config.generation;
    let source: Box<dyn PaletteSource> = match generation.source {
        SourceKind::Synth => {
            let source = SynthSource::new(generation.strategies.clone());
            Box::new(match generation.seed {
                Some(seed) => source.with_seed(seed),
                None => source,
            })
        }
        SourceKind::Mock => Box::new(MockSource),
        SourceKind::Response => {
            let Some(path) = &generation.response_file else {
                bail!("source \"response\" needs a reply file (--response FILE)");
            };
            Box::new(LlmSource::new(ReplayClient { path: path.clone() }))
        }
    };
    Ok(source)
}

fn generate(out: &mut impl Write, g: &GenerateArgs, config: &Config) -> Result<()> {
    let mut source = build_source(config)?;
    info!("generating {:?} with the {} source", g.mood, source.name());
    let palettes = generate_palettes(source.as_mut(), &g.mood);

    match config.output.format {
        OutputFormat::Text => render::palettes_text(
            out,
            &palettes,
            RenderOptions {
                large_text: config.accessibility.large_text,
                color: config.output.color,
            },
        ),
        OutputFormat::Json => {
            render::palettes_json(out, &g.mood, &palettes, config.accessibility.large_text)
        }
    }
    .context("failed to write palettes")
}

fn contrast(
    out: &mut impl Write,
    foreground: &str,
    background: &str,
    large_text: bool,
    config: &Config,
) -> Result<()> {
    let fg = Color::hex(foreground).context("foreground")?;
    let bg = Color::hex(background).context("background")?;
    let analysis = analyze_contrast(fg, bg, large_text || config.accessibility.large_text);

    match config.output.format {
        OutputFormat::Text => render::contrast_text(out, &analysis, config.output.color),
        OutputFormat::Json => render::contrast_json(out, &analysis),
    }
    .context("failed to write contrast report")
}

fn mood(out: &mut impl Write, text: &str, config: &Config) -> Result<()> {
    let keyword = closest_mood(text);
    let resolved = descriptor(keyword).unwrap_or(NEUTRAL);

    match config.output.format {
        OutputFormat::Text => render::mood_text(out, keyword, resolved, config.output.color),
        OutputFormat::Json => render::mood_json(out, text, keyword, resolved),
    }
    .context("failed to write mood")
}

fn prompt(out: &mut impl Write, mood: &str) -> Result<()> {
    writeln!(out, "# system\n{SYSTEM_PROMPT}\n\n# user\n{}", palette_prompt(mood))
        .context("failed to write prompt")
}

fn run(args: &Args) -> Result<()> {
    let (mut config, path) = load_config(args)?;
    apply_overrides(&mut config, args);
    init_logger(&config.logging.level);
    match &path {
        Some(path) => debug!("config: {}", path.display()),
        None => debug!("config: none found, using defaults"),
    }
    debug!("effective config: {config:?}");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &args.command {
        Command::Generate(g) => generate(&mut out, g, &config)?,
        Command::Contrast { foreground, background, large_text } => {
            contrast(&mut out, foreground, background, *large_text, &config)?;
        }
        Command::Mood { text } => mood(&mut out, &text.join(" "), &config)?,
        Command::Prompt { mood } => prompt(&mut out, mood)?,
    }

    out.flush().context("failed to flush stdout")
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("vibe: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use vibe_palette::Strategy;

    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    fn effective(argv: &[&str], config: Config) -> Config {
        let mut config = config;
        apply_overrides(&mut config, &args(argv));
        config
    }

    // ── Config file ───────────────────────────────────────────────────────

    #[test]
    fn explicit_config_is_loaded_and_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[logging]\nlevel = \"info\"\n").unwrap();
        let path_arg = path.to_str().unwrap();

        let (config, used) = load_config(&args(&["vibe", "--config", path_arg, "prompt", "x"])).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(used, Some(path));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let path_arg = path.to_str().unwrap();

        let err = load_config(&args(&["vibe", "--config", path_arg, "prompt", "x"])).unwrap_err();
        assert!(format!("{err:#}").starts_with("failed to load config"), "{err:#}");
    }

    // ── Overrides ─────────────────────────────────────────────────────────

    #[test]
    fn flags_override_config() {
        let mut base = Config::default();
        base.generation.seed = Some(1);
        base.logging.level = "error".into();

        let config = effective(
            &["vibe", "generate", "calm", "--strategy", "triadic", "--seed", "5", "-l", "debug"],
            base,
        );
        assert_eq!(config.generation.strategies, [Strategy::Triadic]);
        assert_eq!(config.generation.seed, Some(5));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn absent_flags_keep_config() {
        let mut base = Config::default();
        base.generation.seed = Some(3);
        base.generation.source = SourceKind::Mock;
        base.accessibility.large_text = true;

        let config = effective(&["vibe", "generate", "professional"], base.clone());
        assert_eq!(config.generation, base.generation);
        assert!(config.accessibility.large_text);
    }

    #[test]
    fn response_flag_selects_response_source() {
        let config = effective(&["vibe", "generate", "calm", "--response", "reply.json"], Config::default());
        assert_eq!(config.generation.source, SourceKind::Response);
        assert_eq!(config.generation.response_file, Some(PathBuf::from("reply.json")));
    }

    #[test]
    fn no_color_flag() {
        let config = effective(&["vibe", "mood", "calm", "--no-color"], Config::default());
        assert!(!config.output.color);
    }

    // ── Sources ───────────────────────────────────────────────────────────

    #[test]
    fn response_source_without_file_is_an_error() {
        let mut config = Config::default();
        config.generation.source = SourceKind::Response;
        let err = build_source(&config).err().unwrap();
        assert!(err.to_string().contains("--response FILE"), "{err}");
    }

    #[test]
    fn missing_reply_file_falls_back() {
        let mut config = Config::default();
        config.generation.source = SourceKind::Response;
        config.generation.response_file = Some(PathBuf::from("/nonexistent/reply.json"));
        let mut source = build_source(&config).unwrap();
        let palettes = generate_palettes(source.as_mut(), "calm");
        assert_eq!(palettes, vibe_palette::builtin::fallback_palettes());
    }

    #[test]
    fn synth_source_uses_configured_strategies() {
        let mut config = Config::default();
        config.generation.strategies = vec![Strategy::Monochromatic];
        let mut source = build_source(&config).unwrap();
        let palettes = source.palettes("calm").unwrap();
        assert_eq!(palettes.len(), 1);
        assert_eq!(palettes[0].name(), "Calm Monochromatic");
    }

    // ── Subcommands ───────────────────────────────────────────────────────

    fn plain() -> Config {
        let mut config = Config::default();
        config.output.color = false;
        config
    }

    #[test]
    fn generate_mock_text() {
        let mut config = plain();
        config.generation.source = SourceKind::Mock;
        let g = GenerateArgs {
            mood: "professional".into(),
            source: None,
            response: None,
            strategies: Vec::new(),
            seed: None,
            large_text: false,
        };
        let mut out = Vec::new();
        generate(&mut out, &g, &config).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Corporate Calm\n"));
        assert!(text.contains("Edgy Efficiency\n"));
    }

    #[test]
    fn contrast_rejects_bad_hex() {
        let err = contrast(&mut Vec::new(), "#12", "#fff", false, &plain()).unwrap_err();
        assert!(format!("{err:#}").starts_with("foreground: invalid color format"), "{err:#}");
    }

    #[test]
    fn mood_json_output() {
        let mut config = plain();
        config.output.format = OutputFormat::Json;
        let mut out = Vec::new();
        mood(&mut out, "stormy and angry", &config).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["keyword"], "angry");
        assert_eq!(v["color"], "#ff0000");
    }

    #[test]
    fn prompt_has_both_messages() {
        let mut out = Vec::new();
        prompt(&mut out, "cozy").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# system\nYou are a color palette generator"));
        assert!(text.contains("# user\nGenerate 8 color palettes"));
    }
}
