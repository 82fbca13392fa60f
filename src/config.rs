// SPDX-License-Identifier: MIT
//
// vibe.toml — persistent defaults for the CLI.
//
// Every section and field is optional; anything missing takes its default.
//
//   [generation]
//   source = "synth"                 # synth | mock | response
//   strategies = ["analogous", "triadic"]
//   seed = 42                        # omit for unjittered palettes
//   response_file = "reply.json"     # used by source = "response"
//
//   [accessibility]
//   large_text = false
//
//   [output]
//   format = "text"                  # text | json
//   color = true
//
//   [logging]
//   level = "warn"
//
// Search order when --config is not given: ./vibe.toml, then
// <config dir>/vibe/config.toml (e.g. ~/.config/vibe/config.toml). The first
// file that exists is used; none at all means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vibe_palette::Strategy;

use crate::cli::{OutputFormat, SourceKind};

const APP_NAME: &str = "vibe";
const LOCAL_FILE_NAME: &str = "vibe.toml";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generation: GenerationConfig,
    pub accessibility: AccessibilityConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub source: SourceKind,
    /// Empty means every strategy.
    pub strategies: Vec<Strategy>,
    pub seed: Option<u32>,
    pub response_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityConfig {
    /// Judge pairings against the large-text thresholds.
    pub large_text: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Truecolor swatches in text output.
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `env_logger` filter; `RUST_LOG` wins when set.
    pub level: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Synth,
            strategies: Strategy::all().to_vec(),
            seed: None,
            response_file: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: OutputFormat::Text, color: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string() }
    }
}

fn first_existing(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|path| path.is_file())
}

/// `<config dir>/vibe/config.toml`, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// The first default location that exists, if any.
    pub fn default_path() -> Option<PathBuf> {
        let candidates = std::iter::once(PathBuf::from(LOCAL_FILE_NAME)).chain(user_config_path());
        first_existing(candidates)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn parse(s: &str) -> Result<Config, ConfigError> {
        Config::parse(s, Path::new("test.toml"))
    }

    fn scratch(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.generation.source, SourceKind::Synth);
        assert_eq!(config.generation.strategies, Strategy::all());
        assert_eq!(config.generation.seed, None);
        assert!(!config.accessibility.large_text);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.color);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = parse(
            r#"
            [generation]
            strategies = ["triadic"]
            seed = 9

            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.generation.strategies, [Strategy::Triadic]);
        assert_eq!(config.generation.seed, Some(9));
        assert_eq!(config.generation.source, SourceKind::Synth);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.color);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn full_file() {
        let config = parse(
            r#"
            [generation]
            source = "response"
            response_file = "reply.json"

            [accessibility]
            large_text = true

            [output]
            color = false

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.generation.source, SourceKind::Response);
        assert_eq!(config.generation.response_file, Some(PathBuf::from("reply.json")));
        assert!(config.accessibility.large_text);
        assert!(!config.output.color);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn unknown_strategy_is_an_error() {
        let err = parse("[generation]\nstrategies = [\"tetradic\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config test.toml"), "{err}");
    }

    #[test]
    fn load_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = scratch(&dir, "vibe.toml", "[logging]\nlevel = \"trace\"\n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(dir.path().join("vibe.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn first_existing_skips_missing() {
        let dir = TempDir::new().unwrap();
        let user = scratch(&dir, "config.toml", "[output]\nformat = \"json\"\n");
        let found = first_existing([dir.path().join("vibe.toml"), user.clone()]);
        assert_eq!(found, Some(user));
    }

    #[test]
    fn first_existing_prefers_earlier() {
        let dir = TempDir::new().unwrap();
        let local = scratch(&dir, "vibe.toml", "");
        let user = scratch(&dir, "config.toml", "");
        assert_eq!(first_existing([local.clone(), user]), Some(local));
    }

    #[test]
    fn first_existing_ignores_directories() {
        let dir = TempDir::new().unwrap();
        assert_eq!(first_existing([dir.path().to_path_buf()]), None);
    }

    #[test]
    fn user_config_path_shape() {
        if let Some(path) = user_config_path() {
            assert!(path.ends_with("vibe/config.toml"), "{}", path.display());
        }
    }
}
