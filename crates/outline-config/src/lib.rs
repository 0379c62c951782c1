use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid input pattern '{pattern}': {source}")]
    InputPatternError {
        pattern: String,
        source: glob::PatternError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown output format '{0}' (expected 'outline' or 'json')")]
pub struct UnknownFormat(pub String);

/// How the CLI prints parsed documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Canonical outline notation
    #[default]
    Outline,
    Json,
}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "outline" => Ok(OutputFormat::Outline),
            "json" => Ok(OutputFormat::Json),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Columns between tab stops when measuring indentation
    pub tab_width: usize,
    /// Alpha-sort documents and their entities before printing
    pub sort: bool,
    pub format: OutputFormat,
    /// Glob patterns read when no files are given on the command line
    pub inputs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Same as outline_engine::IndentPolicy::DEFAULT_TAB_WIDTH.
            tab_width: 4,
            sort: true,
            format: OutputFormat::default(),
            inputs: Vec::new(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/outline");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expand the `inputs` patterns into a sorted, de-duplicated file list.
    ///
    /// Shell variables and tilde are expanded before globbing. Unreadable
    /// matches are skipped.
    pub fn resolve_inputs(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut files = Vec::new();
        for pattern in &self.inputs {
            let expanded = Self::expand_pattern(pattern);
            let matches = glob::glob(&expanded).map_err(|source| {
                ConfigError::InputPatternError {
                    pattern: pattern.clone(),
                    source,
                }
            })?;
            files.extend(matches.filter_map(Result::ok).filter(|p| p.is_file()));
        }
        files.sort();
        files.dedup();
        Ok(files)
    }

    fn expand_pattern(pattern: &str) -> String {
        match shellexpand::full(pattern) {
            Ok(expanded) => expanded.into_owned(),
            Err(_) => pattern.to_string(),
        }
    }
}
