use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Main CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Slugify each stdin line separately instead of the whole input at once
    pub per_line: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// How results are printed
    pub format: OutputFormat,
    /// Truncate slugs to this many bytes, breaking at hyphens when possible
    pub max_length: Option<usize>,
    /// Drop inputs that produce an empty slug
    pub skip_empty: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One result per line
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { per_line: true }
    }
}

impl CliConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        let config: CliConfig = serde_yaml::from_str(&content)
            .context(format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults if file doesn't exist
    pub fn load_or_default(path: Option<&PathBuf>) -> anyhow::Result<Self> {
        match path {
            Some(p) if p.exists() => Self::from_file(p),
            _ => Ok(Self::default()),
        }
    }
}
