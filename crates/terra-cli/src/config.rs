use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use terra_crypto::DEFAULT_CHUNK_SIZE;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "terrahash.toml";

/// Top-level configuration (loaded from terrahash.toml).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerraConfig {
    pub hashing: HashingConfig,
    pub output: OutputConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    /// Read size for files and stdin, in bytes.
    pub chunk_size: usize,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format when `--format` is not given.
    pub format: OutputFormat,
    /// Print the intermediate digests as well as the composite.
    pub trace: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl TerraConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.hashing.chunk_size == 0 {
            anyhow::bail!("hashing.chunk_size must be greater than zero");
        }
        Ok(())
    }

    /// Load configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] when
    /// no path is given. A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let explicit = path.is_some();
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        if !path.exists() {
            if explicit {
                tracing::warn!("config file not found: {}  (using defaults)", path.display());
            }
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("parsing config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
