use std::path::Path;

use almanac::Language;
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use tracing::debug;

/// Top-level almanac configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Default language for weekday and month names. Codes match
    /// case-insensitively; empty or unknown codes fall back to English.
    #[serde(default, deserialize_with = "language_code")]
    pub language: Language,

    /// Template used by `format` when none is given on the command line.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "%D".to_string()
}

fn language_code<'de, D>(deserializer: D) -> std::result::Result<Language, D::Error>
where
    D: Deserializer<'de>,
{
    let code = String::deserialize(deserializer)?;
    Ok(Language::from_code(&code).unwrap_or_else(|| {
        debug!(
            code = %code,
            fallback = Language::default().code(),
            "unrecognized language code in config"
        );
        Language::default()
    }))
}

impl AlmanacConfig {
    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_toml(&toml_str)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("failed to parse TOML config")
    }
}
