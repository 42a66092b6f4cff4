use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{ConfigError, DecoderConfig};

/// On-disk encodings accepted for a decoder config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from a file extension (`json`, `yaml`, `yml`).
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        match ext {
            "json" => Ok(ConfigFormat::Json),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Parse and validate a config body in the given format.
pub fn parse_decoder_config(
    body: &str,
    format: ConfigFormat,
) -> Result<DecoderConfig, ConfigError> {
    let config: DecoderConfig = match format {
        ConfigFormat::Json => serde_json::from_str(body)?,
        ConfigFormat::Yaml => serde_yaml::from_str(body)?,
    };
    config.validate()?;
    Ok(config)
}

/// Load a decoder config from disk, choosing the parser by extension.
pub fn load_decoder_config(path: &Path) -> Result<DecoderConfig> {
    let format = ConfigFormat::from_path(path)
        .with_context(|| format!("Failed to load decoder config {}", path.display()))?;
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read decoder config at {}", path.display()))?;
    let config = parse_decoder_config(&body, format)
        .with_context(|| format!("Failed to parse decoder config {}", path.display()))?;
    Ok(config)
}
