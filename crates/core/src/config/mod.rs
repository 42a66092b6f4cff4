//! Decoder configuration.
//!
//! The defaults reproduce the one device layout this crate understands.
//! A config file only exists to adjust those constants for a sibling
//! device firmware without recompiling; it is never required.
//!
//! - `MarkerConfig`: literal markers bracketing the patient section.
//! - `WaveformLayout`: where each measured lead lives in the file.
//! - `DecoderConfig`: both of the above plus a format version.

mod loader;

use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use loader::{load_decoder_config, parse_decoder_config, ConfigFormat};

/// Current config format version written by `DecoderConfig::default`.
pub const CONFIG_VERSION: &str = "0.1.0";

/// Error type for configuration parsing and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unsupported config format '{0}'; expected json, yaml or yml")]
    UnsupportedFormat(String),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Literal text markers bracketing the patient section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Marker preceding the patient section.
    pub start: String,
    /// Marker terminating the patient section (searched after `start`).
    pub end: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self { start: "SCPECG".to_string(), end: "1958".to_string() }
    }
}

/// Fixed byte layout of the measured leads.
///
/// Lead `k` starts at `first_lead_offset + k * lead_stride` and holds
/// `samples_per_lead` little-endian `i16` samples. With the defaults the
/// stride is shorter than a lead's byte length, so consecutive leads
/// overlap; that is how the device writes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveformLayout {
    pub first_lead_offset: usize,
    pub lead_stride: usize,
    pub samples_per_lead: usize,
    /// Buffers shorter than this are rejected before any bounds check.
    pub min_file_len: usize,
}

impl Default for WaveformLayout {
    fn default() -> Self {
        Self {
            first_lead_offset: 1000,
            lead_stride: 1000,
            samples_per_lead: 5000,
            min_file_len: 100,
        }
    }
}

impl WaveformLayout {
    /// Byte offset of measured lead `index`, or `None` if it overflows `usize`.
    pub fn lead_offset(&self, index: usize) -> Option<usize> {
        index.checked_mul(self.lead_stride)?.checked_add(self.first_lead_offset)
    }

    /// Number of bytes occupied by one lead's samples.
    pub fn lead_byte_len(&self) -> Option<usize> {
        self.samples_per_lead.checked_mul(crate::decode::waveform::BYTES_PER_SAMPLE)
    }

    /// Byte range of measured lead `index` within a file.
    pub fn lead_range(&self, index: usize) -> Option<Range<usize>> {
        let start = self.lead_offset(index)?;
        let end = start.checked_add(self.lead_byte_len()?)?;
        Some(start..end)
    }
}

/// Serializable decoder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Config format version, not a device firmware version.
    #[serde(default = "default_config_version")]
    pub config_version: String,
    #[serde(default)]
    pub markers: MarkerConfig,
    #[serde(default)]
    pub layout: WaveformLayout,
}

fn default_config_version() -> String {
    CONFIG_VERSION.to_string()
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            config_version: default_config_version(),
            markers: MarkerConfig::default(),
            layout: WaveformLayout::default(),
        }
    }
}

impl DecoderConfig {
    /// Reject values that would make decoding meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.markers.start.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "markers.start",
                reason: "must not be empty".into(),
            });
        }
        if self.markers.end.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "markers.end",
                reason: "must not be empty".into(),
            });
        }
        if self.layout.samples_per_lead == 0 {
            return Err(ConfigError::InvalidValue {
                field: "layout.samples_per_lead",
                reason: "must be greater than zero".into(),
            });
        }
        if self.layout.lead_stride == 0 {
            return Err(ConfigError::InvalidValue {
                field: "layout.lead_stride",
                reason: "must be greater than zero".into(),
            });
        }
        if crate::decode::waveform::required_len(&self.layout).is_none() {
            return Err(ConfigError::InvalidValue {
                field: "layout",
                reason: "lead offsets overflow the addressable file size".into(),
            });
        }
        Ok(())
    }
}
