use anyhow::{Context, Result};
use scp_core::config::{load_decoder_config, DecoderConfig};
use scp_core::services::{DecodedFile, ScpDecoder};

use crate::{read_recording, resolve_path};

/// Build a decoder from an optional config file path; defaults otherwise.
pub fn load_decoder(config: Option<&str>) -> Result<ScpDecoder> {
    let config = match config {
        Some(path) => load_decoder_config(&resolve_path(path)?)?,
        None => DecoderConfig::default(),
    };
    Ok(ScpDecoder::new(config))
}

/// Read and fully decode a recording file.
///
/// Returns the raw bytes alongside the decoded value so callers can report
/// file-level facts (size, digest) without a second read.
pub fn decode_recording_file(file: &str, decoder: &ScpDecoder) -> Result<(Vec<u8>, DecodedFile)> {
    let path = resolve_path(file)?;
    let bytes = read_recording(&path)?;
    let decoded = decoder
        .decode_file(&bytes)
        .with_context(|| format!("Failed to decode recording {}", path.display()))?;
    Ok((bytes, decoded))
}
