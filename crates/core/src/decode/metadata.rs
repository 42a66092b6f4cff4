use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::config::MarkerConfig;
use crate::decode::{DecodeError, DecodeResult};
use crate::model::PatientRecord;

/// A run of Unicode decimal digits (`Nd`), in any script.
static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("Invalid numeric token regex"));

/// Extract patient identification using the device's default markers.
pub fn extract_patient(buffer: &[u8]) -> DecodeResult<PatientRecord> {
    extract_patient_with(buffer, &MarkerConfig::default())
}

/// Extract patient identification from the text bracketed by `markers`.
///
/// The buffer is mostly binary sample data, so it is decoded lossily: invalid
/// UTF-8 becomes U+FFFD, which then acts as a token separator.
///
/// Between the markers, tokens of one character are skipped. Other tokens
/// accumulate into the name until the first all-digit token, which becomes
/// the id; everything after it is ignored. Digits of any script count.
pub fn extract_patient_with(buffer: &[u8], markers: &MarkerConfig) -> DecodeResult<PatientRecord> {
    let text = String::from_utf8_lossy(buffer);

    let start = text
        .find(markers.start.as_str())
        .ok_or_else(|| DecodeError::MarkerNotFound { marker: markers.start.clone() })?;
    let after_start = &text[start + markers.start.len()..];
    let end = after_start
        .find(markers.end.as_str())
        .ok_or_else(|| DecodeError::MarkerNotFound { marker: markers.end.clone() })?;
    let section = &after_start[..end];
    debug!("patient section spans {} bytes after offset {}", section.len(), start);

    let mut name = String::new();
    let mut id: Option<&str> = None;
    for token in section.split(|c: char| !c.is_alphanumeric()) {
        if token.chars().count() <= 1 {
            continue;
        }
        if NUMERIC_TOKEN.is_match(token) {
            id = Some(token);
            break;
        }
        if !name.is_empty() {
            name.push(' ');
        }
        name.push_str(token);
    }

    let (first_name, last_name) = match name.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest),
        None => (name.as_str(), ""),
    };

    match id {
        Some(id) if !first_name.is_empty() => Ok(PatientRecord::new(id, first_name, last_name)),
        _ => Err(DecodeError::PatientInfoNotFound),
    }
}
