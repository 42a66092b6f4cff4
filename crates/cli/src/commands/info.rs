use anyhow::Result;
use scp_core::model::PatientRecord;
use scp_core::recording::LeadStats;
use serde::Serialize;

use crate::commands::{decode_recording_file, load_decoder};
use crate::sha256_bytes;

#[derive(Debug, Serialize)]
pub struct RecordingInfo {
    pub file: String,
    pub size_bytes: usize,
    pub sha256: String,
    pub patient: Option<PatientRecord>,
    /// Why no patient was recovered, when it was not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_error: Option<String>,
    pub leads: Vec<LeadStats>,
}

/// Summarise a recording: file facts, patient outcome and per-lead stats.
pub fn recording_info(file: &str, config: Option<&str>) -> Result<RecordingInfo> {
    let decoder = load_decoder(config)?;
    let (bytes, decoded) = decode_recording_file(file, &decoder)?;
    let (patient, patient_error) = match decoded.patient {
        Ok(record) => (Some(record), None),
        Err(err) => (None, Some(err.to_string())),
    };
    Ok(RecordingInfo {
        file: file.to_string(),
        size_bytes: bytes.len(),
        sha256: sha256_bytes(&bytes),
        patient,
        patient_error,
        leads: decoded.recording.stats(),
    })
}

pub fn info_command(file: &str, config: Option<&str>, json: bool) -> Result<()> {
    let info = recording_info(file, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Recording Info");
    println!("==============");
    println!("File: {}", info.file);
    println!("Size: {} bytes", info.size_bytes);
    println!("SHA-256: {}", info.sha256);
    match (&info.patient, &info.patient_error) {
        (Some(p), _) => println!("Patient: {} (ID {})", p.full_name(), p.id),
        (None, Some(err)) => println!("Patient: unavailable ({err})"),
        (None, None) => println!("Patient: unavailable"),
    }
    println!();
    println!("Leads:");
    for stats in &info.leads {
        match (stats.min, stats.max, stats.mean) {
            (Some(min), Some(max), Some(mean)) => println!(
                "- {:<4} samples={} min={} max={} mean={:.2}",
                stats.lead.name(),
                stats.samples,
                min,
                max,
                mean
            ),
            _ => println!("- {:<4} samples=0", stats.lead.name()),
        }
    }

    Ok(())
}
