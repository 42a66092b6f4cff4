use anyhow::{Context, Result};

use crate::commands::load_decoder;
use crate::{read_recording, resolve_path};

/// Print the patient identification found in a recording.
pub fn patient_command(file: &str, config: Option<&str>, json: bool) -> Result<()> {
    let decoder = load_decoder(config)?;
    let path = resolve_path(file)?;
    let bytes = read_recording(&path)?;
    let patient = decoder
        .extract_patient(&bytes)
        .with_context(|| format!("Failed to extract patient from {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&patient)?);
        return Ok(());
    }

    println!("Patient:");
    println!("  First name: {}", patient.first_name);
    let last_name = if patient.last_name.is_empty() { "-" } else { patient.last_name.as_str() };
    println!("  Last name: {last_name}");
    println!("  ID: {}", patient.id);

    Ok(())
}
