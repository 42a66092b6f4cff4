use anyhow::{Context, Result};
use scp_core::recording::lead_catalogue;

use crate::commands::{decode_recording_file, load_decoder};

/// List the twelve leads in display order.
pub fn list_leads_command(json: bool) -> Result<()> {
    let catalogue = lead_catalogue();

    if json {
        println!("{}", serde_json::to_string_pretty(&catalogue)?);
        return Ok(());
    }

    println!("Leads:");
    for lead in catalogue {
        let kind = if lead.derived { "derived" } else { "measured" };
        println!("- {} ({}, {})", lead.label, lead.name, kind);
    }

    Ok(())
}

/// Emit one lead as a JSON plot series (`lead`, `label`, `x`, `y`).
pub fn plot_command(file: &str, config: Option<&str>, lead: &str) -> Result<()> {
    let decoder = load_decoder(config)?;
    let (_bytes, decoded) = decode_recording_file(file, &decoder)?;
    let selection = decoded
        .recording
        .select(lead)
        .with_context(|| format!("Failed to select lead '{lead}'"))?;

    let series = selection.to_plot_series();
    println!("{}", serde_json::to_string(&series)?);

    Ok(())
}
