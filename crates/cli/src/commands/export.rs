use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use log::info;

use crate::commands::{decode_recording_file, load_decoder};
use crate::{export_file_name, resolve_path};

/// Export a recording as a comma-separated table.
///
/// Destination precedence: `--stdout`, then `--output`, then
/// `<out_dir>/<first name>.csv` (out_dir defaults to the current directory).
/// Returns the written path, or `None` when printing to stdout.
pub fn export_command(
    file: &str,
    config: Option<&str>,
    output: Option<&str>,
    out_dir: Option<&str>,
    stdout: bool,
) -> Result<Option<PathBuf>> {
    if output.is_some() && out_dir.is_some() {
        return Err(anyhow!("Specify either --output or --out-dir, not both"));
    }

    let decoder = load_decoder(config)?;
    let (_bytes, decoded) = decode_recording_file(file, &decoder)?;
    let table = decoded.to_table();

    if stdout {
        print!("{table}");
        return Ok(None);
    }

    let target = match output {
        Some(path) => resolve_path(path)?,
        None => {
            let dir = resolve_path(out_dir.unwrap_or("."))?;
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create output dir: {}", dir.display()))?;
            dir.join(export_file_name(decoded.patient()))
        }
    };

    fs::write(&target, &table)
        .with_context(|| format!("Failed to write table to {}", target.display()))?;
    info!("wrote {} rows to {}", decoded.recording.max_len(), target.display());

    println!("Exported recording:");
    println!("  Leads: {}", decoded.recording.leads().len());
    println!("  Samples per lead: {}", decoded.recording.max_len());
    println!("  Output: {}", target.display());

    Ok(Some(target))
}
