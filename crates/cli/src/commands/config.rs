use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use scp_core::config::DecoderConfig;

use crate::resolve_path;

/// Write the default decoder config as pretty JSON.
pub fn init_config_command(output: &str, force: bool) -> Result<PathBuf> {
    let path = resolve_path(output)?;
    if path.exists() && !force {
        return Err(anyhow!(
            "Config already exists at {}; pass --force to overwrite",
            path.display()
        ));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(&DecoderConfig::default())?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write decoder config: {}", path.display()))?;

    println!("Wrote decoder config: {}", path.display());
    Ok(path)
}
