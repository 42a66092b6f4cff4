use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

pub mod commands;

/// File stem used for exported tables when no patient name was recovered.
pub const FALLBACK_EXPORT_STEM: &str = "Patient";

/// Resolve a possibly relative path against the current working directory.
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let p = Path::new(path);
    if p.is_absolute() {
        Ok(p.to_path_buf())
    } else {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        Ok(cwd.join(p))
    }
}

/// Read an entire recording file into memory.
pub fn read_recording(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read recording at {}", path.display()))
}

/// Compute the SHA-256 hash of a byte buffer and return it as a hex string.
pub fn sha256_bytes(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{:x}", digest)
}

/// File name for an exported table: `<first name>.csv`, or `Patient.csv`.
pub fn export_file_name(patient: Option<&scp_core::model::PatientRecord>) -> String {
    let stem = patient
        .map(|p| p.export_stem())
        .filter(|stem| !stem.is_empty())
        .unwrap_or(FALLBACK_EXPORT_STEM);
    format!("{stem}.csv")
}
