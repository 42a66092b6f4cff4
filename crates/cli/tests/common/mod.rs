#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Length of a recording holding all eight measured leads.
pub const RECORDING_LEN: usize = 18_000;

/// Synthetic recording: optional patient section, then a ramp of samples
/// starting at byte 1000.
pub fn recording_bytes(section: Option<&str>) -> Vec<u8> {
    let mut buf = vec![0u8; RECORDING_LEN];
    if let Some(section) = section {
        let text = format!("SCPECG{section}1958");
        buf[8..8 + text.len()].copy_from_slice(text.as_bytes());
    }
    for j in 0..(RECORDING_LEN - 1000) / 2 {
        let value = (j % 200) as i16 - 100;
        let at = 1000 + j * 2;
        buf[at..at + 2].copy_from_slice(&value.to_le_bytes());
    }
    buf
}

pub fn write_recording(dir: &Path, name: &str, section: Option<&str>) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, recording_bytes(section)).expect("write recording");
    path
}
