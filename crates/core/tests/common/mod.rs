#![allow(dead_code)]

use scp_core::config::WaveformLayout;
use scp_core::decode::waveform::required_len;

/// Where the patient text is written inside the leading text region.
pub const TEXT_OFFSET: usize = 16;

/// Smallest buffer holding all eight measured leads with the default layout.
pub fn full_len() -> usize {
    required_len(&WaveformLayout::default()).expect("default layout fits")
}

/// Number of samples between the first lead offset and the end of a full buffer.
pub fn stream_len() -> usize {
    (full_len() - WaveformLayout::default().first_lead_offset) / 2
}

/// Build a full-length buffer with an optional patient section and a
/// continuous sample stream starting at the first lead offset.
///
/// Leads overlap, so measured lead `k` sees `stream[k * 500..k * 500 + 5000]`.
pub fn build_buffer(section: Option<&str>, stream: &[i16]) -> Vec<u8> {
    let layout = WaveformLayout::default();
    let mut buf = vec![0u8; full_len()];
    if let Some(section) = section {
        let text = format!("SCPECG{section}1958");
        buf[TEXT_OFFSET..TEXT_OFFSET + text.len()].copy_from_slice(text.as_bytes());
    }
    for (j, value) in stream.iter().enumerate() {
        let at = layout.first_lead_offset + j * 2;
        buf[at..at + 2].copy_from_slice(&value.to_le_bytes());
    }
    buf
}

/// Deterministic stream covering positive, negative and extreme values.
pub fn sample_stream() -> Vec<i16> {
    let mut stream: Vec<i16> =
        (0..stream_len()).map(|j| ((j as i32 * 37) % 4001 - 2000) as i16).collect();
    stream[3] = i16::MIN;
    stream[4] = i16::MAX;
    stream
}
