use std::ops::Range;

use log::{debug, warn};

use crate::config::WaveformLayout;
use crate::decode::{DecodeError, DecodeResult};
use crate::model::{LeadSeries, MEASURED_LEADS};

/// Bytes per stored sample (little-endian `i16`).
pub const BYTES_PER_SAMPLE: usize = 2;

/// Decode the eight measured leads using the device's default layout.
pub fn decode_measured_leads(buffer: &[u8]) -> DecodeResult<Vec<LeadSeries>> {
    decode_measured_leads_with(buffer, &WaveformLayout::default())
}

/// Decode the eight measured leads (I, II, V1..V6) described by `layout`.
///
/// Every lead's byte range is checked before any sample is read, so a
/// truncated buffer never yields partial data. Each stored value is the
/// negation of the raw sample, widened to `i32` so that `i16::MIN` survives.
pub fn decode_measured_leads_with(
    buffer: &[u8],
    layout: &WaveformLayout,
) -> DecodeResult<Vec<LeadSeries>> {
    let ranges = lead_ranges(buffer.len(), layout)?;

    let leads = MEASURED_LEADS
        .iter()
        .zip(ranges)
        .map(|(&lead, range)| {
            let start = range.start;
            let values: Vec<i32> = buffer[range]
                .chunks_exact(BYTES_PER_SAMPLE)
                .map(|pair| -i32::from(i16::from_le_bytes([pair[0], pair[1]])))
                .collect();
            debug!("decoded lead {} ({} samples at offset {})", lead, values.len(), start);
            LeadSeries::integer(lead, values)
        })
        .collect();

    Ok(leads)
}

/// Smallest buffer length that holds every measured lead under `layout`.
///
/// `None` when some lead ends beyond `usize::MAX`.
pub fn required_len(layout: &WaveformLayout) -> Option<usize> {
    let mut required = layout.min_file_len;
    for index in 0..MEASURED_LEADS.len() {
        required = required.max(layout.lead_range(index)?.end);
    }
    Some(required)
}

fn lead_ranges(actual: usize, layout: &WaveformLayout) -> DecodeResult<Vec<Range<usize>>> {
    if actual < layout.min_file_len {
        warn!("rejecting {actual}-byte buffer; minimum is {}", layout.min_file_len);
        return Err(DecodeError::TruncatedFile { lead: 0, required: layout.min_file_len, actual });
    }

    let mut ranges = Vec::with_capacity(MEASURED_LEADS.len());
    for index in 0..MEASURED_LEADS.len() {
        // An unaddressable end can never fit in a real buffer.
        let range = layout.lead_range(index).unwrap_or(usize::MAX..usize::MAX);
        if range.end > actual {
            warn!("lead {index} needs {} bytes; buffer has {actual}", range.end);
            return Err(DecodeError::TruncatedFile { lead: index, required: range.end, actual });
        }
        ranges.push(range);
    }
    Ok(ranges)
}
