//! Assembly of the twelve-lead recording and its tabular / plot renderings.
//!
//! Storage order is measured leads then derived leads:
//! `I, II, V1..V6, III, aVR, aVL, aVF`. Table columns follow that order.
//! Lookup by name goes through each series' own `Lead` tag, so it can never
//! disagree with positional iteration. `DISPLAY_ORDER` is only used to list
//! leads to a user.

use log::info;
use serde::{Deserialize, Serialize};

use crate::decode::{DecodeError, DecodeResult, DerivedLeads};
use crate::model::{Lead, LeadSeries, PatientRecord, DISPLAY_ORDER};

/// Patient line written when no patient record is available.
pub const UNKNOWN_PATIENT_LINE: &str = "Name: Unknown";

/// A complete twelve-lead recording decoded from one buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    leads: Vec<LeadSeries>,
}

impl Recording {
    /// Concatenate measured leads with the derived limb leads.
    pub fn assemble(measured: Vec<LeadSeries>, derived: DerivedLeads) -> Self {
        let mut leads = measured;
        leads.extend(derived.into_series());
        info!(
            "assembled recording: {} leads, {} samples per lead",
            leads.len(),
            leads.first().map(LeadSeries::len).unwrap_or(0)
        );
        Self { leads }
    }

    /// Leads in storage order.
    pub fn leads(&self) -> &[LeadSeries] {
        &self.leads
    }

    /// Look up a lead by identity.
    pub fn lead(&self, lead: Lead) -> Option<&LeadSeries> {
        self.leads.iter().find(|series| series.lead == lead)
    }

    /// Number of samples in the longest lead.
    pub fn max_len(&self) -> usize {
        self.leads.iter().map(LeadSeries::len).max().unwrap_or(0)
    }

    /// Resolve a lead by short name or display label and pair it with an
    /// index axis for plotting.
    pub fn select(&self, name: &str) -> DecodeResult<LeadSelection<'_>> {
        let lead = Lead::from_name(name).ok_or_else(|| DecodeError::UnknownLead(name.into()))?;
        let series = self.lead(lead).ok_or_else(|| DecodeError::UnknownLead(name.into()))?;
        Ok(LeadSelection { series, index: (0..series.len()).collect() })
    }

    /// Render the recording as comma-separated text.
    pub fn to_table(&self, patient: Option<&PatientRecord>) -> String {
        render_table(patient, &self.leads)
    }

    /// Per-lead summary statistics in storage order.
    pub fn stats(&self) -> Vec<LeadStats> {
        self.leads.iter().map(LeadStats::from_series).collect()
    }
}

/// A selected lead plus its sample-index axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadSelection<'a> {
    pub series: &'a LeadSeries,
    /// `0..N-1`, one entry per sample.
    pub index: Vec<usize>,
}

impl LeadSelection<'_> {
    /// Owned, serializable form handed to an external plotter.
    pub fn to_plot_series(&self) -> PlotSeries {
        PlotSeries {
            lead: self.series.lead,
            label: self.series.lead.label(),
            x: self.index.clone(),
            y: self.series.samples.to_f64_vec(),
        }
    }
}

/// `(name, sequence)` pair for plotting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    pub lead: Lead,
    pub label: String,
    pub x: Vec<usize>,
    pub y: Vec<f64>,
}

/// Entry in the lead catalogue shown by selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadInfo {
    pub name: String,
    pub label: String,
    pub derived: bool,
}

/// All twelve leads in display order.
pub fn lead_catalogue() -> Vec<LeadInfo> {
    DISPLAY_ORDER
        .iter()
        .map(|&lead| LeadInfo {
            name: lead.name().to_string(),
            label: lead.label(),
            derived: lead.is_derived(),
        })
        .collect()
}

/// Minimum, maximum and mean of one lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadStats {
    pub lead: Lead,
    pub samples: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl LeadStats {
    pub fn from_series(series: &LeadSeries) -> Self {
        let values = series.samples.to_f64_vec();
        let min = values.iter().copied().reduce(f64::min);
        let max = values.iter().copied().reduce(f64::max);
        let mean = if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        };
        Self { lead: series.lead, samples: values.len(), min, max, mean }
    }
}

/// Render leads as a patient line, a `CH1..CHn` header, then one row per
/// sample index up to the longest lead.
///
/// A lead shorter than the longest contributes empty fields for its missing
/// rows. Values are numeric, so no field escaping is done.
pub fn render_table(patient: Option<&PatientRecord>, leads: &[LeadSeries]) -> String {
    let mut out = String::new();
    match patient {
        Some(record) => out.push_str(&record.table_line()),
        None => out.push_str(UNKNOWN_PATIENT_LINE),
    }
    out.push('\n');

    let header: Vec<String> = (1..=leads.len()).map(|n| format!("CH{n}")).collect();
    out.push_str(&header.join(","));
    out.push('\n');

    let rows = leads.iter().map(LeadSeries::len).max().unwrap_or(0);
    for row in 0..rows {
        let fields: Vec<String> = leads
            .iter()
            .map(|series| series.samples.format_at(row).unwrap_or_default())
            .collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}
