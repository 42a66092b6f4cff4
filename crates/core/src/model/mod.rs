//! Core data model for decoded recordings.
//!
//! This module defines:
//! - `Lead`: the twelve standard ECG leads and their naming.
//! - `Samples` / `LeadSeries`: amplitudes for one named lead.
//! - `PatientRecord`: identification text recovered from the file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the twelve standard ECG leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lead {
    I,
    II,
    III,
    V1,
    V2,
    V3,
    V4,
    V5,
    V6,
    #[serde(rename = "aVR")]
    AVR,
    #[serde(rename = "aVL")]
    AVL,
    #[serde(rename = "aVF")]
    AVF,
}

/// Leads physically recorded by the device, in file order.
pub const MEASURED_LEADS: [Lead; 8] =
    [Lead::I, Lead::II, Lead::V1, Lead::V2, Lead::V3, Lead::V4, Lead::V5, Lead::V6];

/// Leads computed from I and II, in the order they are appended.
pub const DERIVED_LEADS: [Lead; 4] = [Lead::III, Lead::AVR, Lead::AVL, Lead::AVF];

/// Conventional display order used when listing leads to a user.
///
/// This is *not* the storage order of a `Recording`; see `Recording::leads`.
pub const DISPLAY_ORDER: [Lead; 12] = [
    Lead::I,
    Lead::II,
    Lead::III,
    Lead::V1,
    Lead::V2,
    Lead::V3,
    Lead::V4,
    Lead::V5,
    Lead::V6,
    Lead::AVR,
    Lead::AVL,
    Lead::AVF,
];

impl Lead {
    /// Short clinical name (e.g. `I`, `V3`, `aVR`).
    pub fn name(self) -> &'static str {
        match self {
            Lead::I => "I",
            Lead::II => "II",
            Lead::III => "III",
            Lead::V1 => "V1",
            Lead::V2 => "V2",
            Lead::V3 => "V3",
            Lead::V4 => "V4",
            Lead::V5 => "V5",
            Lead::V6 => "V6",
            Lead::AVR => "aVR",
            Lead::AVL => "aVL",
            Lead::AVF => "aVF",
        }
    }

    /// Label shown in lead selectors (e.g. `Lead aVR`).
    pub fn label(self) -> String {
        format!("Lead {}", self.name())
    }

    /// Whether the lead is computed rather than sampled.
    pub fn is_derived(self) -> bool {
        DERIVED_LEADS.contains(&self)
    }

    /// Resolve a short name or a display label to a lead.
    ///
    /// Matching is exact: `aVR` and `Lead aVR` resolve, `avr` does not.
    pub fn from_name(name: &str) -> Option<Self> {
        let short = name.strip_prefix("Lead ").unwrap_or(name);
        DISPLAY_ORDER.iter().copied().find(|lead| lead.name() == short)
    }
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lead {
    type Err = crate::decode::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lead::from_name(s).ok_or_else(|| crate::decode::DecodeError::UnknownLead(s.to_string()))
    }
}

/// Amplitudes of one lead.
///
/// Sampled leads and lead III are exact integers; the augmented leads
/// (aVR, aVL, aVF) involve a halving and are stored as reals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Samples {
    Integer(Vec<i32>),
    Real(Vec<f64>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::Integer(values) => values.len(),
            Samples::Real(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `index` widened to `f64`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<f64> {
        match self {
            Samples::Integer(values) => values.get(index).map(|v| f64::from(*v)),
            Samples::Real(values) => values.get(index).copied(),
        }
    }

    /// Table cell text for `index`; `None` past the end.
    ///
    /// Integers print without a fractional part; reals use `f64`'s shortest
    /// round-trip form (`-2.5`, `3`).
    pub fn format_at(&self, index: usize) -> Option<String> {
        match self {
            Samples::Integer(values) => values.get(index).map(|v| v.to_string()),
            Samples::Real(values) => values.get(index).map(|v| v.to_string()),
        }
    }

    /// All values widened to `f64`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            Samples::Integer(values) => values.iter().map(|v| f64::from(*v)).collect(),
            Samples::Real(values) => values.clone(),
        }
    }
}

/// Ordered amplitudes for one named lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadSeries {
    pub lead: Lead,
    pub samples: Samples,
}

impl LeadSeries {
    pub fn integer(lead: Lead, values: Vec<i32>) -> Self {
        Self { lead, samples: Samples::Integer(values) }
    }

    pub fn real(lead: Lead, values: Vec<f64>) -> Self {
        Self { lead, samples: Samples::Real(values) }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Patient identification recovered from the text region of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: String,
    pub first_name: String,
    /// Remainder of the name after the first word; may be empty.
    pub last_name: String,
}

impl PatientRecord {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self { id: id.into(), first_name: first_name.into(), last_name: last_name.into() }
    }

    /// First and last name joined by a space, without a trailing space when
    /// the last name is empty.
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    /// File stem used when exporting this patient's table (`<first name>`).
    pub fn export_stem(&self) -> &str {
        &self.first_name
    }

    /// The identification line written at the top of an exported table.
    pub fn table_line(&self) -> String {
        format!("Name: {} ID: {}", self.full_name(), self.id)
    }
}
