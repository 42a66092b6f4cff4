use serde::{Deserialize, Serialize};

use crate::model::{Lead, LeadSeries};

/// The four limb leads computed from leads I and II.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedLeads {
    pub iii: Vec<i32>,
    pub avr: Vec<f64>,
    pub avl: Vec<f64>,
    pub avf: Vec<f64>,
}

impl DerivedLeads {
    /// Named series in append order: III, aVR, aVL, aVF.
    pub fn into_series(self) -> Vec<LeadSeries> {
        vec![
            LeadSeries::integer(Lead::III, self.iii),
            LeadSeries::real(Lead::AVR, self.avr),
            LeadSeries::real(Lead::AVL, self.avl),
            LeadSeries::real(Lead::AVF, self.avf),
        ]
    }
}

/// Compute III, aVR, aVL and aVF pointwise from I and II.
///
/// - `III = II - I`
/// - `aVR = -(I + II) / 2`
/// - `aVL = (I - III) / 2`
/// - `aVF = (II + III) / 2`
///
/// Arithmetic runs in `i64`, so the real leads are exact for any `i32`
/// input. III is stored as `i32` and saturates when `II - I` leaves that
/// range, which decoded device samples (at most 16 bits plus sign) never do.
///
/// Inputs are expected to have equal length; if they do not, the output is
/// as long as the shorter one.
pub fn derive_limb_leads(lead_i: &[i32], lead_ii: &[i32]) -> DerivedLeads {
    let len = lead_i.len().min(lead_ii.len());

    let mut derived = DerivedLeads {
        iii: Vec::with_capacity(len),
        avr: Vec::with_capacity(len),
        avl: Vec::with_capacity(len),
        avf: Vec::with_capacity(len),
    };

    for (&i, &ii) in lead_i.iter().zip(lead_ii) {
        let (i, ii) = (i64::from(i), i64::from(ii));
        let iii = ii - i;
        derived.iii.push(saturate_i32(iii));
        derived.avr.push(half(-(i + ii)));
        derived.avl.push(half(i - iii));
        derived.avf.push(half(ii + iii));
    }

    derived
}

fn saturate_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

// Inputs stay below 2^34 in magnitude, so the cast is exact.
fn half(value: i64) -> f64 {
    value as f64 / 2.0
}
