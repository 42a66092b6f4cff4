//! Byte-level decoding of fixed-layout SCP-ECG files.
//!
//! This module provides:
//! - `metadata`: the marker scan that recovers patient identification text.
//! - `waveform`: fixed-offset extraction of the measured leads.
//! - `derived`: the limb-lead arithmetic (III, aVR, aVL, aVF).
//!
//! Every operation is a pure function over a borrowed buffer.

pub mod derived;
pub mod metadata;
pub mod waveform;

use thiserror::Error;

pub use derived::{derive_limb_leads, DerivedLeads};
pub use metadata::{extract_patient, extract_patient_with};
pub use waveform::{decode_measured_leads, decode_measured_leads_with};

/// Error type for decoding a recording buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// One of the two text markers bracketing the patient section is absent.
    #[error("Marker '{marker}' not found")]
    MarkerNotFound { marker: String },

    /// Both markers were found but no admissible name/id pair lies between them.
    #[error("Patient information not found")]
    PatientInfoNotFound,

    /// The buffer ends before the byte range required by `lead`.
    ///
    /// `lead` is the 0-based measured-lead index; a buffer below the sanity
    /// minimum is reported against lead 0.
    #[error("Truncated file: lead {lead} needs {required} bytes but only {actual} are available")]
    TruncatedFile { lead: usize, required: usize, actual: usize },

    /// A lead name did not resolve to any of the twelve leads.
    #[error("Unknown lead '{0}'")]
    UnknownLead(String),
}

/// Convenience result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
