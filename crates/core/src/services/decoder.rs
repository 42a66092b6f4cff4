use log::{debug, warn};

use crate::config::DecoderConfig;
use crate::decode::{
    decode_measured_leads_with, derive_limb_leads, extract_patient_with, DecodeError,
    DecodeResult,
};
use crate::model::{Lead, LeadSeries, PatientRecord, Samples};
use crate::recording::Recording;

/// Everything decoded from one buffer.
///
/// The patient section and the waveform are independent: a missing patient
/// section is kept as an error value next to a valid recording.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFile {
    pub patient: Result<PatientRecord, DecodeError>,
    pub recording: Recording,
}

impl DecodedFile {
    pub fn patient(&self) -> Option<&PatientRecord> {
        self.patient.as_ref().ok()
    }

    /// Table text with the patient line when one was recovered.
    pub fn to_table(&self) -> String {
        self.recording.to_table(self.patient())
    }
}

/// Decoder pipeline parameterised by a `DecoderConfig`.
///
/// Holds no per-buffer state, so one instance can serve any number of
/// buffers, including concurrently.
#[derive(Debug, Clone, Default)]
pub struct ScpDecoder {
    config: DecoderConfig,
}

impl ScpDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn extract_patient(&self, buffer: &[u8]) -> DecodeResult<PatientRecord> {
        extract_patient_with(buffer, &self.config.markers)
    }

    /// Decode the measured leads, derive the limb leads and assemble them.
    pub fn decode_recording(&self, buffer: &[u8]) -> DecodeResult<Recording> {
        let measured = decode_measured_leads_with(buffer, &self.config.layout)?;
        let lead_i = integer_samples(&measured, Lead::I).unwrap_or_default();
        let lead_ii = integer_samples(&measured, Lead::II).unwrap_or_default();
        let derived = derive_limb_leads(lead_i, lead_ii);
        Ok(Recording::assemble(measured, derived))
    }

    /// Decode patient text and waveform from one buffer.
    ///
    /// Fails only when the waveform cannot be decoded.
    pub fn decode_file(&self, buffer: &[u8]) -> DecodeResult<DecodedFile> {
        let patient = self.extract_patient(buffer);
        match &patient {
            Ok(record) => debug!("patient id {} recovered", record.id),
            Err(err) => warn!("no patient record: {err}"),
        }
        let recording = self.decode_recording(buffer)?;
        Ok(DecodedFile { patient, recording })
    }
}

fn integer_samples(leads: &[LeadSeries], lead: Lead) -> Option<&[i32]> {
    leads.iter().find(|series| series.lead == lead).and_then(|series| match &series.samples {
        Samples::Integer(values) => Some(values.as_slice()),
        Samples::Real(_) => None,
    })
}
