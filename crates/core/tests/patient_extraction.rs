mod common;

use scp_core::config::MarkerConfig;
use scp_core::decode::{extract_patient, extract_patient_with, DecodeError};

use common::build_buffer;

#[test]
fn missing_start_marker_is_reported() {
    let err = extract_patient(b"no markers here, just Ali Veli 45 1958").unwrap_err();
    assert_eq!(err, DecodeError::MarkerNotFound { marker: "SCPECG".into() });
}

#[test]
fn missing_end_marker_is_reported() {
    let err = extract_patient(b"\x01\x02SCPECG Ali Veli 45 \x00\x00").unwrap_err();
    assert_eq!(err, DecodeError::MarkerNotFound { marker: "1958".into() });
}

#[test]
fn extracts_name_and_id_between_markers() {
    let record = extract_patient(b"SCPECGAli Veli 451958").unwrap();
    assert_eq!(record.first_name, "Ali");
    assert_eq!(record.last_name, "Veli");
    assert_eq!(record.id, "45");
}

#[test]
fn single_character_tokens_are_skipped() {
    let err = extract_patient(b"SCPECGX 71958").unwrap_err();
    assert_eq!(err, DecodeError::PatientInfoNotFound);

    let record = extract_patient(b"SCPECG A Ali B Veli 7 45 1958").unwrap();
    assert_eq!(record.full_name(), "Ali Veli");
    assert_eq!(record.id, "45");
}

#[test]
fn name_without_id_is_not_found() {
    let err = extract_patient(b"SCPECG Ali Veli 1958").unwrap_err();
    assert_eq!(err, DecodeError::PatientInfoNotFound);
}

#[test]
fn invalid_utf8_acts_as_a_separator() {
    let record = extract_patient(b"SCPECG\xffAli\xfe\xfdVeli\xc3\x2845\xff1958").unwrap();
    assert_eq!(record.first_name, "Ali");
    assert_eq!(record.last_name, "Veli");
    assert_eq!(record.id, "45");
}

#[test]
fn extraction_works_inside_a_binary_recording() {
    let buf = build_buffer(Some("\0\0Mehmet\0Demir\0\x0298765\0"), &common::sample_stream());
    let record = extract_patient(&buf).unwrap();
    assert_eq!(record.first_name, "Mehmet");
    assert_eq!(record.last_name, "Demir");
    assert_eq!(record.id, "98765");
    assert_eq!(record.table_line(), "Name: Mehmet Demir ID: 98765");
}

#[test]
fn custom_markers_are_honoured() {
    let markers = MarkerConfig { start: "PATIENT".into(), end: "END".into() };
    let record = extract_patient_with(b"xxPATIENT Jane Doe 31 END", &markers).unwrap();
    assert_eq!(record.full_name(), "Jane Doe");
    assert_eq!(record.id, "31");

    let err = extract_patient_with(b"SCPECG Ali 45 1958", &markers).unwrap_err();
    assert_eq!(err, DecodeError::MarkerNotFound { marker: "PATIENT".into() });
}
