use scp_core::model::PatientRecord;
use scp_ecg::{export_file_name, read_recording, resolve_path, sha256_bytes};
use tempfile::tempdir;

#[test]
fn resolve_path_keeps_absolute_paths() {
    let tmp = tempdir().expect("tempdir");
    let abs = tmp.path().join("rest.scp");
    let resolved = resolve_path(abs.to_str().expect("utf8 path")).expect("resolve");
    assert_eq!(resolved, abs);
}

#[test]
fn resolve_path_joins_relative_paths_to_cwd() {
    let cwd = std::env::current_dir().expect("cwd");
    let resolved = resolve_path("uploads/rest.scp").expect("resolve");
    assert_eq!(resolved, cwd.join("uploads/rest.scp"));
}

#[test]
fn read_recording_reports_missing_file() {
    let tmp = tempdir().expect("tempdir");
    let err = read_recording(&tmp.path().join("missing.scp")).unwrap_err();
    assert!(err.to_string().contains("Failed to read recording"), "unexpected error: {err}");
}

#[test]
fn sha256_bytes_matches_known_hash() {
    let hash = sha256_bytes(b"abc");
    assert_eq!(hash, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
}

#[test]
fn export_file_name_uses_first_name_or_fallback() {
    let patient = PatientRecord::new("45", "Ali", "Veli");
    assert_eq!(export_file_name(Some(&patient)), "Ali.csv");
    assert_eq!(export_file_name(None), "Patient.csv");
}
