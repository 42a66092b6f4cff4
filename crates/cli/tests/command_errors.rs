mod common;

use scp_ecg::commands::{
    export_command, init_config_command, load_decoder, patient_command, plot_command,
    recording_info,
};
use tempfile::tempdir;

use common::{recording_bytes, write_recording};

#[test]
fn patient_errors_when_markers_missing() {
    let dir = tempdir().unwrap();
    let file = write_recording(dir.path(), "anon.scp", None);
    let err = patient_command(file.to_str().unwrap(), None, false).unwrap_err();
    assert!(err.to_string().contains("Failed to extract patient"), "unexpected error: {err}");
    assert!(format!("{err:#}").contains("Marker 'SCPECG' not found"));
}

#[test]
fn export_errors_on_truncated_recording() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.scp");
    let mut bytes = recording_bytes(Some(" Ali Veli 45 "));
    bytes.truncate(common::RECORDING_LEN - 1);
    std::fs::write(&path, bytes).unwrap();

    let err = export_command(path.to_str().unwrap(), None, None, None, true).unwrap_err();
    assert!(err.to_string().contains("Failed to decode recording"));
    assert!(format!("{err:#}").contains("lead 7"), "unexpected error: {err:#}");
}

#[test]
fn export_rejects_output_and_out_dir_together() {
    let err = export_command("rest.scp", None, Some("a.csv"), Some("out"), false).unwrap_err();
    assert!(err.to_string().contains("either --output or --out-dir"));
}

#[test]
fn plot_errors_on_unknown_lead() {
    let dir = tempdir().unwrap();
    let file = write_recording(dir.path(), "rest.scp", Some(" Ali Veli 45 "));
    let err = plot_command(file.to_str().unwrap(), None, "Lead VII").unwrap_err();
    assert!(err.to_string().contains("Failed to select lead 'Lead VII'"));
    assert!(format!("{err:#}").contains("Unknown lead 'Lead VII'"));
}

#[test]
fn info_errors_when_file_missing() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.scp");
    let err = recording_info(missing.to_str().unwrap(), None).unwrap_err();
    assert!(err.to_string().contains("Failed to read recording"));
}

#[test]
fn load_decoder_errors_on_corrupt_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("decoder.json");
    std::fs::write(&path, "not-json").unwrap();
    let err = load_decoder(Some(path.to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("Failed to parse decoder config"));
}

#[test]
fn init_config_refuses_to_overwrite_without_force() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("decoder.json");
    std::fs::write(&path, "{}").unwrap();
    let err = init_config_command(path.to_str().unwrap(), false).unwrap_err();
    assert!(err.to_string().contains("--force"));
    init_config_command(path.to_str().unwrap(), true).unwrap();
}
