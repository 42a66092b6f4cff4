//! scp-core
//!
//! Core library for decoding fixed-layout SCP-ECG recordings.
//!
//! This crate defines the data model (leads, series, patient records), the
//! byte-level decoders, derived-lead arithmetic, recording assembly and
//! rendering, and the decoder configuration.
//!
//! All substantive logic lives here so it is fully testable and reusable
//! from multiple frontends (CLI, services, etc.).

pub mod config;
pub mod decode;
pub mod model;
pub mod recording;
pub mod services;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
