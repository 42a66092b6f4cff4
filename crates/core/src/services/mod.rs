//! Services that drive the decoder end to end.

pub mod decoder;

pub use decoder::{DecodedFile, ScpDecoder};
