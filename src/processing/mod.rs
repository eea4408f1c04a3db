//! Conversion Pipelines
//!
//! `Encoder` turns a WAV file into hex stimulus, `Decoder` turns a
//! simulation capture back into a WAV file. Both are single-pass batch jobs.

pub mod encoder;
pub mod decoder;
pub mod report;

pub use encoder::Encoder;
pub use decoder::Decoder;
pub use report::ConversionReport;
