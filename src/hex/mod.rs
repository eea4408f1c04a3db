//! Hex Word Module
//!
//! Bit layout of samples on the simulated 32-bit bus and the text
//! format used for testbench stimulus and capture files.

pub mod word;
pub mod text;

pub use word::{widen, narrow};
pub use text::{encode_frames, format_frame, parse_document, parse_line, HexDocument, LineOutcome, SkipStats};
