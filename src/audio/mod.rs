//! Audio Container Module
//!
//! Reads WAV files in any common PCM width and writes 16-bit stereo WAV files.
//! Conversion to 16-bit stereo frames lives in `converter`.

pub mod wav;
pub mod converter;

pub use wav::{WavAudio, AudioFormat, AudioHeader, AudioData};
pub use converter::AudioConverter;
