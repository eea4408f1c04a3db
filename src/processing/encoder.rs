//! WAV -> hex stimulus conversion

use std::path::Path;
use std::time::Instant;
use crate::audio::{AudioConverter, AudioFormat, WavAudio};
use crate::error::{WavHexError, Result};
use crate::hex::{encode_frames, SkipStats};
use super::ConversionReport;

#[derive(Debug, Clone, Default)]
pub struct Encoder;

impl Encoder {
    pub fn new() -> Self {
        Self
    }

    /// Convert a WAV file into one `LLLLLLLL RRRRRRRR` line per frame.
    ///
    /// Nothing is created when the input is missing or unreadable; the output
    /// text is rendered in memory and written in a single call.
    pub fn process_file(&self, input_path: &Path, output_path: &Path) -> Result<ConversionReport> {
        let start_time = Instant::now();

        if !input_path.exists() {
            return Err(WavHexError::MissingInput { path: input_path.to_path_buf() });
        }
        println!("Converting {} -> {}...", input_path.display(), output_path.display());

        let audio = WavAudio::from_file(input_path)?;
        if audio.format() != AudioFormat::Int16 {
            log::info!(
                "{} holds {} samples; peak-normalizing to int16",
                input_path.display(), audio.format().name()
            );
        }

        let pcm16 = AudioConverter::to_pcm16(audio.data());
        let frames = AudioConverter::to_stereo(pcm16)?;
        let text = encode_frames(frames.view());

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, text)?;

        Ok(ConversionReport {
            input_path: input_path.to_path_buf(),
            output_path: output_path.to_path_buf(),
            frames: frames.nrows(),
            sample_rate: audio.sample_rate(),
            skipped: SkipStats::default(),
            processing_time: start_time.elapsed(),
        })
    }
}
