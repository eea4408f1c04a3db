//! Hex capture -> WAV conversion

use std::path::Path;
use std::time::Instant;
use crate::audio::WavAudio;
use crate::config::Config;
use crate::error::{WavHexError, Result};
use crate::hex::parse_document;
use super::ConversionReport;

#[derive(Debug, Clone)]
pub struct Decoder {
    sample_rate: u32,
}

impl Decoder {
    pub fn new(config: &Config) -> Self {
        Self { sample_rate: config.sample_rate() }
    }

    /// Convert a simulation capture into a 16-bit stereo WAV file.
    ///
    /// Short, undriven and malformed lines are skipped. If no frame survives,
    /// nothing is written and `NoValidFrames` is returned.
    pub fn process_file(&self, input_path: &Path, output_path: &Path) -> Result<ConversionReport> {
        let start_time = Instant::now();

        if !input_path.exists() {
            return Err(WavHexError::MissingSimulationOutput { path: input_path.to_path_buf() });
        }
        println!("Converting {} -> {}...", input_path.display(), output_path.display());

        let text = std::fs::read_to_string(input_path)?;
        let doc = parse_document(&text);

        log::debug!("Parsed {} frames, skipped {} lines ({})", doc.len(), doc.skipped.total(), doc.skipped);
        if doc.skipped.malformed > 0 {
            log::warn!("{} malformed lines in {} were skipped", doc.skipped.malformed, input_path.display());
        }

        if doc.is_empty() {
            return Err(WavHexError::NoValidFrames { path: input_path.to_path_buf() });
        }

        let audio = WavAudio::new_stereo(self.sample_rate, doc.to_frames())?;
        audio.save_to_file(output_path)?;

        Ok(ConversionReport {
            input_path: input_path.to_path_buf(),
            output_path: output_path.to_path_buf(),
            frames: doc.len(),
            sample_rate: self.sample_rate,
            skipped: doc.skipped,
            processing_time: start_time.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioData;
    use crate::hex::SkipStats;
    use ndarray::array;
    use tempfile::TempDir;

    #[test]
    fn test_decode_capture() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("capture.txt");
        let output = temp_dir.path().join("out.wav");
        std::fs::write(
            &input,
            "xxxxxxxx xxxxxxxx\nFFFF0000 7FFF0000\nZZZZZZZZ 00000000\n80001234 0002FFFF\n",
        ).unwrap();

        let report = Decoder::new(&Config::default()).process_file(&input, &output).unwrap();
        assert_eq!(report.frames, 2);
        assert_eq!(report.sample_rate, 44100);
        assert_eq!(report.skipped, SkipStats { short: 0, placeholder: 1, malformed: 1 });

        let audio = WavAudio::from_file(&output).unwrap();
        assert_eq!(audio.sample_rate(), 44100);
        assert_eq!(audio.channels(), 2);
        assert_eq!(audio.data(), &AudioData::Int16(array![[-1i16, 32767], [-32768, 2]]));
    }

    #[test]
    fn test_configured_sample_rate() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("capture.txt");
        let output = temp_dir.path().join("out.wav");
        std::fs::write(&input, "00010000 00010000\n").unwrap();

        let mut config = Config::default();
        config.decode.sample_rate = 48000;
        Decoder::new(&config).process_file(&input, &output).unwrap();

        assert_eq!(WavAudio::from_file(&output).unwrap().sample_rate(), 48000);
    }

    #[test]
    fn test_no_valid_frames_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("capture.txt");
        let output = temp_dir.path().join("out.wav");
        std::fs::write(&input, "xxxxxxxx xxxxxxxx\nZZZZZZZZ 00000000\n0000\n").unwrap();

        let err = Decoder::new(&Config::default()).process_file(&input, &output).unwrap_err();
        assert!(matches!(err, WavHexError::NoValidFrames { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_capture() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("output2.txt");
        let output = temp_dir.path().join("out.wav");

        let err = Decoder::new(&Config::default()).process_file(&input, &output).unwrap_err();
        assert!(matches!(err, WavHexError::MissingSimulationOutput { .. }));
        assert!(err.to_string().contains("output2.txt"));
        assert!(!output.exists());
    }
}
