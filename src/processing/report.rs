//! Conversion result reporting

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use crate::hex::SkipStats;

/// Outcome of one successful conversion run
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Stereo frames written to the output
    pub frames: usize,
    /// Sample rate of the source (encode) or of the written file (decode)
    pub sample_rate: u32,
    /// Lines dropped while decoding; always zero when encoding
    pub skipped: SkipStats,
    pub processing_time: Duration,
}

impl ConversionReport {
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames as f64 / self.sample_rate as f64
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frames: {} ({:.2}s at {} Hz)", self.frames, self.duration_seconds(), self.sample_rate)?;
        if self.skipped.total() > 0 {
            writeln!(f, "Skipped lines: {} ({})", self.skipped.total(), self.skipped)?;
        }
        write!(f, "Time: {:.3}s", self.processing_time.as_secs_f64())
    }
}
