//! Audio Format Converter - 16-bit normalization and channel layout

use ndarray::{Array2, Axis, concatenate};
use crate::audio::AudioData;
use crate::error::{WavHexError, Result};

const PCM16_PEAK: f64 = 32767.0;

pub struct AudioConverter;

impl AudioConverter {
    /// Convert any supported container width to 16-bit signed frames.
    ///
    /// 16-bit data passes through untouched. Anything else is peak-normalized:
    /// `sample / max(|sample|) * 32767`, truncated toward zero. Integer sources are
    /// scaled in f64 and float sources in f32, so the result is lossy for them.
    pub fn to_pcm16(data: &AudioData) -> Array2<i16> {
        match data {
            AudioData::Int16(frames) => frames.clone(),
            AudioData::Int(frames) => {
                let peak = frames.iter().map(|&s| (s as i64).abs()).max().unwrap_or(0) as f64;
                frames.mapv(|s| (s as f64 / peak * PCM16_PEAK) as i16)
            }
            AudioData::Float(frames) => {
                let peak = frames.iter().fold(0.0f32, |p, &s| p.max(s.abs()));
                frames.mapv(|s| (s / peak * PCM16_PEAK as f32) as i16)
            }
        }
    }

    /// Fan mono out to both channels; stereo is returned unchanged
    pub fn to_stereo(frames: Array2<i16>) -> Result<Array2<i16>> {
        match frames.ncols() {
            1 => concatenate(Axis(1), &[frames.view(), frames.view()])
                .map_err(|e| WavHexError::audio(format!("Mono fan-out failed: {}", e))),
            2 => Ok(frames),
            n => Err(WavHexError::audio(format!("Cannot convert {} channels to stereo", n))),
        }
    }
}
