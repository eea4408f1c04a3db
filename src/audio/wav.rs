//! WAV audio file processing

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use hound::{SampleFormat, WavReader, WavWriter};
use ndarray::Array2;
use crate::error::{WavHexError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Int8,
    Int16,
    Int24,
    Int32,
    Float32,
}

impl AudioFormat {
    pub fn from_spec(spec: &hound::WavSpec) -> Result<Self> {
        match (spec.sample_format, spec.bits_per_sample) {
            (SampleFormat::Int, 8) => Ok(AudioFormat::Int8),
            (SampleFormat::Int, 16) => Ok(AudioFormat::Int16),
            (SampleFormat::Int, 24) => Ok(AudioFormat::Int24),
            (SampleFormat::Int, 32) => Ok(AudioFormat::Int32),
            (SampleFormat::Float, 32) => Ok(AudioFormat::Float32),
            (format, bits) => Err(WavHexError::audio(
                format!("Unsupported sample format: {}-bit {:?}", bits, format)
            )),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AudioFormat::Int8 => "uint8",
            AudioFormat::Int16 => "int16",
            AudioFormat::Int24 => "int24",
            AudioFormat::Int32 => "int32",
            AudioFormat::Float32 => "float32",
        }
    }

    pub fn bits_per_sample(&self) -> u16 {
        match self {
            AudioFormat::Int8 => 8,
            AudioFormat::Int16 => 16,
            AudioFormat::Int24 => 24,
            AudioFormat::Int32 | AudioFormat::Float32 => 32,
        }
    }

    pub fn to_sample_format(self) -> SampleFormat {
        match self {
            AudioFormat::Float32 => SampleFormat::Float,
            _ => SampleFormat::Int,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AudioHeader {
    pub sample_rate: u32,
    pub channels: u16,
    pub format: AudioFormat,
    pub total_frames: u32,
    pub duration: f64,
}

impl AudioHeader {
    pub fn new(sample_rate: u32, channels: u16, format: AudioFormat, total_frames: u32) -> Self {
        let duration = if sample_rate > 0 {
            total_frames as f64 / sample_rate as f64
        } else {
            0.0
        };

        Self {
            sample_rate,
            channels,
            format,
            total_frames,
            duration,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(WavHexError::audio("Sample rate cannot be 0"));
        }

        if self.channels == 0 || self.channels > 2 {
            return Err(WavHexError::audio(
                format!("Unsupported channel count {}: only mono or stereo audio supported", self.channels)
            ));
        }

        Ok(())
    }

    pub fn to_wav_spec(&self) -> hound::WavSpec {
        hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.format.bits_per_sample(),
            sample_format: self.format.to_sample_format(),
        }
    }
}

/// Sample frames shaped `(frames, channels)`, kept in the container's own width.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioData {
    Int16(Array2<i16>),
    /// 8, 24 and 32-bit integer PCM. 8-bit samples are unsigned (0..=255) as stored on disk.
    Int(Array2<i32>),
    Float(Array2<f32>),
}

impl AudioData {
    pub fn len(&self) -> usize {
        match self {
            AudioData::Int16(data) => data.nrows(),
            AudioData::Int(data) => data.nrows(),
            AudioData::Float(data) => data.nrows(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
pub struct WavAudio {
    pub header: AudioHeader,
    pub data: AudioData,
}

impl WavAudio {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path)
            .map_err(|e| WavHexError::Audio {
                message: format!("Cannot open audio file {}: {}", path.display(), e)
            })?;

        let mut reader = WavReader::new(BufReader::new(file))
            .map_err(|e| WavHexError::Audio {
                message: format!("Cannot create WAV reader: {}", e)
            })?;

        let spec = reader.spec();
        let format = AudioFormat::from_spec(&spec)?;
        let header = AudioHeader::new(spec.sample_rate, spec.channels, format, reader.duration());
        header.validate()?;

        let channels = spec.channels as usize;
        let data = match format {
            AudioFormat::Int16 => {
                let samples = collect_samples(reader.samples::<i16>())?;
                AudioData::Int16(to_frames(samples, channels)?)
            }
            AudioFormat::Int8 => {
                // hound centres 8-bit samples around zero; undo that to keep the stored value
                let samples: Vec<i32> = collect_samples(reader.samples::<i32>())?
                    .into_iter()
                    .map(|s| s + 128)
                    .collect();
                AudioData::Int(to_frames(samples, channels)?)
            }
            AudioFormat::Int24 | AudioFormat::Int32 => {
                let samples = collect_samples(reader.samples::<i32>())?;
                AudioData::Int(to_frames(samples, channels)?)
            }
            AudioFormat::Float32 => {
                let samples = collect_samples(reader.samples::<f32>())?;
                AudioData::Float(to_frames(samples, channels)?)
            }
        };

        log::debug!(
            "Read {}: {} Hz, {} ch, {}, {} frames",
            path.display(), header.sample_rate, header.channels, format.name(), data.len()
        );

        Ok(WavAudio { header, data })
    }

    /// Build a 16-bit stereo container from `(frames, 2)` data
    pub fn new_stereo(sample_rate: u32, data: Array2<i16>) -> Result<Self> {
        if data.ncols() != 2 {
            return Err(WavHexError::audio("Stereo data must have 2 columns"));
        }

        let header = AudioHeader::new(sample_rate, 2, AudioFormat::Int16, data.nrows() as u32);
        header.validate()?;

        Ok(WavAudio {
            header,
            data: AudioData::Int16(data),
        })
    }

    /// Write the container as 16-bit PCM. Only 16-bit data can be saved.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        let AudioData::Int16(data) = &self.data else {
            return Err(WavHexError::audio(
                format!("Only int16 data can be written, got {}", self.header.format.name())
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| WavHexError::Audio {
                    message: format!("Cannot create output directory: {}", e)
                })?;
        }

        let mut writer = WavWriter::create(path, self.header.to_wav_spec())
            .map_err(|e| WavHexError::Audio {
                message: format!("Cannot create output file {}: {}", path.display(), e)
            })?;

        for &sample in data.iter() {
            writer.write_sample(sample)
                .map_err(|e| WavHexError::Audio {
                    message: format!("Failed to write sample: {}", e)
                })?;
        }

        writer.finalize()
            .map_err(|e| WavHexError::Audio {
                message: format!("Failed to finalize WAV writing: {}", e)
            })?;

        Ok(())
    }

    pub fn data(&self) -> &AudioData {
        &self.data
    }

    pub fn sample_rate(&self) -> u32 {
        self.header.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.header.channels
    }

    pub fn format(&self) -> AudioFormat {
        self.header.format
    }
}

fn collect_samples<T, I>(samples: I) -> Result<Vec<T>>
where
    I: Iterator<Item = hound::Result<T>>,
{
    samples
        .map(|sample| sample.map_err(|e| WavHexError::Audio {
            message: format!("Failed to read sample: {}", e)
        }))
        .collect()
}

/// Reshape interleaved samples into `(frames, channels)`
fn to_frames<T>(samples: Vec<T>, channels: usize) -> Result<Array2<T>> {
    let frames = samples.len() / channels;
    Array2::from_shape_vec((frames, channels), samples)
        .map_err(|e| WavHexError::audio(format!("Incomplete final frame: {}", e)))
}
