//! Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Main error type
#[derive(Debug, Clone, Error)]
pub enum WavHexError {
    #[error("{} not found.", .path.display())]
    MissingInput { path: PathBuf },

    #[error("{} not found. Run your simulation first!", .path.display())]
    MissingSimulationOutput { path: PathBuf },

    #[error("No valid audio data was found in {}.", .path.display())]
    NoValidFrames { path: PathBuf },

    #[error("Audio error: {message}")]
    Audio { message: String },

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl WavHexError {
    pub fn audio<S: Into<String>>(msg: S) -> Self { Self::Audio { message: msg.into() } }
    pub fn config<S: Into<String>>(msg: S) -> Self { Self::Config { message: msg.into() } }
    pub fn io<S: Into<String>>(msg: S) -> Self { Self::Io { message: msg.into() } }
}

pub type Result<T> = std::result::Result<T, WavHexError>;

impl From<std::io::Error> for WavHexError {
    fn from(err: std::io::Error) -> Self { Self::io(err.to_string()) }
}

impl From<hound::Error> for WavHexError {
    fn from(err: hound::Error) -> Self { Self::audio(format!("WAV: {}", err)) }
}
