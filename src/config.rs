//! Configuration management for the converter

use crate::error::{WavHexError, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Usage line printed when no mode (or an unknown one) is given
pub const USAGE: &str = "Usage: wavhex [w2h|h2w]";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub verbose: bool,
    pub paths: PathsConfig,
    pub decode: DecodeConfig,
}

/// File locations shared with the simulation testbench
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub wav_input: PathBuf,
    pub hex_output: PathBuf,
    pub hex_input: PathBuf,
    pub wav_output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    pub sample_rate: u32,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            wav_input: PathBuf::from("scripts/test_input2.wav"),
            hex_output: PathBuf::from("scripts/input2.txt"),
            hex_input: PathBuf::from("scripts/output2.txt"),
            wav_output: PathBuf::from("scripts/processed_output.wav"),
        }
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        // The audio core on the board is clocked for 48 kHz, but decoded files
        // have always been written at 44.1 kHz. Override in the config file.
        Self { sample_rate: 44100 }
    }
}

/// Conversion direction selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    WavToHex,
    HexToWav,
}

impl Mode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "w2h" => Some(Mode::WavToHex),
            "h2w" => Some(Mode::HexToWav),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::WavToHex => "w2h",
            Mode::HexToWav => "h2w",
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "wavhex", about = "WAV <-> hex word converter for HDL simulation", version, author)]
pub struct Args {
    #[arg(value_name = "MODE", help = "Conversion direction: w2h (WAV to hex) or h2w (hex to WAV)")]
    pub mode: Option<String>,

    #[arg(short = 'c', long = "config", help = "Config file path (TOML format)")]
    pub config_file: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output mode")]
    pub verbose: bool,

    /// Anything after the mode is accepted and ignored
    #[arg(trailing_var_arg = true, hide = true)]
    pub rest: Vec<String>,
}

impl Args {
    /// Resolve the positional mode; `None` means usage should be shown
    pub fn mode(&self) -> Option<Mode> {
        self.mode.as_deref().and_then(Mode::parse)
    }
}

impl Config {
    /// Create config from command line arguments and optional config file
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut config = if let Some(config_path) = &args.config_file {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        if args.verbose {
            config.verbose = true;
        }

        config.validate()?;

        Ok(config)
    }

    /// Load config from TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| WavHexError::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| WavHexError::config(format!("Failed to parse config file: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.decode.sample_rate == 0 {
            return Err(WavHexError::config("Sample rate must be greater than 0"));
        }
        if self.decode.sample_rate > 192000 {
            return Err(WavHexError::config("Sample rate cannot exceed 192000 Hz"));
        }

        let paths = [
            ("wav_input", &self.paths.wav_input),
            ("hex_output", &self.paths.hex_output),
            ("hex_input", &self.paths.hex_input),
            ("wav_output", &self.paths.wav_output),
        ];
        for (name, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(WavHexError::config(format!("Path '{}' cannot be empty", name)));
            }
        }

        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WavHexError::config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| WavHexError::config(format!("Failed to write config file: {}", e)))
    }

    pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        Self::default().save_to_file(path)
    }

    pub fn sample_rate(&self) -> u32 {
        self.decode.sample_rate
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
