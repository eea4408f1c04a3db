//! wavhex - WAV <-> hex word converter for HDL audio simulation
//!
//! Samples travel on a 32-bit bus: the 16-bit PCM value sits in the upper
//! half of each word and the lower half is padding.

pub mod audio;
pub mod config;
pub mod error;
pub mod hex;
pub mod processing;

pub use config::{Args, Config, Mode};
pub use error::{WavHexError, Result};
pub use processing::{ConversionReport, Decoder, Encoder};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialise `env_logger`. `RUST_LOG` takes precedence over the default level.
pub fn init_logging(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .ok();
}

pub fn get_library_info() -> LibraryInfo {
    LibraryInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct LibraryInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl std::fmt::Display for LibraryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{} - {}", self.name, self.version, self.description)
    }
}
