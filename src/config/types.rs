//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::AreaOfInterest;
use crate::constants::{
    DEFAULT_DUPLICATE_WINDOW_SECONDS, DEFAULT_POST_SECONDS, DEFAULT_PRE_SECONDS,
};
use crate::event::{Provenance, StationCatalog};

/// Complete application configuration as loaded from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin catalog file to process.
    pub catalog: Option<PathBuf>,

    /// Root directory of the continuous day-volume archive.
    pub archive_root: Option<PathBuf>,

    /// Root directory for event output.
    pub output_dir: Option<PathBuf>,

    /// Extraction window settings.
    pub window: WindowConfig,

    /// Geographic area of interest.
    pub region: AreaOfInterest,

    /// Station catalog to extract for every event.
    pub stations: StationsConfig,

    /// Metadata provenance attribution.
    pub provenance: Provenance,
}

/// Extraction window settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Seconds of waveform kept before the origin time.
    pub pre_seconds: f64,

    /// Seconds of waveform kept after the origin time.
    pub post_seconds: f64,

    /// Minimum separation below which consecutive origins are
    /// treated as the same event.
    pub duplicate_window_seconds: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            pre_seconds: DEFAULT_PRE_SECONDS,
            post_seconds: DEFAULT_POST_SECONDS,
            duplicate_window_seconds: DEFAULT_DUPLICATE_WINDOW_SECONDS,
        }
    }
}

/// Station catalog section of the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StationsConfig {
    /// Network codes.
    pub networks: Vec<String>,
    /// Station codes.
    pub stations: Vec<String>,
    /// Channel codes.
    pub channels: Vec<String>,
}

impl From<StationsConfig> for StationCatalog {
    fn from(config: StationsConfig) -> Self {
        Self {
            networks: config.networks,
            stations: config.stations,
            channels: config.channels,
        }
    }
}

/// Fully resolved, immutable settings for one extraction run.
///
/// Built once from the config file and CLI overrides, then passed into
/// the pipeline entry point.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Origin catalog file.
    pub catalog: PathBuf,
    /// Continuous archive root.
    pub archive_root: PathBuf,
    /// Event output root.
    pub output_dir: PathBuf,
    /// Seconds of waveform kept before the origin time.
    pub pre_seconds: f64,
    /// Seconds of waveform kept after the origin time.
    pub post_seconds: f64,
    /// Duplicate suppression window in seconds.
    pub duplicate_window_seconds: f64,
    /// Geographic area of interest.
    pub region: AreaOfInterest,
    /// Station catalog to extract.
    pub stations: StationCatalog,
    /// Metadata provenance attribution.
    pub provenance: Provenance,
    /// Show a progress bar while processing.
    pub progress: bool,
}
