//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Cut event waveform windows from continuous seismic day-volume archives.
#[derive(Debug, Parser)]
#[command(name = "seiscut")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Origin catalog file to process.
    pub catalog: Option<PathBuf>,

    /// Common options for extraction runs.
    #[command(flatten)]
    pub run: RunArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for an extraction run.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Path to a config file (default: platform config directory).
    #[arg(long, env = "SEISCUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Root directory of the continuous day-volume archive.
    #[arg(short, long, env = "SEISCUT_ARCHIVE_ROOT")]
    pub archive_root: Option<PathBuf>,

    /// Output directory for event directories.
    #[arg(short, long, env = "SEISCUT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Seconds of waveform to keep before the origin time.
    #[arg(long, value_parser = parse_seconds, env = "SEISCUT_PRE_SECONDS")]
    pub pre: Option<f64>,

    /// Seconds of waveform to keep after the origin time.
    #[arg(long, value_parser = parse_seconds, env = "SEISCUT_POST_SECONDS")]
    pub post: Option<f64>,

    /// Minimum separation in seconds below which consecutive origins
    /// are dropped as duplicates.
    #[arg(long, value_parser = parse_seconds, env = "SEISCUT_DUPLICATE_WINDOW")]
    pub duplicate_window: Option<f64>,

    /// Western longitude bound of the area of interest.
    #[arg(long, value_parser = parse_longitude)]
    pub lon_min: Option<f64>,

    /// Eastern longitude bound of the area of interest.
    #[arg(long, value_parser = parse_longitude)]
    pub lon_max: Option<f64>,

    /// Southern latitude bound of the area of interest.
    #[arg(long, value_parser = parse_latitude)]
    pub lat_min: Option<f64>,

    /// Northern latitude bound of the area of interest.
    #[arg(long, value_parser = parse_latitude)]
    pub lat_max: Option<f64>,

    /// Network codes (comma-separated).
    #[arg(long, value_delimiter = ',', env = "SEISCUT_NETWORKS")]
    pub networks: Option<Vec<String>>,

    /// Station codes (comma-separated).
    #[arg(long, value_delimiter = ',', env = "SEISCUT_STATIONS")]
    pub stations: Option<Vec<String>>,

    /// Channel codes (comma-separated).
    #[arg(long, value_delimiter = ',', env = "SEISCUT_CHANNELS")]
    pub channels: Option<Vec<String>>,

    /// Suppress the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Suppress progress output and lower log verbosity.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse and validate a non-negative seconds value.
fn parse_seconds(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !value.is_finite() || value < 0.0 {
        return Err(format!("seconds must be non-negative, got {value}"));
    }

    Ok(value)
}

/// Parse and validate latitude value.
fn parse_latitude(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(-90.0..=90.0).contains(&value) {
        return Err(format!(
            "latitude must be between -90.0 and 90.0, got {value}"
        ));
    }

    Ok(value)
}

/// Parse and validate longitude value.
fn parse_longitude(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(-180.0..=180.0).contains(&value) {
        return Err(format!(
            "longitude must be between -180.0 and 180.0, got {value}"
        ));
    }

    Ok(value)
}
