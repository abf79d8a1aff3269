//! Seiscut - event waveform extraction from continuous seismic archives.
//!
//! This crate cuts fixed-length waveform windows around catalogued
//! earthquake origins out of a day-volume archive, filters origins by a
//! geographic area of interest, drops near-duplicate origins, and emits
//! one directory per event with trimmed segments plus a metadata record.

#![warn(missing_docs)]

pub mod archive;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod pipeline;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::{info, warn};

use catalog::AreaOfInterest;
use cli::{Cli, Command, ConfigAction};
use config::{
    Config, RunSettings, config_file_path, load_config_file, load_default_config,
    save_default_config, validate_settings,
};
use constants::event::DEFAULT_OUTPUT_DIR;
use event::StationCatalog;

pub use error::{Error, Result};

/// Main entry point for the seiscut CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.run.verbose, cli.run.quiet);

    if let Some(command) = &cli.command {
        return handle_command(command, &cli);
    }

    extract(&cli)
}

/// Resolve settings from config file and CLI overrides, then run the
/// pipeline over the whole catalog.
fn extract(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    let catalog = cli
        .catalog
        .clone()
        .or(config.catalog)
        .ok_or_else(|| Error::ConfigValidation {
            message: "no catalog file specified (pass it as an argument or set 'catalog' in config)"
                .to_string(),
        })?;
    let archive_root =
        cli.run
            .archive_root
            .clone()
            .or(config.archive_root)
            .ok_or_else(|| Error::ConfigValidation {
                message:
                    "no archive root specified (use --archive-root or set 'archive_root' in config)"
                        .to_string(),
            })?;
    let output_dir = cli
        .run
        .output_dir
        .clone()
        .or(config.output_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let region = AreaOfInterest {
        lon_min: cli.run.lon_min.unwrap_or(config.region.lon_min),
        lon_max: cli.run.lon_max.unwrap_or(config.region.lon_max),
        lat_min: cli.run.lat_min.unwrap_or(config.region.lat_min),
        lat_max: cli.run.lat_max.unwrap_or(config.region.lat_max),
    };

    let stations = StationCatalog {
        networks: cli
            .run
            .networks
            .clone()
            .unwrap_or(config.stations.networks),
        stations: cli
            .run
            .stations
            .clone()
            .unwrap_or(config.stations.stations),
        channels: cli
            .run
            .channels
            .clone()
            .unwrap_or(config.stations.channels),
    };

    let settings = RunSettings {
        catalog,
        archive_root,
        output_dir,
        pre_seconds: cli.run.pre.unwrap_or(config.window.pre_seconds),
        post_seconds: cli.run.post.unwrap_or(config.window.post_seconds),
        duplicate_window_seconds: cli
            .run
            .duplicate_window
            .unwrap_or(config.window.duplicate_window_seconds),
        region,
        stations,
        provenance: config.provenance,
        progress: !cli.run.quiet && !cli.run.no_progress,
    };
    validate_settings(&settings)?;

    info!(
        "Processing catalog {} against archive {}",
        settings.catalog.display(),
        settings.archive_root.display()
    );

    let start = Instant::now();
    let summary = pipeline::run_pipeline(&settings)?;
    let elapsed = start.elapsed().as_secs_f64();

    info!(
        "Complete: {} of {} origins materialized ({} segments), {} empty, \
         {} duplicates removed, {} outside region in {elapsed:.2}s",
        summary.created,
        summary.lines,
        summary.segments,
        summary.empty,
        summary.duplicates,
        summary.out_of_region
    );

    if summary.errors > 0 {
        warn!("{} event(s) aborted by filesystem errors", summary.errors);
    }

    Ok(())
}

/// Load the config file named on the command line, or the default one.
fn load_config(cli: &Cli) -> Result<Config> {
    cli.run
        .config
        .as_deref()
        .map_or_else(load_default_config, load_config_file)
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

#[allow(clippy::print_stdout)]
fn handle_command(command: &Command, cli: &Cli) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(*action, cli),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: ConfigAction, cli: &Cli) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
                println!("\nNext steps:");
                println!("  set catalog, archive_root and [stations] lists, then run");
                println!("  seiscut <catalog-file>");
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_config(cli)?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
