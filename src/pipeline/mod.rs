//! Sequential extraction pipeline.
//!
//! One pass per catalog line: parse, de-duplicate, region-filter,
//! materialize waveforms, write metadata. Control flows strictly
//! downstream; the only state carried between lines is the
//! deduplicator's reference time.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, info};

use crate::archive::DayArchive;
use crate::catalog::{Deduplicator, parse_origin_line};
use crate::config::RunSettings;
use crate::error::{Error, Result};
use crate::event::{EventMaterializer, EventOutcome, write_metadata};

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Catalog lines read.
    pub lines: usize,
    /// Events materialized with at least one segment.
    pub created: usize,
    /// Accepted origins that yielded no waveform data.
    pub empty: usize,
    /// Origins dropped as near-duplicates.
    pub duplicates: usize,
    /// Origins outside the area of interest.
    pub out_of_region: usize,
    /// Waveform segment files written.
    pub segments: usize,
    /// Events aborted by filesystem errors.
    pub errors: usize,
}

/// Run the extraction pipeline over the whole catalog.
///
/// # Errors
///
/// Returns an error on catalog read/parse failures (fatal for the run,
/// per-line ordering matters for deduplication) or when the output root
/// cannot be created. Per-event filesystem failures are logged, counted
/// in [`RunSummary::errors`], and do not abort the run.
pub fn run_pipeline(settings: &RunSettings) -> Result<RunSummary> {
    let contents =
        std::fs::read_to_string(&settings.catalog).map_err(|e| Error::CatalogRead {
            path: settings.catalog.clone(),
            source: e,
        })?;
    let lines: Vec<&str> = contents.lines().collect();

    std::fs::create_dir_all(&settings.output_dir).map_err(|e| Error::EventDir {
        path: settings.output_dir.clone(),
        source: e,
    })?;

    let archive = DayArchive::new(&settings.archive_root);
    let materializer = EventMaterializer::new(
        &archive,
        &settings.output_dir,
        &settings.stations,
        settings.pre_seconds,
        settings.post_seconds,
    );
    let mut dedup = Deduplicator::new(settings.duplicate_window_seconds);

    let progress = make_progress(lines.len(), settings.progress);
    let mut summary = RunSummary {
        lines: lines.len(),
        ..RunSummary::default()
    };

    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        let origin = parse_origin_line(line, line_number)?;

        // Dedup state advances even for origins the region filter would
        // reject, so duplicate suppression is independent of geography.
        if !dedup.accept(origin.time) {
            debug!("line {line_number}: origin {} dropped as duplicate", origin.time);
            summary.duplicates += 1;
            progress.inc(1);
            continue;
        }

        if !settings.region.contains(origin.latitude, origin.longitude) {
            debug!(
                "line {line_number}: origin at ({}, {}) outside area of interest",
                origin.latitude, origin.longitude
            );
            summary.out_of_region += 1;
            progress.inc(1);
            continue;
        }

        match materializer.materialize(&origin) {
            Ok(EventOutcome::Created {
                path,
                segment_count,
            }) => {
                match write_metadata(&origin, &path, &settings.provenance) {
                    Ok(_) => {
                        info!(
                            "event {}: {segment_count} segment(s) written",
                            path.display()
                        );
                        summary.created += 1;
                        summary.segments += segment_count;
                    }
                    Err(e) => {
                        error!("line {line_number}: {e}");
                        summary.errors += 1;
                    }
                }
            }
            Ok(EventOutcome::Skipped { reason }) => {
                debug!(
                    "line {line_number}: event at {} skipped ({reason})",
                    origin.time
                );
                summary.empty += 1;
            }
            Err(e) => {
                error!("line {line_number}: failed to materialize event: {e}");
                summary.errors += 1;
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(summary)
}

/// Progress bar over catalog lines; hidden in quiet mode.
#[allow(clippy::cast_possible_truncation)]
fn make_progress(total: usize, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total as u64);
    // Template is hardcoded and known to be valid
    #[allow(clippy::expect_used)]
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} origins")
            .expect("valid progress template")
            .progress_chars("#>-"),
    );
    pb
}
