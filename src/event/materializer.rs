//! Per-event waveform extraction.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::Error;
use crate::archive::{Stream, WaveformSource, volume};
use crate::catalog::Origin;
use crate::event::naming::{event_dir_name, segment_file_name};

/// The static set of (network, station, channel) triples to extract for
/// every accepted event.
#[derive(Debug, Clone, Default)]
pub struct StationCatalog {
    /// Network codes.
    pub networks: Vec<String>,
    /// Station codes.
    pub stations: Vec<String>,
    /// Channel codes.
    pub channels: Vec<String>,
}

/// Result of materializing one accepted origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Event directory created with at least one waveform segment.
    Created {
        /// Path of the event directory.
        path: PathBuf,
        /// Number of segment files written.
        segment_count: usize,
    },
    /// No segment could be extracted; the directory was removed.
    Skipped {
        /// Why the event produced no output.
        reason: &'static str,
    },
}

/// Extracts trimmed waveform segments for accepted origins.
///
/// Missing day-volumes and under-covered windows are per-channel soft
/// skips; only filesystem failures on the event directory or segment
/// files abort an event.
pub struct EventMaterializer<'a, S: WaveformSource> {
    source: &'a S,
    output_root: &'a Path,
    stations: &'a StationCatalog,
    pre: Duration,
    post: Duration,
}

impl<'a, S: WaveformSource> EventMaterializer<'a, S> {
    /// Create a materializer writing under `output_root`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(
        source: &'a S,
        output_root: &'a Path,
        stations: &'a StationCatalog,
        pre_seconds: f64,
        post_seconds: f64,
    ) -> Self {
        Self {
            source,
            output_root,
            stations,
            pre: Duration::milliseconds((pre_seconds * 1000.0).round() as i64),
            post: Duration::milliseconds((post_seconds * 1000.0).round() as i64),
        }
    }

    /// Extract the window around one origin into its event directory.
    ///
    /// The directory is removed and recreated when it pre-exists, so
    /// re-runs of the same catalog never merge with prior output. It is
    /// removed again when no channel yields a segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EventDir`] or [`Error::SegmentWrite`] on
    /// filesystem failures; these abort this event only.
    pub fn materialize(&self, origin: &Origin) -> Result<EventOutcome, Error> {
        let window_start = origin.time - self.pre;
        let window_end = origin.time + self.post;

        let dir = self.output_root.join(event_dir_name(origin.time));
        if dir.exists() {
            fs::remove_dir_all(&dir).map_err(|e| Error::EventDir {
                path: dir.clone(),
                source: e,
            })?;
        }
        fs::create_dir_all(&dir).map_err(|e| Error::EventDir {
            path: dir.clone(),
            source: e,
        })?;

        let days = covered_days(window_start, window_end);
        if days.len() > 1 {
            debug!(
                "window {window_start} - {window_end} crosses a day boundary; \
                 consulting {} day-volumes per channel",
                days.len()
            );
        }

        let mut segment_count = 0;
        for network in &self.stations.networks {
            for station in &self.stations.stations {
                for channel in &self.stations.channels {
                    let mut stream = Stream::new();
                    for &day in &days {
                        match self.source.read_day_volume(network, station, channel, day) {
                            Ok(Some(trace)) => stream.push(trace),
                            Ok(None) => {
                                debug!("day-volume not found: {network}.{station}.{channel} {day}");
                            }
                            Err(e) => {
                                warn!(
                                    "failed to read day-volume {network}.{station}.{channel} \
                                     {day}: {e}"
                                );
                            }
                        }
                    }
                    if stream.is_empty() {
                        continue;
                    }
                    stream.merge();

                    let Some(trace) = stream.slice(window_start, window_end) else {
                        debug!(
                            "window not fully covered for {station}.{channel}; skipping channel"
                        );
                        continue;
                    };

                    let path = dir.join(segment_file_name(station, channel, origin.time));
                    volume::write_wav(&path, &trace)?;
                    segment_count += 1;
                }
            }
        }

        if segment_count == 0 {
            fs::remove_dir_all(&dir).map_err(|e| Error::EventDir {
                path: dir.clone(),
                source: e,
            })?;
            return Ok(EventOutcome::Skipped { reason: "empty" });
        }

        Ok(EventOutcome::Created {
            path: dir,
            segment_count,
        })
    }
}

/// Calendar days touched by the window, in order.
fn covered_days(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<NaiveDate> {
    let last = end.date_naive();
    start
        .date_naive()
        .iter_days()
        .take_while(|day| *day <= last)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::archive::{DayArchive, Trace};
    use chrono::{NaiveTime, TimeZone};
    use tempfile::TempDir;

    fn stations() -> StationCatalog {
        StationCatalog {
            networks: vec!["XT".to_string()],
            stations: vec!["BLOS".to_string()],
            channels: vec!["BHZ".to_string()],
        }
    }

    fn write_volume(archive: &DayArchive, day: NaiveDate, samples: Vec<i32>) {
        let path = archive.volume_path("XT", "BLOS", "BHZ", day);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let trace = Trace {
            start: day.and_time(NaiveTime::MIN).and_utc(),
            sample_rate: 1.0,
            samples,
        };
        volume::write_wav(&path, &trace).unwrap();
    }

    #[test]
    fn test_covered_days_single_day() {
        let start = Utc.with_ymd_and_hms(2017, 3, 1, 14, 29, 30).unwrap();
        let end = Utc.with_ymd_and_hms(2017, 3, 1, 14, 33, 0).unwrap();
        assert_eq!(
            covered_days(start, end),
            vec![NaiveDate::from_ymd_opt(2017, 3, 1).unwrap()]
        );
    }

    #[test]
    fn test_covered_days_across_midnight() {
        let start = Utc.with_ymd_and_hms(2017, 3, 1, 23, 58, 30).unwrap();
        let end = Utc.with_ymd_and_hms(2017, 3, 2, 0, 2, 0).unwrap();
        assert_eq!(
            covered_days(start, end),
            vec![
                NaiveDate::from_ymd_opt(2017, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2017, 3, 2).unwrap(),
            ]
        );
    }

    #[test]
    fn test_materialize_writes_segment_and_directory() {
        let archive_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let archive = DayArchive::new(archive_dir.path());
        let day = NaiveDate::from_ymd_opt(2017, 3, 1).unwrap();
        // Covers 00:00:00 - 00:20:00 at 1 Hz.
        write_volume(&archive, day, (0..1200).collect());

        let catalog = stations();
        let materializer =
            EventMaterializer::new(&archive, output_dir.path(), &catalog, 30.0, 180.0);
        let origin = Origin {
            time: Utc.with_ymd_and_hms(2017, 3, 1, 0, 10, 0).unwrap(),
            latitude: 11.2,
            longitude: -61.0,
            depth_km: 12.5,
        };

        let outcome = materializer.materialize(&origin).unwrap();
        let EventOutcome::Created {
            path,
            segment_count,
        } = outcome
        else {
            panic!("expected Created outcome");
        };
        assert_eq!(segment_count, 1);
        assert!(path.ends_with("e20170301.001000"));
        let segment = path.join("BLOS.BHZ.20170301.001000.wav");
        assert!(segment.exists());

        // 30 s pre + 180 s post at 1 Hz, endpoints inclusive.
        let trace = volume::read_wav(
            &segment,
            Utc.with_ymd_and_hms(2017, 3, 1, 0, 9, 30).unwrap(),
        )
        .unwrap();
        assert_eq!(trace.samples.len(), 211);
        assert_eq!(trace.samples[0], 570);
    }

    #[test]
    fn test_materialize_empty_event_leaves_no_directory() {
        let archive_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let archive = DayArchive::new(archive_dir.path());

        let catalog = stations();
        let materializer =
            EventMaterializer::new(&archive, output_dir.path(), &catalog, 30.0, 180.0);
        let origin = Origin {
            time: Utc.with_ymd_and_hms(2017, 3, 1, 0, 10, 0).unwrap(),
            latitude: 11.2,
            longitude: -61.0,
            depth_km: 12.5,
        };

        let outcome = materializer.materialize(&origin).unwrap();
        assert_eq!(outcome, EventOutcome::Skipped { reason: "empty" });
        assert!(!output_dir.path().join("e20170301.001000").exists());
    }

    #[test]
    fn test_materialize_recreates_preexisting_directory() {
        let archive_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let archive = DayArchive::new(archive_dir.path());
        let day = NaiveDate::from_ymd_opt(2017, 3, 1).unwrap();
        write_volume(&archive, day, (0..1200).collect());

        let event_dir = output_dir.path().join("e20170301.001000");
        fs::create_dir_all(&event_dir).unwrap();
        let stale = event_dir.join("stale.txt");
        fs::write(&stale, "left over from an interrupted run").unwrap();

        let catalog = stations();
        let materializer =
            EventMaterializer::new(&archive, output_dir.path(), &catalog, 30.0, 180.0);
        let origin = Origin {
            time: Utc.with_ymd_and_hms(2017, 3, 1, 0, 10, 0).unwrap(),
            latitude: 11.2,
            longitude: -61.0,
            depth_km: 12.5,
        };

        materializer.materialize(&origin).unwrap();
        assert!(!stale.exists());
        assert!(event_dir.join("BLOS.BHZ.20170301.001000.wav").exists());
    }

    #[test]
    fn test_materialize_merges_across_midnight() {
        let archive_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let archive = DayArchive::new(archive_dir.path());
        let day1 = NaiveDate::from_ymd_opt(2017, 3, 1).unwrap();
        let day2 = NaiveDate::from_ymd_opt(2017, 3, 2).unwrap();
        // Full first day plus the first five minutes of the next.
        write_volume(&archive, day1, vec![1; 86_400]);
        write_volume(&archive, day2, vec![2; 300]);

        let catalog = stations();
        let materializer =
            EventMaterializer::new(&archive, output_dir.path(), &catalog, 30.0, 180.0);
        let origin = Origin {
            time: Utc.with_ymd_and_hms(2017, 3, 1, 23, 59, 0).unwrap(),
            latitude: 11.2,
            longitude: -61.0,
            depth_km: 12.5,
        };

        let outcome = materializer.materialize(&origin).unwrap();
        let EventOutcome::Created { path, segment_count } = outcome else {
            panic!("expected Created outcome");
        };
        assert_eq!(segment_count, 1);

        let segment = path.join("BLOS.BHZ.20170301.235900.wav");
        let trace = volume::read_wav(
            &segment,
            Utc.with_ymd_and_hms(2017, 3, 1, 23, 58, 30).unwrap(),
        )
        .unwrap();
        assert_eq!(trace.samples.len(), 211);
        // 90 s before midnight, 120 s after.
        assert_eq!(trace.samples[89], 1);
        assert_eq!(trace.samples[90], 2);
    }

    #[test]
    fn test_materialize_partial_coverage_skips_channel() {
        let archive_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let archive = DayArchive::new(archive_dir.path());
        let day = NaiveDate::from_ymd_opt(2017, 3, 1).unwrap();
        // Volume ends at 00:10:30, well inside the requested window.
        write_volume(&archive, day, vec![0; 630]);

        let catalog = stations();
        let materializer =
            EventMaterializer::new(&archive, output_dir.path(), &catalog, 30.0, 180.0);
        let origin = Origin {
            time: Utc.with_ymd_and_hms(2017, 3, 1, 0, 10, 0).unwrap(),
            latitude: 11.2,
            longitude: -61.0,
            depth_km: 12.5,
        };

        let outcome = materializer.materialize(&origin).unwrap();
        assert_eq!(outcome, EventOutcome::Skipped { reason: "empty" });
    }
}
