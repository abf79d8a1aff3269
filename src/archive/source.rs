//! Waveform source abstraction over the continuous archive.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::Result;
use crate::archive::{Trace, volume};
use crate::constants::archive as names;

/// Supplies day-volumes for (network, station, channel, calendar day).
///
/// A missing volume is an expected archive gap and reported as
/// `Ok(None)`, never as an error.
pub trait WaveformSource {
    /// Read the day-volume covering `day`, if the archive holds one.
    fn read_day_volume(
        &self,
        network: &str,
        station: &str,
        channel: &str,
        day: NaiveDate,
    ) -> Result<Option<Trace>>;
}

/// Filesystem archive of day-volumes in SDS-style layout:
/// `<root>/<year>/<net>/<sta>/<cha>.D/<net>.<sta>..<cha>.D.<year>.<jday>.wav`
/// where `<jday>` is the zero-padded day of year.
#[derive(Debug, Clone)]
pub struct DayArchive {
    root: PathBuf,
}

impl DayArchive {
    /// Create an archive rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Archive root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path at which the day-volume for this address would live.
    #[must_use]
    pub fn volume_path(
        &self,
        network: &str,
        station: &str,
        channel: &str,
        day: NaiveDate,
    ) -> PathBuf {
        let year = day.year();
        let jday = day.ordinal();
        self.root
            .join(year.to_string())
            .join(network)
            .join(station)
            .join(format!("{channel}{}", names::CHANNEL_DIR_SUFFIX))
            .join(format!(
                "{network}.{station}..{channel}.D.{year}.{jday:03}.{}",
                names::VOLUME_EXTENSION
            ))
    }
}

impl WaveformSource for DayArchive {
    fn read_day_volume(
        &self,
        network: &str,
        station: &str,
        channel: &str,
        day: NaiveDate,
    ) -> Result<Option<Trace>> {
        let path = self.volume_path(network, station, channel, day);
        if !path.exists() {
            return Ok(None);
        }
        // First sample of a day-volume is pinned to midnight UTC of the
        // addressed day.
        let day_start = day.and_time(NaiveTime::MIN).and_utc();
        volume::read_wav(&path, day_start).map(Some)
    }
}
