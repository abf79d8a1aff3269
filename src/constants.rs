//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "seiscut";

/// Default seconds of waveform to keep before the origin time.
pub const DEFAULT_PRE_SECONDS: f64 = 30.0;

/// Default seconds of waveform to keep after the origin time.
pub const DEFAULT_POST_SECONDS: f64 = 180.0;

/// Default minimum separation below which two origins are treated as
/// the same event.
pub const DEFAULT_DUPLICATE_WINDOW_SECONDS: f64 = 180.0;

/// Fixed-column byte ranges of the origin catalog schema.
///
/// One origin per line; fields are right-aligned within these column
/// spans. The epoch time field carries fractional seconds.
pub mod catalog_columns {
    use std::ops::Range;

    /// Latitude in degrees.
    pub const LATITUDE: Range<usize> = 0..9;
    /// Longitude in degrees.
    pub const LONGITUDE: Range<usize> = 10..20;
    /// Depth in kilometres.
    pub const DEPTH: Range<usize> = 21..29;
    /// Origin time as fractional epoch seconds.
    pub const TIME: Range<usize> = 31..47;
}

/// Continuous-archive naming conventions.
pub mod archive {
    /// Day-volume file extension.
    pub const VOLUME_EXTENSION: &str = "wav";

    /// Suffix appended to the channel directory, e.g. `BHZ.D`.
    pub const CHANNEL_DIR_SUFFIX: &str = ".D";
}

/// Event output naming conventions.
pub mod event {
    /// Default output root for event directories.
    pub const DEFAULT_OUTPUT_DIR: &str = "event_dirs";

    /// Prefix of event directory names (`e20170301.142233`).
    pub const DIR_PREFIX: &str = "e";

    /// Waveform segment file extension.
    pub const SEGMENT_EXTENSION: &str = "wav";

    /// Metadata record filename inside each event directory.
    pub const METADATA_FILENAME: &str = "event.json";
}

/// Creation provenance defaults for metadata records.
pub mod provenance {
    /// Agency credited for the source catalog origins.
    pub const CATALOG_AGENCY: &str = "UCSD";
    /// Author credited for the source catalog origins.
    pub const CATALOG_AUTHOR: &str = "fvernon";
    /// Agency credited for the extraction run.
    pub const EXTRACTION_AGENCY: &str = "soton";
    /// Author credited for the extraction run.
    pub const EXTRACTION_AUTHOR: &str = "sph1r17";
}
