//! Deterministic event output naming.

use chrono::{DateTime, Utc};

use crate::constants::event as names;

/// Event directory name for an origin time: `e<YYYYMMDD>.<HHMMSS>`.
///
/// Sub-second precision is truncated so re-runs of the same catalog map
/// onto the same directories.
#[must_use]
pub fn event_dir_name(origin_time: DateTime<Utc>) -> String {
    format!(
        "{}{}",
        names::DIR_PREFIX,
        origin_time.format("%Y%m%d.%H%M%S")
    )
}

/// Segment filename for one (station, channel):
/// `<station>.<channel>.<YYYYMMDD>.<HHMMSS>.wav`.
#[must_use]
pub fn segment_file_name(station: &str, channel: &str, origin_time: DateTime<Utc>) -> String {
    format!(
        "{station}.{channel}.{}.{}",
        origin_time.format("%Y%m%d.%H%M%S"),
        names::SEGMENT_EXTENSION
    )
}
