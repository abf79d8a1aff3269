//! Duplicate origin suppression.

use chrono::{DateTime, Duration, Utc};

/// Suppresses catalog origins that follow the previously seen origin
/// too closely.
///
/// The stored reference time advances on every call, including
/// rejections, so a chain of near-simultaneous origins is compared
/// against the most recently *seen* time rather than the most recently
/// accepted one. This collapses the whole chain into the first origin.
#[derive(Debug)]
pub struct Deduplicator {
    window: Duration,
    last_seen: DateTime<Utc>,
}

impl Deduplicator {
    /// Create a deduplicator with the given minimum separation in seconds.
    ///
    /// The reference time starts at a sentinel far in the past so the
    /// first origin is always accepted.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(window_seconds: f64) -> Self {
        Self {
            window: Duration::milliseconds((window_seconds * 1000.0).round() as i64),
            last_seen: DateTime::<Utc>::MIN_UTC,
        }
    }

    /// Decide whether an origin at `time` is a new event.
    ///
    /// Returns `false` when `time` falls within the duplicate window of
    /// the previously seen origin. The stored reference time is updated
    /// in both branches.
    pub fn accept(&mut self, time: DateTime<Utc>) -> bool {
        let duplicate = self.last_seen + self.window >= time;
        self.last_seen = time;
        !duplicate
    }
}
