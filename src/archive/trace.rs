//! Time-stamped sample traces and streams.

use chrono::{DateTime, Duration, Utc};

/// A contiguous run of equally spaced samples with an absolute start time.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Time of the first sample (UTC).
    pub start: DateTime<Utc>,
    /// Samples per second.
    pub sample_rate: f64,
    /// Raw counts.
    pub samples: Vec<i32>,
}

impl Trace {
    /// Time of the sample one past the end of this trace.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn end_exclusive(&self) -> DateTime<Utc> {
        let micros = (self.samples.len() as f64 / self.sample_rate * 1e6).round() as i64;
        self.start + Duration::microseconds(micros)
    }
}

/// An ordered collection of traces for one (station, channel).
///
/// Traces may overlap or leave gaps until [`Stream::merge`] is called.
#[derive(Debug, Clone, Default)]
pub struct Stream {
    traces: Vec<Trace>,
}

impl Stream {
    /// Create an empty stream.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trace. Ordering is restored by [`Stream::merge`].
    pub fn push(&mut self, trace: Trace) {
        self.traces.push(trace);
    }

    /// Whether the stream holds no traces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Number of (unmerged) traces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    /// Reconcile overlapping or adjacent traces into maximal contiguous runs.
    ///
    /// Traces are sorted by start time; runs at the same sample rate that
    /// touch or overlap are combined, with later samples winning on
    /// overlap. Gaps are preserved as separate traces.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn merge(&mut self) {
        self.traces.sort_by_key(|t| t.start);
        let mut merged: Vec<Trace> = Vec::new();

        for trace in self.traces.drain(..) {
            if let Some(current) = merged.last_mut() {
                let same_rate = (current.sample_rate - trace.sample_rate).abs() < 1e-9;
                let offset =
                    (seconds_between(current.start, trace.start) * current.sample_rate).round();
                if same_rate && offset >= 0.0 && (offset as usize) <= current.samples.len() {
                    let offset = offset as usize;
                    for (i, &sample) in trace.samples.iter().enumerate() {
                        let index = offset + i;
                        if index < current.samples.len() {
                            current.samples[index] = sample;
                        } else {
                            current.samples.push(sample);
                        }
                    }
                    continue;
                }
            }
            merged.push(trace);
        }

        self.traces = merged;
    }

    /// Cut the exact window `[start, end]` (endpoints inclusive) out of
    /// this stream.
    ///
    /// Returns `None` when no single contiguous trace covers the full
    /// window; callers treat that as a recoverable per-channel skip.
    /// Call [`Stream::merge`] first so day-boundary joins are visible as
    /// one trace.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn slice(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Trace> {
        if end < start {
            return None;
        }
        for trace in &self.traces {
            let first = (seconds_between(trace.start, start) * trace.sample_rate).round();
            let count = (seconds_between(start, end) * trace.sample_rate).round() as usize + 1;
            if first < 0.0 {
                continue;
            }
            let first = first as usize;
            if first + count > trace.samples.len() {
                continue;
            }
            let micros = (first as f64 / trace.sample_rate * 1e6).round() as i64;
            return Some(Trace {
                start: trace.start + Duration::microseconds(micros),
                sample_rate: trace.sample_rate,
                samples: trace.samples[first..first + count].to_vec(),
            });
        }
        None
    }
}

/// Signed seconds from `earlier` to `later`.
#[allow(clippy::cast_precision_loss)]
fn seconds_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    (later - earlier)
        .num_microseconds()
        .map_or(f64::MAX, |us| us as f64 / 1e6)
}
