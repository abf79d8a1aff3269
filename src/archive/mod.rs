//! Continuous waveform archive access.
//!
//! A continuous archive holds one day-volume per (network, station,
//! channel, calendar day). This module provides the trace container
//! with merge and slice operations, day-volume file I/O, and the
//! [`WaveformSource`] seam the event materializer reads through.

mod source;
mod trace;
pub mod volume;

pub use source::{DayArchive, WaveformSource};
pub use trace::{Stream, Trace};
