//! Day-volume and segment file I/O.
//!
//! Volumes and trimmed segments are mono PCM WAV files handled by the
//! `hound` crate. A file carries no timestamp of its own; the caller
//! supplies the absolute time of the first sample (for day-volumes,
//! midnight UTC of the addressed day).

use std::path::Path;

use chrono::{DateTime, Utc};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::Error;
use crate::archive::Trace;

/// Read a waveform file whose first sample is at `start`.
///
/// Accepts mono 16-bit or 32-bit integer PCM; 16-bit samples are
/// widened to counts.
///
/// # Errors
///
/// Returns [`Error::VolumeRead`] if the file cannot be opened or
/// decoded, or [`Error::VolumeLayout`] for multi-channel or float data.
pub fn read_wav(path: &Path, start: DateTime<Utc>) -> Result<Trace, Error> {
    let mut reader = WavReader::open(path).map_err(|e| Error::VolumeRead {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    let spec = reader.spec();
    if spec.channels != 1 {
        return Err(Error::VolumeLayout {
            path: path.to_path_buf(),
            message: format!("expected mono data, found {} channels", spec.channels),
        });
    }

    let samples: Result<Vec<i32>, hound::Error> = match (spec.sample_format, spec.bits_per_sample)
    {
        (SampleFormat::Int, 16) => reader
            .samples::<i16>()
            .map(|s| s.map(i32::from))
            .collect(),
        (SampleFormat::Int, 24 | 32) => reader.samples::<i32>().collect(),
        (format, bits) => {
            return Err(Error::VolumeLayout {
                path: path.to_path_buf(),
                message: format!("unsupported sample layout: {bits}-bit {format:?}"),
            });
        }
    };

    let samples = samples.map_err(|e| Error::VolumeRead {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    Ok(Trace {
        start,
        sample_rate: f64::from(spec.sample_rate),
        samples,
    })
}

/// Write a trace as a mono 32-bit integer PCM WAV file.
///
/// WAV headers carry integer rates only, so the trace rate is rounded.
///
/// # Errors
///
/// Returns [`Error::SegmentWrite`] if the file cannot be created or
/// finalized.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn write_wav(path: &Path, trace: &Trace) -> Result<(), Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: trace.sample_rate.round() as u32,
        bits_per_sample: 32,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).map_err(|e| Error::SegmentWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    for &sample in &trace.samples {
        writer.write_sample(sample).map_err(|e| Error::SegmentWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    writer.finalize().map_err(|e| Error::SegmentWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
