//! Origin catalog line parsing.
//!
//! Parses fixed-column origin records to extract the hypocentre
//! information needed for window extraction. Field positions follow the
//! source catalog schema documented in [`crate::constants::catalog_columns`].

use std::ops::Range;

use chrono::{DateTime, Utc};

use crate::Error;
use crate::constants::catalog_columns;

/// A single catalogued earthquake origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Origin {
    /// Origin time (UTC, sub-second precision).
    pub time: DateTime<Utc>,
    /// Epicentre latitude in degrees.
    pub latitude: f64,
    /// Epicentre longitude in degrees.
    pub longitude: f64,
    /// Hypocentre depth in kilometres.
    pub depth_km: f64,
}

/// Parse one fixed-column catalog line into an [`Origin`].
///
/// `line_number` is 1-based and used only for error reporting.
///
/// # Errors
///
/// Returns [`Error::CatalogFormat`] if the line is too short or a field
/// cannot be converted to the expected numeric type. Parse failures are
/// fatal for the whole run: duplicate suppression depends on seeing
/// every line in catalog order.
pub fn parse_origin_line(line: &str, line_number: usize) -> Result<Origin, Error> {
    let latitude = parse_field(line, line_number, catalog_columns::LATITUDE, "latitude")?;
    let longitude = parse_field(line, line_number, catalog_columns::LONGITUDE, "longitude")?;
    let depth_km = parse_field(line, line_number, catalog_columns::DEPTH, "depth")?;
    let epoch = parse_field(line, line_number, catalog_columns::TIME, "origin time")?;

    let time = epoch_to_datetime(epoch).ok_or_else(|| Error::CatalogFormat {
        line: line_number,
        message: format!("origin time {epoch} is out of range"),
    })?;

    Ok(Origin {
        time,
        latitude,
        longitude,
        depth_km,
    })
}

/// Extract and parse one numeric field from its fixed column span.
fn parse_field(
    line: &str,
    line_number: usize,
    columns: Range<usize>,
    name: &str,
) -> Result<f64, Error> {
    let raw = line.get(columns.clone()).ok_or_else(|| Error::CatalogFormat {
        line: line_number,
        message: format!(
            "line is too short for {name} field (columns {}-{})",
            columns.start, columns.end
        ),
    })?;

    raw.trim().parse().map_err(|_| Error::CatalogFormat {
        line: line_number,
        message: format!("cannot parse {name} from '{}'", raw.trim()),
    })
}

/// Convert fractional epoch seconds to a UTC timestamp.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn epoch_to_datetime(epoch: f64) -> Option<DateTime<Utc>> {
    if !epoch.is_finite() {
        return None;
    }
    let mut secs = epoch.floor() as i64;
    let mut nanos = ((epoch - epoch.floor()) * 1e9).round() as u32;
    if nanos >= 1_000_000_000 {
        secs += 1;
        nanos = 0;
    }
    DateTime::from_timestamp(secs, nanos)
}
