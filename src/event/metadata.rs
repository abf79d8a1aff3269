//! Event metadata records.
//!
//! One self-contained record is constructed per materialized event and
//! serialized to `event.json` inside the event directory. Records never
//! carry state from previously processed events.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;
use crate::catalog::Origin;
use crate::constants::event as names;

/// Who produced a record and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreationInfo {
    /// Agency identifier.
    pub agency_id: String,
    /// Author identifier.
    pub author: String,
    /// Record creation time (UTC).
    pub creation_time: DateTime<Utc>,
}

/// Provenance attribution for metadata records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    /// Agency credited for the catalog origin itself.
    pub catalog_agency: String,
    /// Author credited for the catalog origin itself.
    pub catalog_author: String,
    /// Agency credited for this extraction run.
    pub agency: String,
    /// Author credited for this extraction run.
    pub author: String,
}

impl Default for Provenance {
    fn default() -> Self {
        use crate::constants::provenance;
        Self {
            catalog_agency: provenance::CATALOG_AGENCY.to_string(),
            catalog_author: provenance::CATALOG_AUTHOR.to_string(),
            agency: provenance::EXTRACTION_AGENCY.to_string(),
            author: provenance::EXTRACTION_AUTHOR.to_string(),
        }
    }
}

/// Serialized form of one event's origin metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Origin time (UTC).
    pub time: DateTime<Utc>,
    /// Epicentre latitude in degrees.
    pub latitude: f64,
    /// Epicentre longitude in degrees.
    pub longitude: f64,
    /// Hypocentre depth in kilometres.
    pub depth_km: f64,
    /// Provenance of the catalog origin.
    pub origin_creation_info: CreationInfo,
    /// Provenance of this extraction run.
    pub creation_info: CreationInfo,
}

impl EventRecord {
    /// Build an independent record for one origin.
    #[must_use]
    pub fn new(origin: &Origin, provenance: &Provenance, created_at: DateTime<Utc>) -> Self {
        Self {
            time: origin.time,
            latitude: origin.latitude,
            longitude: origin.longitude,
            depth_km: origin.depth_km,
            origin_creation_info: CreationInfo {
                agency_id: provenance.catalog_agency.clone(),
                author: provenance.catalog_author.clone(),
                creation_time: created_at,
            },
            creation_info: CreationInfo {
                agency_id: provenance.agency.clone(),
                author: provenance.author.clone(),
                creation_time: created_at,
            },
        }
    }
}

/// Serialize the metadata record for one event into its directory.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns [`Error::MetadataWrite`] if the file cannot be created or
/// serialized.
pub fn write_metadata(
    origin: &Origin,
    event_dir: &Path,
    provenance: &Provenance,
) -> Result<PathBuf, Error> {
    let record = EventRecord::new(origin, provenance, Utc::now());
    let path = event_dir.join(names::METADATA_FILENAME);

    let file = File::create(&path).map_err(|e| Error::MetadataWrite {
        path: path.clone(),
        source: Box::new(e),
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), &record).map_err(|e| {
        Error::MetadataWrite {
            path: path.clone(),
            source: Box::new(e),
        }
    })?;

    Ok(path)
}
