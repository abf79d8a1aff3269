//! Per-event output: directory naming, waveform materialization, and
//! the event metadata record.

mod materializer;
mod metadata;
mod naming;

pub use materializer::{EventMaterializer, EventOutcome, StationCatalog};
pub use metadata::{CreationInfo, EventRecord, Provenance, write_metadata};
pub use naming::{event_dir_name, segment_file_name};
