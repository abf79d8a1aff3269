//! Origin catalog handling.
//!
//! This module provides parsing of fixed-column origin catalogs,
//! duplicate-origin suppression, and the geographic area-of-interest
//! filter.

mod dedup;
mod parser;
mod region;

pub use dedup::Deduplicator;
pub use parser::{Origin, parse_origin_line};
pub use region::AreaOfInterest;
