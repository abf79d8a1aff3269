//! Tests for catalog parsing and the origin filters.

use chrono::{TimeZone, Utc};
use seiscut::catalog::{AreaOfInterest, Deduplicator, parse_origin_line};

/// Build one fixed-column catalog line.
///
/// Columns: latitude 0-8, longitude 10-19, depth 21-28, epoch time 31-46.
fn catalog_line(lat: f64, lon: f64, depth: f64, epoch: f64) -> String {
    format!("{lat:9.4} {lon:10.4} {depth:8.3}  {epoch:16.4}")
}

#[test]
fn test_parse_generated_line() {
    let line = catalog_line(11.2, -61.0, 12.5, 1_488_327_000.25);
    let origin = parse_origin_line(&line, 1).unwrap();

    assert!((origin.latitude - 11.2).abs() < 1e-9);
    assert!((origin.longitude + 61.0).abs() < 1e-9);
    assert!((origin.depth_km - 12.5).abs() < 1e-9);
    assert_eq!(
        origin.time,
        Utc.with_ymd_and_hms(2017, 3, 1, 0, 10, 0).unwrap() + chrono::Duration::milliseconds(250)
    );
}

#[test]
fn test_parse_reports_line_number() {
    let err = parse_origin_line("garbage", 42).unwrap_err();
    assert!(err.to_string().contains("line 42"));
}

#[test]
fn test_duplicate_rejected_regardless_of_region() {
    // Two origins 60 s apart with a 180 s duplicate window: the second
    // is rejected even though only the first is outside the region.
    let area = AreaOfInterest {
        lon_min: -64.0,
        lon_max: -58.0,
        lat_min: 10.0,
        lat_max: 12.5,
    };
    let outside = parse_origin_line(&catalog_line(20.0, -61.0, 10.0, 1_488_327_000.0), 1).unwrap();
    let inside = parse_origin_line(&catalog_line(11.2, -61.0, 10.0, 1_488_327_060.0), 2).unwrap();

    assert!(!area.contains(outside.latitude, outside.longitude));
    assert!(area.contains(inside.latitude, inside.longitude));

    let mut dedup = Deduplicator::new(180.0);
    // The out-of-region origin still advances the dedup reference time.
    assert!(dedup.accept(outside.time));
    assert!(!dedup.accept(inside.time));
}
