//! Run settings validation.

use crate::config::RunSettings;
use crate::error::{Error, Result};

/// Validate fully resolved run settings before the pipeline starts.
pub fn validate_settings(settings: &RunSettings) -> Result<()> {
    validate_window(settings)?;
    validate_region(settings)?;
    validate_stations(settings)?;
    Ok(())
}

fn validate_window(settings: &RunSettings) -> Result<()> {
    for (name, value) in [
        ("pre_seconds", settings.pre_seconds),
        ("post_seconds", settings.post_seconds),
        (
            "duplicate_window_seconds",
            settings.duplicate_window_seconds,
        ),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::ConfigValidation {
                message: format!("{name} must be a non-negative number, got {value}"),
            });
        }
    }
    Ok(())
}

fn validate_region(settings: &RunSettings) -> Result<()> {
    let region = &settings.region;

    if !(-90.0..=90.0).contains(&region.lat_min) || !(-90.0..=90.0).contains(&region.lat_max) {
        return Err(Error::ConfigValidation {
            message: format!(
                "region latitudes must be between -90.0 and 90.0, got {} and {}",
                region.lat_min, region.lat_max
            ),
        });
    }
    if !(-180.0..=180.0).contains(&region.lon_min) || !(-180.0..=180.0).contains(&region.lon_max) {
        return Err(Error::ConfigValidation {
            message: format!(
                "region longitudes must be between -180.0 and 180.0, got {} and {}",
                region.lon_min, region.lon_max
            ),
        });
    }
    if region.lat_min >= region.lat_max || region.lon_min >= region.lon_max {
        return Err(Error::ConfigValidation {
            message: "region minimum bounds must be strictly below maximum bounds".to_string(),
        });
    }
    Ok(())
}

fn validate_stations(settings: &RunSettings) -> Result<()> {
    let stations = &settings.stations;
    for (name, list) in [
        ("networks", &stations.networks),
        ("stations", &stations.stations),
        ("channels", &stations.channels),
    ] {
        if list.is_empty() {
            return Err(Error::ConfigValidation {
                message: format!(
                    "no {name} configured (set [stations].{name} in config or pass --{name})"
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::AreaOfInterest;
    use crate::event::{Provenance, StationCatalog};
    use std::path::PathBuf;

    fn settings() -> RunSettings {
        RunSettings {
            catalog: PathBuf::from("catalog.origin"),
            archive_root: PathBuf::from("archive"),
            output_dir: PathBuf::from("events"),
            pre_seconds: 30.0,
            post_seconds: 180.0,
            duplicate_window_seconds: 180.0,
            region: AreaOfInterest {
                lon_min: -64.0,
                lon_max: -58.0,
                lat_min: 10.0,
                lat_max: 12.5,
            },
            stations: StationCatalog {
                networks: vec!["XT".to_string()],
                stations: vec!["BLOS".to_string()],
                channels: vec!["BHZ".to_string()],
            },
            provenance: Provenance::default(),
            progress: false,
        }
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&settings()).is_ok());
    }

    #[test]
    fn test_negative_window_rejected() {
        let mut s = settings();
        s.pre_seconds = -1.0;
        assert!(matches!(
            validate_settings(&s),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_inverted_region_rejected() {
        let mut s = settings();
        s.region.lon_min = -58.0;
        s.region.lon_max = -64.0;
        assert!(validate_settings(&s).is_err());
    }

    #[test]
    fn test_out_of_range_latitude_rejected() {
        let mut s = settings();
        s.region.lat_max = 95.0;
        assert!(validate_settings(&s).is_err());
    }

    #[test]
    fn test_empty_station_list_rejected() {
        let mut s = settings();
        s.stations.channels.clear();
        let err = validate_settings(&s).unwrap_err();
        assert!(err.to_string().contains("channels"));
    }
}
