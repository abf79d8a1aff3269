//! Geographic area-of-interest filtering.

use serde::{Deserialize, Serialize};

/// A rectangular area of interest in geographic coordinates.
///
/// Containment uses an even-odd ray-casting test against the rectangle
/// corners in counter-clockwise (lon, lat) order. The resulting boundary
/// convention is half-open: points on the west or south edge are inside,
/// points on the east or north edge are outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaOfInterest {
    /// Western longitude bound in degrees.
    pub lon_min: f64,
    /// Eastern longitude bound in degrees.
    pub lon_max: f64,
    /// Southern latitude bound in degrees.
    pub lat_min: f64,
    /// Northern latitude bound in degrees.
    pub lat_max: f64,
}

impl Default for AreaOfInterest {
    /// Whole globe; filters nothing.
    fn default() -> Self {
        Self {
            lon_min: -180.0,
            lon_max: 180.0,
            lat_min: -90.0,
            lat_max: 90.0,
        }
    }
}

impl AreaOfInterest {
    /// Rectangle corners as (lon, lat) pairs in counter-clockwise order.
    #[must_use]
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.lon_min, self.lat_min),
            (self.lon_max, self.lat_min),
            (self.lon_max, self.lat_max),
            (self.lon_min, self.lat_max),
        ]
    }

    /// Test whether an epicentre lies inside the area of interest.
    #[must_use]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        point_in_polygon(longitude, latitude, &self.corners())
    }
}

/// Even-odd ray-casting containment test with x = longitude, y = latitude.
fn point_in_polygon(x: f64, y: f64, polygon: &[(f64, f64)]) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (xi, yi) = polygon[i];
        let (xj, yj) = polygon[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
