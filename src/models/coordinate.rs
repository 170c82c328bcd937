//! Geographic and projected coordinate types

use serde::{Deserialize, Serialize};

/// Norway's approximate geographic bounds (mainland).
/// Checks outside this box are rejected before any query is issued.
pub const NORWAY_LAT_MIN: f64 = 57.0;
pub const NORWAY_LAT_MAX: f64 = 72.0;
pub const NORWAY_LNG_MIN: f64 = 4.0;
pub const NORWAY_LNG_MAX: f64 = 32.0;

/// A point on Earth in WGS84 (EPSG:4326), decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether this is a well-formed WGS84 coordinate
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Whether this coordinate falls inside Norway's bounding box
    #[must_use]
    pub fn is_within_norway(&self) -> bool {
        (NORWAY_LAT_MIN..=NORWAY_LAT_MAX).contains(&self.latitude)
            && (NORWAY_LNG_MIN..=NORWAY_LNG_MAX).contains(&self.longitude)
    }

    /// Format as a display string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A point in UTM zone 33N (EPSG:25833), meters.
/// Exists only transiently while talking to the boundary service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProjectedCoordinate {
    /// Easting in meters
    pub easting: f64,
    /// Northing in meters
    pub northing: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(60.1939, 11.1004, true)]
    #[case(-90.0, 180.0, true)]
    #[case(90.0, -180.0, true)]
    #[case(90.1, 0.0, false)]
    #[case(-90.1, 0.0, false)]
    #[case(0.0, 180.1, false)]
    #[case(0.0, -180.1, false)]
    #[case(f64::NAN, 10.0, false)]
    #[case(60.0, f64::INFINITY, false)]
    fn test_coordinate_validity(#[case] lat: f64, #[case] lng: f64, #[case] expected: bool) {
        assert_eq!(Coordinate::new(lat, lng).is_valid(), expected);
    }

    #[rstest]
    #[case(60.1939, 11.1004, true)] // Gardermoen
    #[case(57.0, 4.0, true)] // south-west corner, inclusive
    #[case(72.0, 32.0, true)] // north-east corner, inclusive
    #[case(0.0, 0.0, false)]
    #[case(55.6761, 12.5683, false)] // Copenhagen
    #[case(78.2461, 15.4656, false)] // Svalbard sits outside the mainland box
    fn test_norway_bounds(#[case] lat: f64, #[case] lng: f64, #[case] expected: bool) {
        assert_eq!(Coordinate::new(lat, lng).is_within_norway(), expected);
    }

    #[test]
    fn test_format_coordinates() {
        let point = Coordinate::new(60.193_912, 11.100_444);
        assert_eq!(point.format_coordinates(), "60.1939, 11.1004");
    }
}
