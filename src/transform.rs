//! Coordinate transformation between WGS84 and UTM zone 33N
//!
//! The boundary service requires coordinates in UTM zone 33N (EPSG:25833),
//! not WGS84. Querying it with lat/lng degrees returns incorrect or empty
//! results, so every outgoing point goes through [`wgs84_to_utm33`] first.

use std::sync::LazyLock;

use proj4rs::proj::Proj;

use crate::error::FlysafeError;
use crate::models::{Coordinate, ProjectedCoordinate};
use crate::Result;

/// WGS84 - standard GPS coordinate system (latitude/longitude in degrees)
const WGS84_DEF: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// UTM zone 33N - projected coordinate system for Norway (easting/northing
/// in meters), used by Norwegian government map services
const UTM33N_DEF: &str = "+proj=utm +zone=33 +ellps=GRS80 +units=m +no_defs";

static WGS84: LazyLock<Proj> = LazyLock::new(|| {
    Proj::from_proj_string(WGS84_DEF).expect("WGS84 projection definition is valid")
});

static UTM33N: LazyLock<Proj> = LazyLock::new(|| {
    Proj::from_proj_string(UTM33N_DEF).expect("UTM33N projection definition is valid")
});

/// Transform a WGS84 coordinate to UTM zone 33N.
///
/// The projection engine expects (x = longitude, y = latitude) in radians,
/// the reverse of the latitude-first convention used everywhere else in this
/// crate. The axis swap happens here and nowhere else.
///
/// No range validation: any finite input is projected (validation happens
/// upstream in the orchestrator).
pub fn wgs84_to_utm33(coord: Coordinate) -> Result<ProjectedCoordinate> {
    let mut point = (coord.longitude.to_radians(), coord.latitude.to_radians(), 0.0);
    proj4rs::transform::transform(&WGS84, &UTM33N, &mut point)
        .map_err(|e| FlysafeError::transform(e.to_string()))?;

    Ok(ProjectedCoordinate {
        easting: point.0,
        northing: point.1,
    })
}

/// Transform a UTM zone 33N coordinate back to WGS84
pub fn utm33_to_wgs84(proj: ProjectedCoordinate) -> Result<Coordinate> {
    let mut point = (proj.easting, proj.northing, 0.0);
    proj4rs::transform::transform(&UTM33N, &WGS84, &mut point)
        .map_err(|e| FlysafeError::transform(e.to_string()))?;

    Ok(Coordinate {
        latitude: point.1.to_degrees(),
        longitude: point.0.to_degrees(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // Reference values computed independently for EPSG:25833. This test
    // exists to catch a silent latitude/longitude axis swap: with the axes
    // reversed the result is off by hundreds of kilometers, not subtly wrong.
    #[test]
    fn test_known_reference_point_gardermoen() {
        let engm = Coordinate::new(60.1939, 11.1004);
        let projected = wgs84_to_utm33(engm).unwrap();

        assert!(
            (projected.easting - 283_847.90).abs() < 0.5,
            "easting was {}",
            projected.easting
        );
        assert!(
            (projected.northing - 6_679_392.08).abs() < 0.5,
            "northing was {}",
            projected.northing
        );
    }

    #[test]
    fn test_known_reference_point_oslo_center() {
        let oslo = Coordinate::new(59.9139, 10.7522);
        let projected = wgs84_to_utm33(oslo).unwrap();

        assert!((projected.easting - 262_560.48).abs() < 0.5);
        assert!((projected.northing - 6_649_443.58).abs() < 0.5);
    }

    #[rstest]
    #[case(60.1939, 11.1004)] // Gardermoen
    #[case(59.9139, 10.7522)] // Oslo city center
    #[case(63.4578, 10.9242)] // Værnes
    #[case(69.6833, 18.9167)] // Langnes
    #[case(58.0994, 6.6261)] // Lista, near the southern edge
    fn test_round_trip(#[case] lat: f64, #[case] lng: f64) {
        let original = Coordinate::new(lat, lng);
        let back = utm33_to_wgs84(wgs84_to_utm33(original).unwrap()).unwrap();

        assert!((back.latitude - original.latitude).abs() < 1e-5);
        assert!((back.longitude - original.longitude).abs() < 1e-5);
    }

    #[test]
    fn test_easting_tracks_longitude() {
        // West of the zone 33 central meridian (15°E), easting grows with
        // longitude and stays below the 500 km false easting.
        let west = wgs84_to_utm33(Coordinate::new(60.0, 10.0)).unwrap();
        let east = wgs84_to_utm33(Coordinate::new(60.0, 12.0)).unwrap();
        assert!(west.easting < east.easting);
        assert!(east.easting < 500_000.0);
    }
}
