//! Great-circle distance and airport proximity search

use haversine::{distance, Location, Units};

use crate::error::FlysafeError;
use crate::models::{Airport, Coordinate};
use crate::Result;

/// The nearest airport found by a proximity scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityMatch {
    pub airport: Airport,
    /// Distance in kilometers, rounded to 2 decimals
    pub distance_km: f64,
}

/// Great-circle distance between two points in kilometers.
///
/// Haversine on a 6371 km sphere. More accurate than Euclidean distance over
/// geographic coordinates, especially across the latitude span of Norway.
#[must_use]
pub fn great_circle_distance_km(a: Coordinate, b: Coordinate) -> f64 {
    distance(
        Location {
            latitude: a.latitude,
            longitude: a.longitude,
        },
        Location {
            latitude: b.latitude,
            longitude: b.longitude,
        },
        Units::Kilometers,
    )
}

/// Find the airport nearest to `point`.
///
/// Linear scan with strict less-than replacement, so the first candidate
/// wins ties. Errs on an empty slice; the static registry makes that
/// impossible in production, so hitting the error means a broken deployment.
pub fn find_nearest(point: Coordinate, candidates: &[Airport]) -> Result<ProximityMatch> {
    let Some(first) = candidates.first() else {
        return Err(FlysafeError::registry("no airports provided"));
    };

    let mut nearest = *first;
    let mut min_distance = great_circle_distance_km(point, first.location);

    for airport in &candidates[1..] {
        let d = great_circle_distance_km(point, airport.location);
        if d < min_distance {
            min_distance = d;
            nearest = *airport;
        }
    }

    Ok(ProximityMatch {
        airport: nearest,
        distance_km: (min_distance * 100.0).round() / 100.0,
    })
}

/// Whether `point` lies within `radius_km` of any candidate airport.
/// The boundary is inclusive: exactly on the radius counts as within.
#[must_use]
pub fn is_within_radius(point: Coordinate, candidates: &[Airport], radius_km: f64) -> bool {
    candidates
        .iter()
        .any(|airport| great_circle_distance_km(point, airport.location) <= radius_km)
}
