//! Location safety orchestration
//!
//! The single entry point for callers: validate the coordinate, scan the
//! airport registry, query the nature-reserve layer, and merge everything
//! into one [`SafetyVerdict`].
//!
//! Classification policy lives here and nowhere else: a point is unsafe if
//! it is within the red-zone radius of any airport (inclusive) or inside a
//! protected nature area. The reserve check fails open; the proximity check
//! is local and cannot fail while the registry is non-empty.

use tracing::{debug, info};

use crate::airports::NORWEGIAN_AIRPORTS;
use crate::config::FlysafeConfig;
use crate::geo;
use crate::models::{Coordinate, NearestAirport, SafetyStatus, SafetyVerdict};
use crate::naturvern::NaturvernClient;
use crate::Result;

/// Safety check service. One instance can serve concurrent checks; the
/// underlying HTTP client is pooled and the registry is immutable.
pub struct SafetyService {
    naturvern: NaturvernClient,
    red_zone_radius_km: f64,
}

impl SafetyService {
    /// Create a service from configuration
    pub fn new(config: &FlysafeConfig) -> Self {
        Self {
            naturvern: NaturvernClient::new(config),
            red_zone_radius_km: config.safety.red_zone_radius_km,
        }
    }

    /// Check whether a location is safe for RC plane / drone flying.
    ///
    /// Always produces a verdict for user input, good or bad; the only
    /// error that escapes is an empty airport registry, which cannot happen
    /// with the compiled-in dataset and would mean a broken deployment.
    ///
    /// One attempt per call, no retries; the caller re-invokes on a fresh
    /// user action if it wants another try.
    pub async fn check_safety(&self, latitude: f64, longitude: f64) -> Result<SafetyVerdict> {
        let point = Coordinate::new(latitude, longitude);

        if !point.is_valid() {
            debug!(latitude, longitude, "rejecting malformed coordinates");
            return Ok(SafetyVerdict::rejected(
                "coordinates are not valid",
                "the given coordinates are not a valid latitude/longitude pair",
            ));
        }

        if !point.is_within_norway() {
            debug!(latitude, longitude, "rejecting coordinates outside Norway");
            return Ok(SafetyVerdict::rejected(
                "coordinates are outside Norway",
                "these coordinates are not within Norwegian bounds",
            ));
        }

        // Airport proximity: local, synchronous, fail-closed by construction
        let nearest = geo::find_nearest(point, NORWEGIAN_AIRPORTS)?;
        let near_airport = nearest.distance_km <= self.red_zone_radius_km;

        // Nature reserve: remote, fail-open; a soft failure never aborts
        let reserve = self.naturvern.check_nature_reserve(point).await;

        let status = if near_airport || reserve.is_protected {
            SafetyStatus::Unsafe
        } else {
            SafetyStatus::Safe
        };

        // Airport warning always precedes the reserve warning
        let mut warnings = Vec::new();
        if near_airport {
            warnings.push(format!(
                "within {:.0} km of {} ({:.1} km)",
                self.red_zone_radius_km, nearest.airport.name, nearest.distance_km
            ));
        }
        if reserve.is_protected {
            let name = reserve.name.as_deref().unwrap_or("unknown protected area");
            warnings.push(format!("inside protected nature area: {name}"));
        }

        info!(
            status = ?status,
            nearest = nearest.airport.code,
            distance_km = nearest.distance_km,
            protected = reserve.is_protected,
            "safety check complete"
        );

        Ok(SafetyVerdict {
            status,
            nearest_airport: NearestAirport {
                name: nearest.airport.name.to_string(),
                code: nearest.airport.code.to_string(),
                distance_km: nearest.distance_km,
            },
            error: reserve.error.clone(),
            protected_area: Some(reserve),
            warnings,
        })
    }
}

impl Default for SafetyService {
    fn default() -> Self {
        Self::new(&FlysafeConfig::default())
    }
}

/// Disclaimer the host UI must surface alongside any verdict: this library
/// checks static data only, never temporary restrictions.
#[must_use]
pub fn notam_disclaimer() -> &'static str {
    "This check covers STATIC data only (airports and protected nature areas).\n\
     Before flying you must always check:\n\
     \n\
     1. Temporary restrictions (NOTAMs): https://ippc.no\n\
     2. The Avinor drone app\n\
     3. Weather and wind conditions\n\
     4. That you hold the required certifications (A1/A2/A3)\n\
     5. That your aircraft is registered at flydrone.no\n\
     \n\
     This check does NOT replace the pilot's responsibility to verify all restrictions."
}
