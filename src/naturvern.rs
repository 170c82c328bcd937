//! Nature-reserve boundary service adapter
//!
//! Checks whether a point lies inside a Norwegian protected nature area
//! (naturvernområde) by issuing a point-intersection query against
//! Miljødirektoratet's ArcGIS REST layer.
//!
//! The service requires coordinates in UTM zone 33N (EPSG:25833); every
//! outgoing point is projected first. Geometry is requested back in WGS84
//! so the caller can hand it straight to a map layer.
//!
//! This check fails open: timeouts, transport failures, and malformed
//! responses all come back as a not-protected result with a soft `error`,
//! so a service outage degrades to "no reserve info" instead of blocking
//! the whole safety check.

use std::time::Duration;

use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::FlysafeConfig;
use crate::models::{Coordinate, ProtectedAreaResult};
use crate::transform;

/// Placeholder when a matching reserve carries no usable name fields
const UNKNOWN_RESERVE_NAME: &str = "unknown protected area";

/// Client for the nature-reserve map layer
pub struct NaturvernClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    include_geometry: bool,
}

/// ArcGIS query response shape: `{"features": [{"attributes": …, "geometry": …}]}`.
/// An empty or absent feature list means the point is not protected.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    attributes: Option<Attributes>,
    geometry: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
struct Attributes {
    navn: Option<String>,
    #[serde(rename = "offisieltNavn")]
    offisielt_navn: Option<String>,
}

impl NaturvernClient {
    /// Create a new client from configuration
    pub fn new(config: &FlysafeConfig) -> Self {
        let client = Client::builder()
            .user_agent(concat!("flysafe/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.naturvern.base_url.clone(),
            timeout: Duration::from_secs(u64::from(config.naturvern.timeout_seconds)),
            include_geometry: config.naturvern.include_geometry,
        }
    }

    /// Check whether a point lies inside a protected nature area.
    ///
    /// Infallible by signature: every failure mode is folded into the
    /// returned [`ProtectedAreaResult`] as a soft error.
    pub async fn check_nature_reserve(&self, point: Coordinate) -> ProtectedAreaResult {
        let projected = match transform::wgs84_to_utm33(point) {
            Ok(p) => p,
            Err(e) => {
                warn!("coordinate projection failed: {e}");
                return ProtectedAreaResult::soft_error(
                    "could not project coordinates for the reserve lookup",
                );
            }
        };

        debug!(
            easting = projected.easting,
            northing = projected.northing,
            "querying nature reserve layer"
        );

        let geometry = format!("{},{}", projected.easting, projected.northing);
        let params = [
            // Point in UTM33N coordinates
            ("geometry", geometry.as_str()),
            ("geometryType", "esriGeometryPoint"),
            ("inSR", "25833"),
            // Geometry back in WGS84 for map display
            ("outSR", "4326"),
            ("spatialRel", "esriSpatialRelIntersects"),
            ("outFields", "navn,offisieltNavn,verneform,iucn,kommune"),
            ("f", "json"),
            (
                "returnGeometry",
                if self.include_geometry { "true" } else { "false" },
            ),
            ("returnIdsOnly", "false"),
            ("returnCountOnly", "false"),
        ];

        let response = match self
            .client
            .get(&self.base_url)
            .query(&params)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                warn!(timeout = ?self.timeout, "nature reserve lookup timed out");
                return ProtectedAreaResult::soft_error("nature reserve lookup timed out");
            }
            Err(e) => {
                warn!("nature reserve lookup failed: {e}");
                return ProtectedAreaResult::soft_error(
                    "could not reach the nature reserve service",
                );
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "nature reserve service returned an error status");
            return ProtectedAreaResult::soft_error("nature reserve service returned an error");
        }

        match response.json::<QueryResponse>().await {
            Ok(payload) => interpret(payload, self.include_geometry),
            Err(e) if e.is_timeout() => {
                warn!(timeout = ?self.timeout, "nature reserve lookup timed out");
                ProtectedAreaResult::soft_error("nature reserve lookup timed out")
            }
            Err(e) => {
                warn!("could not parse nature reserve response: {e}");
                ProtectedAreaResult::soft_error("could not parse the nature reserve response")
            }
        }
    }

    /// Check several points concurrently, preserving input order.
    /// Useful for re-checking a user's saved locations in one go.
    pub async fn check_many(&self, points: &[Coordinate]) -> Vec<ProtectedAreaResult> {
        join_all(points.iter().map(|p| self.check_nature_reserve(*p))).await
    }
}

/// Interpret a query response: a non-empty feature list means protected,
/// named from the first feature with official-name precedence.
fn interpret(payload: QueryResponse, include_geometry: bool) -> ProtectedAreaResult {
    let Some(feature) = payload.features.into_iter().next() else {
        return ProtectedAreaResult::not_protected();
    };

    let attributes = feature.attributes.unwrap_or_default();
    let name = attributes
        .offisielt_navn
        .filter(|n| !n.is_empty())
        .or(attributes.navn.filter(|n| !n.is_empty()))
        .unwrap_or_else(|| UNKNOWN_RESERVE_NAME.to_string());

    ProtectedAreaResult {
        is_protected: true,
        name: Some(name),
        geometry: if include_geometry {
            feature.geometry
        } else {
            None
        },
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn response_from(value: serde_json::Value) -> QueryResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_features_is_not_protected() {
        let result = interpret(response_from(json!({ "features": [] })), true);
        assert!(!result.is_protected);
        assert!(result.name.is_none());
        assert!(result.error.is_none());
    }

    #[test]
    fn test_absent_features_field_is_not_protected() {
        let result = interpret(response_from(json!({})), true);
        assert!(!result.is_protected);
    }

    #[rstest]
    #[case(json!({"offisieltNavn": "Jotunheimen nasjonalpark", "navn": "Jotunheimen"}), "Jotunheimen nasjonalpark")]
    #[case(json!({"navn": "Jotunheimen"}), "Jotunheimen")]
    #[case(json!({"offisieltNavn": "", "navn": "Jotunheimen"}), "Jotunheimen")]
    #[case(json!({}), UNKNOWN_RESERVE_NAME)]
    #[case(json!({"offisieltNavn": "", "navn": ""}), UNKNOWN_RESERVE_NAME)]
    fn test_name_fallback_precedence(
        #[case] attributes: serde_json::Value,
        #[case] expected: &str,
    ) {
        let payload = response_from(json!({
            "features": [{ "attributes": attributes, "geometry": null }]
        }));
        let result = interpret(payload, true);
        assert!(result.is_protected);
        assert_eq!(result.name.as_deref(), Some(expected));
    }

    #[test]
    fn test_first_feature_wins() {
        let payload = response_from(json!({
            "features": [
                { "attributes": { "navn": "First" } },
                { "attributes": { "navn": "Second" } }
            ]
        }));
        let result = interpret(payload, false);
        assert_eq!(result.name.as_deref(), Some("First"));
    }

    #[test]
    fn test_geometry_forwarded_only_when_requested() {
        let rings = json!({ "rings": [[[10.0, 60.0], [10.1, 60.0], [10.1, 60.1]]] });
        let payload = json!({
            "features": [{ "attributes": { "navn": "Test" }, "geometry": rings }]
        });

        let with = interpret(response_from(payload.clone()), true);
        assert_eq!(with.geometry.unwrap()["rings"][0][0][1], 60.0);

        let without = interpret(response_from(payload), false);
        assert!(without.geometry.is_none());
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let config = FlysafeConfig::default();
        let client = NaturvernClient::new(&config);
        assert!(client.base_url.contains("miljodirektoratet"));
        assert_eq!(client.timeout, Duration::from_secs(10));
    }
}
