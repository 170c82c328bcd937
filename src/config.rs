//! Configuration for the flysafe library
//!
//! Programmatic only: the library owns no config files or environment
//! variables (hosts wire those up themselves). The struct exists so hosts
//! and tests can point the boundary-service client elsewhere and tune the
//! timeout and red-zone radius.

use serde::{Deserialize, Serialize};

use crate::error::FlysafeError;
use crate::Result;

/// Root configuration for the flysafe library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlysafeConfig {
    /// Nature-reserve boundary service configuration
    #[serde(default)]
    pub naturvern: NaturvernConfig,
    /// Safety classification policy
    #[serde(default)]
    pub safety: SafetyConfig,
}

/// Settings for the Miljødirektoratet boundary-service client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaturvernConfig {
    /// Query endpoint of the nature-reserve map layer
    #[serde(default = "default_naturvern_base_url")]
    pub base_url: String,
    /// Hard upper bound on one containment query
    #[serde(default = "default_naturvern_timeout")]
    pub timeout_seconds: u32,
    /// Whether to request reserve boundary geometry for map display
    #[serde(default = "default_include_geometry")]
    pub include_geometry: bool,
}

/// Safety classification policy settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyConfig {
    /// Exclusion radius around airports (Norwegian regulations: 5 km)
    #[serde(default = "default_red_zone_radius")]
    pub red_zone_radius_km: f64,
}

// Default value functions
fn default_naturvern_base_url() -> String {
    "https://kart.miljodirektoratet.no/arcgis/rest/services/vern/MapServer/0/query".to_string()
}

fn default_naturvern_timeout() -> u32 {
    10
}

fn default_include_geometry() -> bool {
    true
}

fn default_red_zone_radius() -> f64 {
    5.0
}

impl Default for NaturvernConfig {
    fn default() -> Self {
        Self {
            base_url: default_naturvern_base_url(),
            timeout_seconds: default_naturvern_timeout(),
            include_geometry: default_include_geometry(),
        }
    }
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            red_zone_radius_km: default_red_zone_radius(),
        }
    }
}

impl Default for FlysafeConfig {
    fn default() -> Self {
        Self {
            naturvern: NaturvernConfig::default(),
            safety: SafetyConfig::default(),
        }
    }
}

impl FlysafeConfig {
    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.naturvern.base_url.is_empty() {
            return Err(FlysafeError::config(
                "Boundary service base URL cannot be empty",
            ));
        }

        if self.naturvern.timeout_seconds == 0 {
            return Err(FlysafeError::config(
                "Boundary service timeout must be at least 1 second",
            ));
        }

        if self.naturvern.timeout_seconds > 300 {
            return Err(FlysafeError::config(
                "Boundary service timeout cannot exceed 300 seconds",
            ));
        }

        if !self.safety.red_zone_radius_km.is_finite() || self.safety.red_zone_radius_km <= 0.0 {
            return Err(FlysafeError::config(
                "Red zone radius must be a positive number of kilometers",
            ));
        }

        if self.safety.red_zone_radius_km > 100.0 {
            return Err(FlysafeError::config(
                "Red zone radius cannot exceed 100 km",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FlysafeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.naturvern.timeout_seconds, 10);
        assert_eq!(config.safety.red_zone_radius_km, 5.0);
        assert!(config.naturvern.base_url.contains("miljodirektoratet"));
        assert!(config.naturvern.include_geometry);
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let mut config = FlysafeConfig::default();
        config.naturvern.base_url.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = FlysafeConfig::default();
        config.naturvern.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_radius_rejected() {
        let mut config = FlysafeConfig::default();
        config.safety.red_zone_radius_km = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserializes_with_defaults() {
        let config: FlysafeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.naturvern.timeout_seconds, 10);
        assert_eq!(config.safety.red_zone_radius_km, 5.0);
    }
}
