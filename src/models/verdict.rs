//! Safety verdict types produced by a safety check

use serde::{Deserialize, Serialize};

/// Binary safety classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SafetyStatus {
    Safe,
    Unsafe,
}

/// The nearest registry airport to the checked point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NearestAirport {
    pub name: String,
    pub code: String,
    /// Great-circle distance in kilometers, rounded to 2 decimals
    pub distance_km: f64,
}

impl NearestAirport {
    /// Placeholder used when a check is rejected before the proximity scan
    pub(crate) fn unknown() -> Self {
        Self {
            name: "unknown".to_string(),
            code: String::new(),
            distance_km: 0.0,
        }
    }
}

/// Outcome of one nature-reserve containment query.
///
/// A failed query is reported through `error` with `is_protected: false`
/// rather than as an `Err`: the reserve check fails open so that a service
/// outage never blocks the airport-proximity half of a safety check.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProtectedAreaResult {
    pub is_protected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Reserve boundary in WGS84, forwarded verbatim for map display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProtectedAreaResult {
    /// A clean not-protected outcome
    #[must_use]
    pub fn not_protected() -> Self {
        Self::default()
    }

    /// A not-protected outcome carrying a soft query error
    #[must_use]
    pub fn soft_error<S: Into<String>>(message: S) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Complete result of one safety check. Immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyVerdict {
    pub status: SafetyStatus,
    pub nearest_airport: NearestAirport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected_area: Option<ProtectedAreaResult>,
    /// Human-readable findings, airport proximity before reserve containment
    pub warnings: Vec<String>,
    /// Soft error from the reserve query, surfaced without changing `status`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SafetyVerdict {
    /// Build an `Unsafe` verdict for input rejected before any query ran
    pub(crate) fn rejected<W, E>(warning: W, error: E) -> Self
    where
        W: Into<String>,
        E: Into<String>,
    {
        Self {
            status: SafetyStatus::Unsafe,
            nearest_airport: NearestAirport::unknown(),
            protected_area: None,
            warnings: vec![warning.into()],
            error: Some(error.into()),
        }
    }

    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.status == SafetyStatus::Safe
    }

    /// Human-readable zone message for the verdict
    #[must_use]
    pub fn status_message(&self) -> &'static str {
        match self.status {
            SafetyStatus::Unsafe => "RED ZONE - not safe to fly here",
            SafetyStatus::Safe => "GREEN ZONE - safe to fly (remember to check NOTAMs)",
        }
    }
}
