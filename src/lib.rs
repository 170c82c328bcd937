//! `flysafe` - flight safety classification for RC planes and drones in Norway
//!
//! This library answers one question: is it safe to fly at a given point?
//! It combines airport proximity (local haversine scan over a static
//! registry) with nature-reserve containment (Miljødirektoratet boundary
//! service) into a single verdict, and ships the standalone CG/MAC
//! calculator used by the plane workshop.

pub mod airports;
pub mod calculator;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod naturvern;
pub mod safety;
pub mod transform;

// Re-export core types for public API
pub use airports::{airport_stats, AirportStats, NORWEGIAN_AIRPORTS};
pub use config::FlysafeConfig;
pub use error::FlysafeError;
pub use geo::{find_nearest, great_circle_distance_km, is_within_radius, ProximityMatch};
pub use models::{
    Airport, AirportClass, Coordinate, NearestAirport, ProjectedCoordinate, ProtectedAreaResult,
    SafetyStatus, SafetyVerdict,
};
pub use naturvern::NaturvernClient;
pub use safety::{notam_disclaimer, SafetyService};
pub use transform::{utm33_to_wgs84, wgs84_to_utm33};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, FlysafeError>;
