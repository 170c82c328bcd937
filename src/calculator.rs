//! Aerodynamic CG/MAC calculator for trapezoidal RC planes
//!
//! Closed-form arithmetic over wing and tail measurements; independent of
//! the safety-check core. All measurements must share one unit (e.g. cm)
//! and results come back in that unit.

use serde::{Deserialize, Serialize};

/// Note shown next to the CG range: all chord-wise results are measured
/// from the wing leading edge at the fuselage root.
pub const MEASUREMENT_NOTE: &str =
    "Measure from the wing leading edge at the fuselage root.";

/// Wing and tail measurements of a plane, one shared unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlaneGeometry {
    pub wingspan: f64,
    pub root_chord: f64,
    pub tip_chord: f64,
    /// Leading-edge offset from wing root to wing tip (0 for straight wings)
    #[serde(default)]
    pub sweep: f64,
    #[serde(default)]
    pub tail_span: f64,
    #[serde(default)]
    pub tail_root_chord: f64,
    /// Tail tip chord; a missing or zero value falls back to the tail root
    /// chord (rectangular tail)
    #[serde(default)]
    pub tail_tip_chord: Option<f64>,
    /// Distance from wing aerodynamic center to tail aerodynamic center
    #[serde(default)]
    pub wing_tail_distance: f64,
}

/// Calculated aerodynamic figures
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlaneCalculation {
    /// Wing area, rounded to whole units
    pub wing_area: f64,
    /// Tail area, rounded to whole units
    pub tail_area: f64,
    /// Mean aerodynamic chord, rounded to 1 decimal
    pub mac: f64,
    /// Chord-wise offset where the MAC starts, rounded to 2 decimals
    pub mac_start: f64,
    /// Forward (beginner, 25% MAC) CG limit, rounded to 1 decimal
    pub cg_forward: f64,
    /// Aft (expert, 33% MAC) CG limit, rounded to 1 decimal
    pub cg_aft: f64,
}

/// Compute areas, MAC and the recommended CG range for a trapezoidal wing
#[must_use]
pub fn calculate(geometry: &PlaneGeometry) -> PlaneCalculation {
    let root = geometry.root_chord;
    let tip = geometry.tip_chord;

    // Trapezoid area: ((root + tip) / 2) * span
    let wing_area = (root + tip) / 2.0 * geometry.wingspan;

    let tail_tip = match geometry.tail_tip_chord {
        Some(t) if t > 0.0 => t,
        _ => geometry.tail_root_chord,
    };
    let tail_area = (geometry.tail_root_chord + tail_tip) / 2.0 * geometry.tail_span;

    let mac = 2.0 / 3.0 * ((root * root + root * tip + tip * tip) / (root + tip));

    // Where the MAC starts, measured from the root leading edge
    let mac_start = (root - mac) / 6.0 + geometry.sweep * 0.5;

    let cg_forward = mac_start + mac * 0.25;
    let cg_aft = mac_start + mac * 0.33;

    PlaneCalculation {
        wing_area: wing_area.round(),
        tail_area: tail_area.round(),
        mac: round_to(mac, 1),
        mac_start: round_to(mac_start, 2),
        cg_forward: round_to(cg_forward, 1),
        cg_aft: round_to(cg_aft, 1),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
