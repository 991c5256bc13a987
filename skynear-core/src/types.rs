//! Shared types, error enum, and callsign normalization for skynear-core.

use serde::Serialize;
use thiserror::Error;

use crate::geo::GeoPoint;

/// Placeholder rendered for any field (or callsign) with no known value.
pub const UNKNOWN: &str = "Desconhecido";

/// All errors produced by skynear.
#[derive(Debug, Error)]
pub enum SkynearError {
    #[error("token request failed: {0}")]
    UpstreamAuth(String),
    #[error("state fetch failed: {0}")]
    UpstreamData(String),
    #[error("flight table error: {0}")]
    DataSource(String),
    #[error("unseen log I/O failed: {0}")]
    LogWrite(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SkynearError>;

// ---------------------------------------------------------------------------
// Aircraft state
// ---------------------------------------------------------------------------

/// One state vector from the upstream provider.
///
/// Everything is optional: the upstream reports null coordinates for
/// aircraft without a recent position fix, and callsigns may be blank.
/// `icao24`, `origin_country`, and `altitude_m` are passthrough fields the
/// selection logic never reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftState {
    pub icao24: Option<String>,
    pub callsign: Option<String>,
    pub origin_country: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub altitude_m: Option<f64>,
}

impl AircraftState {
    /// Position of this aircraft, only when both coordinates are present.
    pub fn position(&self) -> Option<GeoPoint> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(GeoPoint { lat, lon }),
            _ => None,
        }
    }
}

/// Trimmed callsign, or `None` when absent or blank.
///
/// Flight-table lookups and the unseen log both key on this normalized
/// form, never on the raw upstream string.
pub fn normalize_callsign(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_callsign(Some("TAP123 ")), Some("TAP123".into()));
        assert_eq!(normalize_callsign(Some("  RYR456")), Some("RYR456".into()));
    }

    #[test]
    fn test_normalize_blank_is_none() {
        assert_eq!(normalize_callsign(Some("")), None);
        assert_eq!(normalize_callsign(Some("   ")), None);
        assert_eq!(normalize_callsign(None), None);
    }

    #[test]
    fn test_position_requires_both_coordinates() {
        let mut state = AircraftState {
            icao24: None,
            callsign: None,
            origin_country: None,
            lat: Some(41.2),
            lon: None,
            altitude_m: None,
        };
        assert!(state.position().is_none());

        state.lon = Some(-8.2);
        let pos = state.position().unwrap();
        assert_eq!(pos.lat, 41.2);
        assert_eq!(pos.lon, -8.2);
    }
}
