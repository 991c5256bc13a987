//! Nearest-aircraft selection.

use crate::geo::{haversine_km, GeoPoint};
use crate::types::AircraftState;

/// Pick the state closest to `reference`.
///
/// Linear scan; states without both coordinates are skipped. The minimum
/// is tracked with strict `<`, so the first of an exact-distance tie wins.
/// Returns `None` when no state carries a position.
pub fn nearest<'a>(reference: GeoPoint, states: &'a [AircraftState]) -> Option<&'a AircraftState> {
    let mut best: Option<&AircraftState> = None;
    let mut best_km = f64::INFINITY;

    for state in states {
        let pos = match state.position() {
            Some(p) => p,
            None => continue,
        };
        let km = haversine_km(reference, pos);
        if km < best_km {
            best_km = km;
            best = Some(state);
        }
    }

    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
